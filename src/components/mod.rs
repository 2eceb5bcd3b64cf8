// src/components/mod.rs
pub mod image_viewer;
