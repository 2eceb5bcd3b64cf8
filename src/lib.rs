// src/lib.rs
pub mod components;
pub mod gallery_config;
pub mod markup;
pub mod utils;
pub mod viewer_state;

pub use components::image_viewer::{ImageViewer, ImageViewerProps};
