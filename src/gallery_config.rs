// src/gallery_config.rs
use crate::components::image_viewer::ImageViewerProps;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use yew::{AttrValue, Callback};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub images: Vec<ImageEntry>,
    #[serde(default)]
    pub viewer: ViewerOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub src: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Behavior flags and inline styles handed to the viewer. Every field is
/// optional in a manifest and defaults to the viewer's own default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    pub disable_scroll: bool,
    pub disable_caption: bool,
    pub close_on_click_outside: bool,
    pub close_on_click_inside: bool,
    pub background_style: Option<String>,
    pub image_style: Option<String>,
    pub caption_style: Option<String>,
}

impl GalleryConfig {
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            description: String::new(),
            images: Vec::new(),
            viewer: ViewerOptions::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid gallery manifest: {}", e))
    }

    pub fn manifest_path(id: &str) -> String {
        format!("public/galleries/{}/manifest.json", id)
    }

    pub fn get_image_count(&self) -> usize {
        self.images.len()
    }

    pub fn with_image(mut self, entry: ImageEntry) -> Self {
        self.images.push(entry);
        self
    }

    /// Image sources with `resolve` applied, in gallery order.
    pub fn sources_with<F: Fn(&str) -> String>(&self, resolve: F) -> Vec<AttrValue> {
        self.images
            .iter()
            .map(|entry| AttrValue::from(resolve(&entry.src)))
            .collect()
    }

    /// Alt texts parallel to the sources; `None` when no image has one.
    pub fn alts(&self) -> Option<Vec<Option<AttrValue>>> {
        if self.images.iter().all(|entry| entry.alt.is_none()) {
            return None;
        }
        Some(
            self.images
                .iter()
                .map(|entry| entry.alt.clone().map(AttrValue::from))
                .collect(),
        )
    }

    /// Props for an `ImageViewer` over this gallery, opened at `current_index`.
    pub fn viewer_props<F: Fn(&str) -> String>(
        &self,
        resolve: F,
        current_index: usize,
        on_close: Callback<()>,
    ) -> ImageViewerProps {
        let options = &self.viewer;
        yew::props!(ImageViewerProps {
            src: self.sources_with(resolve),
            alt: self.alts(),
            current_index: Some(current_index),
            background_style: options.background_style.clone().map(AttrValue::from),
            image_style: options.image_style.clone().map(AttrValue::from),
            caption_style: options.caption_style.clone().map(AttrValue::from),
            disable_scroll: options.disable_scroll,
            disable_caption: options.disable_caption,
            close_on_click_outside: options.close_on_click_outside,
            close_on_click_inside: options.close_on_click_inside,
            on_close: Some(on_close),
        })
    }
}

impl ImageEntry {
    pub fn new(src: String) -> Self {
        Self { src, alt: None }
    }

    pub fn with_alt(mut self, alt: String) -> Self {
        self.alt = Some(alt);
        self
    }
}

// Galleries bundled with the demo, used when no manifest can be fetched
pub struct GalleryRegistry;

impl GalleryRegistry {
    pub fn get_all_galleries() -> HashMap<String, GalleryConfig> {
        let mut galleries = HashMap::new();

        let mut sample = GalleryConfig::new("sample".to_string(), "Sample gallery".to_string());
        sample.description = "Placeholder pictures shipped with the demo.".to_string();
        let captions = ["Harbour at dawn", "", "Old town roofs", "Lighthouse"];
        for (i, caption) in captions.iter().enumerate() {
            let entry = ImageEntry::new(format!("public/galleries/sample/images/{}.svg", i + 1));
            sample = sample.with_image(if caption.is_empty() {
                entry
            } else {
                entry.with_alt(caption.to_string())
            });
        }
        sample.viewer.close_on_click_outside = true;
        sample.viewer.background_style = Some("background-color: rgba(0, 0, 0, 0.85)".to_string());

        galleries.insert(sample.id.clone(), sample);

        galleries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_config() {
        let config = GalleryConfig::new("TEST".to_string(), "Test Gallery".to_string())
            .with_image(ImageEntry::new("a.jpg".to_string()).with_alt("A".to_string()))
            .with_image(ImageEntry::new("b.jpg".to_string()));
        assert_eq!(config.id, "TEST");
        assert_eq!(config.get_image_count(), 2);
        assert_eq!(config.images[0].alt.as_deref(), Some("A"));
    }

    #[test]
    fn test_manifest_parsing_applies_defaults() {
        let config = GalleryConfig::from_json(
            r#"{
                "id": "trip",
                "name": "Trip",
                "images": [
                    { "src": "public/galleries/trip/1.jpg", "alt": "Beach" },
                    { "src": "https://example.org/2.jpg" }
                ],
                "viewer": { "disable_scroll": true, "caption_style": "color: gold" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.description, "");
        assert_eq!(config.images[1].alt, None);
        assert!(config.viewer.disable_scroll);
        assert!(!config.viewer.close_on_click_outside);
        assert_eq!(config.viewer.caption_style.as_deref(), Some("color: gold"));
    }

    #[test]
    fn test_manifest_without_viewer_section() {
        let config =
            GalleryConfig::from_json(r#"{ "id": "x", "name": "X", "images": [] }"#).unwrap();
        assert_eq!(config.viewer, ViewerOptions::default());
    }

    #[test]
    fn test_invalid_manifest() {
        let err = GalleryConfig::from_json(r#"{ "id": "x" }"#).unwrap_err();
        assert!(err.starts_with("Invalid gallery manifest"));
    }

    #[test]
    fn test_alts_parallel_to_sources() {
        let config = GalleryConfig::new("t".to_string(), "T".to_string())
            .with_image(ImageEntry::new("a.jpg".to_string()))
            .with_image(ImageEntry::new("b.jpg".to_string()).with_alt("B".to_string()));

        let sources = config.sources_with(|src| format!("/{}", src));
        assert_eq!(sources, vec![AttrValue::from("/a.jpg"), AttrValue::from("/b.jpg")]);
        assert_eq!(config.alts(), Some(vec![None, Some(AttrValue::from("B"))]));

        let bare = GalleryConfig::new("t".to_string(), "T".to_string())
            .with_image(ImageEntry::new("a.jpg".to_string()));
        assert_eq!(bare.alts(), None);
    }

    #[test]
    fn test_viewer_props() {
        let mut config = GalleryRegistry::get_all_galleries().remove("sample").unwrap();
        config.viewer.close_on_click_inside = true;

        let props = config.viewer_props(|src| src.to_string(), 2, Callback::noop());
        assert_eq!(props.src.len(), 4);
        assert_eq!(props.current_index, Some(2));
        assert!(props.close_on_click_outside);
        assert!(props.close_on_click_inside);
        assert!(!props.disable_scroll);
        assert!(props.on_close.is_some());
        assert!(props.background_style.is_some());
        assert_eq!(props.image_style, None);
    }

    #[test]
    fn test_gallery_registry() {
        let mut galleries = GalleryRegistry::get_all_galleries();
        assert_eq!(galleries.len(), 1);

        let sample = galleries.remove("sample").unwrap();
        assert_eq!(sample.images[1].alt, None);
        assert_eq!(sample.images[0].src, "public/galleries/sample/images/1.svg");
        assert_eq!(sample.images[2].alt.as_deref(), Some("Old town roofs"));
        assert_eq!(GalleryConfig::manifest_path("sample"), "public/galleries/sample/manifest.json");
    }

    #[test]
    fn test_bundled_images_exist() {
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        let mut galleries: Vec<GalleryConfig> =
            GalleryRegistry::get_all_galleries().into_values().collect();
        for id in ["sample", "travel"] {
            let manifest = std::fs::read_to_string(root.join(GalleryConfig::manifest_path(id)))
                .unwrap_or_else(|e| panic!("manifest for {}: {}", id, e));
            galleries.push(GalleryConfig::from_json(&manifest).unwrap());
        }

        for gallery in &galleries {
            assert!(gallery.get_image_count() > 0);
            for entry in &gallery.images {
                assert!(root.join(&entry.src).is_file(), "missing {}", entry.src);
            }
        }
    }
}
