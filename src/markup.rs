// src/markup.rs
//
// Stable identifiers of the rendered viewer. Consumers target these from their
// own stylesheets and scripts, so the strings must not change.

pub const ROOT_ID: &str = "ReactSimpleImageViewer";

pub const MODAL_CLASS: &str = "react-simple-image-viewer__modal";
pub const CLOSE_CLASS: &str = "react-simple-image-viewer__close";
pub const PREVIOUS_CLASS: &str = "react-simple-image-viewer__previous";
pub const NEXT_CLASS: &str = "react-simple-image-viewer__next";
pub const CONTENT_CLASS: &str = "react-simple-image-viewer__modal-content";
pub const SLIDE_CLASS: &str = "react-simple-image-viewer__slide";
pub const IMAGE_CLASS: &str = "react-simple-image-viewer__image";
pub const CAPTION_CLASS: &str = "react-simple-image-viewer__caption";

/// Default glyphs for the controls when no replacement content is given.
pub const CLOSE_GLYPH: &str = "×";
pub const LEFT_ARROW_GLYPH: &str = "❮";
pub const RIGHT_ARROW_GLYPH: &str = "❯";

/// Bundled default look, rendered once inside the viewer.
pub const STYLESHEET: &str = include_str!("../styles/image_viewer.css");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_classes_share_prefix() {
        for class in [
            MODAL_CLASS,
            CLOSE_CLASS,
            PREVIOUS_CLASS,
            NEXT_CLASS,
            CONTENT_CLASS,
            SLIDE_CLASS,
            IMAGE_CLASS,
            CAPTION_CLASS,
        ] {
            assert!(class.starts_with("react-simple-image-viewer__"));
        }
    }

    #[test]
    fn test_stylesheet_targets_internal_classes() {
        assert!(STYLESHEET.contains(".siv-wrapper"));
        assert!(STYLESHEET.contains(".siv-caption"));
        // marker classes are left for consumers
        assert!(!STYLESHEET.contains("react-simple-image-viewer__"));
    }
}
