// src/utils.rs
use gloo_utils::window;

const PAGES_BASE: &str = "/simple-image-viewer";

/// Base path the app is served under, derived from the page location.
/// Handles both local development and GitHub Pages deployment.
pub fn base_from_pathname(pathname: &str) -> &'static str {
    if pathname.starts_with(&format!("{}/", PAGES_BASE)) {
        PAGES_BASE
    } else {
        ""
    }
}

pub fn get_base_url() -> &'static str {
    match window().location().pathname() {
        Ok(pathname) => base_from_pathname(&pathname),
        Err(_) => "",
    }
}

/// Place `path` under `base` unless it already points somewhere absolute.
pub fn join_base(base: &str, path: &str) -> String {
    let raw = path.trim();
    if raw.starts_with("http://")
        || raw.starts_with("https://")
        || raw.starts_with("data:")
        || raw.starts_with('/')
    {
        return raw.to_string();
    }
    format!("{}/{}", base, raw.trim_start_matches("./"))
}

/// Build an image or manifest URL with the correct base path
pub fn asset_url(path: &str) -> String {
    join_base(get_base_url(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_detection() {
        assert_eq!(base_from_pathname("/simple-image-viewer/index.html"), PAGES_BASE);
        assert_eq!(base_from_pathname("/simple-image-viewer/"), PAGES_BASE);
        assert_eq!(base_from_pathname("/"), "");
        assert_eq!(base_from_pathname("/simple-image-viewer-fork/"), "");
    }

    #[test]
    fn test_join_base() {
        assert_eq!(
            join_base("", "public/galleries/sample/a.jpg"),
            "/public/galleries/sample/a.jpg"
        );
        assert_eq!(
            join_base(PAGES_BASE, "./public/a.jpg"),
            "/simple-image-viewer/public/a.jpg"
        );
    }

    #[test]
    fn test_absolute_urls_untouched() {
        assert_eq!(join_base(PAGES_BASE, "https://example.org/a.png"), "https://example.org/a.png");
        assert_eq!(join_base(PAGES_BASE, "/static/a.png"), "/static/a.png");
        assert_eq!(join_base(PAGES_BASE, "data:image/png;base64,AAAA"), "data:image/png;base64,AAAA");
    }
}
