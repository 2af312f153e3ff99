use log::Level;

#[cfg(debug_assertions)]
pub fn get_asset_base() -> &'static str {
    ""  // trunk serve hosts /public at the root
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base() -> &'static str {
    "/assets"  // Production bundle location
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Resolves a content image reference. Absolute URLs are left alone.
pub fn asset_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}/{}", get_asset_base(), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_and_rooted_paths_share_the_base() {
        assert_eq!(asset_url("/OCR1.png"), asset_url("OCR1.png"));
        assert!(asset_url("/OCR1.png").ends_with("/OCR1.png"));
        assert!(asset_url("/OCR1.png").starts_with(get_asset_base()));
    }

    #[test]
    fn absolute_urls_pass_through() {
        let url = "https://example.com/shot.png";
        assert_eq!(asset_url(url), url);
    }
}
