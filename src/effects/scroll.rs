/// Id targeted by an in-page anchor, or `None` for a bare `#` or an external
/// link.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts the target just below the fixed navbar.
pub fn scroll_destination(target_offset_top: f64, navbar_height: f64) -> f64 {
    target_offset_top - navbar_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#about"), Some("about"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("/blog#about"), None);
        assert_eq!(anchor_target("https://github.com"), None);
    }

    #[test]
    fn test_scroll_destination() {
        assert_eq!(scroll_destination(1200.0, 80.0), 1120.0);
        assert_eq!(scroll_destination(20.0, 80.0), -60.0);
    }
}
