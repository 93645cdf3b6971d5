//! DOM-free models behind each interactive behavior of the page.
//!
//! Components in `app` own one instance of these per DOM subtree and feed them
//! browser events; everything here is plain data so it can be tested natively.

pub mod gallery;
pub mod hover;
pub mod navigation;
pub mod parallax;
pub mod particles;
pub mod placeholder;
pub mod reveal;
pub mod scroll;
pub mod skills;
pub mod typing;

/// `base`, plus `class` while `on` holds.
pub fn with_class(base: &str, class: &str, on: bool) -> String {
    if on {
        format!("{base} {class}")
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_class() {
        assert_eq!(with_class("nav-link", "active", false), "nav-link");
        assert_eq!(with_class("nav-link", "active", true), "nav-link active");
        assert_eq!(
            with_class("skill-card", reveal::REVEALED_CLASS, true),
            "skill-card aos-animate"
        );
    }
}
