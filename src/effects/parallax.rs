const PARALLAX_RATE: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub translate_y: f64,
    pub opacity: f64,
}

impl Parallax {
    pub fn transform(&self) -> String {
        format!("translateY({}px)", self.translate_y)
    }
}

/// Hero drift while the hero is still on screen; `None` once it has scrolled
/// past, leaving the last applied style in place.
pub fn hero_parallax(scroll_y: f64, viewport_height: f64) -> Option<Parallax> {
    if viewport_height <= 0.0 || scroll_y >= viewport_height {
        return None;
    }
    Some(Parallax {
        translate_y: scroll_y * PARALLAX_RATE,
        opacity: 1.0 - scroll_y / viewport_height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_of_page() {
        let p = hero_parallax(0.0, 900.0).unwrap();
        assert_eq!(p.translate_y, 0.0);
        assert_eq!(p.opacity, 1.0);
        assert_eq!(p.transform(), "translateY(0px)");
    }

    #[test]
    fn test_halfway() {
        let p = hero_parallax(450.0, 900.0).unwrap();
        assert_eq!(p.translate_y, 135.0);
        assert_eq!(p.opacity, 0.5);
    }

    #[test]
    fn test_past_hero() {
        assert_eq!(hero_parallax(900.0, 900.0), None);
        assert_eq!(hero_parallax(5000.0, 900.0), None);
        assert_eq!(hero_parallax(10.0, 0.0), None);
    }
}
