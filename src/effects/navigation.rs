pub const DEFAULT_SCROLLED_THRESHOLD: f64 = 50.0;
pub const DEFAULT_SECTION_OFFSET: f64 = 150.0;

/// Whether the navbar should switch to its compact "scrolled" look.
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Vertical extent of a `section[id]`, as measured from the document.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, scroll_y: f64, offset: f64) -> bool {
        let start = self.top - offset;
        scroll_y >= start && scroll_y < start + self.height
    }
}

/// Id of the section the viewport is currently in.
///
/// Sections are given in document order; if more than one matches, the last
/// one wins.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds], offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| s.contains(scroll_y, offset))
        .map(|s| s.id.as_str())
}

pub fn is_link_active(href: &str, current: Option<&str>) -> bool {
    match current {
        Some(id) => href.strip_prefix('#') == Some(id),
        None => false,
    }
}

/// Open state of the mobile menu. The toggle button and the menu share it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
