//! Fallbacks shown in place of images that fail to load.

pub const PROFILE_GRADIENT: &str = "linear-gradient(135deg, #00d4ff 0%, #0066ff 100%)";

const PROJECT_GRADIENTS: [&str; 3] = [
    "linear-gradient(135deg, #1a1a2e 0%, #16213e 100%)",
    "linear-gradient(135deg, #0f0f23 0%, #1a1a3e 100%)",
    "linear-gradient(135deg, #0a0a1a 0%, #1a0a2e 100%)",
];

pub fn project_gradient(index: usize) -> &'static str {
    PROJECT_GRADIENTS[index % PROJECT_GRADIENTS.len()]
}

/// An image that never finished loading, or loaded with no pixels, gets the
/// same treatment as one that fired `error`.
pub fn needs_fallback(complete: bool, natural_height: u32) -> bool {
    !complete || natural_height == 0
}

/// First letters of the first and last words of `name`.
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let Some(first) = words.next() else {
        return String::new();
    };
    first
        .chars()
        .take(1)
        .chain(words.last().into_iter().flat_map(|w| w.chars().take(1)))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Tracks whether a container already shows its placeholder node.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Fallback {
    shown: bool,
}

impl Fallback {
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Records a load failure; true only when a placeholder must be inserted.
    pub fn fail(&mut self) -> bool {
        !std::mem::replace(&mut self.shown, true)
    }
}

/// Failure state of every image in one project card's wrapper. Any number of
/// failed images share a single placeholder node.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GalleryFallback {
    failed: Vec<bool>,
    placeholder: Fallback,
}

impl GalleryFallback {
    pub fn new(images: usize) -> Self {
        Self {
            failed: vec![false; images],
            placeholder: Fallback::default(),
        }
    }

    pub fn has_failed(&self, index: usize) -> bool {
        self.failed.get(index).copied().unwrap_or(false)
    }

    pub fn is_shown(&self) -> bool {
        self.placeholder.is_shown()
    }

    /// Background for a failed image, `None` while it is fine.
    pub fn gradient(&self, index: usize) -> Option<&'static str> {
        self.has_failed(index).then(|| project_gradient(index))
    }

    /// Marks image `index` as failed; true only when the wrapper's placeholder
    /// must be inserted. Unknown indices are ignored.
    pub fn fail(&mut self, index: usize) -> bool {
        let Some(slot) = self.failed.get_mut(index) else {
            return false;
        };
        *slot = true;
        self.placeholder.fail()
    }
}
