pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// Animation name given to cards that do not declare their own.
pub const DEFAULT_ANIMATION: &str = "fade-up";

/// Class an observed element gains once revealed.
pub const REVEALED_CLASS: &str = "aos-animate";

/// Marks an element as revealed the first time it intersects the viewport.
/// It never un-reveals.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns true only on the transition to revealed.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.revealed || !is_intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_fires_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert!(latch.is_revealed());
    }
}
