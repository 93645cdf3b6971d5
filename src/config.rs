use serde::Deserialize;

use crate::effects::{
    navigation::{DEFAULT_SCROLLED_THRESHOLD, DEFAULT_SECTION_OFFSET},
    particles::DEFAULT_PARTICLE_COUNT,
    reveal::DEFAULT_REVEAL_THRESHOLD,
    typing::TypingSpeeds,
};

/// Tunables for the page's interactive behaviors. Any field may be overridden
/// from the `effects` object of the page content.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub particle_count: usize,
    /// Scroll distance (px) after which the navbar turns compact.
    pub scrolled_threshold: f64,
    /// How far (px) above a section's top it already counts as current.
    pub section_offset: f64,
    pub reveal_threshold: f64,
    pub typing: TypingSpeeds,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            scrolled_threshold: DEFAULT_SCROLLED_THRESHOLD,
            section_offset: DEFAULT_SECTION_OFFSET,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            typing: TypingSpeeds::default(),
        }
    }
}
