use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkillLevelError {
    #[error("skill level {0} is above 100")]
    OutOfRange(u8),
    #[error("invalid skill level: {0:?}")]
    Malformed(String),
}

/// A skill bar's target fill, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub fn percent(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for SkillLevel {
    type Error = SkillLevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 100 {
            return Err(SkillLevelError::OutOfRange(value));
        }
        Ok(Self(value))
    }
}

impl FromStr for SkillLevel {
    type Err = SkillLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u8>()
            .map_err(|_| SkillLevelError::Malformed(s.to_string()))?;
        Self::try_from(value)
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Progress bar of one skill card. Fills at most once, to the level it is
/// first animated with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SkillBar {
    filled: Option<SkillLevel>,
}

impl SkillBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_animated(&self) -> bool {
        self.filled.is_some()
    }

    /// Width to apply, the first time only.
    pub fn animate(&mut self, level: SkillLevel) -> Option<String> {
        if self.filled.is_some() {
            return None;
        }
        self.filled = Some(level);
        Some(self.width())
    }

    /// Fills from the bar's `data-progress` attribute. An already filled bar
    /// is left alone without looking at the attribute.
    pub fn animate_from_attribute(
        &mut self,
        attr: Option<&str>,
    ) -> Result<Option<String>, SkillLevelError> {
        if self.is_animated() {
            return Ok(None);
        }
        let level = attr.unwrap_or_default().parse::<SkillLevel>()?;
        Ok(self.animate(level))
    }

    pub fn width(&self) -> String {
        match self.filled {
            Some(level) => format!("{level}%"),
            None => "0%".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_bounds() {
        assert_eq!(SkillLevel::try_from(0).map(SkillLevel::percent), Ok(0));
        assert_eq!(SkillLevel::try_from(100).map(SkillLevel::percent), Ok(100));
        assert_eq!(
            SkillLevel::try_from(101),
            Err(SkillLevelError::OutOfRange(101))
        );
    }

    #[test]
    fn test_level_from_attribute() {
        assert_eq!("85".parse::<SkillLevel>().map(SkillLevel::percent), Ok(85));
        assert_eq!(" 7 ".parse::<SkillLevel>().map(SkillLevel::percent), Ok(7));
        assert!(matches!(
            "abc".parse::<SkillLevel>(),
            Err(SkillLevelError::Malformed(_))
        ));
        assert!(matches!(
            "300".parse::<SkillLevel>(),
            Err(SkillLevelError::Malformed(_))
        ));
        assert_eq!(
            "150".parse::<SkillLevel>(),
            Err(SkillLevelError::OutOfRange(150))
        );
    }

    #[test]
    fn test_bar_animates_once() {
        let mut bar = SkillBar::new();
        assert_eq!(bar.width(), "0%");
        assert_eq!(bar.animate(SkillLevel::try_from(90).unwrap()), Some("90%".to_string()));
        assert!(bar.is_animated());
        assert_eq!(bar.animate(SkillLevel::try_from(40).unwrap()), None);
        assert_eq!(bar.width(), "90%");
    }

    #[test]
    fn test_bar_fills_from_data_progress() {
        let mut bar = SkillBar::new();
        assert_eq!(bar.animate_from_attribute(Some("85")), Ok(Some("85%".to_string())));
        assert_eq!(bar.animate_from_attribute(Some("20")), Ok(None));
        assert_eq!(bar.width(), "85%");
    }

    #[test]
    fn test_bar_rejects_bad_data_progress() {
        let mut bar = SkillBar::new();
        assert_eq!(
            bar.animate_from_attribute(None),
            Err(SkillLevelError::Malformed(String::new()))
        );
        assert_eq!(
            bar.animate_from_attribute(Some("140")),
            Err(SkillLevelError::OutOfRange(140))
        );
        assert!(!bar.is_animated());
        assert_eq!(bar.animate_from_attribute(Some("60")), Ok(Some("60%".to_string())));
    }

    #[test]
    fn test_level_deserialize() {
        let ok: SkillLevel = serde_json::from_str("60").unwrap();
        assert_eq!(ok.percent(), 60);
        assert!(serde_json::from_str::<SkillLevel>("120").is_err());
    }
}
