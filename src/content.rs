use rust_embed::Embed;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

use crate::{config::EffectsConfig, effects::skills::SkillLevel};

const CONTENT_FILE: &str = "portfolio.json";

pub static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(|| Portfolio::load(CONTENT_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse page content: {0}")]
    ParseError(String),
    #[error("Typing effect needs at least one text")]
    NoTypingTexts,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub typing: Vec<String>,
    pub about: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub education: Vec<TimelineEntry>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub effects: EffectsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub image: String,
    pub email: String,
    pub location: String,
    #[serde(default)]
    pub socials: Vec<Social>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Social {
    pub label: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimelineEntry {
    pub period: String,
    pub title: String,
    pub place: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    pub period: String,
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl Portfolio {
    pub fn load(name: &str) -> Result<Self, ContentError> {
        let file = Assets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
        Self::parse(&file.data)
    }

    pub fn parse(bytes: &[u8]) -> Result<Self, ContentError> {
        let portfolio: Self =
            serde_json::from_slice(bytes).map_err(|e| ContentError::ParseError(e.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.typing.is_empty() {
            return Err(ContentError::NoTypingTexts);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "profile": {
            "name": "Ada Lovelace",
            "title": "Analyst",
            "tagline": "Engines",
            "image": "/images/profile.jpg",
            "email": "ada@example.com",
            "location": "London"
        },
        "typing": ["Ada Lovelace"],
        "about": []
    }"#;

    #[test]
    fn test_embedded_content_parses() {
        let portfolio = PORTFOLIO.as_ref().expect("embedded content should be valid");
        assert!(!portfolio.typing.is_empty());
        assert!(!portfolio.projects.is_empty());
        assert!(portfolio.skills.iter().all(|s| s.level.percent() <= 100));
    }

    #[test]
    fn test_minimal_content_uses_defaults() {
        let portfolio = Portfolio::parse(MINIMAL.as_bytes()).unwrap();
        assert_eq!(portfolio.profile.name, "Ada Lovelace");
        assert!(portfolio.projects.is_empty());
        assert_eq!(portfolio.effects, EffectsConfig::default());
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Portfolio::load("nope.json"),
            Err(ContentError::NotFound(_))
        ));
    }

    #[test]
    fn test_rejects_empty_typing() {
        let json = MINIMAL.replace(r#"["Ada Lovelace"]"#, "[]");
        assert!(matches!(
            Portfolio::parse(json.as_bytes()),
            Err(ContentError::NoTypingTexts)
        ));
    }

    #[test]
    fn test_rejects_bad_skill_level() {
        let json = MINIMAL.replace(
            r#""about": []"#,
            r#""about": [], "skills": [{ "name": "Rust", "icon": "devicon-rust-plain", "level": 140 }]"#,
        );
        assert!(matches!(
            Portfolio::parse(json.as_bytes()),
            Err(ContentError::ParseError(_))
        ));
    }
}
