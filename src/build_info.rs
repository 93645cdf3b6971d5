use chrono::{DateTime, Datelike, Utc};

pub const BUILD_TIME: &str = env!("BUILD_TIME");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub time: DateTime<Utc>,
}

impl BuildInfo {
    pub fn current() -> Option<Self> {
        Self::parse(BUILD_TIME)
    }

    pub fn parse(stamp: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(stamp)
            .ok()
            .map(|time| Self {
                time: time.with_timezone(&Utc),
            })
    }

    pub fn year(&self) -> i32 {
        self.time.year()
    }

    pub fn date_label(&self) -> String {
        self.time.format("%B %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_build_parses() {
        assert!(BuildInfo::current().is_some());
    }

    #[test]
    fn test_parse_and_format() {
        let info = BuildInfo::parse("2025-03-07T10:15:00+07:00").unwrap();
        assert_eq!(info.year(), 2025);
        assert_eq!(info.date_label(), "March 7, 2025");
        assert!(BuildInfo::parse("yesterday").is_none());
    }
}
