use std::time::Duration;

use serde::Deserialize;

/// Delays between typewriter steps, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypingSpeeds {
    pub type_ms: u64,
    pub delete_ms: u64,
    pub pause_full_ms: u64,
    pub pause_empty_ms: u64,
}

impl Default for TypingSpeeds {
    fn default() -> Self {
        Self {
            type_ms: 100,
            delete_ms: 50,
            pause_full_ms: 2000,
            pause_empty_ms: 500,
        }
    }
}

/// What to show after a tick, and how long to wait before the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingStep {
    pub text: String,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    texts: Vec<String>,
    speeds: TypingSpeeds,
    text_index: usize,
    char_index: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(texts: Vec<String>, speeds: TypingSpeeds) -> Option<Self> {
        if texts.is_empty() {
            return None;
        }
        Some(Self {
            texts,
            speeds,
            text_index: 0,
            char_index: 0,
            deleting: false,
        })
    }

    pub fn text_index(&self) -> usize {
        self.text_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn tick(&mut self) -> TypingStep {
        let current = &self.texts[self.text_index];
        let len = current.chars().count();

        let mut delay = if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            self.speeds.delete_ms
        } else {
            self.char_index = (self.char_index + 1).min(len);
            self.speeds.type_ms
        };
        let text = current.chars().take(self.char_index).collect::<String>();

        if !self.deleting && self.char_index == len {
            self.deleting = true;
            delay = self.speeds.pause_full_ms;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.text_index = (self.text_index + 1) % self.texts.len();
            delay = self.speeds.pause_empty_ms;
        }

        TypingStep {
            text,
            delay: Duration::from_millis(delay),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer(texts: &[&str]) -> Typewriter {
        Typewriter::new(
            texts.iter().map(|s| s.to_string()).collect(),
            TypingSpeeds::default(),
        )
        .expect("texts are not empty")
    }

    #[test]
    fn test_empty_texts_rejected() {
        assert!(Typewriter::new(vec![], TypingSpeeds::default()).is_none());
    }

    #[test]
    fn test_types_then_deletes_then_repeats() {
        let mut tw = writer(&["abc"]);
        let shown = (0..12)
            .map(|_| tw.tick())
            .map(|s| (s.text, s.delay.as_millis() as u64))
            .collect::<Vec<_>>();
        let expected = [
            ("a", 100),
            ("ab", 100),
            ("abc", 2000),
            ("ab", 50),
            ("a", 50),
            ("", 500),
            ("a", 100),
            ("ab", 100),
            ("abc", 2000),
            ("ab", 50),
            ("a", 50),
            ("", 500),
        ];
        for (got, (text, delay)) in shown.iter().zip(expected) {
            assert_eq!(got.0, text);
            assert_eq!(got.1, delay);
        }
    }

    #[test]
    fn test_count_rises_to_full_then_falls_to_zero_before_advancing() {
        let text = "Giffari Syarizky Hardiawan";
        let len = text.chars().count();
        let mut tw = writer(&[text, "second"]);

        let mut counts = vec![];
        while tw.text_index() == 0 {
            counts.push(tw.tick().text.chars().count());
        }
        let peak = counts
            .iter()
            .position(|&c| c == len)
            .expect("full text should be shown");
        assert!(counts[..=peak].windows(2).all(|w| w[1] == w[0] + 1));
        assert!(counts[peak..].windows(2).all(|w| w[1] + 1 == w[0]));
        assert_eq!(counts.last(), Some(&0));
        assert_eq!(counts.len(), 2 * len);
    }

    #[test]
    fn test_advances_and_wraps_texts() {
        let mut tw = writer(&["ab", "c"]);
        for _ in 0..4 {
            tw.tick();
        }
        assert_eq!(tw.text_index(), 1);
        assert_eq!(tw.tick().text, "c");
        assert!(tw.is_deleting());
        assert_eq!(tw.tick().text, "");
        assert_eq!(tw.text_index(), 0);
    }

    #[test]
    fn test_multibyte_prefixes() {
        let mut tw = writer(&["héé"]);
        assert_eq!(tw.tick().text, "h");
        assert_eq!(tw.tick().text, "hé");
        assert_eq!(tw.tick().text, "héé");
    }

    #[test]
    fn test_empty_string_does_not_stall() {
        let mut tw = writer(&["", "x"]);
        let first = tw.tick();
        assert_eq!(first.text, "");
        assert!(tw.is_deleting());
        tw.tick();
        assert_eq!(tw.text_index(), 1);
    }
}
