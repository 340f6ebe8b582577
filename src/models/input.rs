use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_PROMPT_CHARS: usize = 200;
pub const MIN_STEPS: u8 = 1;
pub const MAX_STEPS: u8 = 10;
pub const DEFAULT_STEPS: u8 = 6;

/// User prompt, never longer than [`MAX_PROMPT_CHARS`] characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt(String);

impl Prompt {
    pub fn new(text: &str) -> Self {
        Prompt(text.chars().take(MAX_PROMPT_CHARS).collect())
    }

    /// Replaces the text, truncating to the cap.
    pub fn set(&mut self, text: &str) {
        *self = Prompt::new(text);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn trimmed(&self) -> &str {
        self.0.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepCount(u8);

impl StepCount {
    pub fn clamped(value: i64) -> Self {
        StepCount(value.clamp(MIN_STEPS as i64, MAX_STEPS as i64) as u8)
    }

    /// Parses a user edit from its leading integer (`"4.5"` reads as 4,
    /// `"1e3"` as 1). Input without leading digits yields `None`; everything
    /// else is clamped to [1,10], saturating on overflow.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim_start();
        let (negative, rest) = match input.as_bytes().first() {
            Some(b'-') => (true, &input[1..]),
            Some(b'+') => (false, &input[1..]),
            _ => (false, input),
        };

        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }

        let value = rest[..digits]
            .bytes()
            .try_fold(0i64, |acc, d| acc.checked_mul(10)?.checked_add(i64::from(d - b'0')))
            .unwrap_or(i64::MAX);
        Some(Self::clamped(if negative { -value } else { value }))
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for StepCount {
    fn default() -> Self {
        StepCount(DEFAULT_STEPS)
    }
}

impl fmt::Display for StepCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_truncates_to_cap() {
        let long = "я".repeat(250);
        let prompt = Prompt::new(&long);
        assert_eq!(prompt.as_str().chars().count(), MAX_PROMPT_CHARS);

        let mut prompt = Prompt::default();
        prompt.set(&"a".repeat(201));
        assert_eq!(prompt.as_str().len(), 200);
    }

    #[test]
    fn test_prompt_short_text_is_kept() {
        let prompt = Prompt::new("  киберпанк ящерица ");
        assert_eq!(prompt.as_str(), "  киберпанк ящерица ");
        assert_eq!(prompt.trimmed(), "киберпанк ящерица");
        assert!(!prompt.is_blank());
        assert!(Prompt::new(" \t ").is_blank());
    }

    #[test]
    fn test_steps_are_clamped() {
        assert_eq!(StepCount::parse("0").unwrap().get(), 1);
        assert_eq!(StepCount::parse("15").unwrap().get(), 10);
        assert_eq!(StepCount::parse("-4").unwrap().get(), 1);
        assert_eq!(StepCount::parse(" 7 ").unwrap().get(), 7);
        assert_eq!(StepCount::parse("+3").unwrap().get(), 3);
    }

    #[test]
    fn test_steps_read_leading_integer() {
        assert_eq!(StepCount::parse("4.5").unwrap().get(), 4);
        assert_eq!(StepCount::parse("1e3").unwrap().get(), 1);
        assert_eq!(StepCount::parse("8 steps").unwrap().get(), 8);
    }

    #[test]
    fn test_huge_steps_saturate() {
        assert_eq!(StepCount::parse("99999999999999999999").unwrap().get(), 10);
        assert_eq!(StepCount::parse("-99999999999999999999").unwrap().get(), 1);
    }

    #[test]
    fn test_non_numeric_steps_rejected() {
        assert_eq!(StepCount::parse("six"), None);
        assert_eq!(StepCount::parse(""), None);
        assert_eq!(StepCount::parse("-"), None);
        assert_eq!(StepCount::parse(".5"), None);
    }

    #[test]
    fn test_default_steps() {
        assert_eq!(StepCount::default().get(), 6);
    }
}
