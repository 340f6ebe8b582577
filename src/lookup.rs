use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Russian → English vocabulary used when the remote translator is unavailable.
const VOCABULARY: &[(&str, &str)] = &[
    ("черная", "black"),
    ("пантера", "panther"),
    ("киберпанк", "cyberpunk"),
    ("ящерица", "lizard"),
    ("дракон", "dragon"),
    ("красный", "red"),
    ("синий", "blue"),
    ("зеленый", "green"),
    ("кот", "cat"),
    ("собака", "dog"),
    ("робот", "robot"),
    ("город", "city"),
    ("космос", "space"),
    ("природа", "nature"),
];

static TABLE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| VOCABULARY.iter().copied().collect());

/// Word-by-word substitution through the fixed table. Lower-cases the input,
/// splits on single spaces and keeps unknown tokens (empty ones included).
pub fn lookup_translate(text: &str) -> String {
    text.to_lowercase()
        .split(' ')
        .map(|word| TABLE.get(word).copied().unwrap_or(word))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn vocabulary() -> &'static [(&'static str, &'static str)] {
    VOCABULARY
}
