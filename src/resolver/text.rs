//! Title parsing and textual overlap scoring.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// "Display (Local)" with ASCII or full-width parentheses
static BILINGUAL_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<main>[^(（]+?)\s*[(（](?P<local>[^)）]+)[)）]\s*$")
        .expect("bilingual title pattern is valid")
});

/// The ways an itinerary title may name a place.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleVariants {
    pub full: String,
    pub main: Option<String>,
    pub local: Option<String>,
}

impl TitleVariants {
    pub fn parse(title: &str) -> Self {
        let full = title.trim().to_string();
        match BILINGUAL_TITLE.captures(&full) {
            Some(caps) => Self {
                main: caps.name("main").map(|m| m.as_str().trim().to_string()),
                local: caps.name("local").map(|m| m.as_str().trim().to_string()),
                full,
            },
            None => Self {
                full,
                main: None,
                local: None,
            },
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.full.as_str())
            .chain(self.main.as_deref())
            .chain(self.local.as_deref())
    }

    /// Whether `name` equals any variant after folding.
    pub fn matches_exactly(&self, name: &str) -> bool {
        let folded = fold(name);
        !folded.is_empty() && self.iter().any(|v| fold(v) == folded)
    }

    /// Best overlap of `name` against any variant.
    pub fn overlap(&self, name: &str) -> f64 {
        self.iter().map(|v| overlap(v, name)).fold(0.0, f64::max)
    }
}

/// Lowercase, alphanumeric only. Keeps Hangul, Kana and Han characters.
pub fn fold(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Sørensen–Dice coefficient over character bigrams of the folded strings.
pub fn overlap(a: &str, b: &str) -> f64 {
    let a = fold(a);
    let b = fold(b);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let a_grams = bigrams(&a);
    let b_grams = bigrams(&b);
    if a_grams.is_empty() || b_grams.is_empty() {
        // Single-character strings that differ
        return 0.0;
    }

    let mut counts: HashMap<(char, char), usize> = HashMap::new();
    for gram in &a_grams {
        *counts.entry(*gram).or_default() += 1;
    }
    let mut shared = 0;
    for gram in &b_grams {
        if let Some(count) = counts.get_mut(gram) {
            if *count > 0 {
                *count -= 1;
                shared += 1;
            }
        }
    }

    2.0 * shared as f64 / (a_grams.len() + b_grams.len()) as f64
}

fn bigrams(text: &str) -> Vec<(char, char)> {
    let chars: Vec<char> = text.chars().collect();
    chars.windows(2).map(|w| (w[0], w[1])).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bilingual_title() {
        let v = TitleVariants::parse("도쿄 타워 (東京タワー)");
        assert_eq!(v.full, "도쿄 타워 (東京タワー)");
        assert_eq!(v.main.as_deref(), Some("도쿄 타워"));
        assert_eq!(v.local.as_deref(), Some("東京タワー"));

        let v = TitleVariants::parse("센소지（浅草寺）");
        assert_eq!(v.main.as_deref(), Some("센소지"));
        assert_eq!(v.local.as_deref(), Some("浅草寺"));
    }

    #[test]
    fn test_parse_plain_title() {
        let v = TitleVariants::parse("  Tokyo Tower ");
        assert_eq!(v.full, "Tokyo Tower");
        assert!(v.main.is_none());
        assert!(v.local.is_none());
        assert_eq!(v.iter().count(), 1);
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold("Tokyo Tower!"), "tokyotower");
        assert_eq!(fold("東京 タワー"), "東京タワー");
    }

    #[test]
    fn test_overlap_scores() {
        assert_eq!(overlap("Tokyo Tower", "tokyo-tower"), 1.0);
        assert_eq!(overlap("Tokyo Tower", "Osaka Castle"), 0.0);
        assert_eq!(overlap("", "Tokyo"), 0.0);
        let partial = overlap("Tokyo Tower", "Tokyo Tower Aquarium");
        assert!(partial > 0.5 && partial < 1.0);
        assert!(overlap("東京タワー", "東京タワー展望台") > overlap("東京タワー", "東京駅"));
    }

    #[test]
    fn test_exact_match_any_variant() {
        let v = TitleVariants::parse("도쿄 타워 (東京タワー)");
        assert!(v.matches_exactly("東京タワー"));
        assert!(v.matches_exactly("도쿄타워"));
        assert!(!v.matches_exactly("東京駅"));
        assert!(!v.matches_exactly("!!"));
    }
}
