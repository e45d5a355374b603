use super::tiers::{first_match, Tier};
use regex::Regex;
use std::sync::LazyLock;

static ISO_MINUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"PT(\d+)M").expect("Invalid ISO duration regex"));

static MINUTES_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*мин").expect("Invalid minutes phrase regex")
});

/// ISO-8601 `PT<N>M` token anywhere in the text
pub const ISO_TIER: Tier<str, u64> = Tier::new("iso_minutes", iso_minutes);

/// "<N> мин" phrase
pub const PHRASE_TIER: Tier<str, u64> = Tier::new("minutes_phrase", minutes_phrase);

const TIERS: [Tier<str, u64>; 2] = [ISO_TIER, PHRASE_TIER];

/// Preparation duration in seconds, `0` when the text carries none.
///
/// Only the earliest match of the first tier that fires counts; pages repeat
/// "N минут" in comments and related-recipe widgets further down.
pub fn extract_duration(text: &str) -> u64 {
    first_match(&TIERS, text).unwrap_or(0)
}

/// Duration using only the minutes phrase, for pages without ISO tokens.
pub fn extract_phrase_duration(text: &str) -> u64 {
    first_match(&[PHRASE_TIER], text).unwrap_or(0)
}

fn iso_minutes(text: &str) -> Option<u64> {
    first_minutes(&ISO_MINUTES, text)
}

fn minutes_phrase(text: &str) -> Option<u64> {
    first_minutes(&MINUTES_PHRASE, text)
}

fn first_minutes(pattern: &Regex, text: &str) -> Option<u64> {
    let minutes: u64 = pattern.captures(text)?.get(1)?.as_str().parse().ok()?;
    Some(minutes.saturating_mul(60))
}
