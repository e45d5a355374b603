use super::lexicon::{
    contains_any, has_unit, CALENDAR_DATE, DOTTED_UNITS, INGREDIENT_EXCLUSIONS, INGREDIENT_SHAPE,
    REVIEW_STOPWORDS, WORD_THEN_NUMBER,
};
use super::tiers::{first_match, non_empty, Tier};
use log::debug;

/// Lines at or above this length are prose, not ingredient entries
const LOOSE_LINE_MAX_CHARS: usize = 100;

const TIERS: [Tier<[String], Vec<String>>; 2] = [
    Tier::new("shape_and_loose", classified_lines),
    Tier::new("dotted_units", dotted_unit_lines),
];

/// Ingredient lines in document order. Duplicates are kept.
pub fn extract_ingredients(lines: &[String]) -> Vec<String> {
    first_match(&TIERS, lines).unwrap_or_default()
}

/// Whether a line passes the strict "Name, 300 гр" test
pub fn is_shaped_ingredient(line: &str) -> bool {
    INGREDIENT_SHAPE.is_match(line) && !is_excluded(line, INGREDIENT_EXCLUSIONS)
}

/// Whether a short line with a unit, a word, a number and a comma passes
pub fn is_loose_ingredient(line: &str) -> bool {
    line.chars().count() < LOOSE_LINE_MAX_CHARS
        && has_unit(line)
        && line.contains(',')
        && WORD_THEN_NUMBER.is_match(line)
        && !is_excluded(line, INGREDIENT_EXCLUSIONS)
        && !is_excluded(line, REVIEW_STOPWORDS)
}

/// Dotted unit abbreviation anywhere in the line
pub fn has_dotted_unit(line: &str) -> bool {
    DOTTED_UNITS.iter().any(|unit| line.contains(unit))
}

fn is_excluded(line: &str, vocabulary: &[&str]) -> bool {
    contains_any(&line.to_lowercase(), vocabulary) || CALENDAR_DATE.is_match(line)
}

fn classified_lines(lines: &[String]) -> Option<Vec<String>> {
    let mut found = Vec::new();
    for line in lines {
        if is_shaped_ingredient(line) {
            found.push(line.clone());
        } else if is_loose_ingredient(line) {
            debug!("Loose ingredient match: {}", line);
            found.push(line.clone());
        }
    }
    non_empty(found)
}

/// Last resort: trades precision for recall, no exclusions applied.
pub fn dotted_unit_lines(lines: &[String]) -> Option<Vec<String>> {
    non_empty(
        lines
            .iter()
            .filter(|line| has_dotted_unit(line))
            .cloned()
            .collect(),
    )
}
