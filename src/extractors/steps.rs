use super::lexicon::{contains_any, looks_like_ingredient, COOKING_STEMS, STEP_EXCLUSIONS};
use super::tiers::{first_match, non_empty, Tier};
use std::collections::HashSet;

/// Instructions are prose; shorter lines are labels or list entries
const STEP_MIN_CHARS: usize = 25;
/// Cap on lexicon-matched steps per page
const MAX_STEPS: usize = 10;
/// Floor for the unfiltered long-line fallback
const FALLBACK_MIN_CHARS: usize = 30;
const FALLBACK_MAX_STEPS: usize = 6;

/// Lines plus the ingredient lines already claimed on the same page
pub struct StepInput<'a> {
    pub lines: &'a [String],
    pub ingredients: &'a [String],
}

impl StepInput<'_> {
    /// Matches the line with or without its trailing colon.
    fn is_ingredient(&self, line: &str) -> bool {
        let bare = line.trim_end_matches(':');
        self.ingredients
            .iter()
            .any(|ingredient| ingredient == line || ingredient == bare)
    }
}

/// Ordered, de-duplicated step lines.
pub fn extract_steps(lines: &[String], ingredients: &[String]) -> Vec<String> {
    let tiers: [Tier<StepInput<'_>, Vec<String>>; 2] = [
        Tier::new("cooking_lexicon", lexicon_steps),
        Tier::new("long_lines", long_lines),
    ];
    first_match(&tiers, &StepInput { lines, ingredients }).unwrap_or_default()
}

/// Candidate test for one trimmed line, before colon stripping.
pub fn is_step_candidate(line: &str) -> bool {
    if line.chars().count() <= STEP_MIN_CHARS {
        return false;
    }
    let lower = line.to_lowercase();
    contains_any(&lower, COOKING_STEMS)
        && !contains_any(&lower, STEP_EXCLUSIONS)
        && !looks_like_ingredient(line)
}

fn lexicon_steps(input: &StepInput<'_>) -> Option<Vec<String>> {
    let mut seen = HashSet::new();
    let mut steps = Vec::new();
    for line in input.lines {
        if steps.len() == MAX_STEPS {
            break;
        }
        if !is_step_candidate(line) || input.is_ingredient(line) {
            continue;
        }
        let step = line.trim_end_matches(':');
        if seen.insert(step) {
            steps.push(step.to_string());
        }
    }
    non_empty(steps)
}

/// The first few long lines, for pages with no recognizable cooking verbs.
fn long_lines(input: &StepInput<'_>) -> Option<Vec<String>> {
    non_empty(
        input
            .lines
            .iter()
            .filter(|line| line.chars().count() > FALLBACK_MIN_CHARS && !input.is_ingredient(line))
            .take(FALLBACK_MAX_STEPS)
            .cloned()
            .collect(),
    )
}
