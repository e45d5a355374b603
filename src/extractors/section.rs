use super::duration::extract_phrase_duration;
use super::ingredients::dotted_unit_lines;
use super::lexicon::contains_any;
use super::photo::extract_first_photo;
use super::title::extract_title_loose;
use super::{Extractor, ExtractorOptions, ParsingContext};
use crate::model::RecipeRecord;
use log::debug;

const INGREDIENT_HEADERS: &[&str] = &["ингредиент", "состав", "продукт"];
const STEP_HEADERS: &[&str] = &["приготовление", "способ", "шаг", "инструкция"];
const SECTION_UNITS: &[&str] = &["гр", "мл", "шт", "ст"];
const SECTION_STEP_MIN_CHARS: usize = 10;
const FALLBACK_MIN_CHARS: usize = 30;
const FALLBACK_MAX_STEPS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    None,
    Ingredients,
    Steps,
}

/// Simpler extractor that trusts section headers ("Ингредиенты",
/// "Приготовление") instead of classifying every line.
///
/// Photo is always the first image on the page.
#[derive(Debug, Clone, Default)]
pub struct SectionExtractor {
    options: ExtractorOptions,
}

impl SectionExtractor {
    pub fn new(options: ExtractorOptions) -> Self {
        Self { options }
    }
}

impl Extractor for SectionExtractor {
    fn name(&self) -> &'static str {
        "section"
    }

    fn parse(&self, context: &ParsingContext) -> RecipeRecord {
        debug!("Extracting recipe from {} by section headers", context.url);

        let mut section = Section::None;
        let mut ingredients = Vec::new();
        let mut steps = Vec::new();

        for line in context.lines.iter().filter(|line| !line.is_empty()) {
            let lower = line.to_lowercase();
            if contains_any(&lower, INGREDIENT_HEADERS) {
                section = Section::Ingredients;
                continue;
            }
            if contains_any(&lower, STEP_HEADERS) {
                section = Section::Steps;
                continue;
            }

            match section {
                Section::Ingredients if SECTION_UNITS.iter().any(|unit| line.contains(unit)) => {
                    ingredients.push(line.clone());
                }
                Section::Steps
                    if line.chars().count() > SECTION_STEP_MIN_CHARS
                        && !line.chars().all(|c| c.is_ascii_digit()) =>
                {
                    steps.push(line.clone());
                }
                _ => {}
            }
        }

        if ingredients.is_empty() {
            ingredients = dotted_unit_lines(&context.lines).unwrap_or_default();
        }
        if steps.is_empty() {
            steps = context
                .lines
                .iter()
                .filter(|line| line.chars().count() > FALLBACK_MIN_CHARS && !ingredients.contains(line))
                .take(FALLBACK_MAX_STEPS)
                .cloned()
                .collect();
        }

        debug!(
            "Section extraction found {} ingredients, {} steps",
            ingredients.len(),
            steps.len()
        );

        RecipeRecord {
            url: context.url.clone(),
            title: extract_title_loose(&context.document),
            duration_seconds: extract_phrase_duration(&context.text),
            photo: extract_first_photo(&context.document, &self.options),
            ingredients,
            steps,
            category: None,
        }
    }
}
