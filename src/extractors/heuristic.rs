use super::duration::extract_duration;
use super::ingredients::extract_ingredients;
use super::photo::extract_photo;
use super::steps::extract_steps;
use super::title::extract_title;
use super::{Extractor, ExtractorOptions, ParsingContext};
use crate::model::RecipeRecord;
use log::debug;

/// Rule-based extractor for pages without structured recipe markup.
///
/// Title, duration, photo, ingredients and steps are extracted independently
/// from the same page; each falls back to its own weaker tier.
#[derive(Debug, Clone, Default)]
pub struct HeuristicExtractor {
    options: ExtractorOptions,
}

impl HeuristicExtractor {
    pub fn new(options: ExtractorOptions) -> Self {
        Self { options }
    }
}

impl Extractor for HeuristicExtractor {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn parse(&self, context: &ParsingContext) -> RecipeRecord {
        debug!("Extracting recipe from {} with heuristic rules", context.url);

        let ingredients = extract_ingredients(&context.lines);
        let steps = extract_steps(&context.lines, &ingredients);

        let record = RecipeRecord {
            url: context.url.clone(),
            title: extract_title(&context.document),
            duration_seconds: extract_duration(&context.text),
            photo: extract_photo(&context.document, &self.options),
            ingredients,
            steps,
            category: None,
        };

        debug!("Recipe name: {}", record.title);
        debug!("Duration: {}s", record.duration_seconds);
        debug!("Ingredients count: {}", record.ingredients.len());
        debug!("Steps count: {}", record.steps.len());

        record
    }
}
