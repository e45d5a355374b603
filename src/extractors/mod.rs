use crate::config::ImportConfig;
use crate::model::RecipeRecord;
use scraper::Html;

pub mod duration;
pub mod ingredients;
pub mod lexicon;
pub mod photo;
pub mod steps;
pub mod text;
pub mod tiers;
pub mod title;

mod heuristic;
mod section;

pub use heuristic::HeuristicExtractor;
pub use section::SectionExtractor;

/// One recipe page, parsed and flattened once, shared by all field extractors.
pub struct ParsingContext {
    pub url: String,
    pub document: Html,
    /// Visible text of the whole page
    pub text: String,
    /// `text` split on line breaks, each line trimmed
    pub lines: Vec<String>,
}

impl ParsingContext {
    /// Parse `html` and derive the plain-text rendering from it.
    pub fn new(url: impl Into<String>, html: &str) -> Self {
        let document = Html::parse_document(html);
        let text = text::flatten_text(&document);
        Self::from_parts(url.into(), document, text)
    }

    /// Use a plain-text rendering produced elsewhere instead of deriving one.
    pub fn with_text(url: impl Into<String>, html: &str, rendered: impl Into<String>) -> Self {
        Self::from_parts(url.into(), Html::parse_document(html), rendered.into())
    }

    fn from_parts(url: String, document: Html, text: String) -> Self {
        let lines = text::split_lines(&text);
        Self {
            url,
            document,
            text,
            lines,
        }
    }
}

/// Settings the field extractors need beyond the page itself
#[derive(Debug, Clone)]
pub struct ExtractorOptions {
    pub site_origin: String,
    pub recipe_path_marker: String,
    pub primary_image_marker: String,
    pub first_image_fallback: bool,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self::from_config(&ImportConfig::default())
    }
}

impl ExtractorOptions {
    pub fn from_config(config: &ImportConfig) -> Self {
        Self {
            site_origin: config.site_origin.clone(),
            recipe_path_marker: config.extractor.recipe_path_marker.clone(),
            primary_image_marker: config.extractor.primary_image_marker.clone(),
            first_image_fallback: config.extractor.first_image_fallback,
        }
    }
}

/// Turns a parsed page into a recipe record.
///
/// Extraction never fails: fields that cannot be found keep their empty or
/// zero value.
pub trait Extractor {
    fn name(&self) -> &'static str;
    fn parse(&self, context: &ParsingContext) -> RecipeRecord;
}
