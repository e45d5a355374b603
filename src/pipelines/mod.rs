pub mod crawl;
pub mod url;

use crate::extractors::{
    Extractor, ExtractorOptions, HeuristicExtractor, ParsingContext, SectionExtractor,
};
use crate::model::{IngredientTriple, RecipeRecord};
use crate::normalizer::IngredientNormalizer;
use serde::Serialize;

/// Which extractor a pipeline runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtractionMode {
    /// Line-by-line classification (default)
    #[default]
    Heuristic,
    /// Section-header driven extraction
    Section,
}

impl ExtractionMode {
    fn extractor(self, options: ExtractorOptions) -> Box<dyn Extractor> {
        match self {
            ExtractionMode::Heuristic => Box::new(HeuristicExtractor::new(options)),
            ExtractionMode::Section => Box::new(SectionExtractor::new(options)),
        }
    }
}

/// An extracted record together with its normalized ingredients
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportedRecipe {
    #[serde(flatten)]
    pub record: RecipeRecord,
    #[serde(rename = "normalized_ingredients")]
    pub ingredients: Vec<IngredientTriple>,
}

/// Extract and normalize one already-fetched page.
pub fn extract_from_html(
    url: &str,
    html: &str,
    mode: ExtractionMode,
    options: ExtractorOptions,
) -> ImportedRecipe {
    let context = ParsingContext::new(url, html);
    let record = mode.extractor(options).parse(&context);
    let ingredients = IngredientNormalizer.run_all(&record.ingredients);
    ImportedRecipe {
        record,
        ingredients,
    }
}
