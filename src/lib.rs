pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod links;
pub mod model;
pub mod normalizer;
pub mod persistence;
pub mod pipelines;

pub use config::ImportConfig;
pub use error::ImportError;
pub use extractors::{Extractor, ExtractorOptions, HeuristicExtractor, ParsingContext};
pub use model::{IngredientTriple, MeasureUnit, RecipeRecord};
pub use normalizer::{normalize_ingredient, IngredientNormalizer};
pub use pipelines::{ExtractionMode, ImportedRecipe};

/// Extract a recipe record from an already-fetched page with default settings.
pub fn extract_recipe(url: &str, html: &str) -> RecipeRecord {
    let context = ParsingContext::new(url, html);
    HeuristicExtractor::default().parse(&context)
}

/// Fetch a recipe page and extract it with default settings.
pub async fn fetch_recipe(url: &str) -> Result<RecipeRecord, ImportError> {
    let config = ImportConfig::default();
    let imported = pipelines::url::process(url, &config, ExtractionMode::Heuristic).await?;
    Ok(imported.record)
}

/// Fetch, extract and normalize a recipe page.
pub async fn import_recipe(
    url: &str,
    config: &ImportConfig,
) -> Result<ImportedRecipe, ImportError> {
    pipelines::url::process(url, config, ExtractionMode::Heuristic).await
}
