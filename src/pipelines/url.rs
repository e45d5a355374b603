use super::{extract_from_html, ExtractionMode, ImportedRecipe};
use crate::config::ImportConfig;
use crate::error::ImportError;
use crate::extractors::ExtractorOptions;
use crate::fetchers::RequestFetcher;

/// Process a recipe URL
///
/// This pipeline:
/// 1. Fetches HTML using RequestFetcher
/// 2. Runs the extractor selected by `mode`
/// 3. Normalizes every ingredient line
///
/// # Returns
/// * `Ok(ImportedRecipe)` - even when some fields stayed empty
/// * `Err(...)` - if the page could not be retrieved
pub async fn process(
    url: &str,
    config: &ImportConfig,
    mode: ExtractionMode,
) -> Result<ImportedRecipe, ImportError> {
    let fetcher = RequestFetcher::from_config(config)?;
    process_with(&fetcher, url, config, mode).await
}

/// Same as [`process`] with a caller-owned fetcher, so a crawl reuses one client.
pub async fn process_with(
    fetcher: &RequestFetcher,
    url: &str,
    config: &ImportConfig,
    mode: ExtractionMode,
) -> Result<ImportedRecipe, ImportError> {
    let html = fetcher.fetch(url).await?;
    Ok(extract_from_html(
        url,
        &html,
        mode,
        ExtractorOptions::from_config(config),
    ))
}
