use super::url::process_with;
use super::{ExtractionMode, ImportedRecipe};
use crate::config::{Category, ImportConfig};
use crate::error::ImportError;
use crate::fetchers::RequestFetcher;
use crate::links::discover_recipe_links;
use log::{info, warn};
use reqwest::Url;
use scraper::Html;
use std::time::Duration;
use tokio::time::sleep;

/// Crawl every configured category and import the recipes it links to.
///
/// Pages that fail to load or come back without a title are logged and
/// skipped; the crawl itself fails only on an unparsable `site_origin` or
/// when the HTTP client cannot be built.
pub async fn run(
    config: &ImportConfig,
    mode: ExtractionMode,
) -> Result<Vec<ImportedRecipe>, ImportError> {
    Url::parse(&config.site_origin)
        .map_err(|_| ImportError::InvalidUrl(config.site_origin.clone()))?;
    let fetcher = RequestFetcher::from_config(config)?;
    let delay = Duration::from_millis(config.request_delay_ms);
    let mut recipes = Vec::new();

    for category in &config.categories {
        info!("Crawling category: {}", category.name);

        let links = match category_links(&fetcher, category, config).await {
            Ok(links) => links,
            Err(e) => {
                warn!("Skipping category {}: {}", category.url, e);
                continue;
            }
        };
        info!("Found {} recipes in {}", links.len(), category.name);

        for link in links {
            sleep(delay).await;

            match process_with(&fetcher, &link, config, mode).await {
                Ok(mut imported) if imported.record.has_title() => {
                    info!("Parsed recipe: {}", imported.record.title);
                    imported.record.category = Some(category.name.clone());
                    recipes.push(imported);
                }
                Ok(_) => warn!("{}", ImportError::MissingTitle(link)),
                Err(e) => warn!("Skipping recipe {}: {}", link, e),
            }
        }
    }

    info!("Crawled {} recipes", recipes.len());
    Ok(recipes)
}

async fn category_links(
    fetcher: &RequestFetcher,
    category: &Category,
    config: &ImportConfig,
) -> Result<Vec<String>, ImportError> {
    let html = fetcher.fetch(&category.url).await?;
    let document = Html::parse_document(&html);
    Ok(discover_recipe_links(&document, config))
}
