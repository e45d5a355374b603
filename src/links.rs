//! Recipe link discovery on category listing pages.

use crate::config::{Category, ImportConfig};
use crate::extractors::text::element_text;
use log::debug;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

static ANCHORS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("Invalid anchor selector"));

/// Anchor texts that name a section rather than a dish
const NAVIGATION_WORDS: &[&str] = &["рецепт", "кухн", "блюд", "закуск", "салат", "выпечк"];

/// Anchor texts this short are buttons, counters or pagination
const MIN_ANCHOR_CHARS: usize = 10;

/// Absolute URLs of recipe pages linked from a category page, in page order,
/// without duplicates, at most `config.max_links_per_category`.
pub fn discover_recipe_links(document: &Html, config: &ImportConfig) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for anchor in document.select(&ANCHORS) {
        if links.len() >= config.max_links_per_category {
            break;
        }
        let Some(href) = anchor.value().attr("href").map(str::trim) else {
            continue;
        };
        let text = element_text(anchor);
        if !is_recipe_link(href, &text, &config.categories) {
            continue;
        }
        let Some(url) = absolutize(&config.site_origin, href) else {
            continue;
        };
        if seen.insert(url.clone()) {
            debug!("Found recipe link: {} ({})", text, url);
            links.push(url);
        }
    }

    links
}

fn is_recipe_link(href: &str, text: &str, categories: &[Category]) -> bool {
    if !href.contains("recipes/") || href.ends_with("/recipes") {
        return false;
    }
    let href_path = href.trim_end_matches('/');
    if categories
        .iter()
        .any(|category| href_path.ends_with(&format!("/{}", category.slug())))
    {
        return false;
    }
    if text.chars().count() <= MIN_ANCHOR_CHARS || text.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let lower = text.to_lowercase();
    !NAVIGATION_WORDS.iter().any(|word| lower.contains(word))
}

fn absolutize(origin: &str, href: &str) -> Option<String> {
    let origin = origin.trim_end_matches('/');
    if href.starts_with('/') && !href.starts_with("//") {
        Some(format!("{origin}{href}"))
    } else if href.starts_with("recipes/") {
        Some(format!("{origin}/{href}"))
    } else {
        crate::extractors::photo::resolve_url(origin, href)
    }
}
