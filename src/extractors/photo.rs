use super::tiers::{first_match, Tier};
use super::ExtractorOptions;
use reqwest::Url;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static IMG: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img").expect("Invalid img selector"));

/// What the photo tiers look at
pub struct PhotoInput<'a> {
    pub document: &'a Html,
    pub options: &'a ExtractorOptions,
}

/// Absolute URL of the recipe's hero image, or an empty string.
pub fn extract_photo(document: &Html, options: &ExtractorOptions) -> String {
    let primary: Tier<PhotoInput<'_>, String> = Tier::new("primary_image", primary_image);
    let first: Tier<PhotoInput<'_>, String> = Tier::new("first_image", first_image);
    let tiers = if options.first_image_fallback {
        vec![primary, first]
    } else {
        vec![primary]
    };
    first_match(&tiers, &PhotoInput { document, options }).unwrap_or_default()
}

/// Resolve the first image on the page, whatever it is.
pub fn extract_first_photo(document: &Html, options: &ExtractorOptions) -> String {
    let first: Tier<PhotoInput<'_>, String> = Tier::new("first_image", first_image);
    first_match(&[first], &PhotoInput { document, options }).unwrap_or_default()
}

fn image_sources(document: &Html) -> impl Iterator<Item = &str> {
    document.select(&IMG).filter_map(|img| {
        let el = img.value();
        el.attr("src")
            .filter(|src| !src.trim().is_empty())
            .or_else(|| el.attr("data-src"))
            .map(str::trim)
    })
}

fn primary_image(input: &PhotoInput<'_>) -> Option<String> {
    let options = input.options;
    image_sources(input.document)
        .find(|src| {
            src.contains(options.recipe_path_marker.as_str())
                && src.contains(options.primary_image_marker.as_str())
        })
        .and_then(|src| resolve_url(&options.site_origin, src))
}

fn first_image(input: &PhotoInput<'_>) -> Option<String> {
    image_sources(input.document)
        .next()
        .and_then(|src| resolve_url(&input.options.site_origin, src))
}

/// Make `href` absolute against `origin`.
///
/// `//host/path` takes the origin's scheme, `/path` and bare relative paths
/// are joined to the origin, absolute URLs pass through.
pub fn resolve_url(origin: &str, href: &str) -> Option<String> {
    if href.is_empty() {
        return None;
    }
    if let Ok(url) = Url::parse(href) {
        return Some(url.to_string());
    }
    let base = Url::parse(origin).ok()?;
    base.join(href).ok().map(|url| url.to_string())
}
