use super::text::element_text;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static H1: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").expect("Invalid h1 selector"));

static TITLE_CLASS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("[class*='title' i]").expect("Invalid title class selector")
});

/// Text of the first `h1`, or an empty string.
pub fn extract_title(document: &Html) -> String {
    document
        .select(&H1)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

/// First `h1`, falling back to the first element with "title" in its class.
pub fn extract_title_loose(document: &Html) -> String {
    document
        .select(&H1)
        .next()
        .or_else(|| document.select(&TITLE_CLASS).next())
        .map(element_text)
        .unwrap_or_default()
}
