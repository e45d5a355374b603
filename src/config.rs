use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main importer configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ImportConfig {
    /// Origin used to resolve relative links and image paths
    #[serde(default = "default_site_origin")]
    pub site_origin: String,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Pause between recipe page requests during a crawl, in milliseconds
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
    /// How many recipe links to follow per category page
    #[serde(default = "default_max_links")]
    pub max_links_per_category: usize,
    /// Where the crawl writes its JSON dump
    #[serde(default = "default_output")]
    pub output: String,
    /// PostgreSQL connection string for `--save`, e.g. `postgres://food@localhost:5433/food`
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default)]
    pub extractor: ExtractorConfig,
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            site_origin: default_site_origin(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            request_delay_ms: default_request_delay_ms(),
            max_links_per_category: default_max_links(),
            output: default_output(),
            database_url: None,
            extractor: ExtractorConfig::default(),
            categories: default_categories(),
        }
    }
}

/// Markers used by the photo extractor
#[derive(Debug, Deserialize, Clone)]
pub struct ExtractorConfig {
    /// Substring every recipe image path contains
    #[serde(default = "default_recipe_path_marker")]
    pub recipe_path_marker: String,
    /// File name suffix reserved for the hero image
    #[serde(default = "default_primary_image_marker")]
    pub primary_image_marker: String,
    /// Use the first image on the page when no hero image is found
    #[serde(default)]
    pub first_image_fallback: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            recipe_path_marker: default_recipe_path_marker(),
            primary_image_marker: default_primary_image_marker(),
            first_image_fallback: false,
        }
    }
}

/// A category listing page to crawl
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub url: String,
}

impl Category {
    /// Last path segment of the category URL, e.g. `salatyi`
    pub fn slug(&self) -> &str {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
    }
}

fn default_site_origin() -> String {
    "https://blog-food.ru".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_request_delay_ms() -> u64 {
    1000
}

fn default_max_links() -> usize {
    6
}

fn default_output() -> String {
    "parsed_recipes.json".to_string()
}

fn default_recipe_path_marker() -> String {
    "recipes".to_string()
}

fn default_primary_image_marker() -> String {
    "00.jpg".to_string()
}

fn default_categories() -> Vec<Category> {
    [
        ("закуски", "https://blog-food.ru/recipes/zakuski"),
        ("салаты", "https://blog-food.ru/recipes/salatyi"),
        ("первые блюда", "https://blog-food.ru/recipes/first-dishes"),
        ("основные блюда", "https://blog-food.ru/recipes/main-dishes"),
        ("выпечка", "https://blog-food.ru/recipes/vypechka"),
    ]
    .into_iter()
    .map(|(name, url)| Category {
        name: name.to_string(),
        url: url.to_string(),
    })
    .collect()
}

impl ImportConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_IMPORT__ prefix
    /// 2. recipe-import.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_IMPORT__EXTRACTOR__PRIMARY_IMAGE_MARKER
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from the optional `recipe-import.toml` and the environment
pub fn load_config() -> Result<ImportConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name("recipe-import").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_IMPORT")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
