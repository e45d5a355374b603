use clap::Parser;
use log::{error, info};
use recipe_import::persistence::{save_recipe, MemoryStore, PostgresStore, RecipeStore};
use recipe_import::pipelines::{self, ExtractionMode, ImportedRecipe};
use recipe_import::{ImportConfig, ImportError};

#[derive(Parser, Debug)]
#[command(
    name = "recipe-import",
    version,
    about = "Extract recipes from loosely structured recipe pages"
)]
struct Cli {
    /// Recipe page to import
    #[arg(required_unless_present = "crawl", conflicts_with = "crawl")]
    url: Option<String>,

    /// Crawl every configured category instead of a single page
    #[arg(long)]
    crawl: bool,

    /// Where --crawl writes its JSON (default from config)
    #[arg(long, requires = "crawl")]
    output: Option<String>,

    /// Use section-header extraction instead of line classification
    #[arg(long)]
    simple: bool,

    /// Store each recipe in an in-memory database and log the result
    #[arg(long, conflicts_with = "save")]
    dry_run: bool,

    /// Store each recipe in the PostgreSQL database at `database_url`
    #[arg(long)]
    save: bool,
}

impl Cli {
    fn mode(&self) -> ExtractionMode {
        if self.simple {
            ExtractionMode::Section
        } else {
            ExtractionMode::Heuristic
        }
    }
}

async fn store_all<S: RecipeStore>(
    store: &mut S,
    recipes: &[ImportedRecipe],
) -> Result<(), ImportError> {
    for imported in recipes {
        let report = save_recipe(store, &imported.record, &imported.ingredients).await?;
        info!("{:?}", report);
    }
    Ok(())
}

async fn persist(
    cli: &Cli,
    config: &ImportConfig,
    recipes: &[ImportedRecipe],
) -> Result<(), ImportError> {
    if cli.save {
        let mut store = PostgresStore::from_config(config).await?;
        store_all(&mut store, recipes).await?;
    } else if cli.dry_run {
        store_all(&mut MemoryStore::new(), recipes).await?;
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<(), ImportError> {
    let mut config = ImportConfig::load()?;

    if cli.crawl {
        if let Some(output) = &cli.output {
            config.output = output.clone();
        }
        let recipes = pipelines::crawl::run(&config, cli.mode()).await?;
        persist(&cli, &config, &recipes).await?;
        let json = serde_json::to_string_pretty(&recipes)?;
        tokio::fs::write(&config.output, json).await?;
        info!("Saved {} recipes to {}", recipes.len(), config.output);
    } else if let Some(url) = &cli.url {
        let imported = pipelines::url::process(url, &config, cli.mode()).await?;
        if !imported.record.has_title() {
            return Err(ImportError::MissingTitle(url.clone()));
        }
        persist(&cli, &config, std::slice::from_ref(&imported)).await?;
        println!("{}", serde_json::to_string_pretty(&imported)?);
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
