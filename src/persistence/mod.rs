//! Writes an extracted recipe into the relational layout used by the recipe
//! database: recipe row, ingredient rows shared by name, recipe/ingredient
//! links with amounts, step rows and numbered recipe/step links.

use crate::error::ImportError;
use crate::model::{IngredientTriple, MeasureUnit, RecipeRecord};
use async_trait::async_trait;
use log::{debug, info, warn};

mod memory;
mod postgres;

pub use memory::{
    IngredientRow, MemoryStore, RecipeIngredientRow, RecipeRow, StepLinkRow, StepRow,
};
pub use postgres::PostgresStore;

/// Only this many ingredient lines per recipe are stored
pub const MAX_SAVED_INGREDIENTS: usize = 10;
/// Ingredient names this short are noise ("и", "или", ...)
pub const MIN_INGREDIENT_NAME_CHARS: usize = 3;
/// Steps this short carry no instruction
pub const MIN_STEP_CHARS: usize = 10;
/// Step rows need a duration; pages do not give per-step times
pub const DEFAULT_STEP_DURATION_SECS: u64 = 300;
/// New ingredient rows start without nutrition data
pub const DEFAULT_CALORIES_FOR_UNIT: f64 = 0.0;

/// Row-level operations of the recipe database.
#[async_trait]
pub trait RecipeStore: Send {
    async fn insert_recipe(
        &mut self,
        name: &str,
        duration: u64,
        photo: &str,
    ) -> Result<i64, ImportError>;

    async fn find_ingredient(&mut self, name: &str) -> Result<Option<i64>, ImportError>;

    async fn insert_ingredient(
        &mut self,
        name: &str,
        unit: Option<MeasureUnit>,
    ) -> Result<i64, ImportError>;

    async fn link_ingredient(
        &mut self,
        recipe_id: i64,
        ingredient_id: i64,
        amount: f64,
    ) -> Result<(), ImportError>;

    async fn insert_step(&mut self, text: &str, duration: u64) -> Result<i64, ImportError>;

    async fn link_step(&mut self, recipe_id: i64, step_id: i64, number: u32)
        -> Result<(), ImportError>;
}

/// What [`save_recipe`] wrote
#[derive(Debug, Clone, PartialEq)]
pub struct SaveReport {
    pub recipe_id: i64,
    pub ingredients_saved: usize,
    pub steps_saved: usize,
}

/// Store `record` and its normalized ingredients.
///
/// Ingredients are looked up by name before insertion, so the same name is
/// only ever created once; the unit is recorded on creation. A failing
/// ingredient or step row is logged and skipped, a failing recipe row aborts.
pub async fn save_recipe<S: RecipeStore + ?Sized>(
    store: &mut S,
    record: &RecipeRecord,
    ingredients: &[IngredientTriple],
) -> Result<SaveReport, ImportError> {
    let recipe_id = store
        .insert_recipe(&record.title, record.duration_seconds, &record.photo)
        .await?;
    info!("Saved recipe '{}' with id {}", record.title, recipe_id);

    let mut ingredients_saved = 0;
    for triple in ingredients.iter().take(MAX_SAVED_INGREDIENTS) {
        if triple.name.chars().count() <= MIN_INGREDIENT_NAME_CHARS {
            debug!("Skipping short ingredient name '{}'", triple.name);
            continue;
        }
        match save_ingredient(store, recipe_id, triple).await {
            Ok(()) => ingredients_saved += 1,
            Err(e) => warn!("Skipping ingredient '{}': {}", triple.name, e),
        }
    }

    let mut steps_saved = 0;
    for step in &record.steps {
        let text = step.trim_end_matches(':');
        if text.chars().count() <= MIN_STEP_CHARS {
            continue;
        }
        let number = steps_saved as u32 + 1;
        match save_step(store, recipe_id, text, number).await {
            Ok(()) => steps_saved += 1,
            Err(e) => warn!("Skipping step '{}': {}", text, e),
        }
    }

    info!(
        "Recipe {} stored with {} ingredients and {} steps",
        recipe_id, ingredients_saved, steps_saved
    );

    Ok(SaveReport {
        recipe_id,
        ingredients_saved,
        steps_saved,
    })
}

async fn save_ingredient<S: RecipeStore + ?Sized>(
    store: &mut S,
    recipe_id: i64,
    triple: &IngredientTriple,
) -> Result<(), ImportError> {
    let ingredient_id = match store.find_ingredient(&triple.name).await? {
        Some(id) => {
            debug!("Reusing ingredient '{}' ({})", triple.name, id);
            id
        }
        None => store.insert_ingredient(&triple.name, triple.unit).await?,
    };
    store
        .link_ingredient(recipe_id, ingredient_id, triple.amount)
        .await
}

async fn save_step<S: RecipeStore + ?Sized>(
    store: &mut S,
    recipe_id: i64,
    text: &str,
    number: u32,
) -> Result<(), ImportError> {
    let step_id = store.insert_step(text, DEFAULT_STEP_DURATION_SECS).await?;
    store.link_step(recipe_id, step_id, number).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize_ingredient;

    fn record() -> RecipeRecord {
        RecipeRecord {
            url: "https://blog-food.ru/recipes/salatyi/vinegret".to_string(),
            title: "Винегрет".to_string(),
            duration_seconds: 2400,
            photo: "https://blog-food.ru/images/recipes/vinegret/00.jpg".to_string(),
            ingredients: vec![
                "Свекла, 300 гр".to_string(),
                "Лук, 1 шт".to_string(),
                "Масло растительное, 2 ст. л.".to_string(),
            ],
            steps: vec![
                "Подготовка:".to_string(),
                "Свеклу отварить и нарезать кубиками.".to_string(),
                "Заправить маслом и перемешать.".to_string(),
            ],
            category: None,
        }
    }

    #[tokio::test]
    async fn test_save_recipe_rows() {
        let record = record();
        let triples: Vec<_> = record
            .ingredients
            .iter()
            .map(|line| normalize_ingredient(line))
            .collect();

        let mut store = MemoryStore::new();
        let report = save_recipe(&mut store, &record, &triples).await.unwrap();

        assert_eq!(
            report,
            SaveReport {
                recipe_id: 1,
                ingredients_saved: 2,
                steps_saved: 2,
            }
        );
        assert_eq!(store.recipes[0].name, "Винегрет");
        assert_eq!(store.recipes[0].duration, 2400);

        // "Лук" is too short to be stored
        assert_eq!(store.ingredients.len(), 2);
        assert_eq!(store.ingredients[0].name, "Свекла");
        assert_eq!(store.ingredients[0].unit_id, Some(1));
        assert_eq!(store.ingredients[1].unit_id, Some(4));
        assert_eq!(store.recipe_ingredients[0].count, 300.0);

        // "Подготовка" is too short once the colon is gone
        assert_eq!(store.steps[0].name, "Свеклу отварить и нарезать кубиками.");
        assert_eq!(store.steps[0].duration, DEFAULT_STEP_DURATION_SECS);
        let numbers: Vec<u32> = store.step_links.iter().map(|l| l.number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_ingredients_shared_by_name() {
        let record = record();
        let triples: Vec<_> = record
            .ingredients
            .iter()
            .map(|line| normalize_ingredient(line))
            .collect();

        let mut store = MemoryStore::new();
        save_recipe(&mut store, &record, &triples).await.unwrap();
        let second = save_recipe(&mut store, &record, &triples).await.unwrap();

        assert_eq!(second.recipe_id, 2);
        assert_eq!(store.ingredients.len(), 2);
        assert_eq!(store.recipe_ingredients.len(), 4);
        assert_eq!(
            store.recipe_ingredients[2].ingredient_id,
            store.recipe_ingredients[0].ingredient_id
        );
    }

    #[tokio::test]
    async fn test_only_first_ten_ingredients() {
        let mut record = record();
        record.ingredients = (0..15).map(|i| format!("Ингредиент {i}, {i} гр")).collect();
        let triples: Vec<_> = record
            .ingredients
            .iter()
            .map(|line| normalize_ingredient(line))
            .collect();

        let mut store = MemoryStore::new();
        let report = save_recipe(&mut store, &record, &triples).await.unwrap();
        assert_eq!(report.ingredients_saved, 10);
    }
}
