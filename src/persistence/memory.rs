use super::{RecipeStore, DEFAULT_CALORIES_FOR_UNIT};
use crate::error::ImportError;
use crate::model::MeasureUnit;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeRow {
    pub id: i64,
    pub name: String,
    pub duration: u64,
    pub photo: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IngredientRow {
    pub id: i64,
    pub name: String,
    pub calories_for_unit: f64,
    pub unit_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeIngredientRow {
    pub recipe_id: i64,
    pub ingredient_id: i64,
    pub count: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepRow {
    pub id: i64,
    pub name: String,
    pub duration: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepLinkRow {
    pub recipe_id: i64,
    pub step_id: i64,
    pub number: u32,
}

/// In-process store with the same tables, ids starting at 1.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub recipes: Vec<RecipeRow>,
    pub ingredients: Vec<IngredientRow>,
    pub recipe_ingredients: Vec<RecipeIngredientRow>,
    pub steps: Vec<StepRow>,
    pub step_links: Vec<StepLinkRow>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn insert_recipe(
        &mut self,
        name: &str,
        duration: u64,
        photo: &str,
    ) -> Result<i64, ImportError> {
        let id = self.recipes.len() as i64 + 1;
        self.recipes.push(RecipeRow {
            id,
            name: name.to_string(),
            duration,
            photo: photo.to_string(),
        });
        Ok(id)
    }

    async fn find_ingredient(&mut self, name: &str) -> Result<Option<i64>, ImportError> {
        Ok(self
            .ingredients
            .iter()
            .find(|row| row.name == name)
            .map(|row| row.id))
    }

    async fn insert_ingredient(
        &mut self,
        name: &str,
        unit: Option<MeasureUnit>,
    ) -> Result<i64, ImportError> {
        let id = self.ingredients.len() as i64 + 1;
        self.ingredients.push(IngredientRow {
            id,
            name: name.to_string(),
            calories_for_unit: DEFAULT_CALORIES_FOR_UNIT,
            unit_id: unit.map(MeasureUnit::id),
        });
        Ok(id)
    }

    async fn link_ingredient(
        &mut self,
        recipe_id: i64,
        ingredient_id: i64,
        amount: f64,
    ) -> Result<(), ImportError> {
        self.recipe_ingredients.push(RecipeIngredientRow {
            recipe_id,
            ingredient_id,
            count: amount,
        });
        Ok(())
    }

    async fn insert_step(&mut self, text: &str, duration: u64) -> Result<i64, ImportError> {
        let id = self.steps.len() as i64 + 1;
        self.steps.push(StepRow {
            id,
            name: text.to_string(),
            duration,
        });
        Ok(id)
    }

    async fn link_step(
        &mut self,
        recipe_id: i64,
        step_id: i64,
        number: u32,
    ) -> Result<(), ImportError> {
        self.step_links.push(StepLinkRow {
            recipe_id,
            step_id,
            number,
        });
        Ok(())
    }
}
