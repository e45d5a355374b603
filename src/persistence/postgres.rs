//! PostgreSQL backend for the recipe database tables
//! (`_recipe`, `_ingredient`, `_recipeingredient`, `_recipestep`, `_recipesteplink`).
//!
//! Every row is its own statement, so a rejected ingredient or step does not
//! undo the rows already written for the recipe.

use super::{RecipeStore, DEFAULT_CALORIES_FOR_UNIT};
use crate::config::ImportConfig;
use crate::error::ImportError;
use crate::model::MeasureUnit;
use async_trait::async_trait;
use log::{debug, info};
use sqlx::postgres::{PgPool, PgPoolOptions};

/// Rows are written one at a time
const MAX_CONNECTIONS: u32 = 2;

/// Recipe store writing to an existing PostgreSQL schema.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Connect to `database_url`, e.g. `postgres://food@localhost:5433/food`.
    pub async fn connect(database_url: &str) -> Result<Self, ImportError> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await
            .map_err(store_error)?;

        info!("Connected to recipe database");
        Ok(Self::from_pool(pool))
    }

    /// Connect using `database_url` from the configuration.
    pub async fn from_config(config: &ImportConfig) -> Result<Self, ImportError> {
        let database_url = config
            .database_url
            .as_deref()
            .ok_or_else(|| config::ConfigError::NotFound("database_url".to_string()))?;
        Self::connect(database_url).await
    }

    /// Reuse a pool the caller already owns.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn store_error(e: sqlx::Error) -> ImportError {
    ImportError::StoreError(e.to_string())
}

fn seconds(value: u64) -> Result<i64, ImportError> {
    i64::try_from(value)
        .map_err(|_| ImportError::StoreError(format!("Duration {value} does not fit a column")))
}

#[async_trait]
impl RecipeStore for PostgresStore {
    async fn insert_recipe(
        &mut self,
        name: &str,
        duration: u64,
        photo: &str,
    ) -> Result<i64, ImportError> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO _recipe (name, duration, photo) VALUES ($1, $2, $3) RETURNING id::bigint",
        )
        .bind(name)
        .bind(seconds(duration)?)
        .bind(photo)
        .fetch_one(&self.pool)
        .await
        .map_err(store_error)
    }

    async fn find_ingredient(&mut self, name: &str) -> Result<Option<i64>, ImportError> {
        sqlx::query_scalar::<_, i64>("SELECT id::bigint FROM _ingredient WHERE name = $1 LIMIT 1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)
    }

    async fn insert_ingredient(
        &mut self,
        name: &str,
        unit: Option<MeasureUnit>,
    ) -> Result<i64, ImportError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO _ingredient (name, calories_for_unit, measureunit_id)
            VALUES ($1, $2, $3)
            RETURNING id::bigint
            "#,
        )
        .bind(name)
        .bind(DEFAULT_CALORIES_FOR_UNIT)
        .bind(unit.map(MeasureUnit::id))
        .fetch_one(&self.pool)
        .await
        .map_err(store_error)?;

        debug!("Created ingredient '{}' ({})", name, id);
        Ok(id)
    }

    async fn link_ingredient(
        &mut self,
        recipe_id: i64,
        ingredient_id: i64,
        amount: f64,
    ) -> Result<(), ImportError> {
        sqlx::query(
            "INSERT INTO _recipeingredient (recipe_id, ingredient_id, count) VALUES ($1, $2, $3)",
        )
        .bind(recipe_id)
        .bind(ingredient_id)
        .bind(amount)
        .execute(&self.pool)
        .await
        .map_err(store_error)?;
        Ok(())
    }

    async fn insert_step(&mut self, text: &str, duration: u64) -> Result<i64, ImportError> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO _recipestep (name, duration) VALUES ($1, $2) RETURNING id::bigint",
        )
        .bind(text)
        .bind(seconds(duration)?)
        .fetch_one(&self.pool)
        .await
        .map_err(store_error)
    }

    async fn link_step(
        &mut self,
        recipe_id: i64,
        step_id: i64,
        number: u32,
    ) -> Result<(), ImportError> {
        sqlx::query("INSERT INTO _recipesteplink (recipe_id, step_id, number) VALUES ($1, $2, $3)")
            .bind(recipe_id)
            .bind(step_id)
            .bind(i64::from(number))
            .execute(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(())
    }
}
