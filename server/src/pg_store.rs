//! PostgreSQL-backed recipe store.

use crate::db::DbPool;
use crate::models::{NewRecipeRow, RecipeRow};
use crate::schema::recipes;
use async_trait::async_trait;
use chrono::{DateTime, Duration, SubsecRound, Utc};
use diesel::prelude::*;
use recipebox_core::{new_recipe_id, Recipe, RecipeInput, RecipeStore, StoreError};
use std::fmt;

/// Stores recipes as rows of the `recipes` table.
///
/// Diesel is synchronous, so every operation checks out a pooled connection
/// on the blocking thread pool. Each operation is a single statement; the
/// database's row-level atomicity is the only consistency guarantee.
#[derive(Clone)]
pub struct PgRecipeStore {
    pool: DbPool,
}

impl fmt::Debug for PgRecipeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgRecipeStore")
            .field("connections", &self.pool.state().connections)
            .finish()
    }
}

impl PgRecipeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn run<T, F>(&self, op: &'static str, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> Result<T, StoreError> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(|e| storage_error(op, e))?;
            f(&mut conn)
        })
        .await
        .map_err(|e| storage_error(op, e))?
    }
}

/// Current time at the microsecond precision of `TIMESTAMPTZ`, rounded up so
/// the stored value is never earlier than the clock reading.
fn db_now() -> DateTime<Utc> {
    let now = Utc::now();
    let truncated = now.trunc_subsecs(6);
    if truncated < now {
        truncated + Duration::microseconds(1)
    } else {
        truncated
    }
}

fn storage_error(op: &str, e: impl fmt::Display) -> StoreError {
    tracing::error!(op, error = %e, "Recipe storage operation failed");
    StoreError::Storage(format!("{} failed", op))
}

#[async_trait]
impl RecipeStore for PgRecipeStore {
    async fn create(&self, input: RecipeInput) -> Result<Recipe, StoreError> {
        self.run("create", move |conn| {
            let id = new_recipe_id();
            let new_row = NewRecipeRow {
                id: &id,
                name: &input.name,
                tags: &input.tags,
                ingredients: &input.ingredients,
                instructions: &input.instructions,
                published_at: db_now(),
            };

            let row = diesel::insert_into(recipes::table)
                .values(&new_row)
                .returning(RecipeRow::as_returning())
                .get_result(conn)
                .map_err(|e| storage_error("create", e))?;

            tracing::debug!(id = %row.id, "Created recipe");
            Ok(row.into())
        })
        .await
    }

    async fn list(&self) -> Result<Vec<Recipe>, StoreError> {
        self.run("list", |conn| {
            let rows: Vec<RecipeRow> = recipes::table
                .select(RecipeRow::as_select())
                .order((recipes::created_at.asc(), recipes::id.asc()))
                .load(conn)
                .map_err(|e| storage_error("list", e))?;

            Ok(rows.into_iter().map(Recipe::from).collect())
        })
        .await
    }

    async fn update(&self, id: &str, input: RecipeInput) -> Result<Recipe, StoreError> {
        let id = id.to_string();
        self.run("update", move |conn| {
            let row = diesel::update(recipes::table.find(id.as_str()))
                .set((
                    recipes::name.eq(input.name.as_str()),
                    recipes::tags.eq(input.tags.as_slice()),
                    recipes::ingredients.eq(input.ingredients.as_slice()),
                    recipes::instructions.eq(input.instructions.as_slice()),
                    recipes::published_at.eq(db_now()),
                ))
                .returning(RecipeRow::as_returning())
                .get_result(conn)
                .optional()
                .map_err(|e| storage_error("update", e))?
                .ok_or(StoreError::NotFound)?;

            tracing::debug!(id = %row.id, "Updated recipe");
            Ok(row.into())
        })
        .await
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let id = id.to_string();
        self.run("delete", move |conn| {
            let deleted = diesel::delete(recipes::table.find(id.as_str()))
                .execute(conn)
                .map_err(|e| storage_error("delete", e))?;

            match deleted {
                0 => Err(StoreError::NotFound),
                _ => {
                    tracing::debug!(id = %id, "Deleted recipe");
                    Ok(())
                }
            }
        })
        .await
    }

    async fn find_by_tag(&self, tag: &str) -> Result<Vec<Recipe>, StoreError> {
        let tag = tag.to_string();
        self.run("find_by_tag", move |conn| {
            // tags @> ARRAY[tag]: exact, case-sensitive element match
            let rows: Vec<RecipeRow> = recipes::table
                .filter(recipes::tags.contains(vec![tag]))
                .select(RecipeRow::as_select())
                .order((recipes::created_at.asc(), recipes::id.asc()))
                .load(conn)
                .map_err(|e| storage_error("find_by_tag", e))?;

            Ok(rows.into_iter().map(Recipe::from).collect())
        })
        .await
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_db_now_has_microsecond_precision() {
        for _ in 0..100 {
            let before = Utc::now();
            let stamped = db_now();
            assert_eq!(stamped.nanosecond() % 1_000, 0);
            assert!(stamped >= before);
        }
    }
}
