//! In-process recipe store.
//!
//! Backs both the plain in-memory backend and the seed-file backend; the
//! latter only differs in its initial contents.

use super::seed::load_seed_file;
use super::RecipeStore;
use crate::error::StoreError;
use crate::types::{Recipe, RecipeInput};
use async_trait::async_trait;
use chrono::Utc;
use std::path::Path;
use tokio::sync::RwLock;

/// Recipe collection held in a vector behind an async RwLock.
///
/// Writers are serialized by the write lock; readers clone a snapshot under
/// the read lock, so a listing never observes a half-applied mutation.
#[derive(Debug)]
pub struct MemoryStore {
    recipes: RwLock<Vec<Recipe>>,
    backend: &'static str,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_recipes(Vec::new())
    }

    /// Create a store pre-populated with `recipes`, kept in the given order.
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: RwLock::new(recipes),
            backend: "memory",
        }
    }

    /// Create a store seeded from a JSON array file.
    ///
    /// A missing or malformed file is not an error: the store starts empty
    /// and a warning is logged.
    pub async fn from_seed_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let recipes = match load_seed_file(path).await {
            Ok(recipes) => {
                tracing::info!(
                    count = recipes.len(),
                    path = %path.display(),
                    "Loaded seed recipes"
                );
                recipes
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Could not load seed file, starting with an empty collection"
                );
                Vec::new()
            }
        };

        Self {
            recipes: RwLock::new(recipes),
            backend: "file",
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn create(&self, input: RecipeInput) -> Result<Recipe, StoreError> {
        let recipe = Recipe::from_input(input, Utc::now());
        self.recipes.write().await.push(recipe.clone());
        tracing::debug!(id = %recipe.id, "Created recipe");
        Ok(recipe)
    }

    async fn list(&self) -> Result<Vec<Recipe>, StoreError> {
        Ok(self.recipes.read().await.clone())
    }

    async fn update(&self, id: &str, input: RecipeInput) -> Result<Recipe, StoreError> {
        let mut recipes = self.recipes.write().await;
        let recipe = recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound)?;

        // Never move the timestamp backwards if the wall clock did.
        let published_at = Utc::now().max(recipe.published_at);
        recipe.apply(input, published_at);
        tracing::debug!(id = %recipe.id, "Updated recipe");
        Ok(recipe.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut recipes = self.recipes.write().await;
        let index = recipes
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound)?;

        // Vec::remove shifts the tail down, preserving relative order.
        recipes.remove(index);
        tracing::debug!(id = %id, "Deleted recipe");
        Ok(())
    }

    async fn find_by_tag(&self, tag: &str) -> Result<Vec<Recipe>, StoreError> {
        Ok(self
            .recipes
            .read()
            .await
            .iter()
            .filter(|r| r.has_tag(tag))
            .cloned()
            .collect())
    }

    fn backend_name(&self) -> &'static str {
        self.backend
    }
}
