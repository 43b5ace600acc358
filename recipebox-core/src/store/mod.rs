//! Storage abstraction for the recipe collection.
//!
//! Every backend (in-memory, seed-file, database) implements [`RecipeStore`];
//! the HTTP layer only ever talks to the trait object.

mod memory;
mod seed;

pub use memory::MemoryStore;
pub use seed::load_seed_file;

use crate::error::StoreError;
use crate::types::{Recipe, RecipeInput};
use async_trait::async_trait;
use std::fmt;

/// Custody of the recipe collection.
///
/// Implementations must be thread-safe: handlers call them concurrently from
/// many tasks. Listing order is insertion order and deletes never reorder the
/// remaining records.
#[async_trait]
pub trait RecipeStore: Send + Sync + fmt::Debug {
    /// Assign an id and timestamp to `input`, persist it and return the record.
    async fn create(&self, input: RecipeInput) -> Result<Recipe, StoreError>;

    /// Every stored record, in store order.
    async fn list(&self) -> Result<Vec<Recipe>, StoreError>;

    /// Replace the content of the record with `id` and refresh its timestamp.
    async fn update(&self, id: &str, input: RecipeInput) -> Result<Recipe, StoreError>;

    /// Remove the record with `id`.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Records whose tags contain `tag` exactly.
    async fn find_by_tag(&self, tag: &str) -> Result<Vec<Recipe>, StoreError>;

    /// Backend label for logs (e.g. "memory", "postgres").
    fn backend_name(&self) -> &'static str;
}
