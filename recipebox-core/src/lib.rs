pub mod error;
pub mod store;
pub mod types;

pub use error::{SeedError, StoreError};
pub use store::{load_seed_file, MemoryStore, RecipeStore};
pub use types::{new_recipe_id, Recipe, RecipeInput};
