use crate::error::SeedError;
use crate::types::{new_recipe_id, Recipe};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// One entry of a seed file. Everything except the content is optional so
/// hand-written fixtures don't need ids or timestamps.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedRecipe {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    instructions: Vec<String>,
    #[serde(default)]
    published_at: Option<DateTime<Utc>>,
}

/// Read a JSON array of recipes from `path`.
///
/// Entries without an id (or with an id already used earlier in the file) get
/// a fresh one; entries without `publishedAt` are stamped with the load time.
pub async fn load_seed_file(path: &Path) -> Result<Vec<Recipe>, SeedError> {
    let content = tokio::fs::read_to_string(path).await?;
    parse_seed(&content)
}

fn parse_seed(content: &str) -> Result<Vec<Recipe>, SeedError> {
    let entries: Vec<SeedRecipe> = serde_json::from_str(content)?;
    let loaded_at = Utc::now();
    let mut seen = HashSet::new();

    let recipes = entries
        .into_iter()
        .map(|entry| {
            let id = match entry.id {
                Some(id) if !id.is_empty() && !seen.contains(&id) => id,
                _ => new_recipe_id(),
            };
            seen.insert(id.clone());

            Recipe {
                id,
                name: entry.name,
                tags: entry.tags,
                ingredients: entry.ingredients,
                instructions: entry.instructions,
                published_at: entry.published_at.unwrap_or(loaded_at),
            }
        })
        .collect();

    Ok(recipes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_entries() {
        let recipes = parse_seed(
            r#"[
                {
                    "id": "c0283p3d0cvuglq85lpg",
                    "name": "Homemade Pizza",
                    "tags": ["italian", "pizza", "dinner"],
                    "ingredients": ["1 1/2 cups warm water", "1 package yeast"],
                    "instructions": ["Step 1.", "Step 2."],
                    "publishedAt": "2021-01-17T19:28:52.803062+01:00"
                }
            ]"#,
        )
        .unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, "c0283p3d0cvuglq85lpg");
        assert_eq!(recipes[0].tags, vec!["italian", "pizza", "dinner"]);
        assert_eq!(
            recipes[0].published_at.to_rfc3339(),
            "2021-01-17T18:28:52.803062+00:00"
        );
    }

    #[test]
    fn test_missing_ids_are_assigned() {
        let recipes = parse_seed(
            r#"[{"name": "a"}, {"id": "", "name": "b"}, {"id": "x", "name": "c"}, {"id": "x", "name": "d"}]"#,
        )
        .unwrap();

        let ids: HashSet<&str> = recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), 4);
        assert!(recipes.iter().all(|r| !r.id.is_empty()));
        assert_eq!(recipes[2].id, "x");
        assert_ne!(recipes[3].id, "x");
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(parse_seed("not json").is_err());
        assert!(parse_seed(r#"{"name": "object, not array"}"#).is_err());
        assert!(parse_seed(r#"[{"tags": "scalar"}]"#).is_err());
    }

    #[tokio::test]
    async fn test_load_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recipes.json");
        fs::write(&path, r#"[{"name": "Pasta", "tags": ["italian", "pasta"]}]"#).unwrap();

        let recipes = load_seed_file(&path).await.unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Pasta");
    }

    #[tokio::test]
    async fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = load_seed_file(&dir.path().join("missing.json")).await;
        assert!(matches!(result, Err(SeedError::Io(_))));
    }
}
