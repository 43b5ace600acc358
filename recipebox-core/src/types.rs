use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A stored recipe, as returned by every store backend and the HTTP API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[schema(example = "3f0c0a2e9b7d4d61a1c1f6a4b2e8d9c0")]
    pub id: String,
    #[schema(example = "Chocolate Cake")]
    pub name: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub published_at: DateTime<Utc>,
}

impl Recipe {
    /// Build a freshly stamped record from client-supplied content.
    pub fn from_input(input: RecipeInput, published_at: DateTime<Utc>) -> Self {
        Self {
            id: new_recipe_id(),
            name: input.name,
            tags: input.tags,
            ingredients: input.ingredients,
            instructions: input.instructions,
            published_at,
        }
    }

    /// Replace all content fields, keeping the id.
    pub fn apply(&mut self, input: RecipeInput, published_at: DateTime<Utc>) {
        self.name = input.name;
        self.tags = input.tags;
        self.ingredients = input.ingredients;
        self.instructions = input.instructions;
        self.published_at = published_at;
    }

    /// Exact, case-sensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Client-editable recipe content (request body for create and update).
///
/// Unknown fields such as `id` or `publishedAt` are ignored; missing or
/// `null` fields default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeInput {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(example = "Chocolate Cake")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(example = json!(["dessert", "sweet"]))]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub instructions: Vec<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Generate a new unique recipe id (32 lowercase hex chars).
pub fn new_recipe_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Recipe {
        Recipe {
            id: "test123".to_string(),
            name: "Test Recipe".to_string(),
            tags: vec!["italian".to_string(), "dinner".to_string()],
            ingredients: vec!["ingredient1".to_string(), "ingredient2".to_string()],
            instructions: vec!["step1".to_string(), "step2".to_string()],
            published_at: Utc.with_ymd_and_hms(2021, 1, 17, 19, 28, 52).unwrap(),
        }
    }

    #[test]
    fn test_has_tag() {
        let recipe = sample();
        assert!(recipe.has_tag("italian"));
        assert!(recipe.has_tag("dinner"));
        assert!(!recipe.has_tag("dessert"));
        assert!(!recipe.has_tag(""));
    }

    #[test]
    fn test_has_tag_is_case_sensitive() {
        let mut recipe = sample();
        recipe.tags = vec!["Italian".to_string(), "Pizza".to_string()];
        assert!(!recipe.has_tag("italian"));
        assert!(!recipe.has_tag("Ital"));
    }

    #[test]
    fn test_json_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        let obj = value.as_object().unwrap();
        for key in ["id", "name", "tags", "ingredients", "instructions", "publishedAt"] {
            assert!(obj.contains_key(key), "missing {}", key);
        }
        assert_eq!(obj["publishedAt"], "2021-01-17T19:28:52Z");
    }

    #[test]
    fn test_json_round_trip() {
        let recipe = sample();
        let json = serde_json::to_string(&recipe).unwrap();
        let parsed: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, recipe);
    }

    #[test]
    fn test_input_ignores_server_fields() {
        let input: RecipeInput = serde_json::from_str(
            r#"{"id": "abc", "publishedAt": "2020-01-01T00:00:00Z", "name": "Soup", "extra": 1}"#,
        )
        .unwrap();
        assert_eq!(input.name, "Soup");
        assert!(input.tags.is_empty());
        assert!(input.ingredients.is_empty());
        assert!(input.instructions.is_empty());
    }

    #[test]
    fn test_input_null_fields_are_empty() {
        let input: RecipeInput = serde_json::from_str(
            r#"{"name": null, "tags": null, "ingredients": ["salt"], "instructions": null}"#,
        )
        .unwrap();
        assert_eq!(input.name, "");
        assert!(input.tags.is_empty());
        assert_eq!(input.ingredients, vec!["salt".to_string()]);
        assert!(input.instructions.is_empty());
    }

    #[test]
    fn test_input_rejects_scalar_tags() {
        let result = serde_json::from_str::<RecipeInput>(r#"{"name": "Soup", "tags": "hot"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut recipe = sample();
        let now = Utc::now();
        recipe.apply(
            RecipeInput {
                name: "Updated".to_string(),
                tags: vec!["new".to_string()],
                ..Default::default()
            },
            now,
        );
        assert_eq!(recipe.id, "test123");
        assert_eq!(recipe.name, "Updated");
        assert_eq!(recipe.tags, vec!["new".to_string()]);
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.published_at, now);
    }

    #[test]
    fn test_new_recipe_id_unique() {
        let a = new_recipe_id();
        let b = new_recipe_id();
        assert_eq!(a.len(), 32);
        assert_ne!(a, b);
    }
}
