use chrono::{DateTime, Utc};
use diesel::prelude::*;
use recipebox_core::Recipe;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecipeRow {
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub published_at: DateTime<Utc>,
    #[allow(dead_code)]
    pub created_at: DateTime<Utc>,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Recipe {
            id: row.id,
            name: row.name,
            tags: row.tags,
            ingredients: row.ingredients,
            instructions: row.instructions,
            published_at: row.published_at,
        }
    }
}

// created_at is filled in by the column default
#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipeRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub tags: &'a [String],
    pub ingredients: &'a [String],
    pub instructions: &'a [String],
    pub published_at: DateTime<Utc>,
}
