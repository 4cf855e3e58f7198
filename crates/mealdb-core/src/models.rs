//! API Models
//!
//! Records as returned by the recipe API. Nothing here is persisted; each
//! record lives for one view activation.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Number of ingredient/measure slots on a full meal record
pub const INGREDIENT_SLOTS: usize = 20;

/// One filled ingredient slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealIngredient {
    pub name: String,
    pub measure: String,
}

/// Meal record (full lookup result or filter summary)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawMeal")]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub thumbnail: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: Option<String>,
    /// Raw comma-separated tag string
    pub tags: Option<String>,
    pub youtube: Option<String>,
    pub source: Option<String>,
    /// Filled slots in slot order
    pub ingredients: Vec<MealIngredient>,
}

impl Meal {
    /// Individual tags, trimmed, blanks dropped
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Wire shape of a meal: named columns plus numbered ingredient/measure columns
#[derive(Deserialize)]
struct RawMeal {
    #[serde(rename = "idMeal", default)]
    id: String,
    #[serde(rename = "strMeal", default)]
    name: String,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strTags", default)]
    tags: Option<String>,
    #[serde(rename = "strYoutube", default)]
    youtube: Option<String>,
    #[serde(rename = "strSource", default)]
    source: Option<String>,
    #[serde(flatten)]
    rest: HashMap<String, Value>,
}

impl From<RawMeal> for Meal {
    fn from(raw: RawMeal) -> Self {
        let slot = |prefix: &str, n: usize| -> Option<String> {
            raw.rest
                .get(&format!("{}{}", prefix, n))
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        let ingredients = (1..=INGREDIENT_SLOTS)
            .filter_map(|n| {
                let name = slot("strIngredient", n)?;
                if name.trim().is_empty() {
                    return None;
                }
                Some(MealIngredient {
                    name,
                    measure: slot("strMeasure", n).unwrap_or_default(),
                })
            })
            .collect();

        Meal {
            id: raw.id,
            name: raw.name,
            thumbnail: non_blank(raw.thumbnail),
            category: non_blank(raw.category),
            area: non_blank(raw.area),
            instructions: raw.instructions,
            tags: non_blank(raw.tags),
            youtube: non_blank(raw.youtube),
            source: non_blank(raw.source),
            ingredients,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Category tile record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    #[serde(rename = "idCategory", default)]
    pub id: String,
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(rename = "strCategoryThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategoryDescription", default)]
    pub description: Option<String>,
}

/// Area (cuisine) record from the area enumeration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Area {
    #[serde(rename = "strArea")]
    pub name: String,
}

/// Ingredient record from the ingredient enumeration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IngredientEntry {
    #[serde(rename = "idIngredient", default)]
    pub id: String,
    #[serde(rename = "strIngredient")]
    pub name: String,
    #[serde(rename = "strDescription", default)]
    pub description: Option<String>,
}

/// `{"meals": [...] | null}`
#[derive(Debug, Deserialize)]
pub struct MealsEnvelope<T> {
    pub meals: Option<Vec<T>>,
}

impl<T> MealsEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

/// `{"categories": [...] | null}`
#[derive(Debug, Deserialize)]
pub struct CategoriesEnvelope {
    pub categories: Option<Vec<Category>>,
}

impl CategoriesEnvelope {
    pub fn into_vec(self) -> Vec<Category> {
        self.categories.unwrap_or_default()
    }
}
