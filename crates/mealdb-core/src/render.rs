//! Markup Renderers
//!
//! Pure record -> HTML fragment functions. All API-sourced text is escaped
//! before it is embedded.

use crate::action::{Action, ACTION_ATTR, ARG_ATTR};
use crate::html::{escape_html, excerpt};
use crate::models::{Area, Category, IngredientEntry, Meal};

pub const AREA_PLACEHOLDER: &str = "https://www.themealdb.com/images/icons/meal-placeholder.png";
pub const INGREDIENT_PLACEHOLDER: &str =
    "https://www.themealdb.com/images/icons/ingredient-placeholder.png";

pub fn heading(title: &str) -> String {
    format!(r#"<h2 class="mb-3">{}</h2>"#, escape_html(title))
}

/// Empty-state paragraph
pub fn empty_state(message: &str) -> String {
    format!("<p>{}</p>", escape_html(message))
}

fn action_attrs(action: &Action) -> String {
    match action.arg() {
        Some(arg) => format!(
            r#"{}="{}" {}="{}""#,
            ACTION_ATTR,
            action.key(),
            ARG_ATTR,
            escape_html(arg)
        ),
        None => format!(r#"{}="{}""#, ACTION_ATTR, action.key()),
    }
}

/// Clickable image tile with a title and optional summary line
fn tile(action: &Action, image: &str, title: &str, summary: Option<&str>) -> String {
    let summary = summary
        .map(|s| format!("<p>{}</p>", escape_html(s)))
        .unwrap_or_default();
    format!(
        r#"<div class="card-meal" role="button" {attrs}><img src="{src}" alt="{title}"><div class="overlay-info"><h5>{title}</h5>{summary}</div></div>"#,
        attrs = action_attrs(action),
        src = escape_html(image),
        title = escape_html(title),
        summary = summary,
    )
}

/// Meal card; the summary is an instruction excerpt
pub fn meal_card(meal: &Meal, words: usize) -> String {
    let summary = excerpt(meal.instructions.as_deref().unwrap_or(""), words);
    tile(
        &Action::Meal(meal.id.clone()),
        meal.thumbnail.as_deref().unwrap_or(""),
        &meal.name,
        Some(&summary),
    )
}

pub fn category_tile(category: &Category, words: usize) -> String {
    let summary = excerpt(category.description.as_deref().unwrap_or(""), words);
    tile(
        &Action::Category(category.name.clone()),
        category.thumbnail.as_deref().unwrap_or(""),
        &category.name,
        Some(&summary),
    )
}

pub fn area_tile(area: &Area) -> String {
    tile(&Action::Area(area.name.clone()), AREA_PLACEHOLDER, &area.name, None)
}

pub fn ingredient_tile(ingredient: &IngredientEntry) -> String {
    tile(
        &Action::Ingredient(ingredient.name.clone()),
        INGREDIENT_PLACEHOLDER,
        &ingredient.name,
        None,
    )
}

/// Wrap already-rendered tiles in the grid container
pub fn grid<I: IntoIterator<Item = String>>(tiles: I) -> String {
    let body: String = tiles.into_iter().collect();
    format!(r#"<div class="meals-grid">{}</div>"#, body)
}

pub fn meal_grid(meals: &[Meal], words: usize) -> String {
    grid(meals.iter().map(|m| meal_card(m, words)))
}

/// Search results area: a grid, or "No results."
pub fn search_results(meals: &[Meal], words: usize) -> String {
    if meals.is_empty() {
        empty_state("No results.")
    } else {
        meal_grid(meals, words)
    }
}

/// Filtered meal list: "Results" heading and grid, or "No meals found."
pub fn meal_results(meals: &[Meal], words: usize) -> String {
    if meals.is_empty() {
        empty_state("No meals found.")
    } else {
        format!("{}{}", heading("Results"), meal_grid(meals, words))
    }
}

/// Full meal details
pub fn meal_details(meal: &Meal) -> String {
    let ingredients: String = meal
        .ingredients
        .iter()
        .map(|i| format!("<li>{} {}</li>", escape_html(&i.measure), escape_html(&i.name)))
        .collect();

    let tags = meal
        .tag_list()
        .into_iter()
        .map(|t| format!(r#"<span class="tag">{}</span>"#, escape_html(t)))
        .collect::<Vec<_>>()
        .join(" ");

    let mut links = String::new();
    if let Some(url) = &meal.youtube {
        links.push_str(&format!(
            r#"<a class="btn btn-danger" target="_blank" href="{}" rel="noopener noreferrer"><i class="fa-brands fa-youtube"></i> YouTube</a>"#,
            escape_html(url)
        ));
    }
    if let Some(url) = &meal.source {
        links.push_str(&format!(
            r#"<a class="btn btn-success" target="_blank" href="{}" rel="noopener noreferrer"><i class="fa-solid fa-link"></i> Source</a>"#,
            escape_html(url)
        ));
    }

    let name = escape_html(&meal.name);
    format!(
        concat!(
            r#"<div class="details-wrap">"#,
            r#"<div><img class="details-img" src="{thumb}" alt="{name}"></div>"#,
            r#"<div><h2>{name}</h2>"#,
            r#"<p><strong>Category:</strong> {category} &nbsp; <strong>Area:</strong> {area}</p>"#,
            r#"<h4>Instructions</h4><p style="white-space:pre-line">{instructions}</p>"#,
            r#"<h4>Ingredients</h4><ul>{ingredients}</ul>"#,
            r#"<h4>Tags</h4><div>{tags}</div>"#,
            r#"<div style="margin-top:12px">{links}</div>"#,
            r#"</div></div>"#,
        ),
        thumb = escape_html(meal.thumbnail.as_deref().unwrap_or("")),
        name = name,
        category = escape_html(meal.category.as_deref().unwrap_or("")),
        area = escape_html(meal.area.as_deref().unwrap_or("")),
        instructions = escape_html(meal.instructions.as_deref().unwrap_or("")),
        ingredients = ingredients,
        tags = tags,
        links = links,
    )
}
