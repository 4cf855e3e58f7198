//! View Actions
//!
//! Every navigable view and every clickable tile maps to one `Action`.
//! Rendered markup carries the action as `data-action` / `data-arg`
//! attributes; the UI reads them back with `Action::from_attrs` and hands the
//! result to `Controller::dispatch`.

/// Attribute holding the action key
pub const ACTION_ATTR: &str = "data-action";
/// Attribute holding the action argument
pub const ARG_ATTR: &str = "data-arg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Home,
    Search,
    Categories,
    Areas,
    Ingredients,
    Contact,
    /// Meals in a category
    Category(String),
    /// Meals from an area
    Area(String),
    /// Meals using an ingredient
    Ingredient(String),
    /// Meal details by id
    Meal(String),
}

impl Action {
    /// Side navigation entries, in display order
    pub const NAV: [(Action, &'static str); 6] = [
        (Action::Home, "Home"),
        (Action::Search, "Search"),
        (Action::Categories, "Categories"),
        (Action::Areas, "Area"),
        (Action::Ingredients, "Ingredients"),
        (Action::Contact, "Contact Us"),
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Action::Home => "home",
            Action::Search => "search",
            Action::Categories => "categories",
            Action::Areas => "areas",
            Action::Ingredients => "ingredients",
            Action::Contact => "contact",
            Action::Category(_) => "category",
            Action::Area(_) => "area",
            Action::Ingredient(_) => "ingredient",
            Action::Meal(_) => "meal",
        }
    }

    pub fn arg(&self) -> Option<&str> {
        match self {
            Action::Category(v) | Action::Area(v) | Action::Ingredient(v) | Action::Meal(v) => {
                Some(v)
            }
            _ => None,
        }
    }

    /// Parse the attribute pair back into an action
    ///
    /// Tile actions need an argument; a missing one yields `None`, except for
    /// `meal`, whose details view reports "not found" itself.
    pub fn from_attrs(key: &str, arg: Option<&str>) -> Option<Self> {
        let arg = arg.map(str::to_string);
        match key {
            "home" => Some(Action::Home),
            "search" => Some(Action::Search),
            "categories" => Some(Action::Categories),
            "areas" => Some(Action::Areas),
            "ingredients" => Some(Action::Ingredients),
            "contact" => Some(Action::Contact),
            "category" => arg.map(Action::Category),
            "area" => arg.map(Action::Area),
            "ingredient" => arg.map(Action::Ingredient),
            "meal" => Some(Action::Meal(arg.unwrap_or_default())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attrs_round_trip_for_tiles() {
        let actions = [
            Action::Category("Seafood".into()),
            Action::Area("Italian".into()),
            Action::Ingredient("Chicken Breast".into()),
            Action::Meal("52771".into()),
        ];
        for action in actions {
            assert_eq!(Action::from_attrs(action.key(), action.arg()), Some(action.clone()));
        }
    }

    #[test]
    fn test_unknown_or_incomplete_attrs() {
        assert_eq!(Action::from_attrs("reload", None), None);
        assert_eq!(Action::from_attrs("category", None), None);
        assert_eq!(Action::from_attrs("meal", None), Some(Action::Meal(String::new())));
        assert_eq!(Action::from_attrs("home", Some("ignored")), Some(Action::Home));
    }
}
