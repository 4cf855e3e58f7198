//! API Configuration
//!
//! Base URL plus the fixed list caps and debounce windows used by the views.

use std::time::Duration;

/// Public v1 endpoint with the shared test key
pub const DEFAULT_API_BASE: &str = "https://www.themealdb.com/api/json/v1/1/";

/// Settings shared by every view controller
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL, always ending in `/`
    pub base_url: String,
    /// Max meal cards per list view
    pub meal_limit: usize,
    /// Max tiles on the ingredients view
    pub ingredient_limit: usize,
    /// Quiet period before a name search fires
    pub name_debounce: Duration,
    /// Quiet period before a first-letter search fires
    pub letter_debounce: Duration,
    /// Words kept in a meal card's instruction excerpt
    pub meal_excerpt_words: usize,
    /// Words kept in a category tile's description excerpt
    pub category_excerpt_words: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            meal_limit: 20,
            ingredient_limit: 40,
            name_debounce: Duration::from_millis(350),
            letter_debounce: Duration::from_millis(250),
            meal_excerpt_words: 20,
            category_excerpt_words: 18,
        }
    }
}

impl ApiConfig {
    /// Defaults, with the base URL taken from `MEALDB_API_BASE` at build time if set.
    ///
    /// The wasm bundle has no process environment, so this is resolved by the compiler.
    pub fn from_build_env() -> Self {
        match option_env!("MEALDB_API_BASE") {
            Some(base) if !base.trim().is_empty() => Self::default().with_base_url(base),
            _ => Self::default(),
        }
    }

    pub fn with_base_url(mut self, base: &str) -> Self {
        let base = base.trim();
        self.base_url = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{}/", base)
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_BASE);
        assert_eq!(config.meal_limit, 20);
        assert_eq!(config.ingredient_limit, 40);
        assert_eq!(config.name_debounce, Duration::from_millis(350));
        assert_eq!(config.letter_debounce, Duration::from_millis(250));
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = ApiConfig::default().with_base_url("http://localhost:8080/api ");
        assert_eq!(config.base_url, "http://localhost:8080/api/");

        let config = ApiConfig::default().with_base_url("http://localhost/");
        assert_eq!(config.base_url, "http://localhost/");
    }
}
