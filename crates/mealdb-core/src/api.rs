//! Recipe API Access
//!
//! Endpoint catalogue, the transport seam, and the fetch wrapper that turns
//! every failure into "no data".

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use crate::models::{Area, CategoriesEnvelope, Category, IngredientEntry, Meal, MealsEnvelope};

/// Characters left alone by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a query value
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Transport-level failures
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Request never produced a response
    Network(String),
    /// Response arrived with a non-2xx status
    Status(u16),
    /// Body was not the expected JSON
    Parse(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
            FetchError::Status(code) => write!(f, "HTTP status {}", code),
            FetchError::Parse(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Issues GET requests and hands back the raw body
///
/// Browser futures are not `Send`, so neither is this trait.
#[async_trait(?Send)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// The API calls the views make
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `search.php?s=` (empty name lists the whole catalogue)
    SearchByName(String),
    SearchByFirstLetter(String),
    ListCategories,
    ListAreas,
    ListIngredients,
    FilterByCategory(String),
    FilterByArea(String),
    FilterByIngredient(String),
    Lookup(String),
}

impl Endpoint {
    /// Path and query relative to the API base
    pub fn path(&self) -> String {
        match self {
            Endpoint::SearchByName(name) => format!("search.php?s={}", encode_component(name)),
            Endpoint::SearchByFirstLetter(letter) => {
                format!("search.php?f={}", encode_component(letter))
            }
            Endpoint::ListCategories => "categories.php".to_string(),
            Endpoint::ListAreas => "list.php?a=list".to_string(),
            Endpoint::ListIngredients => "list.php?i=list".to_string(),
            Endpoint::FilterByCategory(c) => format!("filter.php?c={}", encode_component(c)),
            Endpoint::FilterByArea(a) => format!("filter.php?a={}", encode_component(a)),
            Endpoint::FilterByIngredient(i) => format!("filter.php?i={}", encode_component(i)),
            Endpoint::Lookup(id) => format!("lookup.php?i={}", encode_component(id)),
        }
    }

    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base, self.path())
    }
}

/// Fetch wrapper over a transport
///
/// Every method returns `None` on any failure after logging it; callers
/// treat that exactly like an empty result.
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// GET and decode one endpoint, or `None`
    pub async fn fetch<R: DeserializeOwned>(&self, endpoint: &Endpoint) -> Option<R> {
        let url = endpoint.url(&self.base_url);
        match self.fetch_url(&url).await {
            Ok(value) => Some(value),
            Err(e) => {
                log::error!("Fetch error {}: {}", url, e);
                None
            }
        }
    }

    async fn fetch_url<R: DeserializeOwned>(&self, url: &str) -> Result<R, FetchError> {
        let body = self.transport.get(url).await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }

    /// Meal list endpoints (search, filter, lookup)
    pub async fn meals(&self, endpoint: &Endpoint) -> Option<Vec<Meal>> {
        self.fetch::<MealsEnvelope<Meal>>(endpoint)
            .await
            .map(MealsEnvelope::into_vec)
    }

    pub async fn categories(&self) -> Option<Vec<Category>> {
        self.fetch::<CategoriesEnvelope>(&Endpoint::ListCategories)
            .await
            .map(CategoriesEnvelope::into_vec)
    }

    pub async fn areas(&self) -> Option<Vec<Area>> {
        self.fetch::<MealsEnvelope<Area>>(&Endpoint::ListAreas)
            .await
            .map(MealsEnvelope::into_vec)
    }

    pub async fn ingredients(&self) -> Option<Vec<IngredientEntry>> {
        self.fetch::<MealsEnvelope<IngredientEntry>>(&Endpoint::ListIngredients)
            .await
            .map(MealsEnvelope::into_vec)
    }

    /// First record of a lookup, if any
    pub async fn meal(&self, id: &str) -> Option<Meal> {
        self.meals(&Endpoint::Lookup(id.to_string()))
            .await
            .and_then(|meals| meals.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedTransport;

    const BASE: &str = "https://www.themealdb.com/api/json/v1/1/";

    #[test]
    fn test_endpoint_urls() {
        assert_eq!(
            Endpoint::SearchByName(String::new()).url(BASE),
            "https://www.themealdb.com/api/json/v1/1/search.php?s="
        );
        assert_eq!(Endpoint::ListAreas.path(), "list.php?a=list");
        assert_eq!(Endpoint::ListIngredients.path(), "list.php?i=list");
        assert_eq!(Endpoint::ListCategories.path(), "categories.php");
        assert_eq!(Endpoint::Lookup("52771".into()).path(), "lookup.php?i=52771");
        assert_eq!(
            Endpoint::FilterByIngredient("chicken breast".into()).path(),
            "filter.php?i=chicken%20breast"
        );
    }

    #[test]
    fn test_encode_component_matches_uri_component_rules() {
        assert_eq!(encode_component("Fish & Chips"), "Fish%20%26%20Chips");
        assert_eq!(encode_component("it's (ok)!*~-_."), "it's%20(ok)!*~-_.");
        assert_eq!(encode_component("crème"), "cr%C3%A8me");
        assert_eq!(encode_component("a/b?c=d"), "a%2Fb%3Fc%3Dd");
    }

    #[tokio::test]
    async fn test_failures_become_none() {
        let transport = ScriptedTransport::new()
            .with_error("categories.php", FetchError::Network("offline".into()))
            .with_error("list.php?a=list", FetchError::Status(500))
            .with_body("list.php?i=list", "<html>not json</html>");
        let client = ApiClient::new(transport, BASE);

        assert!(client.categories().await.is_none());
        assert!(client.areas().await.is_none());
        assert!(client.ingredients().await.is_none());
    }

    #[tokio::test]
    async fn test_null_meals_is_empty_not_failure() {
        let transport = ScriptedTransport::new().with_body("search.php?s=zzz", r#"{"meals":null}"#);
        let client = ApiClient::new(transport, BASE);

        let meals = client.meals(&Endpoint::SearchByName("zzz".into())).await;
        assert_eq!(meals, Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_lookup_takes_first_record() {
        let transport = ScriptedTransport::new().with_body(
            "lookup.php?i=7",
            r#"{"meals":[{"idMeal":"7","strMeal":"Soup"},{"idMeal":"8","strMeal":"Stew"}]}"#,
        );
        let client = ApiClient::new(transport, BASE);

        let meal = client.meal("7").await.unwrap();
        assert_eq!(meal.name, "Soup");
        assert!(client.meal("missing").await.is_none());
    }
}
