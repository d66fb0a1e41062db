//! Web-search capability handed to the research agent.

use rig::completion::ToolDefinition;
use rig::tool::Tool;
use serde::Deserialize;
use serde_json::json;

use crate::prelude::f;

const BRAVE_ENDPOINT: &str = "https://api.search.brave.com/res/v1/web/search";

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("query must be a non-empty string")]
    EmptyQuery,
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// A web-search capability.
///
/// Implementations return a plain-text digest of ranked results for a
/// query; the shape of the underlying API stays behind this seam.
pub trait SearchProvider: Send + Sync {
    /// Short identifier exposed to the model as the tool name.
    fn name(&self) -> &str;

    /// One-line description of what the capability does.
    fn description(&self) -> &str;

    /// Execute a search and flatten the results to text.
    fn invoke(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<String, SearchError>> + Send;
}

/// Settings for the Brave provider, resolved once at CLI parse time.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub api_key: String,
    /// Number of results to request per query.
    pub count: u8,
}

/// [`SearchProvider`] backed by the Brave Search REST API.
pub struct BraveSearch {
    config: SearchConfig,
    client: reqwest::Client,
}

impl BraveSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

impl SearchProvider for BraveSearch {
    fn name(&self) -> &str {
        "brave_search"
    }

    fn description(&self) -> &str {
        "Search the web using BraveSearch and return relevant, recent information \
         for a given query."
    }

    async fn invoke(&self, query: &str) -> Result<String, SearchError> {
        if query.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        log::info!("Executing BraveSearch query: {}", query);

        let count = self.config.count.to_string();
        let response = self
            .client
            .get(BRAVE_ENDPOINT)
            .header("X-Subscription-Token", &self.config.api_key)
            .header("Accept", "application/json")
            .query(&[("q", query), ("count", count.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json::<BraveResponse>()
            .await?;

        log::info!("BraveSearch completed for query: {}", query);
        Ok(flatten_results(&response))
    }
}

#[derive(Debug, Default, Deserialize)]
struct BraveResponse {
    web: Option<BraveWeb>,
}

#[derive(Debug, Deserialize)]
struct BraveWeb {
    results: Vec<BraveResult>,
}

#[derive(Debug, Deserialize)]
struct BraveResult {
    title: String,
    url: String,
    #[serde(default)]
    description: String,
}

/// Flatten ranked results into the text digest handed back to the agent.
fn flatten_results(response: &BraveResponse) -> String {
    let results = match &response.web {
        Some(web) if !web.results.is_empty() => &web.results,
        _ => return "No results found.".to_string(),
    };

    results
        .iter()
        .map(|r| f!("{}\n{}\n{}", r.title, r.url, r.description))
        .collect::<Vec<_>>()
        .join("\n\n")
}

// ---------------------------------------------------------------------------
// rig tool adapter
// ---------------------------------------------------------------------------

/// Adapter exposing any [`SearchProvider`] as a rig agent tool.
pub struct WebSearchTool<P> {
    provider: P,
}

impl<P> WebSearchTool<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchArgs {
    pub query: String,
}

impl<P: SearchProvider> Tool for WebSearchTool<P> {
    const NAME: &'static str = "web_search";

    type Error = SearchError;
    type Args = SearchArgs;
    type Output = String;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: self.provider.description().to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The search query to run"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        self.provider.invoke(&args.query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_response(results: Vec<BraveResult>) -> BraveResponse {
        BraveResponse {
            web: Some(BraveWeb { results }),
        }
    }

    #[test]
    fn test_flatten_empty_response() {
        assert_eq!(flatten_results(&BraveResponse::default()), "No results found.");
        assert_eq!(flatten_results(&fixture_response(vec![])), "No results found.");
    }

    #[test]
    fn test_flatten_joins_ranked_results() {
        let response = fixture_response(vec![
            BraveResult {
                title: "First".to_string(),
                url: "https://one.example".to_string(),
                description: "alpha".to_string(),
            },
            BraveResult {
                title: "Second".to_string(),
                url: "https://two.example".to_string(),
                description: "beta".to_string(),
            },
        ]);
        let text = flatten_results(&response);
        assert_eq!(
            text,
            "First\nhttps://one.example\nalpha\n\nSecond\nhttps://two.example\nbeta"
        );
    }

    #[tokio::test]
    async fn test_empty_query_rejected_before_any_request() {
        let provider = BraveSearch::new(SearchConfig {
            api_key: "unused".to_string(),
            count: 3,
        });
        let result = provider.invoke("   ").await;
        assert!(matches!(result, Err(SearchError::EmptyQuery)));
    }

    #[test]
    fn test_search_args_deserialize() {
        let args: SearchArgs = serde_json::from_str(r#"{"query": "rust pdf"}"#).unwrap();
        assert_eq!(args.query, "rust pdf");
    }
}
