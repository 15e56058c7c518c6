use std::time::Duration;

use reqwest::{Client, RequestBuilder};

/// Shared HTTP client for a PostgREST-compatible data API.
pub struct PostgrestClient {
    pub client: Client,
    pub base_url: String,
    pub api_key: String,
}

impl PostgrestClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Returns the endpoint of a table, e.g. `{base}/rest/v1/pantry`.
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Attaches the api key headers every request needs.
    pub fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header("Authorization", self.auth_header())
    }
}
