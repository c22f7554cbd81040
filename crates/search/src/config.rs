//! Search client configuration.

/// Default search endpoint of the log store.
pub const DEFAULT_SEARCH_ENDPOINT: &str = "http://localhost:5005/api/search";

/// Default raw sample endpoint of the log store.
pub const DEFAULT_SAMPLE_ENDPOINT: &str = "http://localhost:5005/api/sample";

/// Search client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Endpoint queried by searches (default: [`DEFAULT_SEARCH_ENDPOINT`]).
    pub search_endpoint: String,
    /// Endpoint returning raw sample lines (default: [`DEFAULT_SAMPLE_ENDPOINT`]).
    pub sample_endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            sample_endpoint: DEFAULT_SAMPLE_ENDPOINT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Creates a new builder for configuring a search client.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`].
#[derive(Clone, Debug, Default)]
pub struct ClientConfigBuilder {
    search_endpoint: Option<String>,
    sample_endpoint: Option<String>,
}

impl ClientConfigBuilder {
    /// Sets the search endpoint.
    pub fn search_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.search_endpoint = Some(endpoint.into());
        self
    }

    /// Sets the sample endpoint.
    pub fn sample_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.sample_endpoint = Some(endpoint.into());
        self
    }

    /// Builds the [`ClientConfig`].
    pub fn build(self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            search_endpoint: self.search_endpoint.unwrap_or(defaults.search_endpoint),
            sample_endpoint: self.sample_endpoint.unwrap_or(defaults.sample_endpoint),
        }
    }
}
