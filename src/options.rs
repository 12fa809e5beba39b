// ABOUTME: Configuration options for the onthisday client and the ClientBuilder fluent API.
// ABOUTME: The only contract-level option is the fetch timeout (default 5000 ms).

use std::time::Duration;

use crate::client::Client;

/// Base address of the English Wikipedia day pages.
pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/wiki";

/// Configuration options for the client.
#[derive(Debug, Clone)]
pub struct Options {
    pub timeout: Duration,
    pub user_agent: String,
    pub base_url: String,
    pub http_client: Option<reqwest::Client>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(5000),
            user_agent: concat!("onthisday/", env!("CARGO_PKG_VERSION")).to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http_client: None,
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the fetch timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Override the base page URL (mainly for tests against a local server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.opts.base_url = base_url.into();
        self
    }

    /// Use a custom HTTP client instead of building one from the options.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Client {
        Client::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
