//! Configuration for the PubMed E-utilities client.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    /// Base URL for NCBI E-utilities.
    pub const EUTILS_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

    /// Entrez database queried by every request.
    pub const DATABASE: &str = "pubmed";

    /// Tool name reported to NCBI with each request.
    pub const TOOL_NAME: &str = "pubmed-paper-finder";

    /// Result cap used when a caller does not pick one.
    pub const DEFAULT_MAX_RESULTS: u32 = 10;
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for E-utilities (for testing with mock servers).
    pub eutils_url: String,

    /// Tool name sent as the `tool` parameter.
    pub tool: String,

    /// Contact email sent as the `email` parameter (optional).
    pub email: Option<String>,

    /// NCBI API key (optional).
    pub api_key: Option<String>,

    /// Request timeout. `None` leaves requests unbounded.
    pub request_timeout: Option<Duration>,

    /// Result cap used when a caller does not pick one.
    pub default_max_results: u32,
}

impl Config {
    /// Create a new configuration with optional contact email and API key.
    #[must_use]
    pub fn new(email: Option<String>, api_key: Option<String>) -> Self {
        Self {
            eutils_url: api::EUTILS_URL.to_string(),
            tool: api::TOOL_NAME.to_string(),
            email,
            api_key,
            request_timeout: None,
            default_max_results: api::DEFAULT_MAX_RESULTS,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            eutils_url: format!("{}/entrez/eutils", base_url),
            tool: api::TOOL_NAME.to_string(),
            email: None,
            api_key: None,
            request_timeout: Some(Duration::from_secs(5)),
            default_max_results: api::DEFAULT_MAX_RESULTS,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `ENTREZ_EMAIL` and `NCBI_API_KEY`; empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let email = non_empty_var("ENTREZ_EMAIL");
        let api_key = non_empty_var("NCBI_API_KEY");
        Ok(Self::new(email, api_key))
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, None)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
