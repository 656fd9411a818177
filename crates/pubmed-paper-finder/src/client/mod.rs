//! PubMed E-utilities client.
//!
//! Two sequential calls cover the whole pipeline:
//! - `esearch` (JSON) for identifiers
//! - `efetch` (XML) for the records themselves
//!
//! There is no retry, caching or rate limiting; any failure is returned to the
//! caller as-is.

use reqwest::Client;
use serde::Deserialize;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::RawRecord;

/// A source of bibliographic records.
///
/// Implemented by [`PubMedClient`]; tests substitute in-memory sources.
#[async_trait::async_trait]
pub trait BibliographicSource: Send + Sync {
    /// Identifiers matching `query`, at most `max_results`, in service order.
    async fn search_ids(&self, query: &str, max_results: u32) -> ClientResult<Vec<String>>;

    /// Records for `ids`. Identifiers that do not resolve are silently absent.
    async fn fetch_records(&self, ids: &[String]) -> ClientResult<Vec<RawRecord>>;
}

/// NCBI E-utilities client for the PubMed database.
#[derive(Clone)]
pub struct PubMedClient {
    /// HTTP client.
    client: Client,

    /// E-utilities base URL.
    eutils_url: String,

    /// Value of the `tool` parameter.
    tool: String,

    /// Contact email (optional).
    email: Option<String>,

    /// API key (optional).
    api_key: Option<String>,

    /// Cap used by [`Self::search_default`].
    default_max_results: u32,
}

impl PubMedClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut builder = Client::builder().gzip(true);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            eutils_url: config.eutils_url,
            tool: config.tool,
            email: config.email,
            api_key: config.api_key,
            default_max_results: config.default_max_results,
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search PubMed and return matching identifiers.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, an unparseable
    /// body, or an `ERROR` reported by esearch.
    pub async fn search(&self, query: &str, max_results: u32) -> ClientResult<Vec<String>> {
        let url = format!("{}/esearch.fcgi", self.eutils_url);

        let mut params = vec![
            ("db".to_string(), api::DATABASE.to_string()),
            ("term".to_string(), query.to_string()),
            ("retmax".to_string(), max_results.to_string()),
            ("retmode".to_string(), "json".to_string()),
        ];
        params.extend(self.identity_params());

        #[derive(Deserialize)]
        struct ESearchResponse {
            esearchresult: ESearchResult,
        }

        #[derive(Deserialize)]
        struct ESearchResult {
            #[serde(default)]
            count: Option<String>,
            #[serde(default)]
            idlist: Option<Vec<String>>,
            #[serde(rename = "ERROR", default)]
            error: Option<String>,
        }

        let body = self.get_text(&url, &params).await?;
        let response: ESearchResponse = serde_json::from_str(&body)?;
        let result = response.esearchresult;

        if let Some(message) = result.error {
            return Err(ClientError::bad_request(message));
        }

        let ids = result
            .idlist
            .ok_or_else(|| ClientError::malformed("esearch result without idlist"))?;

        tracing::debug!(
            query,
            total = result.count.as_deref().unwrap_or("?"),
            returned = ids.len(),
            "esearch complete"
        );

        Ok(ids)
    }

    /// Search with the configured default result cap.
    ///
    /// # Errors
    ///
    /// See [`Self::search`].
    pub async fn search_default(&self, query: &str) -> ClientResult<Vec<String>> {
        self.search(query, self.default_max_results).await
    }

    /// Fetch full records for the given identifiers in a single request.
    ///
    /// An empty identifier list returns an empty result without a request.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, invalid XML, or
    /// a record missing its `MedlineCitation` / `Article` container.
    pub async fn fetch(&self, ids: &[String]) -> ClientResult<Vec<RawRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/efetch.fcgi", self.eutils_url);

        let mut params = vec![
            ("db".to_string(), api::DATABASE.to_string()),
            ("id".to_string(), ids.join(",")),
            ("rettype".to_string(), "medline".to_string()),
            ("retmode".to_string(), "xml".to_string()),
        ];
        params.extend(self.identity_params());

        let body = self.get_text(&url, &params).await?;
        let records = RawRecord::parse_article_set(&body)?;

        tracing::debug!(requested = ids.len(), returned = records.len(), "efetch complete");

        Ok(records)
    }

    /// `tool`, plus `email` and `api_key` when configured.
    fn identity_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("tool".to_string(), self.tool.clone())];

        if let Some(email) = &self.email {
            params.push(("email".to_string(), email.clone()));
        }

        if let Some(key) = &self.api_key {
            params.push(("api_key".to_string(), key.clone()));
        }

        params
    }

    /// Make a GET request and return the body text.
    async fn get_text(&self, url: &str, params: &[(String, String)]) -> ClientResult<String> {
        tracing::trace!(url, "GET");

        let response = self.client.get(url).query(params).send().await?;
        let response = Self::handle_response(response).await?;

        Ok(response.text().await?)
    }

    /// Handle API response status codes.
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();

        match status.as_u16() {
            400 => Err(ClientError::bad_request(text)),
            500..=599 => Err(ClientError::server(status.as_u16(), text)),
            code => Err(ClientError::UnexpectedStatus { status: code, message: text }),
        }
    }
}

#[async_trait::async_trait]
impl BibliographicSource for PubMedClient {
    async fn search_ids(&self, query: &str, max_results: u32) -> ClientResult<Vec<String>> {
        self.search(query, max_results).await
    }

    async fn fetch_records(&self, ids: &[String]) -> ClientResult<Vec<RawRecord>> {
        self.fetch(ids).await
    }
}

impl std::fmt::Debug for PubMedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PubMedClient")
            .field("eutils_url", &self.eutils_url)
            .field("has_api_key", &self.has_api_key())
            .finish()
    }
}
