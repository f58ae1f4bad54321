//! PubMed E-utilities client (`esummary.fcgi`, JSON mode).

use std::time::Duration;

use serde::Deserialize;
use veritas_core::config::RegistryConfig;
use veritas_core::constants::VERSION;
use veritas_core::errors::RegistryError;
use veritas_core::models::RegistryRecord;
use veritas_core::traits::IBibliographicRegistry;

const ESUMMARY_PATH: &str = "esummary.fcgi";

/// Registry client for NCBI E-utilities.
#[derive(Debug)]
pub struct PubMedRegistry {
    base_url: String,
    database: String,
    timeout: Duration,
    client: reqwest::blocking::Client,
}

impl PubMedRegistry {
    /// Build a client from configuration. Each lookup is bounded by the
    /// configured timeout.
    pub fn new(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let timeout = config.effective_timeout();
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .gzip(true)
            .user_agent(format!("veritas/{VERSION}"))
            .build()
            .map_err(|e| RegistryError::Unavailable {
                reason: e.to_string(),
            })?;

        Ok(Self::with_client(config, client))
    }

    /// Use a caller-built HTTP client. The client's own timeout applies.
    pub fn with_client(config: &RegistryConfig, client: reqwest::blocking::Client) -> Self {
        Self {
            base_url: config.effective_base_url().trim_end_matches('/').to_string(),
            database: config.effective_database().to_string(),
            timeout: config.effective_timeout(),
            client,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/{ESUMMARY_PATH}", self.base_url)
    }

    fn request(&self, identifier: &str) -> Result<serde_json::Value, RegistryError> {
        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("db", self.database.as_str()),
                ("id", identifier),
                ("retmode", "json"),
            ])
            .send()
            .map_err(|e| self.transport_error(identifier, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::HttpStatus {
                identifier: identifier.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<serde_json::Value>()
            .map_err(|e| RegistryError::MalformedResponse {
                identifier: identifier.to_string(),
                reason: e.to_string(),
            })
    }

    fn transport_error(&self, identifier: &str, e: reqwest::Error) -> RegistryError {
        if e.is_timeout() {
            RegistryError::Timeout {
                identifier: identifier.to_string(),
                timeout_secs: self.timeout.as_secs(),
            }
        } else {
            RegistryError::Network {
                identifier: identifier.to_string(),
                reason: e.to_string(),
            }
        }
    }
}

impl IBibliographicRegistry for PubMedRegistry {
    fn fetch(&self, identifier: &str) -> Result<Option<RegistryRecord>, RegistryError> {
        let body = self.request(identifier)?;
        parse_esummary(identifier, &body)
    }

    fn name(&self) -> &str {
        "PubMed"
    }
}

#[derive(Debug, Deserialize)]
struct SummaryAuthor {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct DocumentSummary {
    #[serde(default)]
    authors: Vec<SummaryAuthor>,
    #[serde(default)]
    pubdate: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    error: Option<String>,
}

/// Decode an `esummary` JSON body:
/// `{"result": {"<id>": {"authors": [{"name": ..}], "pubdate": .., "title": ..}}}`.
///
/// A body without `result` is malformed. An id missing from `result`, or
/// answered with an `error` entry, is unknown to the registry.
pub fn parse_esummary(
    identifier: &str,
    body: &serde_json::Value,
) -> Result<Option<RegistryRecord>, RegistryError> {
    let malformed = |reason: String| RegistryError::MalformedResponse {
        identifier: identifier.to_string(),
        reason,
    };

    let result = body
        .get("result")
        .ok_or_else(|| malformed("missing 'result' object".to_string()))?;
    let Some(entry) = result.get(identifier) else {
        return Ok(None);
    };

    let summary: DocumentSummary =
        serde_json::from_value(entry.clone()).map_err(|e| malformed(e.to_string()))?;
    if summary.error.is_some() {
        return Ok(None);
    }

    Ok(Some(RegistryRecord {
        identifier: identifier.to_string(),
        authors: summary.authors.into_iter().map(|a| a.name).collect(),
        pubdate: summary.pubdate,
        title: summary.title,
    }))
}
