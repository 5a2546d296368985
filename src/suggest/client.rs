//! Recommendation service client
//!
//! Issues the single POST per submit and classifies the outcome.

use reqwest::header::CONTENT_TYPE;
use thiserror::Error;

use super::suggestion::{CareerSuggestion, RecommendationRequest, RecommendationResponse};

/// Endpoint used when neither the config file nor the CLI names one
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/career-recommendations";

/// Errors that can occur while fetching recommendations
///
/// Every variant is shown to the user as the same generic message;
/// the variant only matters for the diagnostic log.
#[derive(Debug, Error)]
pub enum SuggestError {
    /// Endpoint answered with a non-2xx status
    #[error("HTTP status {code}")]
    Status { code: u16 },

    /// Request could not be sent or the body could not be read
    #[error("Network error: {0}")]
    Network(String),

    /// Body was not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Body was JSON but had no `careerRecommendations` array
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Worker thread is gone or never started
    #[error("Request worker unavailable")]
    WorkerUnavailable,
}

/// HTTP client for the recommendation endpoint
#[derive(Debug, Clone)]
pub struct CareerClient {
    client: reqwest::Client,
    endpoint: String,
}

impl CareerClient {
    pub fn new(endpoint: String) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Wrap an already configured `reqwest::Client`
    pub fn with_client(client: reqwest::Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the JSON request body
    pub fn build_request_body(&self, interests: &str) -> Result<String, SuggestError> {
        serde_json::to_string(&RecommendationRequest {
            frontendinput: interests,
        })
        .map_err(|e| SuggestError::Parse(e.to_string()))
    }

    /// POST the interests and return the suggestions in response order
    pub async fn fetch(&self, interests: &str) -> Result<Vec<CareerSuggestion>, SuggestError> {
        let body = self.build_request_body(interests)?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| SuggestError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestError::Status {
                code: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SuggestError::Network(e.to_string()))?;

        parse_response(&bytes)
    }
}

/// Decode a 2xx response body
///
/// Invalid JSON and a valid JSON document without the expected envelope
/// are reported as different errors.
pub fn parse_response(bytes: &[u8]) -> Result<Vec<CareerSuggestion>, SuggestError> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| SuggestError::Parse(e.to_string()))?;

    let response: RecommendationResponse = serde_json::from_value(value)
        .map_err(|e| SuggestError::MalformedResponse(e.to_string()))?;

    Ok(response.into_suggestions())
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
