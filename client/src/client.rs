//! Stateless HTTP request builder and response parser for the segments API.
//!
//! # Design
//! `VantageClient` holds a `base_url` and the bearer token and carries no
//! mutable state between calls. Each operation is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that consumes
//! an `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the client deterministic and free of I/O dependencies.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateSegment, Segment, UpdateSegment};

/// Synchronous, stateless client for the Vantage segments API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. Every built request carries the bearer token in an
/// `authorization` header; the caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct VantageClient {
    base_url: String,
    token: String,
}

impl VantageClient {
    /// Create a client for the given base URL and API token.
    ///
    /// Rejects base URLs without an `http://` or `https://` scheme so a
    /// mistyped host fails before any request is built.
    pub fn new(base_url: &str, token: &str) -> Result<Self, ApiError> {
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    fn auth_header(&self) -> (String, String) {
        ("authorization".to_string(), format!("Bearer {}", self.token))
    }

    pub fn build_create_segment(&self, input: &CreateSegment) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/v2/segments", self.base_url),
            headers: vec![
                ("content-type".to_string(), "application/json".to_string()),
                self.auth_header(),
            ],
            body: Some(body),
        })
    }

    pub fn build_get_segment(&self, segment_token: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/v2/segments/{segment_token}", self.base_url),
            headers: vec![self.auth_header()],
            body: None,
        }
    }

    pub fn build_update_segment(
        &self,
        segment_token: &str,
        input: &UpdateSegment,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/v2/segments/{segment_token}", self.base_url),
            headers: vec![
                ("content-type".to_string(), "application/json".to_string()),
                self.auth_header(),
            ],
            body: Some(body),
        })
    }

    pub fn parse_create_segment(&self, response: HttpResponse) -> Result<Segment, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_get_segment(&self, response: HttpResponse) -> Result<Segment, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_update_segment(&self, response: HttpResponse) -> Result<Segment, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 401 {
        return Err(ApiError::Unauthorized);
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
