//! ureq executor for `HttpRequest` values built by the client crate.
//!
//! # Design
//! `Transport` owns a `ureq::Agent` configured with a fixed User-Agent of the
//! form `segment-smoke/<rev>`, where `<rev>` is the first seven characters of
//! the git commit hash captured at build time (or `unknown`), with a `+`
//! suffix when the tree was dirty. Status interpretation belongs to the
//! client's `parse_*` methods, so ureq's status-code-as-error behavior is
//! disabled and 4xx/5xx responses come back as data.

use thiserror::Error;
use vantage_client::{HttpMethod, HttpRequest, HttpResponse};

const TOOL_NAME: &str = "segment-smoke";

/// Errors from the HTTP round-trip itself (connect, TLS, I/O). Status-level
/// failures are not transport errors; they surface from the client's parsers.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http transport failed: {0}")]
    Http(#[from] ureq::Error),
}

/// The User-Agent string identifying this tool and its build revision.
pub fn user_agent() -> String {
    let mut agent = format!("{TOOL_NAME}/{}", env!("SEGMENT_SMOKE_GIT_REVISION"));
    if env!("SEGMENT_SMOKE_GIT_DIRTY") == "1" {
        agent.push('+');
    }
    agent
}

/// Blocking executor that performs the round-trip for a built `HttpRequest`.
pub struct Transport {
    agent: ureq::Agent,
}

impl Transport {
    pub fn new(user_agent: &str) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .user_agent(user_agent)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Execute a request, applying every header the client attached.
    pub fn execute(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut response = match req.method {
            HttpMethod::Get => {
                let mut call = self.agent.get(&req.path);
                for (name, value) in &req.headers {
                    call = call.header(name.as_str(), value.as_str());
                }
                call.call()?
            }
            HttpMethod::Post => {
                let mut call = self.agent.post(&req.path);
                for (name, value) in &req.headers {
                    call = call.header(name.as_str(), value.as_str());
                }
                match req.body {
                    Some(body) => call.send(body.as_bytes())?,
                    None => call.send_empty()?,
                }
            }
            HttpMethod::Put => {
                let mut call = self.agent.put(&req.path);
                for (name, value) in &req.headers {
                    call = call.header(name.as_str(), value.as_str());
                }
                match req.body {
                    Some(body) => call.send(body.as_bytes())?,
                    None => call.send_empty()?,
                }
            }
        };

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string()?;

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}
