//! In-memory mock of the Vantage segments API.
//!
//! Models only what the smoke-test sequence and its tests need: create, get,
//! and update of segments under `/v2/segments`, bearer-token auth, and a
//! request log so tests can assert call order and the outbound User-Agent
//! header.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Segment {
    pub token: String,
    pub title: String,
    pub priority: String,
    pub track_unallocated: bool,
}

#[derive(Deserialize)]
pub struct CreateSegment {
    pub title: String,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default)]
    pub track_unallocated: bool,
}

#[derive(Deserialize)]
pub struct UpdateSegment {
    pub title: String,
    pub track_unallocated: bool,
}

fn default_priority() -> String {
    "100".to_string()
}

/// One observed request, recorded before auth so rejected calls show up too.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestRecord {
    pub method: String,
    pub path: String,
    pub user_agent: Option<String>,
}

#[derive(Clone, Default)]
pub struct AppState {
    pub segments: Arc<RwLock<HashMap<String, Segment>>>,
    pub requests: Arc<Mutex<Vec<RequestRecord>>>,
}

pub fn app() -> Router {
    app_with_state(AppState::default())
}

/// Build the router over caller-owned state so tests can inspect the
/// segment store and request log afterwards.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .route("/v2/segments", post(create_segment))
        .route("/v2/segments/{token}", get(get_segment).put(update_segment))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve over caller-owned state; used by out-of-process tests that want to
/// inspect the request log after driving the server over real HTTP.
pub async fn run_with_state(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_state(state)).await
}

fn record(state: &AppState, method: &str, path: &str, headers: &HeaderMap) {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.requests.lock().unwrap().push(RequestRecord {
        method: method.to_string(),
        path: path.to_string(),
        user_agent,
    });
}

fn authorize(headers: &HeaderMap) -> Result<(), StatusCode> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    match bearer {
        Some(token) if !token.is_empty() => Ok(()),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

async fn create_segment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<CreateSegment>,
) -> Result<(StatusCode, Json<Segment>), StatusCode> {
    record(&state, "POST", "/v2/segments", &headers);
    authorize(&headers)?;
    let segment = Segment {
        token: format!("seg_{}", Uuid::new_v4().simple()),
        title: input.title,
        priority: input.priority,
        track_unallocated: input.track_unallocated,
    };
    state
        .segments
        .write()
        .await
        .insert(segment.token.clone(), segment.clone());
    Ok((StatusCode::CREATED, Json(segment)))
}

async fn get_segment(
    State(state): State<AppState>,
    Path(token): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Segment>, StatusCode> {
    record(&state, "GET", &format!("/v2/segments/{token}"), &headers);
    authorize(&headers)?;
    let segments = state.segments.read().await;
    segments
        .get(&token)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_segment(
    State(state): State<AppState>,
    Path(token): Path<String>,
    headers: HeaderMap,
    Json(input): Json<UpdateSegment>,
) -> Result<Json<Segment>, StatusCode> {
    record(&state, "PUT", &format!("/v2/segments/{token}"), &headers);
    authorize(&headers)?;
    let mut segments = state.segments.write().await;
    let segment = segments.get_mut(&token).ok_or(StatusCode::NOT_FOUND)?;
    segment.title = input.title;
    segment.track_unallocated = input.track_unallocated;
    Ok(Json(segment.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_serializes_to_json() {
        let segment = Segment {
            token: "seg_0".to_string(),
            title: "Test".to_string(),
            priority: "100".to_string(),
            track_unallocated: false,
        };
        let json = serde_json::to_value(&segment).unwrap();
        assert_eq!(json["token"], "seg_0");
        assert_eq!(json["title"], "Test");
        assert_eq!(json["priority"], "100");
        assert_eq!(json["track_unallocated"], false);
    }

    #[test]
    fn create_segment_defaults() {
        let input: CreateSegment = serde_json::from_str(r#"{"title":"Bare"}"#).unwrap();
        assert_eq!(input.title, "Bare");
        assert_eq!(input.priority, "100");
        assert!(!input.track_unallocated);
    }

    #[test]
    fn create_segment_rejects_missing_title() {
        let result: Result<CreateSegment, _> = serde_json::from_str(r#"{"priority":"50"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_segment_requires_both_fields() {
        let result: Result<UpdateSegment, _> = serde_json::from_str(r#"{"title":"Only"}"#);
        assert!(result.is_err());

        let input: UpdateSegment =
            serde_json::from_str(r#"{"title":"Full","track_unallocated":true}"#).unwrap();
        assert_eq!(input.title, "Full");
        assert!(input.track_unallocated);
    }
}
