//! Domain DTOs for the Vantage segments API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Segment tokens are opaque server-assigned strings, so no ID type is
//! imposed here. Integration tests catch any schema drift between the two
//! crates.

use serde::{Deserialize, Serialize};

/// A cost-allocation segment returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Segment {
    pub token: String,
    pub title: String,
    pub priority: String,
    pub track_unallocated: bool,
}

/// Request payload for creating a new segment. Priority is fixed at creation
/// and cannot be changed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSegment {
    pub title: String,
    pub priority: String,
    #[serde(default)]
    pub track_unallocated: bool,
}

/// Request payload for updating an existing segment. Both fields are always
/// sent; the segments API has no partial-update semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSegment {
    pub title: String,
    pub track_unallocated: bool,
}
