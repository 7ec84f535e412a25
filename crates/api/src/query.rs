//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// The `?id=` parameter taken by every DELETE endpoint.
///
/// Kept as raw text so that a non-numeric id can be told apart from a
/// missing one.
#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}
