//! Shared domain types for the Virasat content backend.
//!
//! Nothing in this crate performs I/O: it holds the id/timestamp aliases,
//! the domain error type, the JSON-list codec used for array columns, the
//! enumerated content labels, and the resource catalogue shared by the API
//! server and the HTTP client.

pub mod content;
pub mod error;
pub mod json_list;
pub mod resource;
pub mod response;
pub mod types;
