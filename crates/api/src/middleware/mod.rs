//! Request extractors that gate access to handlers.
//!
//! - [`auth::AdminAccess`] -- Guards content-changing endpoints.

pub mod auth;
