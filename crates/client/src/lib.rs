//! HTTP client for the Virasat content API.
//!
//! Wraps every endpoint the public site and the admin panel call using
//! [`reqwest`]. See [`ApiClient`] for the request rules and
//! [`DashboardSnapshot`] for the admin overview.

pub mod client;
pub mod dashboard;
pub mod error;

pub use client::{ApiClient, LoginResponse};
pub use dashboard::{DashboardSnapshot, DashboardStats};
pub use error::ClientError;
