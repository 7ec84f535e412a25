//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` input DTO used for both inserts and full-overwrite
//!   updates (every field optional, defaults applied at bind time)
//! - An update DTO carrying the row id from the request body
//!
//! List-valued columns are [`JsonList`](virasat_core::json_list::JsonList)
//! fields decoded from TEXT via `#[sqlx(try_from = "String")]`; enumerated
//! columns decode the same way into the `virasat_core::content` enums.

pub mod blog;
pub mod career;
pub mod contact;
pub mod news;
pub mod project;
pub mod setting;
pub mod team;

/// Bind value for an optional text field: missing means empty string.
pub(crate) fn text_or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}
