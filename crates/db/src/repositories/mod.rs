//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod blog_repo;
pub mod career_repo;
pub mod contact_repo;
pub mod news_repo;
pub mod project_repo;
pub mod setting_repo;
pub mod team_repo;

pub use blog_repo::BlogRepo;
pub use career_repo::CareerRepo;
pub use contact_repo::ContactRepo;
pub use news_repo::NewsRepo;
pub use project_repo::ProjectRepo;
pub use setting_repo::SettingRepo;
pub use team_repo::TeamRepo;
