// Common types and utilities shared across domains

pub mod admin_user;
pub mod errors;
pub mod pagination;

pub use admin_user::AdminUser;
pub use errors::{is_unique_violation, IntakeError};
pub use pagination::{Page, PageInfo};
