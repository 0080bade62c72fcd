pub mod resolution;
pub mod submit_message;

pub use resolution::{resolve_messages, unresolve_messages};
pub use submit_message::submit_message;
