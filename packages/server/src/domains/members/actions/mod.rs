pub mod submit_application;

pub use submit_application::submit_application;
