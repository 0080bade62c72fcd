// HTTP routes
pub mod forms;
pub mod graphql;
pub mod health;

pub use forms::*;
pub use graphql::*;
pub use health::*;
