// Society Website Backend
//
// Content store, publication policy and intake/resolution workflows for a
// society website. The rendering front-end consumes the GraphQL query root;
// the admin UI consumes the mutation root; the public site posts its
// membership and contact forms to the form routes.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::Config;
