pub mod actions;
pub mod data;
pub mod edges;
pub mod models;
