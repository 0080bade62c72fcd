pub mod contact;
pub mod events;
pub mod gallery;
pub mod members;
pub mod pages;
pub mod updates;
