pub mod event;
pub mod event_image;

pub use event::Event;
pub use event_image::EventImage;
