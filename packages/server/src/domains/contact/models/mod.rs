pub mod contact_message;
pub mod contact_page;
pub mod subject;

pub use contact_message::ContactMessage;
pub use contact_page::ContactPage;
pub use subject::MessageSubject;
