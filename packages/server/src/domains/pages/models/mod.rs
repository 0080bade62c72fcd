pub mod about_page;
pub mod home_page;
pub mod join_page;
pub mod president_message;

pub use about_page::AboutPage;
pub use home_page::HomePage;
pub use join_page::JoinPage;
pub use president_message::PresidentMessage;
