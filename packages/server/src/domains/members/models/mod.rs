pub mod designation;
pub mod member;

pub use designation::SocietyDesignation;
pub use member::Member;
