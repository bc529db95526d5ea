pub mod form;
pub mod hero;
pub mod messages;
