pub mod webinar_signup;

pub use webinar_signup::*;
