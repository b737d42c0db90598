//! Page components for Profile Desk.

mod profile;
mod sign_in;

pub use profile::Profile;
pub use sign_in::SignIn;
