//! Data models for the application.

mod email;
mod login;
mod settings;

pub use email::{format_received, sender_display, subject_display};
pub use login::LoginState;
pub use settings::AppSettings;
