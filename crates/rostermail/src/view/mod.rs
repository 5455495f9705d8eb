//! View components for the application.

mod email_list;
mod header;
mod login;
mod roster;
mod sidebar;

pub use email_list::view_email_list;
pub use header::view_header;
pub use login::view_login;
pub use roster::view_roster;
pub use sidebar::view_sidebar;
