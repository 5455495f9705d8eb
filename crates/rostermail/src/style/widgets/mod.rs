//! Widget styles reproducing the service's web look: flat surfaces,
//! soft borders, blue accents.

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

// Re-export radius constants
pub use shadows::radius;

// Re-export button styles
pub use buttons::{
    icon_button_style, nav_button_selected_style, nav_button_style, primary_button_style,
    sign_out_button_style, success_button_style,
};

// Re-export container styles
pub use containers::{
    app_background_style, avatar_style, badge_style, card_style, danger_banner_style,
    email_row_style, email_row_unread_style, header_style, sidebar_style, success_banner_style,
    table_header_style, table_row_style,
};

// Re-export input styles
pub use inputs::{scrollable_style, text_field_style};
