//! Dashboard views

pub mod home;
pub mod tip_settings;

pub use home::render_home_view;
pub use tip_settings::{render_tip_settings_dialog, DialogAction};
