//! Dashboard UI Module
//!
//! The creator dashboard window: summary cards, shows, tips, profile cards
//! and the tip settings dialog.

pub mod app;
pub mod components;
pub mod layout;
pub mod preview;
pub mod state;
pub mod theme;
pub mod tip_dialog;
pub mod views;
