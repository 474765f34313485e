//! Shared state between the dashboard views and the app loop

pub mod state;

pub use state::{SharedAppState, UiCommand};
