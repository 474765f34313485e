//! Domain Model
//!
//! Creator data displayed by the dashboard and the tip configuration edited
//! in the settings dialog.

pub mod creator;
pub mod mock;
pub mod tips;

pub use creator::CreatorSnapshot;
pub use tips::{PaymentMethod, TipConfigEdit, TipConfiguration};
