//! Reusable UI components for the dashboard

pub mod links;
pub mod sidebar;
pub mod summary_card;

pub use links::{link, link_list};
pub use sidebar::render_sidebar;
pub use summary_card::SummaryCard;
