//! Link list component

use egui::RichText;

use crate::dashboard::layout::{LinkAction, LinkItem};
use crate::dashboard::theme::BrandColors;

/// Render a single link, returning its action when clicked
pub fn link(ui: &mut egui::Ui, item: &LinkItem) -> Option<LinkAction> {
    let mut response = ui.link(RichText::new(item.label).color(BrandColors::LINK));
    if let LinkAction::Navigate(path) = &item.action {
        response = response.on_hover_text(path.as_str());
    }
    response.clicked().then(|| item.action.clone())
}

/// Render a titled list of links, one per line
pub fn link_list(ui: &mut egui::Ui, title: &str, items: &[LinkItem]) -> Option<LinkAction> {
    ui.label(RichText::new(title).size(16.0).strong());
    ui.add_space(8.0);

    let mut clicked = None;
    for item in items {
        if let Some(action) = link(ui, item) {
            clicked = Some(action);
        }
        ui.add_space(2.0);
    }
    clicked
}
