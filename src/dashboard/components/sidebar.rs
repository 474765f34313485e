//! Sidebar navigation component

use egui::{Color32, RichText, Rounding, Sense, Stroke};

use crate::dashboard::state::NavItem;
use crate::dashboard::theme::{color_with_alpha, BrandColors, ThemeColors};

const PILL_ROUNDING: f32 = 18.0;

/// Render the sidebar navigation.
///
/// Returns the item the user clicked, if any.
pub fn render_sidebar(ui: &mut egui::Ui, current_path: &str) -> Option<NavItem> {
    let mut clicked = None;

    ui.vertical(|ui| {
        ui.add_space(16.0);

        // Logo/Title
        ui.horizontal(|ui| {
            ui.add_space(12.0);
            ui.label(
                RichText::new("Stage")
                    .size(24.0)
                    .color(BrandColors::TIP)
                    .strong(),
            );
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.add_space(12.0);
            ui.label(
                RichText::new("Creator Dashboard")
                    .size(11.0)
                    .color(ThemeColors::TEXT_MUTED),
            );
        });

        ui.add_space(24.0);
        ui.separator();
        ui.add_space(16.0);

        for item in NavItem::ALL {
            if nav_row(ui, item, item.matches(current_path)) {
                clicked = Some(item);
            }
            ui.add_space(4.0);
        }

        // Current route pinned to the bottom
        ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                ui.add_space(12.0);
                ui.label(
                    RichText::new(current_path)
                        .size(10.0)
                        .monospace()
                        .color(ThemeColors::TEXT_MUTED),
                );
            });
            ui.add_space(8.0);
            ui.separator();
        });
    });

    clicked
}

/// One sidebar row; the selected row gets a tinted pill and brand-colored text
fn nav_row(ui: &mut egui::Ui, item: NavItem, selected: bool) -> bool {
    let text_color = if selected {
        BrandColors::TIP
    } else {
        ThemeColors::TEXT_SECONDARY
    };
    let fill = if selected {
        color_with_alpha(BrandColors::TIP, 40)
    } else {
        Color32::TRANSPARENT
    };

    let response = egui::Frame::none()
        .fill(fill)
        .rounding(Rounding::same(PILL_ROUNDING))
        .inner_margin(egui::Margin::symmetric(14.0, 8.0))
        .outer_margin(egui::Margin::symmetric(8.0, 0.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.add(egui::Label::new(RichText::new(item.icon()).size(14.0).color(text_color)).selectable(false));
                ui.add_space(10.0);
                ui.add(egui::Label::new(RichText::new(item.name()).size(14.0).color(text_color)).selectable(false));
            });
        })
        .response
        .interact(Sense::click());

    if response.hovered() && !selected {
        ui.painter().rect_stroke(
            response.rect,
            Rounding::same(PILL_ROUNDING),
            Stroke::new(1.0, ThemeColors::BG_HOVER),
        );
    }

    response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked()
}
