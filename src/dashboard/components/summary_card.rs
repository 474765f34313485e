//! Summary card component for a single headline figure

use egui::{RichText, Vec2};

use crate::dashboard::layout::SummaryCardData;
use crate::dashboard::theme::{section_frame, BrandColors, ThemeColors};

/// A card displaying one figure with a title and optional caption
pub struct SummaryCard<'a> {
    data: &'a SummaryCardData,
    accent: egui::Color32,
}

impl<'a> SummaryCard<'a> {
    pub fn new(data: &'a SummaryCardData) -> Self {
        Self {
            data,
            accent: BrandColors::TIP,
        }
    }

    pub fn with_accent(mut self, accent: egui::Color32) -> Self {
        self.accent = accent;
        self
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        section_frame().show(ui, |ui| {
            ui.set_min_width(180.0);

            ui.horizontal(|ui| {
                // Accent bar
                let bar_rect = egui::Rect::from_min_size(
                    ui.cursor().left_top() + Vec2::new(0.0, 2.0),
                    Vec2::new(3.0, 52.0),
                );
                ui.painter().rect_filled(bar_rect, 1.5, self.accent);
                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(self.data.title)
                            .size(12.0)
                            .color(ThemeColors::TEXT_MUTED),
                    );

                    ui.add_space(4.0);

                    ui.label(
                        RichText::new(&self.data.value)
                            .size(22.0)
                            .color(ThemeColors::TEXT_PRIMARY)
                            .strong(),
                    );

                    if let Some(caption) = &self.data.caption {
                        ui.add_space(2.0);
                        ui.label(
                            RichText::new(caption)
                                .size(11.0)
                                .color(ThemeColors::ACCENT_SUCCESS),
                        );
                    }
                });
            });
        });
    }
}
