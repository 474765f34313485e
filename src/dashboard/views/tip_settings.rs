//! Tip settings dialog - form and live preview

use egui::RichText;

use crate::dashboard::preview::TipPreview;
use crate::dashboard::theme::{color_with_alpha, BrandColors, ThemeColors};
use crate::dashboard::tip_dialog::{
    dismiss_requested, FormVisibility, TipSettingsDialog, TipSettingsForm,
};
use crate::model::tips::SUGGESTED_AMOUNT_SLOTS;
use crate::model::{PaymentMethod, TipConfigEdit};

/// What the user asked the dialog to do this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    Save,
    Cancel,
    /// Window closed from outside the form (close button or Escape)
    Dismiss,
}

/// Render the tip settings dialog if it is open.
///
/// Field edits are applied to the dialog's form directly; lifecycle actions
/// are returned for the caller to carry out.
pub fn render_tip_settings_dialog(
    ctx: &egui::Context,
    dialog: &mut TipSettingsDialog,
    currency_symbol: &str,
) -> Option<DialogAction> {
    let form = dialog.form_mut()?;

    // Checked before the window runs: a focused field drops focus on Escape
    // during this frame
    let field_focused = ctx.memory(|memory| memory.focused().is_some());

    let preview = TipPreview::from_config(form.config(), currency_symbol);
    let mut edits: Vec<TipConfigEdit> = Vec::new();
    let mut action = None;
    let mut open = true;

    egui::Window::new("Tip Settings")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(720.0)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label(
                RichText::new("Choose how fans can support you")
                    .size(13.0)
                    .color(ThemeColors::TEXT_SECONDARY),
            );
            ui.add_space(12.0);

            ui.columns(2, |columns| {
                egui::ScrollArea::vertical()
                    .id_salt("tip_settings_form")
                    .max_height(460.0)
                    .show(&mut columns[0], |ui| {
                        render_form(ui, form, currency_symbol, &mut edits);
                    });
                render_preview(&mut columns[1], &preview);
            });

            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(
                            egui::Button::new(RichText::new("Save Settings").color(egui::Color32::WHITE))
                                .fill(BrandColors::TIP)
                                .min_size(egui::vec2(120.0, 32.0)),
                        )
                        .clicked()
                    {
                        action = Some(DialogAction::Save);
                    }
                    ui.add_space(8.0);
                    if ui
                        .add(egui::Button::new("Cancel").min_size(egui::vec2(90.0, 32.0)))
                        .clicked()
                    {
                        action = Some(DialogAction::Cancel);
                    }
                });
            });
        });

    if !edits.is_empty() {
        for edit in edits {
            form.apply(edit);
        }
        ctx.request_repaint();
    }

    let escape_pressed = ctx.input(|i| i.key_pressed(egui::Key::Escape));
    if action.is_none() && dismiss_requested(!open, escape_pressed, field_focused) {
        action = Some(DialogAction::Dismiss);
    }

    action
}

/// Checkbox bound to a copy of a flag; returns the new value when toggled
fn toggle(ui: &mut egui::Ui, value: bool, label: &str) -> Option<bool> {
    let mut value = value;
    ui.checkbox(&mut value, label).changed().then_some(value)
}

/// Single-line field bound to a copy of the text; returns the new text when edited
fn text_field(ui: &mut egui::Ui, current: &str, hint: &str, width: f32) -> Option<String> {
    let mut text = current.to_string();
    ui.add(
        egui::TextEdit::singleline(&mut text)
            .hint_text(hint)
            .desired_width(width),
    )
    .changed()
    .then_some(text)
}

fn section_title(ui: &mut egui::Ui, title: &str) {
    ui.add_space(12.0);
    ui.label(RichText::new(title).size(15.0).strong());
    ui.add_space(6.0);
}

fn render_form(
    ui: &mut egui::Ui,
    form: &TipSettingsForm,
    currency_symbol: &str,
    edits: &mut Vec<TipConfigEdit>,
) {
    let config = form.config();
    let visible = FormVisibility::for_config(config);

    if let Some(enabled) = toggle(ui, config.tips_enabled, "Accept tips") {
        edits.push(TipConfigEdit::SetTipsEnabled(enabled));
    }

    section_title(ui, "Suggested Amounts");
    ui.horizontal(|ui| {
        for slot in 0..SUGGESTED_AMOUNT_SLOTS {
            ui.label(RichText::new(currency_symbol).color(ThemeColors::TEXT_MUTED));
            if let Some(input) = text_field(ui, form.amount_input(slot), "0", 48.0) {
                edits.push(TipConfigEdit::SetSuggestedAmount { slot, input });
            }
            ui.add_space(4.0);
        }
    });

    ui.add_space(6.0);
    if let Some(allow) = toggle(ui, config.allow_custom_amount, "Allow custom amounts") {
        edits.push(TipConfigEdit::SetAllowCustomAmount(allow));
    }
    if visible.minimum_amount {
        ui.horizontal(|ui| {
            ui.label("Minimum amount:");
            ui.label(RichText::new(currency_symbol).color(ThemeColors::TEXT_MUTED));
            if let Some(input) = text_field(ui, form.minimum_input(), "1", 60.0) {
                edits.push(TipConfigEdit::SetMinimumAmount(input));
            }
        });
    }

    section_title(ui, "Payment Methods");
    for method in PaymentMethod::ALL {
        let enabled = config.payment_methods.is_enabled(method);
        if let Some(enabled) = toggle(ui, enabled, method.name()) {
            edits.push(TipConfigEdit::SetPaymentMethod { method, enabled });
        }

        if !visible.shows_handle(method) {
            continue;
        }
        if let (Some(label), Some(handle)) = (method.handle_label(), config.handle(method)) {
            ui.horizontal(|ui| {
                ui.add_space(24.0);
                ui.label(RichText::new(label).size(12.0).color(ThemeColors::TEXT_SECONDARY));
                if let Some(handle) = text_field(ui, handle, method.handle_hint(), 180.0) {
                    edits.push(TipConfigEdit::SetPaymentHandle { method, handle });
                }
            });
        }
    }

    section_title(ui, "Tip Button");
    if let Some(show) = toggle(ui, config.show_tip_button, "Show tip button on my profile") {
        edits.push(TipConfigEdit::SetShowTipButton(show));
    }
    if visible.button_text {
        ui.horizontal(|ui| {
            ui.label("Button text:");
            if let Some(text) = text_field(ui, &config.tip_button_text, "Support this creator", 200.0) {
                edits.push(TipConfigEdit::SetTipButtonText(text));
            }
        });
    }

    section_title(ui, "Thank-You Message");
    let mut message = config.thank_you_message.clone();
    if ui
        .add(
            egui::TextEdit::multiline(&mut message)
                .hint_text("Shown after someone sends a tip")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        )
        .changed()
    {
        edits.push(TipConfigEdit::SetThankYouMessage(message));
    }
}

fn render_preview(ui: &mut egui::Ui, preview: &TipPreview) {
    ui.label(RichText::new("Preview").size(15.0).strong());
    ui.add_space(6.0);

    egui::Frame::none()
        .fill(ThemeColors::BG_DARK)
        .stroke(egui::Stroke::new(1.0, ThemeColors::BORDER))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            if !preview.tips_enabled {
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);
                    ui.label(
                        RichText::new("Tips are currently disabled")
                            .color(ThemeColors::TEXT_MUTED),
                    );
                    ui.add_space(24.0);
                });
                return;
            }

            ui.label(RichText::new("Send a tip").size(16.0).strong());
            ui.add_space(8.0);

            ui.horizontal_wrapped(|ui| {
                for label in &preview.amount_labels {
                    ui.add(
                        egui::Button::new(label)
                            .fill(ThemeColors::BG_LIGHT)
                            .min_size(egui::vec2(56.0, 30.0)),
                    );
                }
            });

            if let Some(custom) = &preview.custom_amount {
                ui.add_space(6.0);
                ui.label(RichText::new(custom).size(12.0).color(ThemeColors::TEXT_SECONDARY));
            }

            ui.add_space(10.0);
            if preview.payment_methods.is_empty() {
                ui.label(
                    RichText::new("No payment methods selected")
                        .size(12.0)
                        .color(ThemeColors::ACCENT_WARNING),
                );
            } else {
                ui.label(RichText::new("Pay with").size(12.0).color(ThemeColors::TEXT_MUTED));
                for entry in &preview.payment_methods {
                    let text = match &entry.handle {
                        Some(handle) => format!("{} ({})", entry.method.name(), handle),
                        None => entry.method.name().to_string(),
                    };
                    ui.label(RichText::new(text).size(13.0));
                }
            }

            if let Some(button_text) = &preview.button_text {
                ui.add_space(12.0);
                ui.add(
                    egui::Button::new(RichText::new(button_text).color(egui::Color32::WHITE))
                        .fill(BrandColors::TIP)
                        .min_size(egui::vec2(ui.available_width(), 34.0)),
                );
            }

            if !preview.thank_you_message.is_empty() {
                ui.add_space(12.0);
                egui::Frame::none()
                    .fill(color_with_alpha(ThemeColors::ACCENT_SUCCESS, 30))
                    .rounding(egui::Rounding::same(6.0))
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(&preview.thank_you_message)
                                .italics()
                                .color(ThemeColors::TEXT_PRIMARY),
                        );
                    });
            }
        });
}
