//! Home view - Creator summary, shows, tips and links

use egui::{Color32, RichText};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::dashboard::components::{link, link_list, SummaryCard};
use crate::dashboard::layout::{
    ActivityRow, BusinessCard, DashboardLayout, LinkAction, ProfileCard, ShowRow, TipsPanel,
};
use crate::dashboard::state::HomeViewState;
use crate::dashboard::theme::{color_with_alpha, section_frame, BrandColors, ThemeColors};
use crate::model::creator::ShowStatus;
use crate::navigation;
use crate::shared::{SharedAppState, UiCommand};

/// Render the home view
pub fn render_home_view(
    ui: &mut egui::Ui,
    view_state: &mut HomeViewState,
    shared_state: &Arc<RwLock<SharedAppState>>,
) {
    let layout = view_state.layout.get_or_insert_with(|| {
        let state = shared_state.read();
        DashboardLayout::build(&state.snapshot, state.currency_symbol())
    });

    let mut actions: Vec<LinkAction> = Vec::new();

    ui.heading(RichText::new(&layout.greeting).size(24.0).strong());
    ui.add_space(8.0);
    ui.label(
        RichText::new("Here's how your shows and tips are doing")
            .size(14.0)
            .color(ThemeColors::TEXT_SECONDARY),
    );

    ui.add_space(24.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        // Summary cards row
        let accents = [
            BrandColors::TIP,
            BrandColors::LINK,
            BrandColors::EARNINGS,
            ThemeColors::ACCENT_SECONDARY,
        ];
        ui.horizontal_wrapped(|ui| {
            for (card, accent) in layout.summary_cards.iter().zip(accents.iter().cycle()) {
                SummaryCard::new(card).with_accent(*accent).show(ui);
                ui.add_space(16.0);
            }
        });

        ui.add_space(24.0);

        ui.columns(2, |columns| {
            render_shows_panel(&mut columns[0], &layout.shows, &mut actions, &layout.add_show);
            columns[0].add_space(16.0);
            render_activity_panel(&mut columns[0], &layout.activity);

            render_tips_panel(&mut columns[1], &layout.tips, &mut actions);
            columns[1].add_space(16.0);
            render_profile_card(&mut columns[1], &layout.profile, &mut actions);
            columns[1].add_space(16.0);
            render_business_card(&mut columns[1], &layout.business, &mut actions);
        });

        ui.add_space(24.0);

        ui.columns(2, |columns| {
            section_frame().show(&mut columns[0], |ui| {
                ui.set_min_width(ui.available_width());
                actions.extend(link_list(ui, "Quick Links", &layout.quick_links));
            });
            section_frame().show(&mut columns[1], |ui| {
                ui.set_min_width(ui.available_width());
                actions.extend(link_list(ui, "Help & Resources", &layout.help_links));
            });
        });
    });

    if !actions.is_empty() {
        let mut state = shared_state.write();
        for action in actions {
            state.runtime.request(match action {
                LinkAction::Navigate(path) => UiCommand::Navigate(path),
                LinkAction::OpenTipSettings => UiCommand::OpenTipSettings,
            });
        }
    }
}

/// Section heading with an optional right-aligned link
fn section_header(
    ui: &mut egui::Ui,
    title: &str,
    trailing: Option<&crate::dashboard::layout::LinkItem>,
    actions: &mut Vec<LinkAction>,
) {
    ui.horizontal(|ui| {
        ui.heading(RichText::new(title).size(18.0));
        if let Some(item) = trailing {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                actions.extend(link(ui, item));
            });
        }
    });
    ui.add_space(12.0);
}

fn render_shows_panel(
    ui: &mut egui::Ui,
    shows: &[ShowRow],
    actions: &mut Vec<LinkAction>,
    add_show: &crate::dashboard::layout::LinkItem,
) {
    section_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        section_header(ui, "Your Shows", Some(add_show), actions);

        if shows.is_empty() {
            ui.label(
                RichText::new("You haven't created any shows yet")
                    .color(ThemeColors::TEXT_MUTED),
            );
            return;
        }

        for show in shows {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    if ui
                        .link(RichText::new(&show.title).strong().color(ThemeColors::TEXT_PRIMARY))
                        .clicked()
                    {
                        actions.push(LinkAction::Navigate(navigation::show_path(&show.id)));
                    }
                    let details = if show.venue.is_empty() {
                        show.date.clone()
                    } else {
                        format!("{} · {}", show.date, show.venue)
                    };
                    ui.label(RichText::new(details).size(12.0).color(ThemeColors::TEXT_MUTED));
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    status_badge(ui, show.status);
                    ui.add_space(8.0);
                    ui.label(RichText::new(&show.views).size(12.0).color(ThemeColors::TEXT_SECONDARY));
                });
            });
            ui.separator();
        }
    });
}

fn status_badge(ui: &mut egui::Ui, status: ShowStatus) {
    let color = match status {
        ShowStatus::Upcoming => BrandColors::LINK,
        ShowStatus::Live => ThemeColors::ACCENT_SUCCESS,
        ShowStatus::Past => ThemeColors::TEXT_MUTED,
    };

    egui::Frame::none()
        .fill(color_with_alpha(color, 40))
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(RichText::new(status.label()).size(11.0).color(color));
        });
}

fn render_activity_panel(ui: &mut egui::Ui, activity: &[ActivityRow]) {
    section_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.heading(RichText::new("Recent Activity").size(18.0));
        ui.add_space(12.0);

        if activity.is_empty() {
            ui.label(RichText::new("No recent activity").color(ThemeColors::TEXT_MUTED));
            return;
        }

        for item in activity {
            ui.horizontal(|ui| {
                ui.label(RichText::new(item.icon).strong().color(BrandColors::TIP));
                ui.add_space(4.0);
                ui.label(&item.description);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(&item.date).size(11.0).color(ThemeColors::TEXT_MUTED));
                });
            });
            ui.add_space(4.0);
        }
    });
}

fn render_tips_panel(ui: &mut egui::Ui, tips: &TipsPanel, actions: &mut Vec<LinkAction>) {
    section_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.heading(RichText::new("Recent Tips").size(18.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Tip Settings").clicked() {
                    actions.push(LinkAction::OpenTipSettings);
                }
            });
        });
        ui.add_space(12.0);

        match tips {
            TipsPanel::Empty { icon, message } => {
                ui.vertical_centered(|ui| {
                    ui.add_space(16.0);
                    ui.label(RichText::new(*icon).size(32.0).color(ThemeColors::TEXT_MUTED));
                    ui.add_space(8.0);
                    ui.label(RichText::new(*message).size(14.0).color(ThemeColors::TEXT_MUTED));
                    ui.add_space(16.0);
                });
            }
            TipsPanel::Rows(rows) => {
                for tip in rows {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(&tip.from).strong());
                            if let Some(message) = &tip.message {
                                ui.label(
                                    RichText::new(format!("\"{}\"", message))
                                        .size(12.0)
                                        .italics()
                                        .color(ThemeColors::TEXT_SECONDARY),
                                );
                            }
                            ui.label(RichText::new(&tip.date).size(11.0).color(ThemeColors::TEXT_MUTED));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                RichText::new(&tip.amount)
                                    .size(16.0)
                                    .strong()
                                    .color(BrandColors::EARNINGS),
                            );
                        });
                    });
                    ui.separator();
                }
            }
        }
    });
}

fn render_profile_card(ui: &mut egui::Ui, profile: &ProfileCard, actions: &mut Vec<LinkAction>) {
    section_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            // Avatar badge
            let (rect, _) = ui.allocate_exact_size(egui::vec2(48.0, 48.0), egui::Sense::hover());
            ui.painter()
                .circle_filled(rect.center(), 24.0, ThemeColors::ACCENT_SECONDARY);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                &profile.initials,
                egui::FontId::proportional(18.0),
                Color32::WHITE,
            );
            ui.add_space(8.0);

            ui.vertical(|ui| {
                ui.label(RichText::new(&profile.display_name).size(16.0).strong());
                ui.label(RichText::new(&profile.handle).color(ThemeColors::TEXT_SECONDARY));
                ui.label(
                    RichText::new(&profile.member_since)
                        .size(11.0)
                        .color(ThemeColors::TEXT_MUTED),
                );
            });
        });

        if !profile.bio.is_empty() {
            ui.add_space(8.0);
            ui.label(&profile.bio);
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            for item in &profile.links {
                actions.extend(link(ui, item));
                ui.add_space(12.0);
            }
        });
    });
}

fn render_business_card(ui: &mut egui::Ui, business: &BusinessCard, actions: &mut Vec<LinkAction>) {
    section_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.heading(RichText::new("Business Profile").size(18.0));
        ui.add_space(8.0);

        match business {
            BusinessCard::Listed {
                name,
                category,
                verified,
                manage,
            } => {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(name).strong());
                    if *verified {
                        ui.label(
                            RichText::new("Verified")
                                .size(11.0)
                                .color(ThemeColors::ACCENT_SUCCESS),
                        );
                    }
                });
                ui.label(RichText::new(category).color(ThemeColors::TEXT_SECONDARY));
                ui.add_space(8.0);
                actions.extend(link(ui, manage));
            }
            BusinessCard::Missing { create } => {
                ui.label(
                    RichText::new("List your business separately from your creator profile")
                        .color(ThemeColors::TEXT_MUTED),
                );
                ui.add_space(8.0);
                actions.extend(link(ui, create));
            }
        }
    });
}
