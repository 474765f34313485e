//! Dashboard application entry point

use eframe::egui;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

use crate::config::WindowConfig;
use crate::dashboard::components::render_sidebar;
use crate::dashboard::state::DashboardState;
use crate::dashboard::theme::{self, ThemeColors};
use crate::dashboard::views::{render_home_view, render_tip_settings_dialog, DialogAction};
use crate::navigation::{Navigator, RouteHistory};
use crate::shared::{SharedAppState, UiCommand};
use crate::storage::TipSettingsStore;

/// The main dashboard application
pub struct DashboardApp {
    /// Shared application state
    shared_state: Arc<RwLock<SharedAppState>>,
    /// Dashboard-specific state
    dashboard_state: DashboardState,
    /// Whether theme has been applied
    theme_applied: bool,
    /// Receives navigation requests
    routes: RouteHistory,
    /// Where saved tip settings go
    tip_store: Box<dyn TipSettingsStore>,
}

impl DashboardApp {
    /// Create a new dashboard application
    pub fn new(shared_state: Arc<RwLock<SharedAppState>>, tip_store: Box<dyn TipSettingsStore>) -> Self {
        Self {
            shared_state,
            dashboard_state: DashboardState::default(),
            theme_applied: false,
            routes: RouteHistory::default(),
            tip_store,
        }
    }

    /// Create eframe options for the dashboard window
    pub fn options(window: &WindowConfig) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([window.width, window.height])
                .with_min_inner_size([900.0, 600.0])
                .with_title("Creator Dashboard"),
            ..Default::default()
        }
    }

    /// Carry out commands raised by the views
    fn process_commands(&mut self) {
        let commands = self.shared_state.write().runtime.drain_commands();

        for command in commands {
            match command {
                UiCommand::Navigate(path) => self.routes.navigate(&path),
                UiCommand::OpenTipSettings => {
                    let current = self.shared_state.read().tip_settings.clone();
                    self.dashboard_state.tip_dialog.open(&current);
                }
            }
        }
    }

    /// Apply the dialog's requested transition
    fn handle_dialog_action(&mut self, action: DialogAction) {
        match action {
            DialogAction::Save => {
                if let Some(saved) = self.dashboard_state.tip_dialog.save(self.tip_store.as_mut()) {
                    self.shared_state.write().tip_settings = saved;
                }
            }
            DialogAction::Cancel | DialogAction::Dismiss => {
                self.dashboard_state.tip_dialog.cancel();
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme once
        if !self.theme_applied {
            theme::apply_theme(ctx);
            self.theme_applied = true;
        }

        // Sidebar panel
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .default_width(180.0)
            .show(ctx, |ui| {
                if let Some(item) = render_sidebar(ui, self.routes.current()) {
                    self.routes.navigate(item.path());
                }
            });

        // Top bar with the active route
        egui::TopBottomPanel::top("route_bar").show(ctx, |ui| {
            let can_go_back = self.routes.can_go_back();
            let previous = self.routes.history().last().map(str::to_owned);
            ui.horizontal(|ui| {
                ui.add_enabled_ui(can_go_back, |ui| {
                    let mut back = ui.small_button("<");
                    if let Some(previous) = &previous {
                        back = back.on_hover_text(format!("Back to {}", previous));
                    }
                    if back.clicked() {
                        self.routes.back();
                    }
                });
                ui.label(
                    egui::RichText::new(self.routes.current())
                        .monospace()
                        .color(ThemeColors::TEXT_SECONDARY),
                );
            });
        });

        // Main content panel
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::none().inner_margin(24.0).show(ui, |ui| {
                render_home_view(ui, &mut self.dashboard_state.home, &self.shared_state);
            });
        });

        self.process_commands();

        let currency_symbol = self.shared_state.read().currency_symbol().to_string();
        if let Some(action) =
            render_tip_settings_dialog(ctx, &mut self.dashboard_state.tip_dialog, &currency_symbol)
        {
            self.handle_dialog_action(action);
        }
    }
}

/// Run the dashboard application
pub fn run_dashboard(
    shared_state: Arc<RwLock<SharedAppState>>,
    tip_store: Box<dyn TipSettingsStore>,
) -> Result<(), eframe::Error> {
    let options = DashboardApp::options(&shared_state.read().config.window);
    let app = DashboardApp::new(shared_state, tip_store);
    info!("Opening dashboard window");
    eframe::run_native(
        "Creator Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::model::mock::sample_snapshot;
    use crate::model::{TipConfigEdit, TipConfiguration};
    use crate::storage::MemoryTipSettingsStore;

    fn test_app() -> DashboardApp {
        let state = SharedAppState::new(
            AppConfig::default(),
            sample_snapshot(),
            TipConfiguration::default(),
        );
        DashboardApp::new(
            Arc::new(RwLock::new(state)),
            Box::new(MemoryTipSettingsStore::default()),
        )
    }

    #[test]
    fn test_navigate_command_updates_route() {
        let mut app = test_app();
        app.shared_state
            .write()
            .runtime
            .request(UiCommand::Navigate("/shows/new".to_string()));

        app.process_commands();

        assert_eq!(app.routes.current(), "/shows/new");
        assert!(app.routes.can_go_back());
    }

    #[test]
    fn test_save_updates_shared_tip_settings() {
        let mut app = test_app();
        app.shared_state.write().runtime.request(UiCommand::OpenTipSettings);
        app.process_commands();
        assert!(app.dashboard_state.tip_dialog.is_open());

        app.dashboard_state
            .tip_dialog
            .form_mut()
            .unwrap()
            .apply(TipConfigEdit::SetTipButtonText("Tip jar".to_string()));
        app.handle_dialog_action(DialogAction::Save);

        assert!(!app.dashboard_state.tip_dialog.is_open());
        assert_eq!(app.shared_state.read().tip_settings.tip_button_text, "Tip jar");
        assert_eq!(app.tip_store.load().unwrap().tip_button_text, "Tip jar");
    }

    #[test]
    fn test_dismiss_discards_edits() {
        let mut app = test_app();
        app.shared_state.write().runtime.request(UiCommand::OpenTipSettings);
        app.process_commands();

        app.dashboard_state
            .tip_dialog
            .form_mut()
            .unwrap()
            .apply(TipConfigEdit::SetTipsEnabled(false));
        app.handle_dialog_action(DialogAction::Dismiss);

        assert!(!app.dashboard_state.tip_dialog.is_open());
        assert!(app.shared_state.read().tip_settings.tips_enabled);
    }
}
