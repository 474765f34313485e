//! Shared application state between the views and the app loop

use crate::config::AppConfig;
use crate::model::{CreatorSnapshot, TipConfiguration};

/// Central application state
#[derive(Debug, Clone)]
pub struct SharedAppState {
    /// Application configuration
    pub config: AppConfig,
    /// Creator data shown on the dashboard
    pub snapshot: CreatorSnapshot,
    /// Last saved tip configuration; the dialog opens from this
    pub tip_settings: TipConfiguration,
    /// Runtime state (not persisted)
    pub runtime: RuntimeState,
}

impl SharedAppState {
    pub fn new(config: AppConfig, snapshot: CreatorSnapshot, tip_settings: TipConfiguration) -> Self {
        Self {
            config,
            snapshot,
            tip_settings,
            runtime: RuntimeState::default(),
        }
    }

    /// Currency prefix used for money values
    pub fn currency_symbol(&self) -> &str {
        &self.config.display.currency_symbol
    }
}

/// Command raised by a view for the app loop to carry out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// Go to a route
    Navigate(String),
    /// Open the tip settings dialog
    OpenTipSettings,
}

/// Runtime state that is not persisted
#[derive(Debug, Clone, Default)]
pub struct RuntimeState {
    /// Commands raised this frame, in order
    pub commands: Vec<UiCommand>,
}

impl RuntimeState {
    pub fn request(&mut self, command: UiCommand) {
        self.commands.push(command);
    }

    /// Take all pending commands
    pub fn drain_commands(&mut self) -> Vec<UiCommand> {
        std::mem::take(&mut self.commands)
    }
}
