//! Tip settings dialog lifecycle
//!
//! The dialog is either closed or open with a private copy of the
//! configuration. Edits only touch that copy; saving hands it to the store
//! and closes the dialog, anything else throws it away.

use tracing::{debug, info, warn};

use crate::model::tips::SUGGESTED_AMOUNT_SLOTS;
use crate::model::{PaymentMethod, TipConfigEdit, TipConfiguration};
use crate::storage::TipSettingsStore;

/// Form state while the dialog is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipSettingsForm {
    config: TipConfiguration,
    /// Text as typed into each amount field
    amount_inputs: [String; SUGGESTED_AMOUNT_SLOTS],
    /// Text as typed into the minimum amount field
    minimum_input: String,
}

impl TipSettingsForm {
    pub fn new(config: TipConfiguration) -> Self {
        Self {
            amount_inputs: config.suggested_amounts.map(|amount| amount.to_string()),
            minimum_input: config.minimum_amount.to_string(),
            config,
        }
    }

    /// Configuration including all unsaved edits
    pub fn config(&self) -> &TipConfiguration {
        &self.config
    }

    pub fn amount_input(&self, slot: usize) -> &str {
        self.amount_inputs
            .get(slot)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn minimum_input(&self) -> &str {
        &self.minimum_input
    }

    /// Apply an edit to the working copy
    pub fn apply(&mut self, edit: TipConfigEdit) {
        debug!("Tip settings edit: {:?}", edit);

        match &edit {
            TipConfigEdit::SetSuggestedAmount { slot, input } => {
                if let Some(buffer) = self.amount_inputs.get_mut(*slot) {
                    buffer.clone_from(input);
                }
            }
            TipConfigEdit::SetMinimumAmount(input) => self.minimum_input.clone_from(input),
            _ => {}
        }

        if let Err(e) = self.config.apply(edit) {
            warn!("Ignoring tip settings edit: {}", e);
        }
    }

    pub fn into_config(self) -> TipConfiguration {
        self.config
    }
}

/// Optional form fields shown for a configuration. Hidden fields keep their
/// stored values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormVisibility {
    pub minimum_amount: bool,
    /// Methods whose handle field is shown, in display order
    pub handles: Vec<PaymentMethod>,
    pub button_text: bool,
}

impl FormVisibility {
    pub fn for_config(config: &TipConfiguration) -> Self {
        Self {
            minimum_amount: config.allow_custom_amount,
            handles: PaymentMethod::ALL
                .into_iter()
                .filter(|method| {
                    config.payment_methods.is_enabled(*method) && method.handle_label().is_some()
                })
                .collect(),
            button_text: config.show_tip_button,
        }
    }

    pub fn shows_handle(&self, method: PaymentMethod) -> bool {
        self.handles.contains(&method)
    }
}

/// Whether this frame's input closes the dialog from outside the form.
///
/// Escape only counts when no field had keyboard focus at the start of the
/// frame; otherwise it just releases the field.
pub fn dismiss_requested(window_closed: bool, escape_pressed: bool, field_focused: bool) -> bool {
    window_closed || (escape_pressed && !field_focused)
}

/// Open/closed state of the tip settings dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TipSettingsDialog {
    #[default]
    Closed,
    Open(TipSettingsForm),
}

impl TipSettingsDialog {
    pub fn is_open(&self) -> bool {
        matches!(self, TipSettingsDialog::Open(_))
    }

    /// Open with a copy of the current configuration. Does nothing if
    /// already open, so in-progress edits are never overwritten.
    pub fn open(&mut self, initial: &TipConfiguration) {
        if self.is_open() {
            debug!("Tip settings dialog already open");
            return;
        }
        info!("Opening tip settings");
        *self = TipSettingsDialog::Open(TipSettingsForm::new(initial.clone()));
    }

    pub fn form(&self) -> Option<&TipSettingsForm> {
        match self {
            TipSettingsDialog::Open(form) => Some(form),
            TipSettingsDialog::Closed => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut TipSettingsForm> {
        match self {
            TipSettingsDialog::Open(form) => Some(form),
            TipSettingsDialog::Closed => None,
        }
    }

    /// Discard edits and close
    pub fn cancel(&mut self) {
        if self.is_open() {
            info!("Tip settings edits discarded");
        }
        *self = TipSettingsDialog::Closed;
    }

    /// Hand the edited configuration to the store and close.
    ///
    /// Store failures are logged and not reported back; the dialog closes
    /// either way. Returns the configuration that was handed over.
    pub fn save(&mut self, store: &mut dyn TipSettingsStore) -> Option<TipConfiguration> {
        let TipSettingsDialog::Open(form) = std::mem::take(self) else {
            return None;
        };

        let config = form.into_config();
        match store.save(&config) {
            Ok(()) => info!("Tip settings saved"),
            Err(e) => warn!("Failed to save tip settings: {:#}", e),
        }
        Some(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryTipSettingsStore;

    struct FailingStore;

    impl TipSettingsStore for FailingStore {
        fn load(&self) -> anyhow::Result<TipConfiguration> {
            Ok(TipConfiguration::default())
        }

        fn save(&mut self, _config: &TipConfiguration) -> anyhow::Result<()> {
            anyhow::bail!("disk full")
        }
    }

    fn open_dialog() -> TipSettingsDialog {
        let mut dialog = TipSettingsDialog::default();
        dialog.open(&TipConfiguration::default());
        dialog
    }

    #[test]
    fn test_starts_closed() {
        let dialog = TipSettingsDialog::default();
        assert!(!dialog.is_open());
        assert!(dialog.form().is_none());
    }

    #[test]
    fn test_open_copies_configuration_into_inputs() {
        let mut initial = TipConfiguration::default();
        initial.suggested_amounts = [1, 2, 3, 4];
        initial.minimum_amount = 9;

        let mut dialog = TipSettingsDialog::default();
        dialog.open(&initial);

        let form = dialog.form().unwrap();
        assert_eq!(form.config(), &initial);
        assert_eq!(form.amount_input(2), "3");
        assert_eq!(form.minimum_input(), "9");
        assert_eq!(form.amount_input(SUGGESTED_AMOUNT_SLOTS), "");
    }

    #[test]
    fn test_reopening_keeps_edits() {
        let mut dialog = open_dialog();
        dialog
            .form_mut()
            .unwrap()
            .apply(TipConfigEdit::SetThankYouMessage("Cheers".to_string()));

        dialog.open(&TipConfiguration::default());

        assert_eq!(dialog.form().unwrap().config().thank_you_message, "Cheers");
    }

    #[test]
    fn test_input_buffer_keeps_raw_text() {
        let mut dialog = open_dialog();
        let form = dialog.form_mut().unwrap();

        form.apply(TipConfigEdit::SetSuggestedAmount { slot: 0, input: "abc".to_string() });
        form.apply(TipConfigEdit::SetMinimumAmount("2x".to_string()));

        assert_eq!(form.amount_input(0), "abc");
        assert_eq!(form.config().suggested_amounts[0], 0);
        assert_eq!(form.minimum_input(), "2x");
        assert_eq!(form.config().minimum_amount, 2);
    }

    #[test]
    fn test_cancel_discards_edits() {
        let mut store = MemoryTipSettingsStore::default();
        let mut dialog = open_dialog();
        dialog
            .form_mut()
            .unwrap()
            .apply(TipConfigEdit::SetTipsEnabled(false));

        dialog.cancel();

        assert!(!dialog.is_open());
        assert_eq!(dialog.save(&mut store), None);
        assert_eq!(store.saves(), 0);
        assert!(store.load().unwrap().tips_enabled);
    }

    #[test]
    fn test_save_hands_over_configuration_and_closes() {
        let mut store = MemoryTipSettingsStore::default();
        let mut dialog = open_dialog();
        let form = dialog.form_mut().unwrap();
        form.apply(TipConfigEdit::SetPaymentMethod {
            method: PaymentMethod::PayPal,
            enabled: true,
        });
        form.apply(TipConfigEdit::SetPaymentHandle {
            method: PaymentMethod::PayPal,
            handle: "me@example.com".to_string(),
        });

        let saved = dialog.save(&mut store).unwrap();

        assert!(!dialog.is_open());
        assert_eq!(store.saves(), 1);
        assert_eq!(store.load().unwrap(), saved);
        assert_eq!(saved.paypal_email, "me@example.com");
    }

    #[test]
    fn test_save_failure_still_closes() {
        let mut dialog = open_dialog();

        let saved = dialog.save(&mut FailingStore);

        assert!(saved.is_some());
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_rejected_edit_leaves_form_unchanged() {
        let mut dialog = open_dialog();
        let form = dialog.form_mut().unwrap();
        let before = form.clone();

        form.apply(TipConfigEdit::SetPaymentHandle {
            method: PaymentMethod::CreditCard,
            handle: "1234".to_string(),
        });

        assert_eq!(*form, before);
    }

    #[test]
    fn test_visibility_follows_toggles() {
        let mut config = TipConfiguration::default();
        let visible = FormVisibility::for_config(&config);
        assert!(visible.minimum_amount);
        assert!(visible.button_text);
        assert_eq!(visible.handles, vec![PaymentMethod::Venmo, PaymentMethod::CashApp]);

        config.apply(TipConfigEdit::SetAllowCustomAmount(false)).unwrap();
        config.apply(TipConfigEdit::SetShowTipButton(false)).unwrap();
        config
            .apply(TipConfigEdit::SetPaymentMethod { method: PaymentMethod::Venmo, enabled: false })
            .unwrap();
        config
            .apply(TipConfigEdit::SetPaymentMethod { method: PaymentMethod::PayPal, enabled: true })
            .unwrap();

        let visible = FormVisibility::for_config(&config);
        assert!(!visible.minimum_amount);
        assert!(!visible.button_text);
        assert!(!visible.shows_handle(PaymentMethod::Venmo));
        assert!(visible.shows_handle(PaymentMethod::PayPal));
        assert!(!visible.shows_handle(PaymentMethod::CreditCard));
    }

    #[test]
    fn test_hidden_handle_keeps_value() {
        let mut form = TipSettingsForm::new(TipConfiguration::default());
        form.apply(TipConfigEdit::SetPaymentMethod { method: PaymentMethod::Venmo, enabled: false });

        assert!(!FormVisibility::for_config(form.config()).shows_handle(PaymentMethod::Venmo));
        assert_eq!(form.config().handle(PaymentMethod::Venmo), Some("@creator"));
    }

    #[test]
    fn test_escape_in_focused_field_keeps_dialog() {
        assert!(!dismiss_requested(false, true, true));
        assert!(dismiss_requested(false, true, false));
        assert!(dismiss_requested(true, false, true));
        assert!(!dismiss_requested(false, false, false));
    }
}
