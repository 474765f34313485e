//! Tip configuration and the edits the settings dialog applies to it

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of preset amounts offered to a tipper
pub const SUGGESTED_AMOUNT_SLOTS: usize = 4;

/// Payment methods a creator can accept tips through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    Venmo,
    CashApp,
    PayPal,
    CreditCard,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Venmo,
        PaymentMethod::CashApp,
        PaymentMethod::PayPal,
        PaymentMethod::CreditCard,
    ];

    /// Get the display name for this method
    pub fn name(&self) -> &'static str {
        match self {
            PaymentMethod::Venmo => "Venmo",
            PaymentMethod::CashApp => "Cash App",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::CreditCard => "Credit Card",
        }
    }

    /// Label for the method's handle field, if the method has one
    pub fn handle_label(&self) -> Option<&'static str> {
        match self {
            PaymentMethod::Venmo => Some("Venmo username"),
            PaymentMethod::CashApp => Some("Cash App $cashtag"),
            PaymentMethod::PayPal => Some("PayPal email"),
            PaymentMethod::CreditCard => None,
        }
    }

    /// Placeholder shown in an empty handle field
    pub fn handle_hint(&self) -> &'static str {
        match self {
            PaymentMethod::Venmo => "@username",
            PaymentMethod::CashApp => "$cashtag",
            PaymentMethod::PayPal => "you@example.com",
            PaymentMethod::CreditCard => "",
        }
    }
}

/// Which payment methods are switched on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethods {
    pub venmo: bool,
    pub cashapp: bool,
    pub paypal: bool,
    pub credit_card: bool,
}

impl PaymentMethods {
    pub fn is_enabled(&self, method: PaymentMethod) -> bool {
        match method {
            PaymentMethod::Venmo => self.venmo,
            PaymentMethod::CashApp => self.cashapp,
            PaymentMethod::PayPal => self.paypal,
            PaymentMethod::CreditCard => self.credit_card,
        }
    }

    pub fn set(&mut self, method: PaymentMethod, enabled: bool) {
        match method {
            PaymentMethod::Venmo => self.venmo = enabled,
            PaymentMethod::CashApp => self.cashapp = enabled,
            PaymentMethod::PayPal => self.paypal = enabled,
            PaymentMethod::CreditCard => self.credit_card = enabled,
        }
    }

    /// Enabled methods in display order
    pub fn enabled(&self) -> impl Iterator<Item = PaymentMethod> + '_ {
        PaymentMethod::ALL.into_iter().filter(|m| self.is_enabled(*m))
    }
}

impl Default for PaymentMethods {
    fn default() -> Self {
        Self {
            venmo: true,
            cashapp: true,
            paypal: false,
            credit_card: true,
        }
    }
}

/// How a creator accepts tips and how the tip widget looks to viewers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TipConfiguration {
    /// Master switch for tipping
    pub tips_enabled: bool,
    /// Preset amounts, in whole currency units
    pub suggested_amounts: [u32; SUGGESTED_AMOUNT_SLOTS],
    /// Whether a tipper may enter their own amount
    pub allow_custom_amount: bool,
    /// Lower bound for custom amounts; only meaningful with `allow_custom_amount`
    pub minimum_amount: u32,
    pub payment_methods: PaymentMethods,
    pub venmo_handle: String,
    pub cashapp_handle: String,
    pub paypal_email: String,
    /// Show the tip button on the public profile
    pub show_tip_button: bool,
    /// Button label; only meaningful with `show_tip_button`
    pub tip_button_text: String,
    /// Shown to a tipper after a successful tip
    pub thank_you_message: String,
}

impl Default for TipConfiguration {
    fn default() -> Self {
        Self {
            tips_enabled: true,
            suggested_amounts: [5, 10, 20, 50],
            allow_custom_amount: true,
            minimum_amount: 1,
            payment_methods: PaymentMethods::default(),
            venmo_handle: "@creator".to_string(),
            cashapp_handle: "$creator".to_string(),
            paypal_email: String::new(),
            show_tip_button: true,
            tip_button_text: "Support this creator".to_string(),
            thank_you_message: "Thank you for your support!".to_string(),
        }
    }
}

/// A single field-level change to a [`TipConfiguration`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TipConfigEdit {
    SetTipsEnabled(bool),
    /// Raw text typed into an amount slot
    SetSuggestedAmount { slot: usize, input: String },
    SetAllowCustomAmount(bool),
    /// Raw text typed into the minimum amount field
    SetMinimumAmount(String),
    SetPaymentMethod { method: PaymentMethod, enabled: bool },
    SetPaymentHandle { method: PaymentMethod, handle: String },
    SetShowTipButton(bool),
    SetTipButtonText(String),
    SetThankYouMessage(String),
}

/// Rejected edits
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TipConfigError {
    #[error("suggested amount slot {0} is out of range")]
    SlotOutOfRange(usize),
    #[error("{} has no handle to set", .0.name())]
    NoHandle(PaymentMethod),
}

impl TipConfiguration {
    /// Apply one edit. Every edit writes exactly one field.
    pub fn apply(&mut self, edit: TipConfigEdit) -> Result<(), TipConfigError> {
        match edit {
            TipConfigEdit::SetTipsEnabled(enabled) => self.tips_enabled = enabled,
            TipConfigEdit::SetSuggestedAmount { slot, input } => {
                let amount = self
                    .suggested_amounts
                    .get_mut(slot)
                    .ok_or(TipConfigError::SlotOutOfRange(slot))?;
                *amount = coerce_amount(&input);
            }
            TipConfigEdit::SetAllowCustomAmount(allow) => self.allow_custom_amount = allow,
            TipConfigEdit::SetMinimumAmount(input) => self.minimum_amount = coerce_amount(&input),
            TipConfigEdit::SetPaymentMethod { method, enabled } => {
                self.payment_methods.set(method, enabled)
            }
            TipConfigEdit::SetPaymentHandle { method, handle } => {
                *self
                    .handle_mut(method)
                    .ok_or(TipConfigError::NoHandle(method))? = handle;
            }
            TipConfigEdit::SetShowTipButton(show) => self.show_tip_button = show,
            TipConfigEdit::SetTipButtonText(text) => self.tip_button_text = text,
            TipConfigEdit::SetThankYouMessage(text) => self.thank_you_message = text,
        }
        Ok(())
    }

    /// Stored handle for a method, even when the method is disabled
    pub fn handle(&self, method: PaymentMethod) -> Option<&str> {
        match method {
            PaymentMethod::Venmo => Some(&self.venmo_handle),
            PaymentMethod::CashApp => Some(&self.cashapp_handle),
            PaymentMethod::PayPal => Some(&self.paypal_email),
            PaymentMethod::CreditCard => None,
        }
    }

    fn handle_mut(&mut self, method: PaymentMethod) -> Option<&mut String> {
        match method {
            PaymentMethod::Venmo => Some(&mut self.venmo_handle),
            PaymentMethod::CashApp => Some(&mut self.cashapp_handle),
            PaymentMethod::PayPal => Some(&mut self.paypal_email),
            PaymentMethod::CreditCard => None,
        }
    }
}

/// Parse user input as a whole amount.
///
/// Takes the leading integer of the trimmed input, so `"12abc"` is 12.
/// Input without leading digits and negative numbers become 0; values past
/// `u32::MAX` saturate.
pub fn coerce_amount(input: &str) -> u32 {
    let trimmed = input.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];

    if digits.is_empty() || negative {
        return 0;
    }

    digits.bytes().fold(0u32, |acc, b| {
        acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
    })
}
