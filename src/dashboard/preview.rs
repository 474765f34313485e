//! Live preview of the tip widget as a viewer would see it

use crate::format::format_count;
use crate::model::{PaymentMethod, TipConfiguration};

/// An accepted payment method in the preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewMethod {
    pub method: PaymentMethod,
    /// Handle to display, when one is set
    pub handle: Option<String>,
}

/// Tip widget derived from the configuration being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipPreview {
    pub tips_enabled: bool,
    /// One label per suggested amount, in slot order
    pub amount_labels: Vec<String>,
    /// Custom amount hint, present only when custom amounts are allowed
    pub custom_amount: Option<String>,
    pub payment_methods: Vec<PreviewMethod>,
    /// Button label, present only when the button is shown
    pub button_text: Option<String>,
    pub thank_you_message: String,
}

impl TipPreview {
    pub fn from_config(config: &TipConfiguration, currency_symbol: &str) -> Self {
        let amount_labels = config
            .suggested_amounts
            .iter()
            .map(|amount| format!("{}{}", currency_symbol, format_count(u64::from(*amount))))
            .collect();

        let custom_amount = config.allow_custom_amount.then(|| {
            format!(
                "Custom amount (min {}{})",
                currency_symbol,
                format_count(u64::from(config.minimum_amount))
            )
        });

        let payment_methods = config
            .payment_methods
            .enabled()
            .map(|method| PreviewMethod {
                method,
                handle: config
                    .handle(method)
                    .filter(|handle| !handle.trim().is_empty())
                    .map(str::to_string),
            })
            .collect();

        Self {
            tips_enabled: config.tips_enabled,
            amount_labels,
            custom_amount,
            payment_methods,
            button_text: config
                .show_tip_button
                .then(|| config.tip_button_text.clone()),
            thank_you_message: config.thank_you_message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TipConfigEdit;

    #[test]
    fn test_preview_reflects_unsaved_amounts() {
        let mut config = TipConfiguration::default();
        config
            .apply(TipConfigEdit::SetSuggestedAmount { slot: 1, input: "1500".to_string() })
            .unwrap();
        config
            .apply(TipConfigEdit::SetSuggestedAmount { slot: 3, input: "oops".to_string() })
            .unwrap();

        let preview = TipPreview::from_config(&config, "$");

        assert_eq!(preview.amount_labels, vec!["$5", "$1,500", "$20", "$0"]);
    }

    #[test]
    fn test_custom_amount_only_when_allowed() {
        let mut config = TipConfiguration::default();
        config.apply(TipConfigEdit::SetMinimumAmount("3".to_string())).unwrap();
        assert_eq!(
            TipPreview::from_config(&config, "$").custom_amount.as_deref(),
            Some("Custom amount (min $3)")
        );

        config.apply(TipConfigEdit::SetAllowCustomAmount(false)).unwrap();
        assert_eq!(TipPreview::from_config(&config, "$").custom_amount, None);
        assert_eq!(config.minimum_amount, 3);
    }

    #[test]
    fn test_button_hidden_then_restored() {
        let mut config = TipConfiguration::default();
        config
            .apply(TipConfigEdit::SetTipButtonText("Tip the band".to_string()))
            .unwrap();

        config.apply(TipConfigEdit::SetShowTipButton(false)).unwrap();
        assert_eq!(TipPreview::from_config(&config, "$").button_text, None);

        config.apply(TipConfigEdit::SetShowTipButton(true)).unwrap();
        assert_eq!(
            TipPreview::from_config(&config, "$").button_text.as_deref(),
            Some("Tip the band")
        );
    }

    #[test]
    fn test_payment_methods_listed_in_order_with_handles() {
        let mut config = TipConfiguration::default();
        config
            .apply(TipConfigEdit::SetPaymentMethod { method: PaymentMethod::PayPal, enabled: true })
            .unwrap();
        config
            .apply(TipConfigEdit::SetPaymentMethod { method: PaymentMethod::CashApp, enabled: false })
            .unwrap();

        let preview = TipPreview::from_config(&config, "$");

        assert_eq!(
            preview.payment_methods,
            vec![
                PreviewMethod {
                    method: PaymentMethod::Venmo,
                    handle: Some("@creator".to_string()),
                },
                PreviewMethod {
                    method: PaymentMethod::PayPal,
                    handle: None,
                },
                PreviewMethod {
                    method: PaymentMethod::CreditCard,
                    handle: None,
                },
            ]
        );
    }

    #[test]
    fn test_disabled_tips_still_carry_message() {
        let mut config = TipConfiguration::default();
        config.apply(TipConfigEdit::SetTipsEnabled(false)).unwrap();

        let preview = TipPreview::from_config(&config, "$");

        assert!(!preview.tips_enabled);
        assert_eq!(preview.thank_you_message, "Thank you for your support!");
    }
}
