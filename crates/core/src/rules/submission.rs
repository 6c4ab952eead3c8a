//! Rules that apply to every order regardless of shipment mode.

use crate::measure::try_compute_cbm;
use crate::order::ShipmentOrder;
use crate::postal;

use super::{Rule, ValidationMessage, ValidationPolicy};

/// Every order needs a tracking number, in any mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackingNumberRequired;

impl Rule for TrackingNumberRequired {
    fn name(&self) -> &'static str {
        "tracking_number_required"
    }

    fn check(&self, order: &ShipmentOrder, _policy: &ValidationPolicy, out: &mut Vec<ValidationMessage>) {
        if !order.has_tracking_number() {
            out.push(ValidationMessage::error("Tracking number is required"));
        }
    }
}

/// At least one line item.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineItemsRequired;

impl Rule for LineItemsRequired {
    fn name(&self) -> &'static str {
        "line_items_required"
    }

    fn check(&self, order: &ShipmentOrder, _policy: &ValidationPolicy, out: &mut Vec<ValidationMessage>) {
        if order.items.is_empty() {
            out.push(ValidationMessage::error("At least one line item is required"));
        }
    }
}

/// Quantities below 1 cannot be submitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositiveQuantity;

impl Rule for PositiveQuantity {
    fn name(&self) -> &'static str {
        "positive_quantity"
    }

    fn check(&self, order: &ShipmentOrder, _policy: &ValidationPolicy, out: &mut Vec<ValidationMessage>) {
        for (index, item) in order.items.iter().enumerate() {
            if item.quantity < 1 {
                out.push(ValidationMessage::error(format!(
                    "Item {}: quantity must be at least 1",
                    index + 1
                )));
            }
        }
    }
}

/// Classification codes may be left blank while editing, not at submission.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassificationCodeRequired;

impl Rule for ClassificationCodeRequired {
    fn name(&self) -> &'static str {
        "classification_code_required"
    }

    fn check(&self, order: &ShipmentOrder, _policy: &ValidationPolicy, out: &mut Vec<ValidationMessage>) {
        for (index, item) in order.items.iter().enumerate() {
            if item.classification_code.trim().is_empty() {
                out.push(ValidationMessage::error(format!(
                    "Item {}: classification code is required",
                    index + 1
                )));
            }
        }
    }
}

/// Strict mode only: every dimension must be entered.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositiveDimensions;

impl Rule for PositiveDimensions {
    fn name(&self) -> &'static str {
        "positive_dimensions"
    }

    fn check(&self, order: &ShipmentOrder, policy: &ValidationPolicy, out: &mut Vec<ValidationMessage>) {
        if !policy.strict_dimensions {
            return;
        }
        for (index, item) in order.items.iter().enumerate() {
            if let Err(e) = try_compute_cbm(item.width_cm, item.height_cm, item.depth_cm) {
                out.push(ValidationMessage::error(format!("Item {}: {e}", index + 1)));
            }
        }
    }
}

/// Enforcement mode only: a recipient postal code, when given, must match the
/// destination's pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostalCodeFormat;

impl Rule for PostalCodeFormat {
    fn name(&self) -> &'static str {
        "postal_code_format"
    }

    fn check(&self, order: &ShipmentOrder, policy: &ValidationPolicy, out: &mut Vec<ValidationMessage>) {
        if !policy.enforce_postal_codes {
            return;
        }
        let Some(code) = order
            .recipient
            .postal_code
            .as_deref()
            .filter(|code| !code.trim().is_empty())
        else {
            return;
        };
        if !postal::is_valid(order.destination, code) {
            out.push(ValidationMessage::error(format!(
                "Postal code '{}' is not valid for {}: {}",
                code.trim(),
                order.destination,
                postal::guide_for(order.destination)
            )));
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::order::LineItem;
    use crate::types::{Country, ShipmentMode};

    fn run(rule: &dyn Rule, order: &ShipmentOrder, policy: &ValidationPolicy) -> Vec<ValidationMessage> {
        let mut out = Vec::new();
        rule.check(order, policy, &mut out);
        out
    }

    fn sea_order() -> ShipmentOrder {
        let mut order = ShipmentOrder::new(ShipmentMode::Sea, Country::Japan);
        order.tracking_number = "TRK-9".to_string();
        order
    }

    #[test]
    fn test_empty_order_needs_items() {
        let messages = run(&LineItemsRequired, &sea_order(), &ValidationPolicy::default());
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_zero_quantity_and_blank_code() {
        let mut order = sea_order();
        order.add_item(LineItem::new("6109", "ok"));
        order.add_item(LineItem::new("  ", "no code").with_quantity(0));
        let policy = ValidationPolicy::default();

        let quantity = run(&PositiveQuantity, &order, &policy);
        assert_eq!(quantity.len(), 1);
        assert!(quantity[0].text.starts_with("Item 2:"));

        let codes = run(&ClassificationCodeRequired, &order, &policy);
        assert_eq!(codes.len(), 1);
        assert!(codes[0].text.starts_with("Item 2:"));
    }

    #[test]
    fn test_dimensions_only_checked_in_strict_mode() {
        let mut order = sea_order();
        order.add_item(LineItem::new("6109", "unmeasured"));

        assert!(run(&PositiveDimensions, &order, &ValidationPolicy::default()).is_empty());

        let strict = ValidationPolicy {
            strict_dimensions: true,
            ..ValidationPolicy::default()
        };
        let messages = run(&PositiveDimensions, &order, &strict);
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages[0].text,
            "Item 1: width must be greater than zero (got 0)"
        );
    }

    #[test]
    fn test_postal_code_only_enforced_when_configured() {
        let mut order = sea_order();
        order.recipient.postal_code = Some("12345".to_string());
        let enforce = ValidationPolicy {
            enforce_postal_codes: true,
            ..ValidationPolicy::default()
        };

        assert!(run(&PostalCodeFormat, &order, &ValidationPolicy::default()).is_empty());
        let messages = run(&PostalCodeFormat, &order, &enforce);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].text.contains("Japan"));

        order.recipient.postal_code = Some("100-0001".to_string());
        assert!(run(&PostalCodeFormat, &order, &enforce).is_empty());

        order.recipient.postal_code = Some(String::new());
        assert!(run(&PostalCodeFormat, &order, &enforce).is_empty());
    }

    #[test]
    fn test_generic_tracking_rule_ignores_mode() {
        let policy = ValidationPolicy::default();
        let mut order = sea_order();
        order.tracking_number.clear();
        assert_eq!(run(&TrackingNumberRequired, &order, &policy).len(), 1);

        order.mode = ShipmentMode::Air;
        assert_eq!(run(&TrackingNumberRequired, &order, &policy).len(), 1);

        order.tracking_number = "TRK".to_string();
        order.add_item(LineItem::new("x", "y").with_unit_price(Decimal::ONE));
        assert!(run(&TrackingNumberRequired, &order, &policy).is_empty());
    }
}
