//! Order validation rules.
//!
//! Validation is an ordered list of independent [`Rule`]s. Each rule appends
//! zero or more [`ValidationMessage`]s; nothing here returns an error or
//! panics. Rules overlap on purpose: the tracking number is checked both by
//! the mode-independent submission rule and by the air compliance rule, so an
//! air order without one gets two messages from [`check_submission`].
//!
//! Two rule sets are provided:
//!
//! - [`RuleSet::air_compliance`] - the air-shipment checks re-run on every
//!   edit of mode, items, tracking number or recipient ([`validate`]).
//! - [`RuleSet::submission`] - everything that must hold before an order can
//!   be submitted ([`check_submission`]).

mod compliance;
mod message;
mod submission;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::order::ShipmentOrder;

pub use compliance::{AirTrackingNumber, HighValueRecipient};
pub use message::{ValidationMessage, blocks_submission};
pub use submission::{
    ClassificationCodeRequired, LineItemsRequired, PostalCodeFormat, PositiveDimensions,
    PositiveQuantity, TrackingNumberRequired,
};

/// Declared unit price (THB) above which air shipments need full recipient
/// details.
pub const AIR_VALUE_LIMIT: Decimal = Decimal::from_parts(1500, 0, 0, false, 0);

/// Switches between the lenient observed behavior and stricter checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    /// Air compliance threshold in THB.
    pub air_value_limit: Decimal,
    /// Reject items with a zero or negative dimension at submission.
    pub strict_dimensions: bool,
    /// Reject recipient postal codes that do not match the destination.
    pub enforce_postal_codes: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            air_value_limit: AIR_VALUE_LIMIT,
            strict_dimensions: false,
            enforce_postal_codes: false,
        }
    }
}

/// A single validation rule.
pub trait Rule: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Append any findings for `order` to `out`.
    fn check(&self, order: &ShipmentOrder, policy: &ValidationPolicy, out: &mut Vec<ValidationMessage>);
}

/// An ordered list of rules. Messages come out in rule order.
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    /// An empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule.
    #[must_use]
    pub fn with(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Air-shipment compliance: tracking number, then high-value items.
    #[must_use]
    pub fn air_compliance() -> Self {
        Self::new()
            .with(AirTrackingNumber)
            .with(HighValueRecipient)
    }

    /// Every pre-submission check, tracking number rules first.
    #[must_use]
    pub fn submission() -> Self {
        Self::new()
            .with(TrackingNumberRequired)
            .with(AirTrackingNumber)
            .with(LineItemsRequired)
            .with(PositiveQuantity)
            .with(ClassificationCodeRequired)
            .with(PositiveDimensions)
            .with(PostalCodeFormat)
            .with(HighValueRecipient)
    }

    /// Rule names in evaluation order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    /// Run every rule against `order`.
    #[must_use]
    pub fn run(&self, order: &ShipmentOrder, policy: &ValidationPolicy) -> Vec<ValidationMessage> {
        let mut out = Vec::new();
        for rule in &self.rules {
            let before = out.len();
            rule.check(order, policy, &mut out);
            if out.len() > before {
                debug!(rule = rule.name(), messages = out.len() - before, "rule fired");
            }
        }
        out
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Air compliance check with the default 1500 THB threshold.
///
/// Sea orders always produce an empty list.
#[must_use]
pub fn validate(order: &ShipmentOrder) -> Vec<ValidationMessage> {
    validate_with(order, &ValidationPolicy::default())
}

/// Air compliance check with a configured policy.
#[must_use]
pub fn validate_with(order: &ShipmentOrder, policy: &ValidationPolicy) -> Vec<ValidationMessage> {
    RuleSet::air_compliance().run(order, policy)
}

/// Full pre-submission check. Submission is blocked iff the result contains
/// an error (see [`blocks_submission`]).
#[must_use]
pub fn check_submission(order: &ShipmentOrder, policy: &ValidationPolicy) -> Vec<ValidationMessage> {
    RuleSet::submission().run(order, policy)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::order::{LineItem, Recipient};
    use crate::types::{Country, Severity, ShipmentMode};

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn priced(price: &str) -> LineItem {
        LineItem::new("8471.30", "Laptop")
            .with_weight(d("2"))
            .with_dimensions(d("40"), d("30"), d("8"))
            .with_unit_price(d(price))
    }

    fn complete_recipient() -> Recipient {
        Recipient {
            name: Some("Kim Minji".to_string()),
            phone: Some("010-1234-5678".to_string()),
            address: Some("Seoul".to_string()),
            postal_code: Some("03187".to_string()),
        }
    }

    fn order(mode: ShipmentMode, tracking: &str, prices: &[&str]) -> ShipmentOrder {
        let mut order = ShipmentOrder::new(mode, Country::SouthKorea);
        order.tracking_number = tracking.to_string();
        for price in prices {
            order.add_item(priced(price));
        }
        order
    }

    fn count(messages: &[ValidationMessage], severity: Severity) -> usize {
        messages.iter().filter(|m| m.severity == severity).count()
    }

    #[test]
    fn test_sea_orders_never_blocked_by_compliance() {
        for tracking in ["", "TRK-1"] {
            let order = order(ShipmentMode::Sea, tracking, &["99999", "1500.01", "10"]);
            assert!(validate(&order).is_empty());
        }
    }

    #[test]
    fn test_air_missing_tracking_is_single_error() {
        let order = order(ShipmentMode::Air, "   ", &["1500", "200"]);
        let messages = validate(&order);
        assert_eq!(messages.len(), 1);
        assert_eq!(count(&messages, Severity::Error), 1);
        assert!(messages[0].text.contains("air"));
    }

    #[test]
    fn test_high_value_without_recipient_is_error() {
        let order = order(ShipmentMode::Air, "TRK-1", &["1600"]);
        let messages = validate(&order);
        assert_eq!(count(&messages, Severity::Error), 1);
        assert_eq!(count(&messages, Severity::Warning), 0);
        assert!(messages[0].text.starts_with("Item 1:"));
        assert!(blocks_submission(&messages));
    }

    #[test]
    fn test_high_value_with_recipient_is_warning() {
        let mut order = order(ShipmentMode::Air, "TRK-1", &["1600"]);
        order.recipient = complete_recipient();
        let messages = validate(&order);
        assert_eq!(count(&messages, Severity::Error), 0);
        assert_eq!(count(&messages, Severity::Warning), 1);
        assert!(messages[0].text.starts_with("Item 1:"));
        assert!(!blocks_submission(&messages));
    }

    #[test]
    fn test_messages_follow_item_order_after_tracking() {
        let order = order(ShipmentMode::Air, "", &["10", "2000", "1500", "1501"]);
        let texts: Vec<_> = validate(&order).into_iter().map(|m| m.text).collect();
        assert_eq!(texts.len(), 3);
        assert!(texts[0].contains("Tracking number"));
        assert!(texts[1].starts_with("Item 2:"));
        assert!(texts[2].starts_with("Item 4:"));
    }

    #[test]
    fn test_unpriced_items_are_ignored() {
        let mut order = order(ShipmentMode::Air, "TRK-1", &[]);
        order.add_item(LineItem::new("0901", "Coffee"));
        assert!(validate(&order).is_empty());
    }

    #[test]
    fn test_configured_threshold() {
        let order = order(ShipmentMode::Air, "TRK-1", &["1200"]);
        let policy = ValidationPolicy {
            air_value_limit: d("1000"),
            ..ValidationPolicy::default()
        };
        assert!(validate(&order).is_empty());
        assert_eq!(validate_with(&order, &policy).len(), 1);
    }

    #[test]
    fn test_submission_reports_both_tracking_rules_for_air() {
        let order = order(ShipmentMode::Air, "", &["100"]);
        let messages = check_submission(&order, &ValidationPolicy::default());
        assert_eq!(count(&messages, Severity::Error), 2);
        assert!(messages[0].text.starts_with("Tracking number is required"));
        assert!(messages[1].text.contains("air shipments"));
    }

    #[test]
    fn test_submission_generic_tracking_rule_for_sea() {
        let order = order(ShipmentMode::Sea, "", &["100"]);
        let messages = check_submission(&order, &ValidationPolicy::default());
        assert_eq!(messages.len(), 1);
        assert!(!messages[0].text.contains("air"));
    }

    #[test]
    fn test_submission_clean_order_passes() {
        let mut order = order(ShipmentMode::Air, "TRK-1", &["100", "1500"]);
        order.recipient = complete_recipient();
        let policy = ValidationPolicy {
            strict_dimensions: true,
            enforce_postal_codes: true,
            ..ValidationPolicy::default()
        };
        assert!(check_submission(&order, &policy).is_empty());
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = RuleSet::submission().names().collect();
        assert_eq!(names.first(), Some(&"tracking_number_required"));
        assert_eq!(names.last(), Some(&"high_value_recipient"));
        assert_eq!(
            RuleSet::air_compliance().names().collect::<Vec<_>>(),
            ["air_tracking_number", "high_value_recipient"]
        );
    }
}
