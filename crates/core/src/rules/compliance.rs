//! Air-shipment compliance rules.

use crate::order::ShipmentOrder;
use crate::types::ShipmentMode;

use super::{Rule, ValidationMessage, ValidationPolicy};

/// Air shipments need a carrier tracking number.
#[derive(Debug, Clone, Copy, Default)]
pub struct AirTrackingNumber;

impl Rule for AirTrackingNumber {
    fn name(&self) -> &'static str {
        "air_tracking_number"
    }

    fn check(&self, order: &ShipmentOrder, _policy: &ValidationPolicy, out: &mut Vec<ValidationMessage>) {
        if order.mode == ShipmentMode::Air && !order.has_tracking_number() {
            out.push(ValidationMessage::error(
                "Tracking number is required for air shipments",
            ));
        }
    }
}

/// Air items declared above the value limit need full recipient details.
///
/// Without them the item is an error; with them it is a warning that customs
/// may still ask for more paperwork.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighValueRecipient;

impl Rule for HighValueRecipient {
    fn name(&self) -> &'static str {
        "high_value_recipient"
    }

    fn check(&self, order: &ShipmentOrder, policy: &ValidationPolicy, out: &mut Vec<ValidationMessage>) {
        if order.mode != ShipmentMode::Air {
            return;
        }

        let limit = policy.air_value_limit;
        let recipient_complete = order.recipient.is_complete();

        for (index, item) in order.items.iter().enumerate() {
            if !item.exceeds_price(limit) {
                continue;
            }
            let position = index + 1;
            if recipient_complete {
                out.push(ValidationMessage::warning(format!(
                    "Item {position}: declared value exceeds {limit} THB; additional documentation may be required"
                )));
            } else {
                out.push(ValidationMessage::error(format!(
                    "Item {position}: declared value exceeds {limit} THB for an air shipment; recipient name, phone and address are required"
                )));
            }
        }
    }
}
