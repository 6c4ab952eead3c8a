//! Order documents read from YAML.
//!
//! ```yaml
//! mode: air
//! destination: japan
//! tracking_number: TH1234567890
//! recipient:
//!   name: Hanako Sato
//!   phone: "+81 3-1234-5678"
//!   address: 1-1 Chiyoda, Tokyo
//!   postal_code: 100-0001
//! items:
//!   - classification_code: "8471.30"
//!     description: Laptop
//!     quantity: 1
//!     weight_kg: 2.1
//!     width_cm: 40
//!     height_cm: 30
//!     depth_cm: 8
//!     unit_price: 32000
//! ```
//!
//! Items carry no identifiers; fresh ones are assigned on conversion.

use parcelport_core::{Country, LineItem, Recipient, ShipmentMode, ShipmentOrder};
use rust_decimal::Decimal;
use serde::Deserialize;

/// A shipment order as written by hand.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderDocument {
    #[serde(default)]
    pub mode: ShipmentMode,
    pub destination: Country,
    #[serde(default)]
    pub tracking_number: String,
    #[serde(default)]
    pub recipient: Recipient,
    #[serde(default)]
    pub items: Vec<ItemDocument>,
}

/// One line item in an [`OrderDocument`].
#[derive(Debug, Clone, Deserialize)]
pub struct ItemDocument {
    #[serde(default)]
    pub classification_code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub weight_kg: Decimal,
    #[serde(default)]
    pub width_cm: Decimal,
    #[serde(default)]
    pub height_cm: Decimal,
    #[serde(default)]
    pub depth_cm: Decimal,
    #[serde(default)]
    pub unit_price: Option<Decimal>,
}

const fn default_quantity() -> u32 {
    1
}

impl OrderDocument {
    /// Parse a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or a field has the wrong type.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Build the in-memory order.
    #[must_use]
    pub fn into_order(self) -> ShipmentOrder {
        let mut order = ShipmentOrder::new(self.mode, self.destination);
        order.tracking_number = self.tracking_number;
        order.recipient = self.recipient;
        order.replace_items(self.items.into_iter().map(ItemDocument::into_item).collect());
        order
    }
}

impl ItemDocument {
    fn into_item(self) -> LineItem {
        let mut item = LineItem::new(self.classification_code, self.description)
            .with_quantity(self.quantity)
            .with_weight(self.weight_kg)
            .with_dimensions(self.width_cm, self.height_cm, self.depth_cm);
        item.unit_price = self.unit_price;
        item
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
mode: air
destination: japan
tracking_number: TH1234567890
recipient:
  name: Hanako Sato
  phone: "+81 3-1234-5678"
  address: 1-1 Chiyoda, Tokyo
items:
  - classification_code: "8471.30"
    description: Laptop
    weight_kg: "2.1"
    width_cm: 40
    height_cm: 30
    depth_cm: 8
    unit_price: 32000
  - classification_code: "6109.10"
    description: T-shirts
    quantity: 12
"#;

    #[test]
    fn test_parse_sample() {
        let order = OrderDocument::from_yaml(SAMPLE).unwrap().into_order();
        assert_eq!(order.mode, ShipmentMode::Air);
        assert_eq!(order.destination, Country::Japan);
        assert!(order.recipient.is_complete());
        assert_eq!(order.items.len(), 2);

        let laptop = &order.items[0];
        assert_eq!(laptop.quantity, 1);
        assert_eq!(laptop.weight_kg, "2.1".parse().unwrap());
        assert_eq!(laptop.cbm(), "0.01".parse().unwrap());
        assert_eq!(laptop.unit_price, Some(Decimal::from(32000)));

        let shirts = &order.items[1];
        assert_eq!(shirts.quantity, 12);
        assert_eq!(shirts.unit_price, None);
        assert_eq!(shirts.cbm(), Decimal::ZERO);
    }

    #[test]
    fn test_minimal_document() {
        let order = OrderDocument::from_yaml("destination: us\n");
        // Destinations use snake_case names, not ISO codes.
        assert!(order.is_err());

        let order = OrderDocument::from_yaml("destination: united_states\n")
            .unwrap()
            .into_order();
        assert_eq!(order.mode, ShipmentMode::Sea);
        assert!(order.items.is_empty());
        assert!(!order.has_tracking_number());
    }
}
