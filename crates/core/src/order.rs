//! Shipment order data model.
//!
//! Orders live only in transient form state. A [`LineItem`] never stores its
//! volume: [`LineItem::cbm`] derives it from the dimensions every time, so
//! the two cannot drift apart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::measure::{Dimensions, compute_cbm, compute_volumetric_weight};
use crate::ratio::classify;
use crate::types::{Country, LineItemId, OrderId, ShipmentMode, VolumetricClass};

/// One declared shipment item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: LineItemId,
    /// HS classification code. May be empty while awaiting manual entry.
    pub classification_code: String,
    pub description: String,
    /// Forms treat anything below 1 as invalid for submission.
    pub quantity: u32,
    pub weight_kg: Decimal,
    /// Zero means "not entered yet" for all three dimensions.
    pub width_cm: Decimal,
    pub height_cm: Decimal,
    pub depth_cm: Decimal,
    /// Declared unit price in THB, `None` until entered.
    pub unit_price: Option<Decimal>,
}

impl LineItem {
    /// A fresh item with quantity 1 and nothing measured yet.
    #[must_use]
    pub fn new(classification_code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: LineItemId::new(),
            classification_code: classification_code.into(),
            description: description.into(),
            quantity: 1,
            weight_kg: Decimal::ZERO,
            width_cm: Decimal::ZERO,
            height_cm: Decimal::ZERO,
            depth_cm: Decimal::ZERO,
            unit_price: None,
        }
    }

    #[must_use]
    pub const fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub const fn with_weight(mut self, weight_kg: Decimal) -> Self {
        self.weight_kg = weight_kg;
        self
    }

    #[must_use]
    pub const fn with_dimensions(mut self, width: Decimal, height: Decimal, depth: Decimal) -> Self {
        self.width_cm = width;
        self.height_cm = height;
        self.depth_cm = depth;
        self
    }

    #[must_use]
    pub const fn with_unit_price(mut self, unit_price: Decimal) -> Self {
        self.unit_price = Some(unit_price);
        self
    }

    /// Replace all three dimensions at once.
    pub const fn set_dimensions(&mut self, dimensions: Dimensions) {
        self.width_cm = dimensions.width;
        self.height_cm = dimensions.height;
        self.depth_cm = dimensions.depth;
    }

    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width_cm, self.height_cm, self.depth_cm)
    }

    /// Volume of one unit in cubic meters.
    #[must_use]
    pub fn cbm(&self) -> Decimal {
        compute_cbm(self.width_cm, self.height_cm, self.depth_cm)
    }

    /// EMS volumetric weight of one unit in kilograms.
    #[must_use]
    pub fn volumetric_weight(&self) -> Decimal {
        compute_volumetric_weight(self.width_cm, self.height_cm, self.depth_cm)
    }

    #[must_use]
    pub fn volumetric_class(&self) -> VolumetricClass {
        classify(self.weight_kg, self.volumetric_weight())
    }

    /// True if a unit price was entered and is strictly above `limit`.
    #[must_use]
    pub fn exceeds_price(&self, limit: Decimal) -> bool {
        self.unit_price.is_some_and(|price| price > limit)
    }
}

/// Recipient details. Every field is optional while the form is filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipient {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
}

impl Recipient {
    /// Name, phone and address are all present and non-blank.
    ///
    /// The postal code is not part of completeness.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.phone, &self.address]
            .into_iter()
            .all(|field| !is_blank(field.as_deref()))
    }
}

/// The in-progress shipment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentOrder {
    pub id: OrderId,
    pub mode: ShipmentMode,
    pub destination: Country,
    pub recipient: Recipient,
    /// Carrier tracking number. Required for submission in every mode.
    pub tracking_number: String,
    /// Display order is insertion order.
    pub items: Vec<LineItem>,
}

impl ShipmentOrder {
    /// An empty order.
    #[must_use]
    pub fn new(mode: ShipmentMode, destination: Country) -> Self {
        Self {
            id: OrderId::new(),
            mode,
            destination,
            recipient: Recipient::default(),
            tracking_number: String::new(),
            items: Vec::new(),
        }
    }

    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Remove an item, returning it if it was present.
    pub fn remove_item(&mut self, id: LineItemId) -> Option<LineItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Replace every item at once, as a bulk upload does. Items are not merged.
    pub fn replace_items(&mut self, items: Vec<LineItem>) {
        self.items = items;
    }

    /// 1-based display position of an item.
    #[must_use]
    pub fn item_position(&self, id: LineItemId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .map(|index| index + 1)
    }

    #[must_use]
    pub fn has_tracking_number(&self) -> bool {
        !self.tracking_number.trim().is_empty()
    }

    #[must_use]
    pub fn totals(&self) -> OrderTotals {
        OrderTotals::from_items(&self.items)
    }
}

/// Aggregates over an order's items. Per-unit values are multiplied by
/// quantity; sums saturate at the `Decimal` range instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderTotals {
    pub lines: usize,
    pub quantity: u64,
    pub weight_kg: Decimal,
    pub cbm: Decimal,
    pub volumetric_weight_kg: Decimal,
    /// Sum of declared values in THB. Items without a price count as zero.
    pub declared_value: Decimal,
}

impl OrderTotals {
    #[must_use]
    pub fn from_items(items: &[LineItem]) -> Self {
        items.iter().fold(
            Self {
                lines: items.len(),
                ..Self::default()
            },
            |mut totals, item| {
                let quantity = Decimal::from(item.quantity);
                let add = |total: Decimal, per_unit: Decimal| {
                    total.saturating_add(per_unit.saturating_mul(quantity))
                };
                totals.quantity = totals.quantity.saturating_add(u64::from(item.quantity));
                totals.weight_kg = add(totals.weight_kg, item.weight_kg);
                totals.cbm = add(totals.cbm, item.cbm());
                totals.volumetric_weight_kg =
                    add(totals.volumetric_weight_kg, item.volumetric_weight());
                totals.declared_value =
                    add(totals.declared_value, item.unit_price.unwrap_or_default());
                totals
            },
        )
    }

    /// The weight a carrier bills: the larger of actual and volumetric.
    #[must_use]
    pub fn chargeable_weight_kg(&self) -> Decimal {
        self.weight_kg.max(self.volumetric_weight_kg)
    }
}

pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
