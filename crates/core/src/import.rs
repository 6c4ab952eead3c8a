//! Bulk line-item import for corporate accounts.
//!
//! ## Format
//!
//! ```text
//! ClassificationCode,Description,Quantity,Weight_kg,Width_cm,Height_cm,Depth_cm,UnitPrice
//! 6109.10,Cotton T-shirts,20,0.3,30,20,5,250
//! 8471.30,Laptop,1,2.1,40,30,8,32000
//! ```
//!
//! The first line is always a header and is discarded. Fields are split on
//! `,` with no quoting, so a comma inside a description shifts every later
//! column. Fields past the eighth are ignored.
//!
//! ## Modes
//!
//! - [`ImportMode::Lenient`] drops rows with fewer than eight fields or a
//!   blank classification code, and defaults unparsable numbers (quantity to
//!   1, everything else to 0). Decimal fields also accept scientific notation
//!   such as `1e3`; quantity must be a plain integer.
//! - [`ImportMode::Strict`] additionally rejects rows with unparsable or
//!   negative numbers instead of defaulting them. A blank unit price is
//!   accepted and left unset.
//!
//! Either way the parser never fails; rejected rows are listed in
//! [`ImportReport::skipped`] and the caller decides what to surface.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::order::LineItem;

/// Largest exponent accepted in scientific notation; `Decimal` holds 28
/// fractional digits.
const MAX_EXPONENT: u32 = 28;

/// Header row of the downloadable template.
pub const TEMPLATE_HEADER: &str =
    "ClassificationCode,Description,Quantity,Weight_kg,Width_cm,Height_cm,Depth_cm,UnitPrice";

/// Fields per row.
pub const FIELD_COUNT: usize = 8;

/// Quantity used when the quantity field does not parse (lenient mode).
const DEFAULT_QUANTITY: u32 = 1;

/// Errors surfaced to the user after an import.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// Not a single row was accepted.
    #[error("no valid data found in the uploaded file ({skipped} rows skipped)")]
    NoValidRows {
        /// Number of rows that were rejected.
        skipped: usize,
    },
}

/// How forgiving the importer is with numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportMode {
    #[default]
    Lenient,
    Strict,
}

/// Why a row was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    TooFewFields { found: usize },
    MissingClassificationCode,
    InvalidNumber { field: String, value: String },
    NegativeValue { field: String },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewFields { found } => {
                write!(f, "expected {FIELD_COUNT} fields, found {found}")
            }
            Self::MissingClassificationCode => write!(f, "classification code is empty"),
            Self::InvalidNumber { field, value } => write!(f, "{field} is not a number: '{value}'"),
            Self::NegativeValue { field } => write!(f, "{field} cannot be negative"),
        }
    }
}

/// A dropped row and its 1-based line number in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    pub line: usize,
    pub reason: SkipReason,
}

/// Outcome of an import: accepted items in file order, plus what was dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub items: Vec<LineItem>,
    pub skipped: Vec<SkippedRow>,
}

impl ImportReport {
    /// The accepted items, or [`ImportError::NoValidRows`] if there are none.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::NoValidRows`] when no row was accepted.
    pub fn into_items(self) -> Result<Vec<LineItem>, ImportError> {
        if self.items.is_empty() {
            return Err(ImportError::NoValidRows {
                skipped: self.skipped.len(),
            });
        }
        Ok(self.items)
    }
}

/// Parses delimited text into line items.
#[derive(Debug, Clone, Copy, Default)]
pub struct Importer {
    mode: ImportMode,
}

impl Importer {
    #[must_use]
    pub const fn new(mode: ImportMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub const fn mode(&self) -> ImportMode {
        self.mode
    }

    /// Parse every non-header line of `text`. Blank lines are ignored.
    #[must_use]
    pub fn import(&self, text: &str) -> ImportReport {
        let mut report = ImportReport::default();

        for (index, line) in text.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            let line_number = index + 1;
            match self.parse_row(line) {
                Ok(item) => report.items.push(item),
                Err(reason) => {
                    debug!(line = line_number, %reason, "skipping import row");
                    report.skipped.push(SkippedRow {
                        line: line_number,
                        reason,
                    });
                }
            }
        }

        debug!(
            mode = ?self.mode,
            accepted = report.items.len(),
            skipped = report.skipped.len(),
            "import parsed"
        );
        report
    }

    fn parse_row(&self, line: &str) -> Result<LineItem, SkipReason> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let [code, description, quantity, weight, width, height, depth, price, ..] =
            fields.as_slice()
        else {
            return Err(SkipReason::TooFewFields {
                found: fields.len(),
            });
        };

        if code.is_empty() {
            return Err(SkipReason::MissingClassificationCode);
        }

        let quantity = match (u32::from_str(quantity), self.mode) {
            (Ok(value), _) => value,
            (Err(_), ImportMode::Lenient) => DEFAULT_QUANTITY,
            (Err(_), ImportMode::Strict) => return Err(invalid("quantity", quantity)),
        };
        let weight = self.decimal("weight", weight)?;
        let width = self.decimal("width", width)?;
        let height = self.decimal("height", height)?;
        let depth = self.decimal("depth", depth)?;
        let unit_price = match self.mode {
            ImportMode::Strict if price.is_empty() => None,
            _ => Some(self.decimal("unit price", price)?),
        };

        let mut item = LineItem::new(*code, *description)
            .with_quantity(quantity)
            .with_weight(weight)
            .with_dimensions(width, height, depth);
        item.unit_price = unit_price;
        Ok(item)
    }

    fn decimal(&self, field: &str, value: &str) -> Result<Decimal, SkipReason> {
        match (parse_decimal(value), self.mode) {
            (Some(parsed), ImportMode::Strict) if parsed.is_sign_negative() && !parsed.is_zero() => {
                Err(SkipReason::NegativeValue {
                    field: field.to_string(),
                })
            }
            (Some(parsed), _) => Ok(parsed),
            (None, ImportMode::Lenient) => Ok(Decimal::ZERO),
            (None, ImportMode::Strict) => Err(invalid(field, value)),
        }
    }
}

/// Plain decimals, or scientific notation (`1e3`, `2.5E-1`) as spreadsheets
/// export it.
fn parse_decimal(value: &str) -> Option<Decimal> {
    Decimal::from_str(value).ok().or_else(|| {
        let (_, exponent) = value.split_once(['e', 'E'])?;
        let magnitude: u32 = exponent.trim_start_matches(['+', '-']).parse().ok()?;
        if magnitude > MAX_EXPONENT {
            return None;
        }
        Decimal::from_scientific(value).ok()
    })
}

fn invalid(field: &str, value: &str) -> SkipReason {
    SkipReason::InvalidNumber {
        field: field.to_string(),
        value: value.to_string(),
    }
}

/// Lenient import returning only the accepted items, in file order.
///
/// Malformed rows are dropped without comment; an empty result is the only
/// signal that nothing was usable.
#[must_use]
pub fn parse_rows(text: &str) -> Vec<LineItem> {
    Importer::new(ImportMode::Lenient).import(text).items
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn csv(rows: &[&str]) -> String {
        std::iter::once(TEMPLATE_HEADER)
            .chain(rows.iter().copied())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_short_row_is_dropped_and_order_kept() {
        let text = csv(&[
            "6109.10,T-shirts,20,0.3,30,20,5,250",
            "9503,Toys,1,2",
            "8471.30,Laptop,1,2.1,40,30,8,32000",
        ]);
        let items = parse_rows(&text);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].classification_code, "6109.10");
        assert_eq!(items[1].classification_code, "8471.30");
        assert_eq!(items[0].quantity, 20);
        assert_eq!(items[0].cbm(), d("0.003"));
        assert_eq!(items[1].unit_price, Some(d("32000")));
    }

    #[test]
    fn test_header_is_always_discarded() {
        let text = "6109.10,T-shirts,20,0.3,30,20,5,250\n0901,Coffee,2,1,10,10,10,300";
        let items = parse_rows(text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Coffee");
    }

    #[test]
    fn test_blank_code_is_dropped() {
        let text = csv(&["   ,No code,1,1,1,1,1,1"]);
        let report = Importer::default().import(&text);
        assert!(report.items.is_empty());
        assert_eq!(
            report.skipped,
            [SkippedRow {
                line: 2,
                reason: SkipReason::MissingClassificationCode
            }]
        );
    }

    #[test]
    fn test_lenient_defaults() {
        let text = csv(&["0901,Coffee,lots,heavy,ten,,x,?"]);
        let items = parse_rows(&text);
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.quantity, 1);
        assert_eq!(item.weight_kg, Decimal::ZERO);
        assert_eq!(item.width_cm, Decimal::ZERO);
        assert_eq!(item.unit_price, Some(Decimal::ZERO));
        assert_eq!(item.cbm(), Decimal::ZERO);
    }

    #[test]
    fn test_scientific_notation() {
        let items = parse_rows(&csv(&["0901,Coffee,2,5E-1,1e2,3e1,10,1.5e3"]));
        let item = &items[0];
        assert_eq!(item.quantity, 2);
        assert_eq!(item.weight_kg, d("0.5"));
        assert_eq!(item.width_cm, d("100"));
        assert_eq!(item.height_cm, d("30"));
        assert_eq!(item.unit_price, Some(d("1500")));

        let report = Importer::new(ImportMode::Strict).import(&csv(&["0901,Coffee,1,1e999,1,1,1,1"]));
        assert!(report.items.is_empty());
        assert_eq!(
            report.skipped[0].reason,
            SkipReason::InvalidNumber {
                field: "weight".to_string(),
                value: "1e999".to_string()
            }
        );
    }

    #[test]
    fn test_negative_quantity_defaults_to_one() {
        let items = parse_rows(&csv(&["0901,Coffee,-3,1,10,10,10,300"]));
        assert_eq!(items[0].quantity, 1);
    }

    #[test]
    fn test_strict_rejects_bad_numbers() {
        let text = csv(&[
            "0901,Coffee,lots,1,10,10,10,300",
            "0902,Tea,1,1,10,-10,10,300",
            "0903,Cocoa,2,1,10,10,10,",
        ]);
        let report = Importer::new(ImportMode::Strict).import(&text);

        assert_eq!(report.items.len(), 1);
        assert_eq!(report.items[0].classification_code, "0903");
        assert_eq!(report.items[0].unit_price, None);
        assert_eq!(
            report.skipped[0].reason,
            SkipReason::InvalidNumber {
                field: "quantity".to_string(),
                value: "lots".to_string()
            }
        );
        assert_eq!(
            report.skipped[1].reason,
            SkipReason::NegativeValue {
                field: "height".to_string()
            }
        );
        assert_eq!(report.skipped[1].line, 3);
    }

    #[test]
    fn test_crlf_blank_lines_and_extra_fields() {
        let text = format!("{TEMPLATE_HEADER}\r\n\r\n6109,Shirts,2,1,10,10,10,100,ignored\r\n");
        let report = Importer::default().import(&text);
        assert_eq!(report.items.len(), 1);
        assert!(report.skipped.is_empty());
        assert_eq!(report.items[0].unit_price, Some(d("100")));
    }

    #[test]
    fn test_comma_in_description_shifts_columns() {
        let items = parse_rows(&csv(&["6109,Shirts, blue,2,1,10,10,10,100"]));
        assert_eq!(items.len(), 1);
        // "blue" lands in the quantity column and defaults.
        assert_eq!(items[0].quantity, 1);
        assert_eq!(items[0].weight_kg, d("2"));
    }

    #[test]
    fn test_into_items_reports_no_valid_rows() {
        let report = Importer::default().import(&csv(&["a,b,c"]));
        assert_eq!(
            report.into_items(),
            Err(ImportError::NoValidRows { skipped: 1 })
        );
        assert!(parse_rows("").is_empty());
        assert!(parse_rows(TEMPLATE_HEADER).is_empty());
    }

    #[test]
    fn test_ids_are_fresh() {
        let items = parse_rows(&csv(&["a,x,1,1,1,1,1,1", "a,x,1,1,1,1,1,1"]));
        assert_ne!(items[0].id, items[1].id);
    }
}
