//! `pp-cli validate` and `pp-cli submit` - order checks and simulated
//! submission.
//!
//! # Usage
//!
//! ```bash
//! # Show compliance and submission messages for an order
//! pp-cli validate order.yaml
//!
//! # Replace the order's items from a bulk file, then submit
//! pp-cli submit order.yaml --items items.csv
//! ```

use std::path::Path;

use parcelport_core::rules::{ValidationPolicy, blocks_submission, check_submission, validate_with};
use parcelport_core::{
    BackendError, OrderBackend, OrderTotals, Receipt, ShipmentOrder, ValidationMessage,
};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::commands::import;
use crate::document::OrderDocument;
use crate::error::{CliError, Result};
use crate::output;
use crate::state::App;

/// Everything the order form would show before the submit button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Air compliance messages, re-evaluated on every edit.
    pub compliance: Vec<ValidationMessage>,
    /// Full pre-submission messages (includes the compliance ones).
    pub submission: Vec<ValidationMessage>,
    pub blocked: bool,
    pub totals: OrderTotals,
}

impl ValidationReport {
    #[must_use]
    pub fn blocking_count(&self) -> usize {
        self.submission.iter().filter(|m| m.is_blocking()).count()
    }
}

/// Evaluate both rule sets against `order`.
#[must_use]
pub fn evaluate(order: &ShipmentOrder, policy: &ValidationPolicy) -> ValidationReport {
    let submission = check_submission(order, policy);
    ValidationReport {
        compliance: validate_with(order, policy),
        blocked: blocks_submission(&submission),
        submission,
        totals: order.totals(),
    }
}

/// Read an order document from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid document.
#[instrument(skip(path), fields(path = %path.display()))]
pub async fn load_order(path: &Path) -> Result<ShipmentOrder> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let order = OrderDocument::from_yaml(&content)?.into_order();
    info!(mode = %order.mode, items = order.items.len(), "Loaded order");
    Ok(order)
}

/// Run the validate command.
///
/// # Errors
///
/// Returns [`CliError::Blocked`] if submission would be blocked, or an error
/// if the document cannot be loaded.
pub async fn validate(app: &App, path: &Path, json: bool) -> Result<()> {
    let order = load_order(path).await?;
    let report = evaluate(&order, &app.config().policy);

    if json {
        output::json(&report)?;
    } else {
        print_messages(&report.submission);
        print_totals(&report.totals);
    }

    if report.blocked {
        return Err(CliError::Blocked(report.blocking_count()));
    }
    Ok(())
}

/// Run the submit command.
///
/// # Errors
///
/// Returns an error if nobody is signed in, the item file cannot be imported,
/// the order is blocked, or the backend rejects it.
pub async fn submit(app: &App, path: &Path, items: Option<&Path>, json: bool) -> Result<Receipt> {
    let session = app.require_session().await?;
    let mut order = load_order(path).await?;

    if let Some(items_path) = items {
        if !session.can_bulk_import() {
            return Err(CliError::Forbidden(
                "bulk import is available to corporate accounts only".to_string(),
            ));
        }
        let imported = import::load_items(items_path, app.config().import_mode).await?;
        info!(items = imported.len(), "Replacing order items from upload");
        order.replace_items(imported);
    }

    let report = evaluate(&order, &app.config().policy);
    if report.blocked {
        print_messages(&report.submission);
        return Err(CliError::Blocked(report.blocking_count()));
    }

    let receipt = match app.backend().submit(&session, &order).await {
        Ok(receipt) => receipt,
        Err(BackendError::Rejected(messages)) => {
            warn!("Backend rejected an order that passed local checks");
            print_messages(&messages);
            return Err(BackendError::Rejected(messages).into());
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        output::json(&receipt)?;
    } else {
        print_messages(&report.submission);
        output::line(format_args!("Submitted: {}", receipt.reference));
        print_totals(&receipt.totals);
    }
    Ok(receipt)
}

/// Lines for `messages`, in the order the rules produced them.
fn message_lines(messages: &[ValidationMessage]) -> Vec<String> {
    if messages.is_empty() {
        return vec!["No validation messages".to_string()];
    }
    messages.iter().map(ToString::to_string).collect()
}

fn print_messages(messages: &[ValidationMessage]) {
    for line in message_lines(messages) {
        output::line(line);
    }
}

fn print_totals(totals: &OrderTotals) {
    output::line(format_args!(
        "Lines: {}  Quantity: {}  Weight: {} kg  Volume: {} m³  Chargeable: {} kg  Declared: {} THB",
        totals.lines,
        totals.quantity,
        totals.weight_kg,
        totals.cbm,
        totals.chargeable_weight_kg().round_dp(2),
        totals.declared_value
    ));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use parcelport_core::{Country, LineItem, Recipient, Severity, ShipmentMode};

    use super::*;

    #[test]
    fn test_evaluate_blocked_air_order() {
        let mut order = ShipmentOrder::new(ShipmentMode::Air, Country::Japan);
        order.tracking_number = "TRK-1".to_string();
        order.add_item(LineItem::new("8471.30", "Laptop").with_unit_price(1600.into()));

        let report = evaluate(&order, &ValidationPolicy::default());
        assert_eq!(report.compliance.len(), 1);
        assert!(report.blocked);
        assert_eq!(report.blocking_count(), 1);
    }

    #[test]
    fn test_message_lines_keep_rule_order() {
        let messages = vec![
            ValidationMessage::warning("Item 1: declared value exceeds 1500 THB"),
            ValidationMessage::error("Item 2: quantity must be at least 1"),
        ];
        assert_eq!(
            message_lines(&messages),
            vec![
                "[warning] Item 1: declared value exceeds 1500 THB".to_string(),
                "[error] Item 2: quantity must be at least 1".to_string(),
            ]
        );
        assert_eq!(message_lines(&[]), vec!["No validation messages".to_string()]);
    }

    #[test]
    fn test_evaluate_warning_does_not_block() {
        let mut order = ShipmentOrder::new(ShipmentMode::Air, Country::Japan);
        order.tracking_number = "TRK-1".to_string();
        order.recipient = Recipient {
            name: Some("Hanako".to_string()),
            phone: Some("090".to_string()),
            address: Some("Tokyo".to_string()),
            postal_code: None,
        };
        order.add_item(LineItem::new("8471.30", "Laptop").with_unit_price(1600.into()));

        let report = evaluate(&order, &ValidationPolicy::default());
        assert!(!report.blocked);
        assert_eq!(report.submission.len(), 1);
        assert_eq!(report.submission[0].severity, Severity::Warning);
    }
}
