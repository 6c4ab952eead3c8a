//! `pp-cli import` - bulk line-item upload for corporate accounts.
//!
//! # Usage
//!
//! ```bash
//! pp-cli import items.csv
//! pp-cli import items.csv --json
//! ```

use std::path::Path;

use parcelport_core::{ImportMode, ImportReport, Importer, LineItem};
use serde::Serialize;
use tracing::{info, instrument};

use crate::error::{CliError, Result};
use crate::output;
use crate::state::App;

/// Read and parse a bulk upload file.
///
/// # Errors
///
/// Returns [`CliError::Read`] if the file cannot be read. Malformed rows are
/// not errors; they are listed in the report.
#[instrument(skip(path), fields(path = %path.display()))]
pub async fn load_report(path: &Path, mode: ImportMode) -> Result<ImportReport> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let report = Importer::new(mode).import(&text);
    info!(
        accepted = report.items.len(),
        skipped = report.skipped.len(),
        "Parsed upload"
    );
    Ok(report)
}

/// Read a bulk upload file and return its items, replacing nothing yet.
///
/// # Errors
///
/// Returns [`CliError::Read`] for unreadable files and [`CliError::Import`]
/// when no row was accepted.
pub async fn load_items(path: &Path, mode: ImportMode) -> Result<Vec<LineItem>> {
    Ok(load_report(path, mode).await?.into_items()?)
}

#[derive(Serialize)]
struct ItemRow<'a> {
    #[serde(flatten)]
    item: &'a LineItem,
    cbm: rust_decimal::Decimal,
}

/// Run the import command.
///
/// # Errors
///
/// Returns an error if nobody is signed in, the account is not corporate,
/// the file cannot be read, or no row was accepted.
pub async fn run(app: &App, path: &Path, json: bool) -> Result<()> {
    let session = app.require_session().await?;
    if !session.can_bulk_import() {
        return Err(CliError::Forbidden(
            "bulk import is available to corporate accounts only".to_string(),
        ));
    }

    let report = load_report(path, app.config().import_mode).await?;

    if json {
        let rows: Vec<_> = report
            .items
            .iter()
            .map(|item| ItemRow {
                item,
                cbm: item.cbm(),
            })
            .collect();
        output::json(&serde_json::json!({
            "items": rows,
            "skipped": report.skipped,
        }))?;
    } else {
        for (index, item) in report.items.iter().enumerate() {
            output::line(format_args!(
                "{:>3}. {} {} x{} {} kg {} m³",
                index + 1,
                item.classification_code,
                item.description,
                item.quantity,
                item.weight_kg,
                item.cbm()
            ));
        }
        for skipped in &report.skipped {
            output::line(format_args!("  skipped line {}: {}", skipped.line, skipped.reason));
        }
    }

    let accepted = report.into_items()?.len();
    info!(accepted, "Import complete");
    Ok(())
}
