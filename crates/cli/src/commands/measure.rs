//! `pp-cli cbm` - volume and volumetric weight for one package.

use parcelport_core::VolumetricClass;
use parcelport_core::measure::Dimensions;
use parcelport_core::ratio::{classify, volumetric_ratio};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::Result;
use crate::output;

/// Display precision for volumetric weight and ratio.
const DISPLAY_DECIMALS: u32 = 2;

/// What the order form shows next to a line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeasureReport {
    pub dimensions: Dimensions,
    pub cbm: Decimal,
    pub volumetric_weight_kg: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<VolumetricClass>,
}

/// Measure a package; classify it too when the actual weight is known.
#[must_use]
pub fn measure(dimensions: Dimensions, weight_kg: Option<Decimal>) -> MeasureReport {
    let volumetric_weight_kg = dimensions.volumetric_weight();
    MeasureReport {
        dimensions,
        cbm: dimensions.cbm(),
        volumetric_weight_kg,
        ratio: weight_kg.map(|actual| volumetric_ratio(actual, volumetric_weight_kg)),
        class: weight_kg.map(|actual| classify(actual, volumetric_weight_kg)),
    }
}

/// Print the measurement.
///
/// # Errors
///
/// Returns an error only if JSON output fails.
pub fn run(dimensions: Dimensions, weight_kg: Option<Decimal>, json: bool) -> Result<()> {
    let report = measure(dimensions, weight_kg);
    if json {
        output::json(&report)?;
        return Ok(());
    }

    output::line(format_args!("CBM: {} m³", report.cbm));
    output::line(format_args!(
        "Volumetric weight: {} kg",
        report.volumetric_weight_kg.round_dp(DISPLAY_DECIMALS)
    ));
    if let (Some(ratio), Some(class)) = (report.ratio, report.class) {
        output::line(format_args!(
            "Volumetric ratio: {} ({class})",
            ratio.round_dp(DISPLAY_DECIMALS)
        ));
    }
    if !dimensions.is_complete() {
        output::line("Note: enter all three dimensions to get a volume");
    }
    Ok(())
}
