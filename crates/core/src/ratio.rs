//! Volumetric ratio classification.
//!
//! Compares a package's volumetric weight against its actual weight. Light,
//! bulky packages score `High` and are billed on volume.

use rust_decimal::Decimal;

use crate::types::VolumetricClass;

/// Floor applied to the actual weight before dividing (kg).
pub const MIN_ACTUAL_WEIGHT: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Ratios strictly above this are `High`.
pub const HIGH_RATIO: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Ratios strictly above this (and at most [`HIGH_RATIO`]) are `Medium`.
pub const MEDIUM_RATIO: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// `volumetric / max(actual, 0.1)`, saturating at the `Decimal` range.
#[must_use]
pub fn volumetric_ratio(actual_weight: Decimal, volumetric_weight: Decimal) -> Decimal {
    volumetric_weight
        .checked_div(actual_weight.max(MIN_ACTUAL_WEIGHT))
        .unwrap_or(if volumetric_weight.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
}

/// Bucket the volumetric ratio into high, medium or low.
///
/// ```
/// use parcelport_core::ratio::classify;
/// use parcelport_core::VolumetricClass;
/// use rust_decimal::Decimal;
///
/// assert_eq!(classify(Decimal::ONE, Decimal::new(25, 1)), VolumetricClass::High);
/// assert_eq!(classify(Decimal::ONE, Decimal::ONE), VolumetricClass::Low);
/// ```
#[must_use]
pub fn classify(actual_weight: Decimal, volumetric_weight: Decimal) -> VolumetricClass {
    let ratio = volumetric_ratio(actual_weight, volumetric_weight);
    if ratio > HIGH_RATIO {
        VolumetricClass::High
    } else if ratio > MEDIUM_RATIO {
        VolumetricClass::Medium
    } else {
        VolumetricClass::Low
    }
}
