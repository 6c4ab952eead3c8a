//! Dimension to volume conversion.
//!
//! All inputs are centimeters. [`compute_cbm`] produces cubic meters rounded
//! to three decimal places with **round-half-away-from-zero**, so a package
//! of exactly 0.0005 m³ reports 0.001 (banker's rounding would report 0.000).
//! [`compute_volumetric_weight`] produces the EMS billing weight in kilograms
//! and is never rounded here; rounding it is a display concern.
//!
//! Both functions are total. A non-positive dimension means "not entered yet"
//! and yields exactly zero. Callers that want to reject such input instead
//! use [`try_compute_cbm`].

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cubic centimeters in one cubic meter.
pub const CM3_PER_M3: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// EMS volumetric divisor (cm³ per kg).
pub const VOLUMETRIC_DIVISOR: Decimal = Decimal::from_parts(6000, 0, 0, false, 0);

/// Decimal places kept in a CBM figure.
pub const CBM_DECIMAL_PLACES: u32 = 3;

/// Errors from strict measurement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeasureError {
    /// A dimension was zero or negative.
    #[error("{axis} must be greater than zero (got {value})")]
    NonPositiveDimension {
        /// Which dimension was rejected.
        axis: Axis,
        /// The rejected value.
        value: Decimal,
    },
    /// The dimensions are too large to multiply.
    #[error("dimensions are too large")]
    Overflow,
}

/// One of the three package dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Width,
    Height,
    Depth,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Width => write!(f, "width"),
            Self::Height => write!(f, "height"),
            Self::Depth => write!(f, "depth"),
        }
    }
}

/// Package dimensions in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: Decimal,
    pub height: Decimal,
    pub depth: Decimal,
}

impl Dimensions {
    /// Create a new set of dimensions.
    #[must_use]
    pub const fn new(width: Decimal, height: Decimal, depth: Decimal) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// True when every dimension has been entered (is strictly positive).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.first_non_positive().is_none()
    }

    /// Volume in cubic meters. See [`compute_cbm`].
    #[must_use]
    pub fn cbm(&self) -> Decimal {
        compute_cbm(self.width, self.height, self.depth)
    }

    /// EMS volumetric weight in kilograms. See [`compute_volumetric_weight`].
    #[must_use]
    pub fn volumetric_weight(&self) -> Decimal {
        compute_volumetric_weight(self.width, self.height, self.depth)
    }

    fn first_non_positive(&self) -> Option<(Axis, Decimal)> {
        [
            (Axis::Width, self.width),
            (Axis::Height, self.height),
            (Axis::Depth, self.depth),
        ]
        .into_iter()
        .find(|(_, value)| *value <= Decimal::ZERO)
    }

    fn cubic_cm(&self) -> Result<Decimal, MeasureError> {
        if let Some((axis, value)) = self.first_non_positive() {
            return Err(MeasureError::NonPositiveDimension { axis, value });
        }
        self.width
            .checked_mul(self.height)
            .and_then(|area| area.checked_mul(self.depth))
            .ok_or(MeasureError::Overflow)
    }
}

/// Volume in cubic meters, rounded half away from zero to three places.
///
/// Returns exactly zero if any dimension is zero or negative.
///
/// ```
/// use parcelport_core::measure::compute_cbm;
/// use rust_decimal::Decimal;
///
/// let cbm = compute_cbm(Decimal::from(30), Decimal::from(20), Decimal::from(5));
/// assert_eq!(cbm, Decimal::new(3, 3));
/// ```
#[must_use]
pub fn compute_cbm(width: Decimal, height: Decimal, depth: Decimal) -> Decimal {
    try_compute_cbm(width, height, depth).unwrap_or(Decimal::ZERO)
}

/// Strict variant of [`compute_cbm`].
///
/// # Errors
///
/// Returns [`MeasureError::NonPositiveDimension`] for the first dimension
/// (width, height, depth order) that is zero or negative, or
/// [`MeasureError::Overflow`] if the product does not fit a `Decimal`.
pub fn try_compute_cbm(
    width: Decimal,
    height: Decimal,
    depth: Decimal,
) -> Result<Decimal, MeasureError> {
    let cubic_cm = Dimensions::new(width, height, depth).cubic_cm()?;
    Ok((cubic_cm / CM3_PER_M3)
        .round_dp_with_strategy(CBM_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero))
}

/// EMS volumetric weight in kilograms: `(w * h * d) / 6000`, unrounded.
///
/// Returns exactly zero if any dimension is zero or negative.
#[must_use]
pub fn compute_volumetric_weight(width: Decimal, height: Decimal, depth: Decimal) -> Decimal {
    Dimensions::new(width, height, depth)
        .cubic_cm()
        .map_or(Decimal::ZERO, |cubic_cm| cubic_cm / VOLUMETRIC_DIVISOR)
}
