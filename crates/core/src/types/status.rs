//! Enumerations shared across the order form.

use serde::{Deserialize, Serialize};

/// How a shipment travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentMode {
    #[default]
    Sea,
    Air,
}

impl std::fmt::Display for ShipmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sea => write!(f, "sea"),
            Self::Air => write!(f, "air"),
        }
    }
}

impl std::str::FromStr for ShipmentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sea" => Ok(Self::Sea),
            "air" => Ok(Self::Air),
            _ => Err(format!("invalid shipment mode: {s}")),
        }
    }
}

/// Severity of a validation message.
///
/// Only `Error` blocks submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    /// Reserved; no current rule emits it.
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// Volumetric-to-actual weight ratio bucket shown next to each line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumetricClass {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for VolumetricClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// Customer account tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountTier {
    #[default]
    Individual,
    /// Corporate accounts may upload line items in bulk.
    Corporate,
}

impl std::fmt::Display for AccountTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Individual => write!(f, "individual"),
            Self::Corporate => write!(f, "corporate"),
        }
    }
}

/// Supported destination countries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Country {
    #[default]
    Japan,
    China,
    SouthKorea,
    UnitedStates,
    Singapore,
    Vietnam,
    Taiwan,
}

impl Country {
    /// Every supported destination, in display order.
    pub const ALL: [Self; 7] = [
        Self::Japan,
        Self::China,
        Self::SouthKorea,
        Self::UnitedStates,
        Self::Singapore,
        Self::Vietnam,
        Self::Taiwan,
    ];

    /// ISO 3166-1 alpha-2 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Japan => "JP",
            Self::China => "CN",
            Self::SouthKorea => "KR",
            Self::UnitedStates => "US",
            Self::Singapore => "SG",
            Self::Vietnam => "VN",
            Self::Taiwan => "TW",
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Japan => "Japan",
            Self::China => "China",
            Self::SouthKorea => "South Korea",
            Self::UnitedStates => "United States",
            Self::Singapore => "Singapore",
            Self::Vietnam => "Vietnam",
            Self::Taiwan => "Taiwan",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Country {
    type Err = String;

    /// Accepts either the ISO alpha-2 code or the `snake_case` name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| {
                c.code().eq_ignore_ascii_case(&needle)
                    || c.to_string().to_ascii_lowercase().replace(' ', "_") == needle
            })
            .ok_or_else(|| format!("unsupported country: {s}"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_shipment_mode_from_str() {
        assert_eq!("air".parse::<ShipmentMode>().unwrap(), ShipmentMode::Air);
        assert_eq!(" SEA ".parse::<ShipmentMode>().unwrap(), ShipmentMode::Sea);
        assert!("rail".parse::<ShipmentMode>().is_err());
    }

    #[test]
    fn test_country_from_code_and_name() {
        assert_eq!("jp".parse::<Country>().unwrap(), Country::Japan);
        assert_eq!("south_korea".parse::<Country>().unwrap(), Country::SouthKorea);
        assert_eq!("US".parse::<Country>().unwrap(), Country::UnitedStates);
        assert!("atlantis".parse::<Country>().is_err());
    }

    #[test]
    fn test_country_serde_matches_from_str() {
        for country in Country::ALL {
            let json = serde_json::to_string(&country).unwrap();
            let name = json.trim_matches('"');
            assert_eq!(name.parse::<Country>().unwrap(), country);
        }
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Error < Severity::Warning);
        assert!(Severity::Warning < Severity::Info);
    }
}
