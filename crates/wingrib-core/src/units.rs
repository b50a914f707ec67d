//! Unit handling
//!
//! A wing spec declares the unit all of its lengths are expressed in.
//! Nothing converts implicitly. Units serialize as their short label and
//! parse from the label or a spelled-out name.

use crate::error::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Length unit of a wing spec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Units {
    /// Millimeters
    #[default]
    Millimeters,
    /// Inches
    Inches,
}

impl Units {
    /// Short label used in annotations ("mm" or "in")
    pub fn label(self) -> &'static str {
        match self {
            Self::Millimeters => "mm",
            Self::Inches => "in",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Units {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mm" | "metric" | "millimeters" => Ok(Self::Millimeters),
            "in" | "inch" | "inches" | "imperial" => Ok(Self::Inches),
            other => Err(Error::UnknownUnit(other.to_string())),
        }
    }
}

impl Serialize for Units {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Units {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Format a length for annotations, three decimals with the unit label
///
/// * `value` - Length in `units`
/// * `units` - Unit the value is expressed in
pub fn format_length(value: f64, units: Units) -> String {
    format!("{:.3}{}", value, units.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Units::Millimeters.label(), "mm");
        assert_eq!(Units::Inches.label(), "in");
        assert_eq!(Units::default(), Units::Millimeters);
    }

    #[test]
    fn test_parse() {
        assert_eq!("mm".parse::<Units>().unwrap(), Units::Millimeters);
        assert_eq!(" Inch ".parse::<Units>().unwrap(), Units::Inches);
        assert!("cubit".parse::<Units>().is_err());
    }

    #[test]
    fn test_format_length() {
        assert_eq!(format_length(3.175, Units::Millimeters), "3.175mm");
        assert_eq!(format_length(0.125, Units::Inches), "0.125in");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Units::Millimeters).unwrap(), "\"mm\"");
        assert_eq!(
            serde_json::from_str::<Units>("\"in\"").unwrap(),
            Units::Inches
        );
        assert_eq!(
            serde_json::from_str::<Units>("\"Inches\"").unwrap(),
            Units::Inches
        );
        let err = serde_json::from_str::<Units>("\"cubit\"").unwrap_err();
        assert!(err.to_string().contains("Unknown unit: cubit"));
    }
}
