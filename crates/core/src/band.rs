use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound (exclusive) of the cold band.
pub const COLD_BELOW_C: f64 = 10.0;
/// Upper bound (inclusive) of the moderate band.
pub const MODERATE_UP_TO_C: f64 = 25.0;

/// Temperature classification driving catalog selection.
///
/// Variants are declared coldest first so the derived ordering matches
/// temperature order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    Cold,
    Moderate,
    Hot,
}

impl TemperatureBand {
    pub const ALL: [TemperatureBand; 3] =
        [TemperatureBand::Cold, TemperatureBand::Moderate, TemperatureBand::Hot];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureBand::Cold => "cold",
            TemperatureBand::Moderate => "moderate",
            TemperatureBand::Hot => "hot",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemperatureBand::Cold => "Cold Weather",
            TemperatureBand::Moderate => "Moderate Weather",
            TemperatureBand::Hot => "Hot Weather",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            TemperatureBand::Cold => "❄️",
            TemperatureBand::Moderate => "🌤️",
            TemperatureBand::Hot => "☀️",
        }
    }

    pub fn range_label(&self) -> &'static str {
        match self {
            TemperatureBand::Cold => "below 10.0°C",
            TemperatureBand::Moderate => "10.0°C to 25.0°C",
            TemperatureBand::Hot => "above 25.0°C",
        }
    }

    /// General dressing tips shown alongside the weather summary.
    pub fn tips(&self) -> &'static [&'static str; 3] {
        match self {
            TemperatureBand::Cold => &[
                "Layer up to trap warm air between clothing",
                "Don't forget to cover extremities (hands, feet, head)",
                "Choose moisture-wicking base layers",
            ],
            TemperatureBand::Moderate => &[
                "Perfect weather for versatile layering",
                "Consider bringing a light jacket for temperature changes",
                "Comfortable walking weather - great for outdoor activities",
            ],
            TemperatureBand::Hot => &[
                "Stay hydrated and seek shade when possible",
                "Choose light-colored, loose-fitting clothes",
                "Don't forget sun protection (hat, sunscreen)",
            ],
        }
    }
}

impl fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown temperature band `{0}` (expected cold|moderate|hot)")]
pub struct ParseBandError(String);

impl FromStr for TemperatureBand {
    type Err = ParseBandError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cold" => Ok(Self::Cold),
            "moderate" => Ok(Self::Moderate),
            "hot" => Ok(Self::Hot),
            other => Err(ParseBandError(other.to_string())),
        }
    }
}

/// Maps a temperature in degrees Celsius to its band.
///
/// Total over every `f64`: values outside the accepted input range still
/// classify by the same thresholds, and NaN fails both comparisons and lands
/// in [`TemperatureBand::Hot`].
pub fn classify(temperature_c: f64) -> TemperatureBand {
    if temperature_c < COLD_BELOW_C {
        TemperatureBand::Cold
    } else if temperature_c <= MODERATE_UP_TO_C {
        TemperatureBand::Moderate
    } else {
        TemperatureBand::Hot
    }
}
