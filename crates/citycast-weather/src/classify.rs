//! Temperature bands used to color displayed temperatures.

use serde::{Deserialize, Serialize};

use crate::types::UnitSystem;

/// Display color band of a temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorCategory {
    Hot,
    Warm,
    Cool,
    Cold,
}

impl ColorCategory {
    /// Band for a raw (unrounded) temperature. Lower bounds are inclusive.
    pub fn classify(temperature: f64, units: UnitSystem) -> Self {
        let (hot, warm, cool) = match units {
            UnitSystem::Metric => (30.0, 20.0, 10.0),
            UnitSystem::Imperial => (86.0, 68.0, 50.0),
        };

        if temperature >= hot {
            Self::Hot
        } else if temperature >= warm {
            Self::Warm
        } else if temperature >= cool {
            Self::Cool
        } else {
            Self::Cold
        }
    }

    /// CSS color for the band
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Hot => "#ff5722",
            Self::Warm => "#ff9800",
            Self::Cool => "#2196f3",
            Self::Cold => "#03a9f4",
        }
    }
}

/// Shorthand for [`ColorCategory::classify`]
pub fn classify(temperature: f64, units: UnitSystem) -> ColorCategory {
    ColorCategory::classify(temperature, units)
}
