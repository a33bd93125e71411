//! Provider condition codes to Weather Icons identifiers.

use serde::{Deserialize, Serialize};

/// CSS class callers render when a code is not in the table
pub const PLACEHOLDER_CLASS: &str = "wi-na";

/// Semantic icon identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconId {
    DaySunny,
    NightClear,
    DayCloudy,
    NightAltCloudy,
    Cloud,
    Cloudy,
    Showers,
    DayRain,
    NightAltRain,
    Thunderstorm,
    Snow,
    Fog,
}

impl IconId {
    /// Resolve a condition code such as "10n". `None` means unknown.
    pub fn from_condition_code(code: &str) -> Option<Self> {
        let icon = match code {
            "01d" => Self::DaySunny,
            "01n" => Self::NightClear,
            "02d" => Self::DayCloudy,
            "02n" => Self::NightAltCloudy,
            "03d" | "03n" => Self::Cloud,
            "04d" | "04n" => Self::Cloudy,
            "09d" | "09n" => Self::Showers,
            "10d" => Self::DayRain,
            "10n" => Self::NightAltRain,
            "11d" | "11n" => Self::Thunderstorm,
            "13d" | "13n" => Self::Snow,
            "50d" | "50n" => Self::Fog,
            _ => return None,
        };
        Some(icon)
    }

    /// Weather Icons CSS class
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::DaySunny => "wi-day-sunny",
            Self::NightClear => "wi-night-clear",
            Self::DayCloudy => "wi-day-cloudy",
            Self::NightAltCloudy => "wi-night-alt-cloudy",
            Self::Cloud => "wi-cloud",
            Self::Cloudy => "wi-cloudy",
            Self::Showers => "wi-showers",
            Self::DayRain => "wi-day-rain",
            Self::NightAltRain => "wi-night-alt-rain",
            Self::Thunderstorm => "wi-thunderstorm",
            Self::Snow => "wi-snow",
            Self::Fog => "wi-fog",
        }
    }
}

/// Shorthand for [`IconId::from_condition_code`]
pub fn resolve_icon(code: &str) -> Option<IconId> {
    IconId::from_condition_code(code)
}

/// CSS class for an optional icon, falling back to the placeholder
pub fn css_class_or_placeholder(icon: Option<IconId>) -> &'static str {
    icon.map_or(PLACEHOLDER_CLASS, |i| i.css_class())
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_CODES: [&str; 18] = [
        "01d", "01n", "02d", "02n", "03d", "03n", "04d", "04n", "09d", "09n", "10d", "10n",
        "11d", "11n", "13d", "13n", "50d", "50n",
    ];

    #[test]
    fn test_clear_sky_day() {
        assert_eq!(resolve_icon("01d"), Some(IconId::DaySunny));
        assert_eq!(IconId::DaySunny.css_class(), "wi-day-sunny");
    }

    #[test]
    fn test_day_night_variants() {
        assert_eq!(resolve_icon("01n"), Some(IconId::NightClear));
        assert_eq!(resolve_icon("10d"), Some(IconId::DayRain));
        assert_eq!(resolve_icon("10n"), Some(IconId::NightAltRain));
        assert_eq!(resolve_icon("13d"), resolve_icon("13n"));
    }

    #[test]
    fn test_all_table_codes_resolve() {
        for code in KNOWN_CODES {
            assert!(resolve_icon(code).is_some(), "{code} should resolve");
        }
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(resolve_icon("99x"), None);
        assert_eq!(resolve_icon(""), None);
        assert_eq!(resolve_icon("01D"), None);
    }

    #[test]
    fn test_placeholder_for_unknown() {
        assert_eq!(css_class_or_placeholder(resolve_icon("99x")), "wi-na");
        assert_eq!(css_class_or_placeholder(resolve_icon("50n")), "wi-fog");
    }
}
