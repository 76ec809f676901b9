//! Traffic-light rating value object (green / amber / red).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Self-reported frequency of a leadership behavior.
///
/// Green means the behavior is shown consistently, amber sometimes, red
/// rarely. An unset rating is modeled as `Option::<TrafficLight>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLight {
    Green,
    Amber,
    Red,
}

impl TrafficLight {
    /// All ratings, from most to least frequent.
    pub const ALL: [TrafficLight; 3] = [TrafficLight::Green, TrafficLight::Amber, TrafficLight::Red];

    /// Ordinal score used for scoring: green=5, amber=3, red=1.
    pub fn score(&self) -> u8 {
        match self {
            TrafficLight::Green => 5,
            TrafficLight::Amber => 3,
            TrafficLight::Red => 1,
        }
    }

    /// Returns the lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficLight::Green => "green",
            TrafficLight::Amber => "amber",
            TrafficLight::Red => "red",
        }
    }

    /// Returns the frequency label shown next to the rating control.
    pub fn frequency_label(&self) -> &'static str {
        match self {
            TrafficLight::Green => "Consistently",
            TrafficLight::Amber => "Sometimes",
            TrafficLight::Red => "Rarely",
        }
    }
}

/// Score of a possibly-unset rating. Unset scores 0.
pub fn rating_score(rating: Option<TrafficLight>) -> u8 {
    rating.map_or(0, |r| r.score())
}

impl fmt::Display for TrafficLight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TrafficLight {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "green" => Ok(TrafficLight::Green),
            "amber" => Ok(TrafficLight::Amber),
            "red" => Ok(TrafficLight::Red),
            other => Err(ValidationError::invalid_format(
                "rating",
                format!("expected green, amber or red, got '{}'", other),
            )),
        }
    }
}
