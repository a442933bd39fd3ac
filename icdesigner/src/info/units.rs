//! Display units for editable properties.

use serde::{Deserialize, Serialize};

use super::schema::PropInfo;

/// Unit an angle property is displayed in. Values are stored in radians.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    Deg,
    Rad,
}

impl AngleUnit {
    /// Convert a value expressed in this unit to radians.
    pub fn to_radians(&self, value: f64) -> f64 {
        match self {
            AngleUnit::Deg => value.to_radians(),
            AngleUnit::Rad => value,
        }
    }

    /// Convert radians to this unit.
    pub fn from_radians(&self, radians: f64) -> f64 {
        match self {
            AngleUnit::Deg => radians.to_degrees(),
            AngleUnit::Rad => radians,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            AngleUnit::Deg => "°",
            AngleUnit::Rad => "rad",
        }
    }
}

/// Property entry for an angle edited in `unit` with the given step.
pub fn angle_info(
    key: &str,
    label: &str,
    initial: f64,
    unit: AngleUnit,
    step: f64,
) -> (String, PropInfo) {
    (
        key.to_string(),
        PropInfo::Float {
            label: label.to_string(),
            step: Some(step),
            initial: Some(initial),
            unit: Some(unit),
        },
    )
}
