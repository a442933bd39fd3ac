//! Wires between component ports.

use serde::{Deserialize, Serialize};

use super::guid::Guid;
use super::kind::WireKind;
use crate::constants::DEFAULT_WIRE_COLOR;
use crate::info::WireRecord;

/// A wire from an output port (`p1`) to an input port (`p2`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wire {
    pub id: Guid,
    pub p1: Guid,
    pub p2: Guid,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designer: Option<Guid>,
}

fn default_color() -> String {
    DEFAULT_WIRE_COLOR.to_string()
}

impl Wire {
    pub fn new(p1: Guid, p2: Guid) -> Self {
        Self {
            id: Guid::new(),
            p1,
            p2,
            color: default_color(),
            designer: None,
        }
    }

    pub fn id(&self) -> Guid {
        self.id
    }

    pub fn designer(&self) -> Option<Guid> {
        self.designer
    }

    pub fn set_designer(&mut self, designer: Option<Guid>) {
        self.designer = designer;
    }

    pub fn record(&self) -> WireRecord {
        WireRecord {
            kind: WireKind::DigitalWire,
            id: self.id,
            p1: self.p1,
            p2: self.p2,
            color: self.color.clone(),
        }
    }
}
