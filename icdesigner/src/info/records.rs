//! Plain records produced by descriptor default constructors.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_WIRE_COLOR;
use crate::model::{ComponentKind, Guid, PortKind, WireKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub kind: ComponentKind,
    pub id: Guid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: f64,
    pub y: f64,
    /// Radians
    pub angle: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireRecord {
    pub kind: WireKind,
    pub id: Guid,
    pub p1: Guid,
    pub p2: Guid,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortRecord {
    pub kind: PortKind,
    pub id: Guid,
    pub parent: Guid,
    pub group: u32,
    pub index: usize,
}

/// Base component record at the origin, unrotated.
pub fn default_component(kind: ComponentKind, id: Guid) -> ComponentRecord {
    ComponentRecord {
        kind,
        id,
        name: None,
        x: 0.0,
        y: 0.0,
        angle: 0.0,
    }
}

pub fn default_wire(kind: WireKind, id: Guid, p1: Guid, p2: Guid) -> WireRecord {
    WireRecord {
        kind,
        id,
        p1,
        p2,
        color: DEFAULT_WIRE_COLOR.to_string(),
    }
}

pub fn default_port(kind: PortKind, id: Guid, parent: Guid, group: u32, index: usize) -> PortRecord {
    PortRecord {
        kind,
        id,
        parent,
        group,
        index,
    }
}
