//! Component ports.

use serde::{Deserialize, Serialize};

use super::guid::Guid;
use super::kind::PortKind;
use crate::info::PortRecord;
use crate::math::Vector;

/// Which side of a component a port belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortSide {
    Input,
    Output,
}

impl PortSide {
    /// Port group number used by descriptors: inputs are group 0, outputs group 1.
    pub fn group(&self) -> u32 {
        match self {
            PortSide::Input => 0,
            PortSide::Output => 1,
        }
    }

    /// Horizontal direction ports on this side stick out to.
    pub fn direction(&self) -> f64 {
        match self {
            PortSide::Input => -1.0,
            PortSide::Output => 1.0,
        }
    }
}

impl std::fmt::Display for PortSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortSide::Input => write!(f, "input"),
            PortSide::Output => write!(f, "output"),
        }
    }
}

/// A connection point. `origin` sits on the owner's body, `target` is the end
/// of the stub where wires attach. Both are in the owner's local space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    pub id: Guid,
    pub side: PortSide,
    #[serde(default)]
    pub name: String,
    pub index: usize,
    pub origin: Vector,
    pub target: Vector,

    /// Owning component; `None` for free-standing IC boundary ports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Guid>,

    /// Wires attached to this port.
    #[serde(default)]
    pub connections: Vec<Guid>,
}

impl Port {
    pub fn new(side: PortSide, index: usize) -> Self {
        Self {
            id: Guid::new(),
            side,
            name: String::new(),
            index,
            origin: Vector::ZERO,
            target: Vector::ZERO,
            parent: None,
            connections: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_positions(mut self, origin: Vector, target: Vector) -> Self {
        self.origin = origin;
        self.target = target;
        self
    }

    pub fn with_parent(mut self, parent: Guid) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn origin_pos(&self) -> Vector {
        self.origin
    }

    pub fn set_origin_pos(&mut self, pos: Vector) {
        self.origin = pos;
    }

    pub fn target_pos(&self) -> Vector {
        self.target
    }

    pub fn set_target_pos(&mut self, pos: Vector) {
        self.target = pos;
    }

    pub fn is_input(&self) -> bool {
        self.side == PortSide::Input
    }

    pub fn is_connected(&self) -> bool {
        !self.connections.is_empty()
    }

    pub(crate) fn connect(&mut self, wire: Guid) {
        if !self.connections.contains(&wire) {
            self.connections.push(wire);
        }
    }

    pub(crate) fn disconnect(&mut self, wire: Guid) {
        self.connections.retain(|w| *w != wire);
    }

    /// Snapshot as a descriptor record. Boundary ports without an owner have none.
    pub fn record(&self) -> Option<PortRecord> {
        let parent = self.parent?;
        Some(PortRecord {
            kind: PortKind::DigitalPort,
            id: self.id,
            parent,
            group: self.side.group(),
            index: self.index,
        })
    }
}
