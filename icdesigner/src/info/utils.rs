//! Generators for entity descriptors.

use super::schema::{ComponentInfo, PortInfo, PortSchema, PropInfo, PropSchema, WireInfo};
use super::units::{angle_info, AngleUnit};
use crate::constants::DEFAULT_WIRE_COLOR;
use crate::model::{ComponentKind, PortKind, WireKind};

/// Component kinds whose port configuration the user may change.
pub const CHANGEABLE_PORT_COMPONENTS: &[ComponentKind] = &[
    ComponentKind::AndGate,
    ComponentKind::NandGate,
    ComponentKind::OrGate,
    ComponentKind::NorGate,
    ComponentKind::XorGate,
    ComponentKind::XnorGate,
];

/// Descriptor for a positioned component kind.
///
/// Every component exposes `x`, `y` and `angle`.
pub fn gen_component_info(
    kind: ComponentKind,
    default_port: PortInfo,
    initial_port_config: &str,
    change_group: Option<u32>,
) -> ComponentInfo {
    let mut prop_info = PropSchema::new()
        .with("x", PropInfo::float("X Position", 1.0))
        .with("y", PropInfo::float("Y Position", 1.0));
    let (key, angle) = angle_info("angle", "Angle", 0.0, AngleUnit::Deg, 45.0);
    prop_info.insert(key, angle);

    ComponentInfo {
        kind,
        port_info: PortSchema {
            default: default_port,
            initial_config: initial_port_config.to_string(),
            allow_changes: CHANGEABLE_PORT_COMPONENTS.contains(&kind),
            change_group,
        },
        prop_info,
    }
}

pub fn gen_wire_info(kind: WireKind) -> WireInfo {
    WireInfo {
        kind,
        prop_info: PropSchema::new().with("color", PropInfo::color("Color", DEFAULT_WIRE_COLOR)),
    }
}

pub fn gen_port_info(kind: PortKind) -> PortInfo {
    PortInfo {
        kind,
        prop_info: PropSchema::new(),
    }
}
