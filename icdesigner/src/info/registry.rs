//! Descriptors for every entity kind in the digital designer.

use super::schema::{ComponentInfo, EntityInfo, PortInfo, WireInfo};
use super::utils::{gen_component_info, gen_port_info, gen_wire_info};
use crate::model::{ComponentKind, EntityKind, PortKind, WireKind};

/// Descriptor for a component kind.
pub fn component_info(kind: ComponentKind) -> ComponentInfo {
    let (inputs, outputs) = kind.default_port_counts();
    let change_group = if kind.is_gate() { Some(0) } else { None };
    gen_component_info(
        kind,
        port_info(),
        &format!("{},{}", inputs, outputs),
        change_group,
    )
}

pub fn wire_info() -> WireInfo {
    gen_wire_info(WireKind::DigitalWire)
}

pub fn port_info() -> PortInfo {
    gen_port_info(PortKind::DigitalPort)
}

pub fn entity_info(kind: EntityKind) -> EntityInfo {
    match kind {
        EntityKind::Component(kind) => EntityInfo::Component(component_info(kind)),
        EntityKind::Wire(kind) => EntityInfo::Wire(gen_wire_info(kind)),
        EntityKind::Port(kind) => EntityInfo::Port(gen_port_info(kind)),
    }
}

/// Descriptors for all component kinds, in declaration order.
pub fn all_component_infos() -> Vec<ComponentInfo> {
    ComponentKind::ALL.iter().map(|&k| component_info(k)).collect()
}
