//! Structural checks deciding whether a group may become an IC.

use serde::Serialize;

use crate::model::{create_graph, ComponentKind, DigitalObjectSet, Guid};

/// Kinds that cannot be embedded in an IC.
pub const IC_BLACKLIST: &[ComponentKind] = &[ComponentKind::SegmentDisplay, ComponentKind::Label];

/// Input kinds that stay exposed as IC input ports. Every other input-shaped
/// component (constants, clocks) becomes part of the IC's internals.
pub const INPUT_WHITELIST: &[ComponentKind] = &[ComponentKind::Switch, ComponentKind::Button];

pub fn is_blacklisted(kind: ComponentKind) -> bool {
    IC_BLACKLIST.contains(&kind)
}

pub fn is_whitelisted_input(kind: ComponentKind) -> bool {
    INPUT_WHITELIST.contains(&kind)
}

/// Why a group cannot become an IC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum InvalidIcReason {
    #[error("The group contains no components")]
    Empty,

    #[error("The group is not connected ({groups} separate parts)")]
    Disconnected { groups: usize },

    #[error("{kind} cannot be placed inside an IC")]
    Blacklisted { kind: ComponentKind },

    #[error("Wire {wire} connects to a component outside the group")]
    ExternalWire { wire: Guid },
}

/// Run every check in order: connectivity, blacklist, wire containment.
pub fn check_group(group: &DigitalObjectSet) -> Result<(), InvalidIcReason> {
    let graph = create_graph(group);

    // Make sure it's one connected circuit
    let groups = graph.component_groups();
    if groups == 0 {
        return Err(InvalidIcReason::Empty);
    }
    if groups > 1 {
        return Err(InvalidIcReason::Disconnected { groups });
    }

    // Make sure there's nothing on the blacklist
    if let Some(c) = group.components().find(|c| is_blacklisted(c.kind())) {
        return Err(InvalidIcReason::Blacklisted { kind: c.kind() });
    }

    // Make sure all wires connected to components are in the group
    let external = group
        .components()
        .flat_map(|c| c.connections())
        .find(|w| !group.contains_wire(*w));
    if let Some(wire) = external {
        return Err(InvalidIcReason::ExternalWire { wire });
    }

    Ok(())
}
