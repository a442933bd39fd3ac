//! Deep copies of object groups.

use std::collections::HashMap;

use super::component::Component;
use super::guid::Guid;
use super::object_set::{DigitalObjectSet, IoObject};
use super::wire::Wire;

/// Deep-copy a group of objects.
///
/// Every copied component and port gets a fresh identifier. Wires are copied
/// only when both of their endpoints belong to copied components, so the
/// copy's wiring is entirely internal. Designer references are preserved.
pub fn copy_group(objects: &[IoObject]) -> DigitalObjectSet {
    let mut components: Vec<Component> = Vec::new();
    let mut port_map: HashMap<Guid, Guid> = HashMap::new();
    let mut port_owner: HashMap<Guid, usize> = HashMap::new();

    // Pass 1: copy components under fresh ids, forgetting old connections
    for obj in objects {
        let IoObject::Component(original) = obj else {
            continue;
        };
        let mut copy = original.clone();
        let mapping = copy.reassign_ids();
        for port in copy.ports_mut() {
            port.connections.clear();
        }
        let idx = components.len();
        for (old, new) in mapping.into_iter().skip(1) {
            port_map.insert(old, new);
            port_owner.insert(new, idx);
        }
        components.push(copy);
    }

    // Pass 2: copy wires whose endpoints were both copied and re-attach them
    let mut wires: Vec<Wire> = Vec::new();
    for obj in objects {
        let IoObject::Wire(original) = obj else {
            continue;
        };
        let (Some(&p1), Some(&p2)) = (port_map.get(&original.p1), port_map.get(&original.p2)) else {
            tracing::debug!("Dropping wire {} that leaves the copied group", original.id);
            continue;
        };
        let mut wire = original.clone();
        wire.id = Guid::new();
        wire.p1 = p1;
        wire.p2 = p2;

        for port_id in [p1, p2] {
            if let Some(port) = port_owner
                .get(&port_id)
                .and_then(|&idx| components.get_mut(idx))
                .and_then(|c| c.port_mut(port_id))
            {
                port.connect(wire.id);
            }
        }
        wires.push(wire);
    }

    DigitalObjectSet::new(
        components
            .into_iter()
            .map(IoObject::Component)
            .chain(wires.into_iter().map(IoObject::Wire)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Circuit, ComponentKind, PortSide};

    #[test]
    fn test_copy_remaps_internal_wiring() {
        let mut circuit = Circuit::new("copy");
        let sw = circuit.add_component(ComponentKind::Switch, "A");
        let led = circuit.add_component(ComponentKind::Led, "B");
        let wire = circuit
            .connect_components(sw, 0, led, 0)
            .expect("switch to led");

        let objects = circuit.objects(&[sw, led, wire]);
        let copy = copy_group(&objects);

        assert_eq!(copy.inputs().len(), 1);
        assert_eq!(copy.outputs().len(), 1);
        assert_eq!(copy.wires().len(), 1);

        let copied_sw = &copy.inputs()[0];
        let copied_led = &copy.outputs()[0];
        let copied_wire = &copy.wires()[0];
        assert_ne!(copied_sw.id(), sw);
        assert_ne!(copied_wire.id, wire);
        assert_eq!(copied_wire.p1, copied_sw.outputs()[0].id);
        assert_eq!(copied_wire.p2, copied_led.inputs()[0].id);
        assert_eq!(copied_sw.connections(), vec![copied_wire.id]);
        assert_eq!(
            copied_led.port_at(PortSide::Input, 0).map(|p| p.connections.clone()),
            Some(vec![copied_wire.id])
        );
    }

    #[test]
    fn test_copy_drops_external_wires() {
        let mut circuit = Circuit::new("copy");
        let sw = circuit.add_component(ComponentKind::Switch, "A");
        let led = circuit.add_component(ComponentKind::Led, "B");
        let wire = circuit.connect_components(sw, 0, led, 0).unwrap();

        // Only the switch and the wire are selected
        let objects = circuit.objects(&[sw, wire]);
        let copy = copy_group(&objects);

        assert!(copy.wires().is_empty());
        assert!(copy.inputs()[0].connections().is_empty());
    }
}
