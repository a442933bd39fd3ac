//! The circuit designer: owns placed components and the wires between them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::component::Component;
use super::document::CircuitMetadata;
use super::guid::Guid;
use super::kind::ComponentKind;
use super::object_set::IoObject;
use super::port::{Port, PortSide};
use super::wire::Wire;
use crate::core::IcDesignerError;
use crate::ic::ICData;
use crate::info::{component_info, PortConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circuit {
    id: Guid,
    pub metadata: CircuitMetadata,
    components: Vec<Component>,
    wires: Vec<Wire>,

    /// Document reference -> component id
    #[serde(default)]
    refs: HashMap<String, Guid>,
}

impl Circuit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Guid::new(),
            metadata: CircuitMetadata::new(name),
            components: Vec::new(),
            wires: Vec::new(),
            refs: HashMap::new(),
        }
    }

    /// Identifier objects use to refer back to this designer.
    pub fn id(&self) -> Guid {
        self.id
    }

    /// Place a new component of the given kind.
    pub fn add_component(&mut self, kind: ComponentKind, name: impl Into<String>) -> Guid {
        self.add(Component::new(kind, name))
    }

    /// Take ownership of a component and point it at this designer.
    pub fn add(&mut self, mut component: Component) -> Guid {
        component.set_designer(Some(self.id));
        let id = component.id();
        self.components.push(component);
        id
    }

    /// Place a component and make it addressable by a document reference.
    pub fn add_with_ref(
        &mut self,
        reference: impl Into<String>,
        component: Component,
    ) -> Result<Guid, IcDesignerError> {
        let reference = reference.into();
        if self.refs.contains_key(&reference) {
            return Err(IcDesignerError::Document(format!(
                "Duplicate component reference: {}",
                reference
            )));
        }
        let id = self.add(component);
        self.refs.insert(reference, id);
        Ok(id)
    }

    /// Place an IC built from `data` as a component.
    pub fn place_ic(&mut self, data: ICData, name: impl Into<String>) -> Guid {
        self.add(Component::new_ic(data, name))
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    pub fn component(&self, id: Guid) -> Option<&Component> {
        self.components.iter().find(|c| c.id() == id)
    }

    pub fn component_mut(&mut self, id: Guid) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.id() == id)
    }

    pub fn wire(&self, id: Guid) -> Option<&Wire> {
        self.wires.iter().find(|w| w.id == id)
    }

    pub(crate) fn wire_mut(&mut self, id: Guid) -> Option<&mut Wire> {
        self.wires.iter_mut().find(|w| w.id == id)
    }

    /// Look up a port together with its owner.
    pub fn find_port(&self, port: Guid) -> Option<(&Component, &Port)> {
        self.components
            .iter()
            .find_map(|c| c.port(port).map(|p| (c, p)))
    }

    pub fn resolve_ref(&self, reference: &str) -> Option<Guid> {
        self.refs.get(reference).copied()
    }

    /// Reference under which a component was added, if any.
    pub fn ref_of(&self, component: Guid) -> Option<&str> {
        self.refs
            .iter()
            .find(|(_, id)| **id == component)
            .map(|(r, _)| r.as_str())
    }

    /// Wire an output port to an input port.
    ///
    /// Input ports accept a single wire; output ports fan out freely.
    pub fn connect(&mut self, from: Guid, to: Guid) -> Result<Guid, IcDesignerError> {
        let (_, out) = self
            .find_port(from)
            .ok_or_else(|| IcDesignerError::NotFound(format!("port {}", from)))?;
        if out.side != PortSide::Output {
            return Err(IcDesignerError::Connection(format!(
                "Port {} is not an output port",
                from
            )));
        }
        let (_, input) = self
            .find_port(to)
            .ok_or_else(|| IcDesignerError::NotFound(format!("port {}", to)))?;
        if input.side != PortSide::Input {
            return Err(IcDesignerError::Connection(format!(
                "Port {} is not an input port",
                to
            )));
        }
        if input.is_connected() {
            return Err(IcDesignerError::Connection(format!(
                "Input port {} already has a wire",
                to
            )));
        }

        let mut wire = Wire::new(from, to);
        wire.set_designer(Some(self.id));
        let id = wire.id;
        self.attach(from, id);
        self.attach(to, id);
        self.wires.push(wire);
        tracing::debug!("Connected {} -> {} with wire {}", from, to, id);
        Ok(id)
    }

    /// Wire output `out_index` of one component to input `in_index` of another.
    pub fn connect_components(
        &mut self,
        from: Guid,
        out_index: usize,
        to: Guid,
        in_index: usize,
    ) -> Result<Guid, IcDesignerError> {
        let p1 = self.port_id(from, PortSide::Output, out_index)?;
        let p2 = self.port_id(to, PortSide::Input, in_index)?;
        self.connect(p1, p2)
    }

    fn port_id(&self, component: Guid, side: PortSide, index: usize) -> Result<Guid, IcDesignerError> {
        let c = self
            .component(component)
            .ok_or_else(|| IcDesignerError::NotFound(format!("component {}", component)))?;
        c.port_at(side, index).map(|p| p.id).ok_or_else(|| {
            IcDesignerError::NotFound(format!(
                "{} port {} on {} '{}'",
                side,
                index,
                c.kind(),
                c.name()
            ))
        })
    }

    fn attach(&mut self, port: Guid, wire: Guid) {
        if let Some(p) = self.components.iter_mut().find_map(|c| c.port_mut(port)) {
            p.connect(wire);
        }
    }

    fn detach(&mut self, port: Guid, wire: Guid) {
        if let Some(p) = self.components.iter_mut().find_map(|c| c.port_mut(port)) {
            p.disconnect(wire);
        }
    }

    /// Remove a wire and unhook it from both endpoints.
    pub fn disconnect(&mut self, wire: Guid) -> Option<Wire> {
        let pos = self.wires.iter().position(|w| w.id == wire)?;
        let mut removed = self.wires.remove(pos);
        self.detach(removed.p1, wire);
        self.detach(removed.p2, wire);
        removed.set_designer(None);
        Some(removed)
    }

    /// Remove a component together with every wire attached to it.
    pub fn remove_component(&mut self, id: Guid) -> Option<Component> {
        let pos = self.components.iter().position(|c| c.id() == id)?;
        for wire in self.components[pos].connections() {
            self.disconnect(wire);
        }
        let mut removed = self.components.remove(pos);
        removed.set_designer(None);
        self.refs.retain(|_, c| *c != id);
        Some(removed)
    }

    /// Change a component's port configuration (e.g. `"3,1"` for a 3-input gate).
    ///
    /// Only kinds whose descriptor allows port changes accept this, and only
    /// the descriptor's change group may differ. Wires on removed ports are
    /// deleted and returned.
    pub fn set_port_config(&mut self, id: Guid, config: &str) -> Result<Vec<Wire>, IcDesignerError> {
        let component = self
            .component(id)
            .ok_or_else(|| IcDesignerError::NotFound(format!("component {}", id)))?;
        let info = component_info(component.kind());
        if !info.port_info.allow_changes {
            return Err(IcDesignerError::PortConfig(format!(
                "{} does not allow port changes",
                component.kind()
            )));
        }

        let requested = PortConfig::parse(config)?;
        let current = PortConfig::new(vec![component.input_count(), component.output_count()]);
        if requested.group_count() != current.group_count() {
            return Err(IcDesignerError::PortConfig(format!(
                "Expected {} port groups, got {}",
                current.group_count(),
                requested.group_count()
            )));
        }
        for group in 0..current.group_count() {
            let fixed = info.port_info.change_group.map(|g| g as usize != group).unwrap_or(false);
            if fixed && requested.count(group) != current.count(group) {
                return Err(IcDesignerError::PortConfig(format!(
                    "Port group {} of {} cannot change",
                    group,
                    component.kind()
                )));
            }
        }

        let dropped = self
            .component_mut(id)
            .map(|c| c.set_port_counts(requested.count(0), requested.count(1)))
            .unwrap_or_default();
        Ok(dropped.into_iter().filter_map(|w| self.disconnect(w)).collect())
    }

    /// Clone the given objects out of the circuit. Unknown ids are skipped.
    pub fn objects(&self, ids: &[Guid]) -> Vec<IoObject> {
        ids.iter()
            .filter_map(|id| {
                self.component(*id)
                    .cloned()
                    .map(IoObject::Component)
                    .or_else(|| self.wire(*id).cloned().map(IoObject::Wire))
            })
            .collect()
    }

    /// Every object in the circuit.
    pub fn all_objects(&self) -> Vec<IoObject> {
        self.components
            .iter()
            .cloned()
            .map(IoObject::Component)
            .chain(self.wires.iter().cloned().map(IoObject::Wire))
            .collect()
    }

    /// Select components by id plus every wire running between two selected
    /// components, the way a box selection in the editor picks them up.
    pub fn selection(&self, components: &[Guid]) -> Vec<IoObject> {
        let inside = |port: Guid| {
            self.find_port(port)
                .map(|(c, _)| components.contains(&c.id()))
                .unwrap_or(false)
        };
        let wires: Vec<Guid> = self
            .wires
            .iter()
            .filter(|w| inside(w.p1) && inside(w.p2))
            .map(|w| w.id)
            .collect();

        let mut ids = components.to_vec();
        ids.extend(wires);
        self.objects(&ids)
    }

    /// Like [`Circuit::selection`], addressing components by document reference.
    pub fn select_refs<S: AsRef<str>>(&self, refs: &[S]) -> Result<Vec<IoObject>, IcDesignerError> {
        let ids = refs
            .iter()
            .map(|r| {
                self.resolve_ref(r.as_ref())
                    .ok_or_else(|| IcDesignerError::NotFound(format!("component '{}'", r.as_ref())))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.selection(&ids))
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_circuit() -> (Circuit, Guid, Guid, Guid) {
        let mut circuit = Circuit::new("Test Circuit");
        let a = circuit.add_component(ComponentKind::Switch, "A");
        let and = circuit.add_component(ComponentKind::AndGate, "");
        let led = circuit.add_component(ComponentKind::Led, "Q");
        circuit.connect_components(a, 0, and, 0).unwrap();
        circuit.connect_components(a, 0, and, 1).unwrap();
        circuit.connect_components(and, 0, led, 0).unwrap();
        (circuit, a, and, led)
    }

    #[test]
    fn test_added_objects_point_at_designer() {
        let (circuit, a, _, _) = create_test_circuit();
        assert_eq!(circuit.component(a).unwrap().designer(), Some(circuit.id()));
        assert!(circuit.wires().iter().all(|w| w.designer() == Some(circuit.id())));
    }

    #[test]
    fn test_input_accepts_single_wire() {
        let (mut circuit, a, and, _) = create_test_circuit();
        let err = circuit.connect_components(a, 0, and, 0).unwrap_err();
        assert!(matches!(err, IcDesignerError::Connection(_)));
    }

    #[test]
    fn test_connect_checks_direction() {
        let (mut circuit, a, and, _) = create_test_circuit();
        let and_in = circuit.component(and).unwrap().inputs()[0].id;
        let a_out = circuit.component(a).unwrap().outputs()[0].id;
        assert!(circuit.connect(and_in, a_out).is_err());
    }

    #[test]
    fn test_remove_component_drops_its_wires() {
        let (mut circuit, _, and, led) = create_test_circuit();
        let removed = circuit.remove_component(and).unwrap();
        assert_eq!(removed.designer(), None);
        assert!(circuit.wires().is_empty());
        assert!(circuit.component(led).unwrap().connections().is_empty());
    }

    #[test]
    fn test_selection_picks_internal_wires_only() {
        let (circuit, a, and, _) = create_test_circuit();
        let selected = circuit.selection(&[a, and]);
        let wires = selected.iter().filter(|o| o.as_wire().is_some()).count();
        assert_eq!(selected.len(), 4);
        assert_eq!(wires, 2);
    }

    #[test]
    fn test_set_port_config_on_gate() {
        let (mut circuit, _, and, _) = create_test_circuit();
        let dropped = circuit.set_port_config(and, "3,1").unwrap();
        assert!(dropped.is_empty());
        assert_eq!(circuit.component(and).unwrap().input_count(), 3);

        let dropped = circuit.set_port_config(and, "1,1").unwrap();
        assert_eq!(dropped.len(), 1);
        assert_eq!(circuit.wires().len(), 2);
    }

    #[test]
    fn test_set_port_config_rejects_fixed_group() {
        let (mut circuit, a, and, _) = create_test_circuit();
        assert!(circuit.set_port_config(and, "2,2").is_err());
        assert!(circuit.set_port_config(a, "0,2").is_err());
        assert!(circuit.set_port_config(and, "two").is_err());
    }
}
