//! Placed circuit components.

use serde::{Deserialize, Serialize};

use super::guid::Guid;
use super::kind::ComponentKind;
use super::port::{Port, PortSide};
use crate::constants::{DEFAULT_SIZE, IO_PORT_LENGTH};
use crate::ic::ICData;
use crate::info::ComponentRecord;
use crate::math::{Transform, Vector};

/// A component placed in a circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    id: Guid,
    kind: ComponentKind,
    #[serde(default)]
    name: String,
    transform: Transform,
    inputs: Vec<Port>,
    outputs: Vec<Port>,

    /// Designer this component currently lives in. Not an ownership link.
    #[serde(skip_serializing_if = "Option::is_none")]
    designer: Option<Guid>,

    /// Layout of the embedded sub-circuit for `ComponentKind::Ic`.
    #[serde(skip_serializing_if = "Option::is_none")]
    ic: Option<Box<ICData>>,
}

impl Component {
    /// Create a component with the kind's default port layout.
    pub fn new(kind: ComponentKind, name: impl Into<String>) -> Self {
        let (inputs, outputs) = kind.default_port_counts();
        let mut component = Self {
            id: Guid::new(),
            kind,
            name: name.into(),
            transform: Transform::new(Vector::ZERO, Vector::new(DEFAULT_SIZE, DEFAULT_SIZE)),
            inputs: Vec::new(),
            outputs: Vec::new(),
            designer: None,
            ic: None,
        };
        component.set_port_counts(inputs, outputs);
        component
    }

    /// Create an IC component whose ports mirror the layout's boundary ports.
    pub fn new_ic(data: ICData, name: impl Into<String>) -> Self {
        let id = Guid::new();
        let mirror = |side: PortSide, ports: &[Port]| -> Vec<Port> {
            ports
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    Port::new(side, i)
                        .with_name(p.name())
                        .with_positions(p.origin_pos(), p.target_pos())
                        .with_parent(id)
                })
                .collect()
        };
        let inputs = mirror(PortSide::Input, data.input_ports());
        let outputs = mirror(PortSide::Output, data.output_ports());

        Self {
            id,
            kind: ComponentKind::Ic,
            name: name.into(),
            transform: Transform::new(Vector::ZERO, data.size()),
            inputs,
            outputs,
            designer: None,
            ic: Some(Box::new(data)),
        }
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.transform.set_pos(Vector::new(x, y));
        self
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.transform.set_angle(angle);
        self
    }

    pub fn id(&self) -> Guid {
        self.id
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn pos(&self) -> Vector {
        self.transform.pos()
    }

    pub fn set_pos(&mut self, pos: Vector) {
        self.transform.set_pos(pos);
    }

    pub fn angle(&self) -> f64 {
        self.transform.angle()
    }

    pub fn set_angle(&mut self, angle: f64) {
        self.transform.set_angle(angle);
    }

    pub fn inputs(&self) -> &[Port] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[Port] {
        &self.outputs
    }

    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// All ports, inputs first.
    pub fn ports(&self) -> impl Iterator<Item = &Port> {
        self.inputs.iter().chain(self.outputs.iter())
    }

    pub fn port(&self, id: Guid) -> Option<&Port> {
        self.ports().find(|p| p.id == id)
    }

    pub fn port_mut(&mut self, id: Guid) -> Option<&mut Port> {
        self.inputs
            .iter_mut()
            .chain(self.outputs.iter_mut())
            .find(|p| p.id == id)
    }

    pub(crate) fn ports_mut(&mut self) -> impl Iterator<Item = &mut Port> {
        self.inputs.iter_mut().chain(self.outputs.iter_mut())
    }

    pub fn port_at(&self, side: PortSide, index: usize) -> Option<&Port> {
        match side {
            PortSide::Input => self.inputs.get(index),
            PortSide::Output => self.outputs.get(index),
        }
    }

    /// Every wire attached to any of this component's ports.
    pub fn connections(&self) -> Vec<Guid> {
        let mut wires: Vec<Guid> = Vec::new();
        for wire in self.ports().flat_map(|p| p.connections.iter()) {
            if !wires.contains(wire) {
                wires.push(*wire);
            }
        }
        wires
    }

    pub fn designer(&self) -> Option<Guid> {
        self.designer
    }

    pub fn set_designer(&mut self, designer: Option<Guid>) {
        self.designer = designer;
    }

    pub fn ic_data(&self) -> Option<&ICData> {
        self.ic.as_deref()
    }

    /// Rebuild the port lists with the given counts.
    ///
    /// Existing ports (and their connections) are kept for indices that
    /// survive; returns the wires that were attached to removed ports.
    pub fn set_port_counts(&mut self, inputs: usize, outputs: usize) -> Vec<Guid> {
        let mut dropped = Vec::new();
        for port in self.inputs.drain(inputs.min(self.inputs.len())..) {
            dropped.extend(port.connections);
        }
        for port in self.outputs.drain(outputs.min(self.outputs.len())..) {
            dropped.extend(port.connections);
        }
        while self.inputs.len() < inputs {
            let port = Port::new(PortSide::Input, self.inputs.len()).with_parent(self.id);
            self.inputs.push(port);
        }
        while self.outputs.len() < outputs {
            let port = Port::new(PortSide::Output, self.outputs.len()).with_parent(self.id);
            self.outputs.push(port);
        }

        // Grow the body so every port gets its own slot.
        let slots = inputs.max(outputs) as f64;
        let height = DEFAULT_SIZE.max(DEFAULT_SIZE / 2.0 * slots);
        self.transform.set_size(Vector::new(DEFAULT_SIZE, height));
        self.layout_ports();
        dropped
    }

    fn layout_ports(&mut self) {
        let half_width = self.transform.size().x / 2.0;
        for ports in [&mut self.inputs, &mut self.outputs] {
            let n = ports.len() as f64;
            for (i, port) in ports.iter_mut().enumerate() {
                let dir = port.side.direction();
                let l = -DEFAULT_SIZE / 2.0 * (i as f64 - n / 2.0 + 0.5);
                port.index = i;
                port.origin = Vector::new(dir * half_width, l);
                port.target = Vector::new(dir * (half_width + IO_PORT_LENGTH), l);
            }
        }
    }

    /// Re-key this component and its ports with fresh identifiers.
    ///
    /// Returns `(old, new)` pairs for the component and every port.
    pub(crate) fn reassign_ids(&mut self) -> Vec<(Guid, Guid)> {
        let mut mapping = Vec::with_capacity(1 + self.inputs.len() + self.outputs.len());
        let new_id = Guid::new();
        mapping.push((self.id, new_id));
        self.id = new_id;
        for port in self.ports_mut() {
            let fresh = Guid::new();
            mapping.push((port.id, fresh));
            port.id = fresh;
            port.parent = Some(new_id);
        }
        mapping
    }

    /// Snapshot as a descriptor record.
    pub fn record(&self) -> ComponentRecord {
        ComponentRecord {
            kind: self.kind,
            id: self.id,
            name: if self.name.is_empty() {
                None
            } else {
                Some(self.name.clone())
            },
            x: self.transform.pos().x,
            y: self.transform.pos().y,
            angle: self.transform.angle(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_has_default_ports() {
        let and = Component::new(ComponentKind::AndGate, "and");
        assert_eq!(and.input_count(), 2);
        assert_eq!(and.output_count(), 1);
        assert!(and.ports().all(|p| p.parent == Some(and.id())));
    }

    #[test]
    fn test_port_stubs_point_away_from_body() {
        let not = Component::new(ComponentKind::NotGate, "not");
        let input = &not.inputs()[0];
        let output = &not.outputs()[0];
        assert!(input.target_pos().x < input.origin_pos().x);
        assert!(output.target_pos().x > output.origin_pos().x);
    }

    #[test]
    fn test_shrinking_ports_reports_dropped_wires() {
        let mut or = Component::new(ComponentKind::OrGate, "or");
        or.set_port_counts(4, 1);
        assert_eq!(or.input_count(), 4);
        assert_eq!(or.transform().size().y, 100.0);

        let wire = Guid::new();
        let last = or.inputs()[3].id;
        or.port_mut(last).unwrap().connect(wire);

        let dropped = or.set_port_counts(2, 1);
        assert_eq!(dropped, vec![wire]);
        assert_eq!(or.input_count(), 2);
    }

    #[test]
    fn test_record_snapshot() {
        let sw = Component::new(ComponentKind::Switch, "A").with_position(10.0, -5.0);
        let record = sw.record();
        assert_eq!(record.kind, ComponentKind::Switch);
        assert_eq!(record.id, sw.id());
        assert_eq!(record.name.as_deref(), Some("A"));
        assert_eq!((record.x, record.y), (10.0, -5.0));
    }
}
