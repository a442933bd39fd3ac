//! Groups of circuit objects partitioned into inputs, outputs and the rest.

use serde::{Deserialize, Serialize};

use super::component::Component;
use super::guid::Guid;
use super::wire::Wire;

/// Any object that can be selected in a circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum IoObject {
    Component(Component),
    Wire(Wire),
}

impl IoObject {
    pub fn id(&self) -> Guid {
        match self {
            IoObject::Component(c) => c.id(),
            IoObject::Wire(w) => w.id(),
        }
    }

    pub fn as_component(&self) -> Option<&Component> {
        match self {
            IoObject::Component(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> Option<&Wire> {
        match self {
            IoObject::Wire(w) => Some(w),
            _ => None,
        }
    }

    pub fn designer(&self) -> Option<Guid> {
        match self {
            IoObject::Component(c) => c.designer(),
            IoObject::Wire(w) => w.designer(),
        }
    }
}

impl From<Component> for IoObject {
    fn from(component: Component) -> Self {
        IoObject::Component(component)
    }
}

impl From<Wire> for IoObject {
    fn from(wire: Wire) -> Self {
        IoObject::Wire(wire)
    }
}

/// Where a component lands when a set is partitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Input,
    Output,
    Other,
}

impl Bucket {
    /// Components with only outputs are inputs to the group; components with a
    /// single input and nothing else are outputs.
    pub fn of(component: &Component) -> Self {
        match (component.input_count(), component.output_count()) {
            (0, n) if n > 0 => Bucket::Input,
            // An IC output port carries one signal, so only one-input sinks
            // qualify. Multi-input sinks such as the segment display stay in
            // `others`.
            (1, 0) => Bucket::Output,
            _ => Bucket::Other,
        }
    }
}

/// A digital object set: components split into inputs, outputs and others,
/// plus the wires of the group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DigitalObjectSet {
    inputs: Vec<Component>,
    outputs: Vec<Component>,
    others: Vec<Component>,
    wires: Vec<Wire>,
}

impl DigitalObjectSet {
    pub fn new(objects: impl IntoIterator<Item = IoObject>) -> Self {
        let mut set = Self::default();
        for obj in objects {
            match obj {
                IoObject::Wire(w) => set.wires.push(w),
                IoObject::Component(c) => match Bucket::of(&c) {
                    Bucket::Input => set.inputs.push(c),
                    Bucket::Output => set.outputs.push(c),
                    Bucket::Other => set.others.push(c),
                },
            }
        }
        set
    }

    pub fn inputs(&self) -> &[Component] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[Component] {
        &self.outputs
    }

    pub fn others(&self) -> &[Component] {
        &self.others
    }

    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    pub fn set_inputs(&mut self, inputs: Vec<Component>) {
        self.inputs = inputs;
    }

    pub fn set_others(&mut self, others: Vec<Component>) {
        self.others = others;
    }

    /// Take the input bucket out, leaving it empty.
    pub fn take_inputs(&mut self) -> Vec<Component> {
        std::mem::take(&mut self.inputs)
    }

    pub fn take_others(&mut self) -> Vec<Component> {
        std::mem::take(&mut self.others)
    }

    /// All components: inputs, then outputs, then others.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.inputs
            .iter()
            .chain(self.outputs.iter())
            .chain(self.others.iter())
    }

    fn components_mut(&mut self) -> impl Iterator<Item = &mut Component> {
        self.inputs
            .iter_mut()
            .chain(self.outputs.iter_mut())
            .chain(self.others.iter_mut())
    }

    pub fn component_count(&self) -> usize {
        self.inputs.len() + self.outputs.len() + self.others.len()
    }

    pub fn len(&self) -> usize {
        self.component_count() + self.wires.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn component(&self, id: Guid) -> Option<&Component> {
        self.components().find(|c| c.id() == id)
    }

    pub fn contains_wire(&self, id: Guid) -> bool {
        self.wires.iter().any(|w| w.id == id)
    }

    /// Component owning the given port, if it is part of this set.
    pub fn port_owner(&self, port: Guid) -> Option<&Component> {
        self.components().find(|c| c.port(port).is_some())
    }

    /// Point every object at a designer, or detach them all with `None`.
    pub fn set_designer(&mut self, designer: Option<Guid>) {
        for c in self.components_mut() {
            c.set_designer(designer);
        }
        for w in &mut self.wires {
            w.set_designer(designer);
        }
    }

    /// Flatten back into a list: components (inputs, outputs, others) then wires.
    pub fn to_list(&self) -> Vec<IoObject> {
        self.components()
            .cloned()
            .map(IoObject::Component)
            .chain(self.wires.iter().cloned().map(IoObject::Wire))
            .collect()
    }
}

/// Group arbitrary objects into a set without copying identities.
pub fn create_group(objects: &[IoObject]) -> DigitalObjectSet {
    DigitalObjectSet::new(objects.iter().cloned())
}
