//! Geometry and contents of an integrated circuit.

use serde::{Deserialize, Serialize};

use super::validate::{check_group, is_whitelisted_input, InvalidIcReason};
use crate::constants::{FAR_RAY_DISTANCE, IC_WIDTH_PER_CHAR, PORT_NUDGE, PORT_STUB_INSET};
use crate::core::LayoutOptions;
use crate::math::{nearest_point_on_rect, Transform, Vector};
use crate::model::{copy_group, create_group, Component, DigitalObjectSet, IoObject, Port, PortSide};

/// A sub-circuit bundled into a box with boundary ports.
///
/// There is one input port per input of the collection and one output port
/// per output, in the same order and with the same names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ICData {
    transform: Transform,
    collection: Option<DigitalObjectSet>,
    input_ports: Vec<Port>,
    output_ports: Vec<Port>,
    #[serde(default)]
    options: LayoutOptions,
}

impl ICData {
    /// Lay out an IC around `collection`, or an empty shell for `None`.
    pub fn new(collection: Option<DigitalObjectSet>) -> Self {
        Self::with_options(collection, LayoutOptions::default())
    }

    pub fn with_options(collection: Option<DigitalObjectSet>, options: LayoutOptions) -> Self {
        let mut data = Self {
            transform: Transform::default(),
            collection,
            input_ports: Vec::new(),
            output_ports: Vec::new(),
            options,
        };

        if let Some(collection) = &data.collection {
            let size = data.calculate_size(collection);
            data.transform.set_size(size);
            data.input_ports = data.create_ports(PortSide::Input);
            data.output_ports = data.create_ports(PortSide::Output);
            data.position_ports();
        }

        data
    }

    /// Width grows with the longest port name, height with the taller port column.
    fn calculate_size(&self, collection: &DigitalObjectSet) -> Vector {
        let inputs = collection.inputs();
        let outputs = collection.outputs();

        let longest_name = inputs
            .iter()
            .chain(outputs.iter())
            .map(|c| c.name().chars().count())
            .max()
            .unwrap_or(0);

        let w = self.options.base_size + IC_WIDTH_PER_CHAR * longest_name as f64;
        let h = self.options.base_size / 2.0 * inputs.len().max(outputs.len()) as f64;
        Vector::new(w, h)
    }

    fn create_ports(&self, side: PortSide) -> Vec<Port> {
        let Some(collection) = &self.collection else {
            return Vec::new();
        };
        let sources: &[Component] = match side {
            PortSide::Input => collection.inputs(),
            PortSide::Output => collection.outputs(),
        };
        let base = self.options.base_size;
        let w = self.transform.size().x;
        let n = sources.len();

        sources
            .iter()
            .enumerate()
            .map(|(i, source)| {
                let mut l = -base / 2.0 * (i as f64 - n as f64 / 2.0 + 0.5);
                if i == 0 {
                    l -= PORT_NUDGE;
                }
                if i + 1 == n {
                    l += PORT_NUDGE;
                }

                let target_x = side.direction() * (self.options.port_length + (w / 2.0 - base / 2.0));
                Port::new(side, i)
                    .with_name(source.name())
                    .with_positions(Vector::new(0.0, l), Vector::new(target_x, l))
            })
            .collect()
    }

    /// Snap every port onto the box outline, stub pointing outward.
    ///
    /// Each port's direction (origin to target) is extended far outside the
    /// box, the nearest outline point to that far point becomes the origin,
    /// and the target is pushed outward from there.
    pub fn position_ports(&mut self) {
        let size = self.transform.size();
        let matrix = self.transform.matrix();
        let half = size * 0.5;
        let stub = half
            - Vector::new(
                self.options.port_length + size.x / 2.0 - PORT_STUB_INSET,
                self.options.port_length + size.y / 2.0 - PORT_STUB_INSET,
            );

        for port in self.input_ports.iter_mut().chain(self.output_ports.iter_mut()) {
            let target = matrix.mul(port.target_pos());
            let origin = matrix.mul(port.origin_pos());
            let pos = target + (target - origin).normalize() * FAR_RAY_DISTANCE;

            let p = nearest_point_on_rect(-half, half, pos);
            let v = (p - pos).normalize() * stub + p;

            port.set_origin_pos(p);
            port.set_target_pos(v);
        }
        tracing::debug!(
            "Positioned {} ports on {}x{} IC",
            self.input_ports.len() + self.output_ports.len(),
            size.x,
            size.y
        );
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn size(&self) -> Vector {
        self.transform.size()
    }

    /// Resize the box and re-snap the ports to the new outline.
    pub fn set_size(&mut self, size: Vector) {
        self.transform.set_size(size);
        self.position_ports();
    }

    pub fn input_count(&self) -> usize {
        self.collection.as_ref().map(|c| c.inputs().len()).unwrap_or(0)
    }

    pub fn output_count(&self) -> usize {
        self.collection.as_ref().map(|c| c.outputs().len()).unwrap_or(0)
    }

    pub fn input_port(&self, i: usize) -> Option<&Port> {
        self.input_ports.get(i)
    }

    pub fn output_port(&self, i: usize) -> Option<&Port> {
        self.output_ports.get(i)
    }

    pub fn input_ports(&self) -> &[Port] {
        &self.input_ports
    }

    pub fn output_ports(&self) -> &[Port] {
        &self.output_ports
    }

    /// All boundary ports, inputs first.
    pub fn ports(&self) -> Vec<&Port> {
        self.input_ports.iter().chain(self.output_ports.iter()).collect()
    }

    /// The embedded sub-circuit.
    pub fn group(&self) -> Option<&DigitalObjectSet> {
        self.collection.as_ref()
    }

    /// Deep copy of the embedded sub-circuit with fresh identifiers.
    pub fn copy(&self) -> Option<DigitalObjectSet> {
        self.collection.as_ref().map(|c| copy_group(&c.to_list()))
    }

    /// Whether `group` can become an IC.
    pub fn is_valid(group: &DigitalObjectSet) -> bool {
        Self::check(group).is_ok()
    }

    /// Whether a raw object list can become an IC.
    pub fn is_valid_objects(objects: &[IoObject]) -> bool {
        Self::is_valid(&create_group(objects))
    }

    /// Like [`ICData::is_valid`], reporting the first failed check.
    pub fn check(group: &DigitalObjectSet) -> Result<(), InvalidIcReason> {
        let result = check_group(group);
        if let Err(reason) = &result {
            tracing::debug!("Group rejected as IC: {}", reason);
        }
        result
    }

    pub fn check_objects(objects: &[IoObject]) -> Result<(), InvalidIcReason> {
        Self::check(&create_group(objects))
    }

    /// Build an IC from copies of `objects`, or `None` if they are not a valid IC.
    pub fn create(objects: &[IoObject]) -> Option<ICData> {
        Self::try_create(objects).ok()
    }

    pub fn try_create(objects: &[IoObject]) -> Result<ICData, InvalidIcReason> {
        Self::try_create_with_options(objects, LayoutOptions::default())
    }

    /// Copy, validate, detach from the original designer, then keep only
    /// interactive inputs as IC inputs. Other inputs (constants, clocks) move
    /// to the general component bucket.
    pub fn try_create_with_options(
        objects: &[IoObject],
        options: LayoutOptions,
    ) -> Result<ICData, InvalidIcReason> {
        let mut copies = copy_group(objects);
        if let Err(reason) = Self::check(&copies) {
            tracing::warn!("Cannot create IC: {}", reason);
            return Err(reason);
        }

        copies.set_designer(None);

        let (inputs, demoted): (Vec<Component>, Vec<Component>) = copies
            .take_inputs()
            .into_iter()
            .partition(|c| is_whitelisted_input(c.kind()));
        let mut others = copies.take_others();
        others.extend(demoted);
        copies.set_inputs(inputs);
        copies.set_others(others);

        let data = ICData::with_options(Some(copies), options);
        tracing::info!(
            "Created IC with {} inputs and {} outputs ({}x{})",
            data.input_count(),
            data.output_count(),
            data.size().x,
            data.size().y
        );
        Ok(data)
    }
}

impl Default for ICData {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{is_on_rect_perimeter, v};
    use crate::model::{Circuit, ComponentKind, Guid};

    /// Switches `names_in` feed a chain of gates ending in LEDs `names_out`.
    fn build_circuit(names_in: &[&str], names_out: &[&str]) -> (Circuit, Vec<Guid>) {
        let mut circuit = Circuit::new("ic");
        let mut ids = Vec::new();
        let hub = circuit.add_component(ComponentKind::OrGate, "");
        circuit
            .set_port_config(hub, &format!("{},1", names_in.len().max(2)))
            .unwrap();
        ids.push(hub);
        for (i, name) in names_in.iter().enumerate() {
            let sw = circuit.add_component(ComponentKind::Switch, *name);
            circuit.connect_components(sw, 0, hub, i).unwrap();
            ids.push(sw);
        }
        for name in names_out {
            let led = circuit.add_component(ComponentKind::Led, *name);
            circuit.connect_components(hub, 0, led, 0).unwrap();
            ids.push(led);
        }
        (circuit, ids)
    }

    fn build_ic(names_in: &[&str], names_out: &[&str]) -> ICData {
        let (circuit, ids) = build_circuit(names_in, names_out);
        ICData::create(&circuit.selection(&ids)).expect("valid IC")
    }

    #[test]
    fn test_empty_shell() {
        let data = ICData::new(None);
        assert_eq!(data.size(), Vector::ZERO);
        assert!(data.ports().is_empty());
        assert_eq!(data.input_count(), 0);
        assert!(data.group().is_none());
        assert!(data.copy().is_none());
    }

    #[test]
    fn test_port_counts_and_names() {
        let data = build_ic(&["A", "B", "Cin"], &["S", "Cout"]);
        assert_eq!(data.input_count(), 3);
        assert_eq!(data.output_count(), 2);
        assert_eq!(data.input_ports().len(), 3);
        assert_eq!(data.output_ports().len(), 2);

        let group = data.group().unwrap();
        for (port, source) in data.input_ports().iter().zip(group.inputs()) {
            assert_eq!(port.name(), source.name());
        }
        for (port, source) in data.output_ports().iter().zip(group.outputs()) {
            assert_eq!(port.name(), source.name());
        }
        assert_eq!(data.ports().len(), 5);
        assert!(data.ports()[0].is_input());
        assert!(!data.ports()[4].is_input());
    }

    #[test]
    fn test_size_formula() {
        let data = build_ic(&["A", "B", "Cin"], &["S", "Cout"]);
        // Longest name is 4 characters, tallest column has 3 ports
        assert_eq!(data.size(), v(50.0 + 20.0 * 4.0, 25.0 * 3.0));
    }

    #[test]
    fn test_ports_sit_on_outline() {
        let mut data = build_ic(&["A", "B", "C", "D"], &["Q"]);
        let check = |data: &ICData| {
            let half = data.size() * 0.5;
            for port in data.ports() {
                assert!(
                    is_on_rect_perimeter(-half, half, port.origin_pos(), 1e-9),
                    "{} not on outline of {}",
                    port.origin_pos(),
                    data.size()
                );
            }
        };
        check(&data);

        data.set_size(v(300.0, 40.0));
        check(&data);
        data.set_size(v(20.0, 400.0));
        check(&data);
    }

    #[test]
    fn test_inputs_left_outputs_right() {
        let data = build_ic(&["A", "B"], &["Q"]);
        let half = data.size() * 0.5;
        for port in data.input_ports() {
            assert_eq!(port.origin_pos().x, -half.x);
            assert!(port.target_pos().x < port.origin_pos().x);
        }
        for port in data.output_ports() {
            assert_eq!(port.origin_pos().x, half.x);
            assert!(port.target_pos().x > port.origin_pos().x);
        }
    }

    #[test]
    fn test_stub_length() {
        let data = build_ic(&["A", "B"], &["Q"]);
        let port = data.output_port(0).unwrap();
        let stub = port.target_pos() - port.origin_pos();
        assert!((stub.x - (60.0 - 25.0)).abs() < 1e-9);
        assert!(stub.y.abs() < 1e-9);
    }

    #[test]
    fn test_first_and_last_ports_nudged() {
        let data = build_ic(&["A", "B"], &["Q"]);
        // Two ports: -25*(0 - 1 + 0.5) - 1 and -25*(1 - 1 + 0.5) + 1
        assert!((data.input_port(0).unwrap().origin_pos().y - 11.5).abs() < 1e-9);
        assert!((data.input_port(1).unwrap().origin_pos().y + 11.5).abs() < 1e-9);
        // A single port gets both nudges, which cancel out
        assert!(data.output_port(0).unwrap().origin_pos().y.abs() < 1e-9);
    }

    #[test]
    fn test_custom_options() {
        let (circuit, ids) = build_circuit(&["A", "B"], &["Q"]);
        let options = LayoutOptions {
            base_size: 100.0,
            port_length: 30.0,
        };
        let data = ICData::try_create_with_options(&circuit.selection(&ids), options).unwrap();
        assert_eq!(data.size(), v(100.0 + 20.0, 50.0 * 2.0));
        assert_eq!(data.options(), &options);
    }

    #[test]
    fn test_create_detaches_copies() {
        let (circuit, ids) = build_circuit(&["A", "B"], &["Q"]);
        let data = ICData::create(&circuit.selection(&ids)).unwrap();
        let group = data.group().unwrap();
        assert!(group.components().all(|c| c.designer().is_none()));
        assert!(group.wires().iter().all(|w| w.designer().is_none()));
        assert!(group.components().all(|c| !ids.contains(&c.id())));
    }

    #[test]
    fn test_copy_gives_fresh_ids() {
        let data = build_ic(&["A", "B"], &["Q"]);
        let copy = data.copy().unwrap();
        let original = data.group().unwrap();
        assert_eq!(copy.component_count(), original.component_count());
        assert_eq!(copy.wires().len(), original.wires().len());
        for c in copy.components() {
            assert!(original.component(c.id()).is_none());
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let data = build_ic(&["A", "B"], &["Q"]);
        let json = serde_json::to_string(&data).unwrap();
        let back: ICData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }
}
