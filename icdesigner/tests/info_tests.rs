//! Integration tests for entity descriptors

use icdesigner::info::{
    all_component_infos, angle_info, entity_info, port_info, wire_info, AngleUnit, EntityInfo,
    PropInfo, CHANGEABLE_PORT_COMPONENTS,
};
use icdesigner::model::{EntityKind, PortKind, WireKind};
use icdesigner::{component_info, gen_component_info, gen_port_info, Circuit, ComponentKind, Guid};

#[test]
fn test_and_gate_descriptor() {
    let info = gen_component_info(
        ComponentKind::AndGate,
        gen_port_info(PortKind::DigitalPort),
        "2,1",
        Some(0),
    );

    let record = info.default_value(Guid::new());
    assert_eq!(record.kind, ComponentKind::AndGate);

    let steps: Vec<Option<f64>> = ["x", "y", "angle"]
        .iter()
        .map(|k| info.prop_info.get(k).and_then(|p| p.step()))
        .collect();
    assert_eq!(steps, vec![Some(1.0), Some(1.0), Some(45.0)]);
}

#[test]
fn test_angle_property_is_in_degrees() {
    let info = component_info(ComponentKind::Switch);
    match info.prop_info.get("angle") {
        Some(PropInfo::Float {
            label,
            initial,
            unit,
            ..
        }) => {
            assert_eq!(label, "Angle");
            assert_eq!(*initial, Some(0.0));
            assert_eq!(*unit, Some(AngleUnit::Deg));
        }
        other => panic!("unexpected angle property {:?}", other),
    }

    let (key, custom) = angle_info("tilt", "Tilt", 90.0, AngleUnit::Rad, 0.5);
    assert_eq!(key, "tilt");
    assert_eq!(custom.step(), Some(0.5));
}

#[test]
fn test_every_kind_has_a_descriptor() {
    let infos = all_component_infos();
    assert_eq!(infos.len(), ComponentKind::ALL.len());
    for info in &infos {
        assert_eq!(info.prop_info.len(), 3, "{}", info.kind);
        assert_eq!(
            info.port_info.allow_changes,
            CHANGEABLE_PORT_COMPONENTS.contains(&info.kind)
        );
    }
}

#[test]
fn test_default_ports_match_placed_component() {
    let mut circuit = Circuit::new("ports");
    for kind in [ComponentKind::Led, ComponentKind::NandGate, ComponentKind::Clock] {
        let id = circuit.add_component(kind, "");
        let placed = circuit.component(id).unwrap();
        let ports = component_info(kind).default_ports(id).unwrap();

        let inputs = ports.iter().filter(|p| p.group == 0).count();
        let outputs = ports.iter().filter(|p| p.group == 1).count();
        assert_eq!((inputs, outputs), (placed.input_count(), placed.output_count()));
    }
}

#[test]
fn test_component_record_matches_descriptor_kind() {
    let mut circuit = Circuit::new("records");
    let id = circuit.add_component(ComponentKind::XorGate, "X1");
    let record = circuit.component(id).unwrap().record();
    let blank = component_info(ComponentKind::XorGate).default_value(id);

    assert_eq!(record.kind, blank.kind);
    assert_eq!(record.id, blank.id);
    assert_eq!(record.name.as_deref(), Some("X1"));
}

#[test]
fn test_wire_and_port_descriptors() {
    let wire = wire_info();
    assert_eq!(wire.kind, WireKind::DigitalWire);
    assert_eq!(wire.prop_info.keys().collect::<Vec<_>>(), vec!["color"]);

    let port = port_info();
    assert_eq!(port.kind, PortKind::DigitalPort);
    assert!(port.prop_info.is_empty());

    match entity_info(EntityKind::Port(PortKind::DigitalPort)) {
        EntityInfo::Port(info) => assert_eq!(info, port),
        other => panic!("expected a port descriptor, got {:?}", other),
    }
}

#[test]
fn test_descriptor_json_shape() {
    let json = serde_json::to_value(entity_info(ComponentKind::OrGate.into())).unwrap();

    assert_eq!(json["baseKind"], "Component");
    assert_eq!(json["kind"], "ORGate");
    assert_eq!(json["portInfo"]["initialConfig"], "2,1");
    assert_eq!(json["portInfo"]["allowChanges"], true);
    assert_eq!(json["portInfo"]["changeGroup"], 0);
    assert_eq!(json["propInfo"]["angle"]["type"], "float");
    assert_eq!(json["propInfo"]["angle"]["step"], 45.0);
    assert_eq!(json["propInfo"]["angle"]["unit"], "deg");

    let wire = serde_json::to_value(entity_info(WireKind::DigitalWire.into())).unwrap();
    assert_eq!(wire["baseKind"], "Wire");
    assert_eq!(wire["propInfo"]["color"]["type"], "color");
    assert_eq!(wire["propInfo"]["color"]["initial"], "#ffffff");
}
