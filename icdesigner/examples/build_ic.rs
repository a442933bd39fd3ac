//! Build a half adder in code, bundle it into an IC and place it in a new circuit.

use icdesigner::prelude::*;

fn main() -> Result<(), IcDesignerError> {
    let mut circuit = Circuit::new("half adder");
    let a = circuit.add_component(ComponentKind::Switch, "A");
    let b = circuit.add_component(ComponentKind::Switch, "B");
    let xor = circuit.add_component(ComponentKind::XorGate, "");
    let and = circuit.add_component(ComponentKind::AndGate, "");
    let sum = circuit.add_component(ComponentKind::Led, "Sum");
    let carry = circuit.add_component(ComponentKind::Led, "Carry");

    circuit.connect_components(a, 0, xor, 0)?;
    circuit.connect_components(b, 0, xor, 1)?;
    circuit.connect_components(a, 0, and, 0)?;
    circuit.connect_components(b, 0, and, 1)?;
    circuit.connect_components(xor, 0, sum, 0)?;
    circuit.connect_components(and, 0, carry, 0)?;

    let data = ICData::try_create(&circuit.all_objects())?;
    let report = IcDesignerCore::layout_report(&data);
    println!("{}", serde_json::to_string_pretty(&report)?);

    let mut top = Circuit::new("top");
    let ic = top.place_ic(data, "Half Adder");
    let p = top.add_component(ComponentKind::Switch, "P");
    top.connect_components(p, 0, ic, 0)?;
    println!("{}", top.to_document().to_json()?);
    Ok(())
}
