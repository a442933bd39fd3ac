//! Print the descriptor of every component kind, plus wires and ports.

use icdesigner::info::{all_component_infos, port_info, wire_info};

fn main() -> Result<(), serde_json::Error> {
    for info in all_component_infos() {
        println!("{}", serde_json::to_string(&info)?);
    }
    println!("{}", serde_json::to_string(&wire_info())?);
    println!("{}", serde_json::to_string(&port_info())?);
    Ok(())
}
