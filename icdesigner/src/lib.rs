//! icdesigner - integrated circuit builder for a digital logic designer
//!
//! This library bundles a connected selection of components and wires into
//! an integrated circuit (IC): a box with one boundary port per interactive
//! input and per output of the selection. It also generates the entity
//! descriptors (default values and editable property schemas) used by
//! property inspectors.
//!
//! # Quick Start
//!
//! ```no_run
//! use icdesigner::{IcDesignerCore, LayoutOptions};
//! use std::path::Path;
//!
//! let circuit = IcDesignerCore::load_circuit(Path::new("half_adder.json")).unwrap();
//! let ic = IcDesignerCore::build_ic(&circuit, &["a", "b", "x", "n", "s", "c"], LayoutOptions::default())
//!     .unwrap();
//!
//! for port in ic.ports() {
//!     println!("{} {} -> {}", port.name(), port.origin_pos(), port.target_pos());
//! }
//! ```
//!
//! # Features
//!
//! - **IC layout**: size from port names and counts, ports snapped to the box outline
//! - **IC validation**: connectivity, blacklisted kinds, wires leaving the group
//! - **Descriptors**: default records and property schemas for components, wires and ports
//! - **Documents**: JSON circuit files with nested IC definitions

pub mod constants;
pub mod core;
pub mod ic;
pub mod info;
pub mod math;
pub mod model;

// Re-export main types
pub use crate::core::{
    IcDesignerCore, IcDesignerError, IcLayoutReport, LayoutOptions, PortLayout, SelectionCheck,
};
pub use ic::{ICData, InvalidIcReason};
pub use info::{
    component_info, gen_component_info, gen_port_info, gen_wire_info, ComponentInfo, PortInfo,
    PropInfo, PropSchema, WireInfo,
};
pub use math::{v, Vector};
pub use model::{
    Circuit, CircuitDocument, Component, ComponentKind, DigitalObjectSet, Guid, IoObject, Port,
    PortSide, Wire,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        Circuit, ComponentKind, DigitalObjectSet, ICData, IcDesignerCore, IcDesignerError,
        InvalidIcReason, IoObject, LayoutOptions, Vector,
    };
}
