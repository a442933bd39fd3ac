//! Digital circuit object model.
//!
//! Components own their ports; wires refer to ports by id. A [`Circuit`] is the
//! designer every placed object points back to through an optional id, which
//! is cleared when objects are copied out into an IC.

pub mod circuit;
pub mod component;
pub mod copy;
pub mod document;
pub mod graph;
pub mod guid;
pub mod kind;
pub mod object_set;
pub mod port;
pub mod wire;

pub use circuit::Circuit;
pub use component::Component;
pub use copy::copy_group;
pub use document::{CircuitDocument, CircuitMetadata, DocumentComponent, DocumentWire, Endpoint};
pub use graph::{create_graph, CircuitGraph};
pub use guid::Guid;
pub use kind::{ComponentKind, EntityKind, PortKind, UnknownKind, WireKind};
pub use object_set::{create_group, Bucket, DigitalObjectSet, IoObject};
pub use port::{Port, PortSide};
pub use wire::Wire;
