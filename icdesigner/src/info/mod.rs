//! Entity descriptors: default-value constructors and editable-property
//! schemas for components, wires and ports.
//!
//! Descriptors are stateless. They are consumed by property inspectors and by
//! anything that needs a blank record of a given kind.

pub mod records;
pub mod registry;
pub mod schema;
pub mod units;
pub mod utils;

pub use records::{ComponentRecord, PortRecord, WireRecord};
pub use registry::{all_component_infos, component_info, entity_info, port_info, wire_info};
pub use schema::{
    ComponentInfo, EntityInfo, PortConfig, PortInfo, PortSchema, PropInfo, PropSchema, WireInfo,
};
pub use units::{angle_info, AngleUnit};
pub use utils::{gen_component_info, gen_port_info, gen_wire_info, CHANGEABLE_PORT_COMPONENTS};
