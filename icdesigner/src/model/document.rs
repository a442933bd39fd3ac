//! JSON circuit documents.
//!
//! Documents address components by a short reference string instead of a
//! GUID, so they can be written by hand:
//!
//! ```json
//! {
//!   "metadata": { "name": "half adder" },
//!   "components": [
//!     { "ref": "a", "kind": "Switch", "name": "A" },
//!     { "ref": "x", "kind": "XOR" },
//!     { "ref": "s", "kind": "LED", "name": "S", "x": 200 }
//!   ],
//!   "wires": [
//!     { "from": { "component": "a" }, "to": { "component": "x", "port": 0 } }
//!   ]
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::circuit::Circuit;
use super::component::Component;
use super::guid::Guid;
use super::kind::ComponentKind;
use super::object_set::DigitalObjectSet;
use super::wire::Wire;
use crate::constants::DEFAULT_WIRE_COLOR;
use crate::core::IcDesignerError;
use crate::ic::ICData;
use crate::info::AngleUnit;
use crate::math::Vector;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircuitMetadata {
    pub name: String,

    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,

    /// Document format version
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl CircuitMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created: Utc::now(),
            version: default_version(),
        }
    }
}

impl Default for CircuitMetadata {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CircuitDocument {
    #[serde(default)]
    pub metadata: CircuitMetadata,
    #[serde(default)]
    pub components: Vec<DocumentComponent>,
    #[serde(default)]
    pub wires: Vec<DocumentWire>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentComponent {
    #[serde(rename = "ref")]
    pub reference: String,
    pub kind: ComponentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    /// Rotation in degrees
    #[serde(default)]
    pub angle: f64,
    /// Port configuration override, e.g. `"3,1"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<String>,
    /// Sub-circuit of an `IC` component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ic: Option<Box<CircuitDocument>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentWire {
    pub from: Endpoint,
    pub to: Endpoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A port on a referenced component. `from` endpoints index output ports,
/// `to` endpoints index input ports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoint {
    pub component: String,
    #[serde(default)]
    pub port: usize,
}

impl CircuitDocument {
    pub fn from_json(json: &str) -> Result<Self, IcDesignerError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, IcDesignerError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn to_json(&self) -> Result<String, IcDesignerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Describe an object set as a document, generating references `c0`, `c1`, ...
    pub fn from_object_set(name: &str, set: &DigitalObjectSet) -> Self {
        let components: Vec<&Component> = set.components().collect();
        let refs: HashMap<Guid, String> = components
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id(), format!("c{}", i)))
            .collect();
        build_document(
            CircuitMetadata::new(name),
            components.into_iter().map(|c| (refs[&c.id()].clone(), c)),
            set.wires(),
            |port| {
                set.port_owner(port)
                    .and_then(|c| c.port(port).map(|p| (refs[&c.id()].clone(), p.index)))
            },
        )
    }
}

fn build_document<'a>(
    metadata: CircuitMetadata,
    components: impl Iterator<Item = (String, &'a Component)>,
    wires: &[Wire],
    endpoint: impl Fn(Guid) -> Option<(String, usize)>,
) -> CircuitDocument {
    let components = components
        .map(|(reference, c)| {
            let (default_in, default_out) = c.kind().default_port_counts();
            let ports = if c.kind() != ComponentKind::Ic
                && (c.input_count(), c.output_count()) != (default_in, default_out)
            {
                Some(format!("{},{}", c.input_count(), c.output_count()))
            } else {
                None
            };
            DocumentComponent {
                reference,
                kind: c.kind(),
                name: if c.name().is_empty() {
                    None
                } else {
                    Some(c.name().to_string())
                },
                x: c.pos().x,
                y: c.pos().y,
                angle: AngleUnit::Deg.from_radians(c.angle()),
                ports,
                ic: c.ic_data().and_then(|data| {
                    data.group()
                        .map(|set| Box::new(CircuitDocument::from_object_set(c.name(), set)))
                }),
            }
        })
        .collect();

    let wires = wires
        .iter()
        .filter_map(|w| {
            let (from, from_port) = endpoint(w.p1)?;
            let (to, to_port) = endpoint(w.p2)?;
            Some(DocumentWire {
                from: Endpoint {
                    component: from,
                    port: from_port,
                },
                to: Endpoint {
                    component: to,
                    port: to_port,
                },
                color: if w.color == DEFAULT_WIRE_COLOR {
                    None
                } else {
                    Some(w.color.clone())
                },
            })
        })
        .collect();

    CircuitDocument {
        metadata,
        components,
        wires,
    }
}

impl Circuit {
    /// Build a circuit from a document.
    ///
    /// `IC` components are built from their nested sub-circuit, which must
    /// itself form a valid IC.
    pub fn from_document(doc: &CircuitDocument) -> Result<Self, IcDesignerError> {
        let mut circuit = Circuit::new(doc.metadata.name.clone());
        circuit.metadata = doc.metadata.clone();

        // Pass 1: components
        for entry in &doc.components {
            let name = entry.name.clone().unwrap_or_default();
            let mut component = match (entry.kind, &entry.ic) {
                (ComponentKind::Ic, Some(sub)) => {
                    let inner = Circuit::from_document(sub)?;
                    let data = ICData::try_create(&inner.all_objects())?;
                    Component::new_ic(data, name)
                }
                (ComponentKind::Ic, None) => {
                    return Err(IcDesignerError::Document(format!(
                        "IC '{}' has no sub-circuit",
                        entry.reference
                    )));
                }
                (kind, _) => Component::new(kind, name),
            };
            component.set_pos(Vector::new(entry.x, entry.y));
            component.set_angle(AngleUnit::Deg.to_radians(entry.angle));

            let id = circuit.add_with_ref(entry.reference.clone(), component)?;
            if let Some(config) = &entry.ports {
                circuit.set_port_config(id, config)?;
            }
        }

        // Pass 2: wires
        for wire in &doc.wires {
            let from = circuit.resolve_ref(&wire.from.component).ok_or_else(|| {
                IcDesignerError::Document(format!("Unknown component '{}'", wire.from.component))
            })?;
            let to = circuit.resolve_ref(&wire.to.component).ok_or_else(|| {
                IcDesignerError::Document(format!("Unknown component '{}'", wire.to.component))
            })?;
            let id = circuit.connect_components(from, wire.from.port, to, wire.to.port)?;
            if let Some(color) = &wire.color {
                if let Some(w) = circuit.wire_mut(id) {
                    w.color = color.clone();
                }
            }
        }

        tracing::info!(
            "Loaded circuit '{}' with {} components and {} wires",
            circuit.metadata.name,
            circuit.components().len(),
            circuit.wires().len()
        );
        Ok(circuit)
    }

    /// Load a circuit document from disk.
    pub fn load(path: &Path) -> Result<Self, IcDesignerError> {
        let doc = CircuitDocument::load(path)?;
        Self::from_document(&doc)
    }

    /// Describe this circuit as a document. Components added without a
    /// reference get a generated one.
    pub fn to_document(&self) -> CircuitDocument {
        let refs: HashMap<Guid, String> = self
            .components()
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let reference = self
                    .ref_of(c.id())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("c{}", i));
                (c.id(), reference)
            })
            .collect();

        build_document(
            self.metadata.clone(),
            self.components().iter().map(|c| (refs[&c.id()].clone(), c)),
            self.wires(),
            |port| {
                self.find_port(port)
                    .map(|(c, p)| (refs[&c.id()].clone(), p.index))
            },
        )
    }
}
