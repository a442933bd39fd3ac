//! Core IC building API shared by the CLI and any embedding application.
//! No I/O beyond loading circuit documents.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SIZE, IO_PORT_LENGTH};
use crate::ic::{ICData, InvalidIcReason};
use crate::math::Vector;
use crate::model::{Circuit, PortSide, UnknownKind};

#[derive(Debug, thiserror::Error)]
pub enum IcDesignerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Document error: {0}")]
    Document(String),
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("Port config error: {0}")]
    PortConfig(String),
    #[error("Invalid IC: {0}")]
    InvalidIc(#[from] InvalidIcReason),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    UnknownKind(#[from] UnknownKind),
}

/// Dimensions used when laying out an IC.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    /// Base box edge; the width starts here and each port slot takes half of it.
    pub base_size: f64,
    /// Length of the port stubs sticking out of the box.
    pub port_length: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            base_size: DEFAULT_SIZE,
            port_length: IO_PORT_LENGTH,
        }
    }
}

/// Serializable summary of an IC's geometry.
#[derive(Debug, Clone, Serialize)]
pub struct IcLayoutReport {
    pub width: f64,
    pub height: f64,
    pub inputs: usize,
    pub outputs: usize,
    pub components: usize,
    pub wires: usize,
    pub ports: Vec<PortLayout>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortLayout {
    pub name: String,
    pub side: PortSide,
    pub index: usize,
    pub origin: Vector,
    pub target: Vector,
}

/// Outcome of checking a selection, with the reason when it is rejected.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionCheck {
    pub components: usize,
    pub wires: usize,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<InvalidIcReason>,
}

/// Core IC API used by the CLI.
pub struct IcDesignerCore;

impl IcDesignerCore {
    pub fn load_circuit(path: &Path) -> Result<Circuit, IcDesignerError> {
        Circuit::load(path)
    }

    /// Check whether the referenced components (and the wires between them)
    /// could become an IC. An empty `refs` selects the whole circuit.
    pub fn check_selection<S: AsRef<str>>(
        circuit: &Circuit,
        refs: &[S],
    ) -> Result<SelectionCheck, IcDesignerError> {
        let objects = if refs.is_empty() {
            circuit.all_objects()
        } else {
            circuit.select_refs(refs)?
        };

        let components = objects.iter().filter(|o| o.as_component().is_some()).count();
        let reason = ICData::check_objects(&objects).err();
        Ok(SelectionCheck {
            components,
            wires: objects.len() - components,
            valid: reason.is_none(),
            reason,
        })
    }

    /// Build an IC from the referenced components. An empty `refs` selects
    /// the whole circuit.
    pub fn build_ic<S: AsRef<str>>(
        circuit: &Circuit,
        refs: &[S],
        options: LayoutOptions,
    ) -> Result<ICData, IcDesignerError> {
        let objects = if refs.is_empty() {
            circuit.all_objects()
        } else {
            circuit.select_refs(refs)?
        };
        Ok(ICData::try_create_with_options(&objects, options)?)
    }

    pub fn layout_report(data: &ICData) -> IcLayoutReport {
        let size = data.size();
        let (components, wires) = data
            .group()
            .map(|g| (g.component_count(), g.wires().len()))
            .unwrap_or((0, 0));

        IcLayoutReport {
            width: size.x,
            height: size.y,
            inputs: data.input_count(),
            outputs: data.output_count(),
            components,
            wires,
            ports: data
                .ports()
                .into_iter()
                .map(|p| PortLayout {
                    name: p.name().to_string(),
                    side: p.side,
                    index: p.index,
                    origin: p.origin_pos(),
                    target: p.target_pos(),
                })
                .collect(),
        }
    }
}
