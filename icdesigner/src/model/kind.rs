//! Kind tags for every entity the designer knows about.

use serde::{Deserialize, Serialize};

/// Closed set of digital component kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentKind {
    Switch,
    Button,
    ConstantHigh,
    ConstantLow,
    Clock,
    #[serde(rename = "LED")]
    Led,
    SegmentDisplay,
    Label,
    #[serde(rename = "BUFGate", alias = "BUF")]
    BufferGate,
    #[serde(rename = "NOTGate", alias = "NOT")]
    NotGate,
    #[serde(rename = "ANDGate", alias = "AND")]
    AndGate,
    #[serde(rename = "NANDGate", alias = "NAND")]
    NandGate,
    #[serde(rename = "ORGate", alias = "OR")]
    OrGate,
    #[serde(rename = "NORGate", alias = "NOR")]
    NorGate,
    #[serde(rename = "XORGate", alias = "XOR")]
    XorGate,
    #[serde(rename = "XNORGate", alias = "XNOR")]
    XnorGate,
    #[serde(rename = "IC")]
    Ic,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 17] = [
        ComponentKind::Switch,
        ComponentKind::Button,
        ComponentKind::ConstantHigh,
        ComponentKind::ConstantLow,
        ComponentKind::Clock,
        ComponentKind::Led,
        ComponentKind::SegmentDisplay,
        ComponentKind::Label,
        ComponentKind::BufferGate,
        ComponentKind::NotGate,
        ComponentKind::AndGate,
        ComponentKind::NandGate,
        ComponentKind::OrGate,
        ComponentKind::NorGate,
        ComponentKind::XorGate,
        ComponentKind::XnorGate,
        ComponentKind::Ic,
    ];

    /// Tag used in documents and descriptors.
    pub fn tag(&self) -> &'static str {
        match self {
            ComponentKind::Switch => "Switch",
            ComponentKind::Button => "Button",
            ComponentKind::ConstantHigh => "ConstantHigh",
            ComponentKind::ConstantLow => "ConstantLow",
            ComponentKind::Clock => "Clock",
            ComponentKind::Led => "LED",
            ComponentKind::SegmentDisplay => "SegmentDisplay",
            ComponentKind::Label => "Label",
            ComponentKind::BufferGate => "BUFGate",
            ComponentKind::NotGate => "NOTGate",
            ComponentKind::AndGate => "ANDGate",
            ComponentKind::NandGate => "NANDGate",
            ComponentKind::OrGate => "ORGate",
            ComponentKind::NorGate => "NORGate",
            ComponentKind::XorGate => "XORGate",
            ComponentKind::XnorGate => "XNORGate",
            ComponentKind::Ic => "IC",
        }
    }

    /// Human readable name shown in listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            ComponentKind::Switch => "Switch",
            ComponentKind::Button => "Button",
            ComponentKind::ConstantHigh => "Constant High",
            ComponentKind::ConstantLow => "Constant Low",
            ComponentKind::Clock => "Clock",
            ComponentKind::Led => "LED",
            ComponentKind::SegmentDisplay => "7-Segment Display",
            ComponentKind::Label => "Label",
            ComponentKind::BufferGate => "Buffer Gate",
            ComponentKind::NotGate => "NOT Gate",
            ComponentKind::AndGate => "AND Gate",
            ComponentKind::NandGate => "NAND Gate",
            ComponentKind::OrGate => "OR Gate",
            ComponentKind::NorGate => "NOR Gate",
            ComponentKind::XorGate => "XOR Gate",
            ComponentKind::XnorGate => "XNOR Gate",
            ComponentKind::Ic => "Integrated Circuit",
        }
    }

    /// Number of (input, output) ports a freshly placed component gets.
    ///
    /// ICs report `(0, 0)`; their ports come from the IC layout.
    pub fn default_port_counts(&self) -> (usize, usize) {
        match self {
            ComponentKind::Switch
            | ComponentKind::Button
            | ComponentKind::ConstantHigh
            | ComponentKind::ConstantLow
            | ComponentKind::Clock => (0, 1),
            ComponentKind::Led => (1, 0),
            ComponentKind::SegmentDisplay => (7, 0),
            ComponentKind::Label | ComponentKind::Ic => (0, 0),
            ComponentKind::BufferGate | ComponentKind::NotGate => (1, 1),
            ComponentKind::AndGate
            | ComponentKind::NandGate
            | ComponentKind::OrGate
            | ComponentKind::NorGate
            | ComponentKind::XorGate
            | ComponentKind::XnorGate => (2, 1),
        }
    }

    pub fn is_gate(&self) -> bool {
        matches!(
            self,
            ComponentKind::BufferGate
                | ComponentKind::NotGate
                | ComponentKind::AndGate
                | ComponentKind::NandGate
                | ComponentKind::OrGate
                | ComponentKind::NorGate
                | ComponentKind::XorGate
                | ComponentKind::XnorGate
        )
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown component kind: {0}")]
pub struct UnknownKind(pub String);

impl std::str::FromStr for ComponentKind {
    type Err = UnknownKind;

    /// Accepts the document tag (`ANDGate`) or the short gate name (`AND`),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ComponentKind::ALL
            .iter()
            .copied()
            .find(|kind| {
                let tag = kind.tag();
                tag.eq_ignore_ascii_case(wanted)
                    || tag
                        .strip_suffix("Gate")
                        .map(|short| short.eq_ignore_ascii_case(wanted))
                        .unwrap_or(false)
            })
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// Wire kinds. The digital designer only has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WireKind {
    #[default]
    DigitalWire,
}

/// Port kinds. The digital designer only has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PortKind {
    #[default]
    DigitalPort,
}

/// Discriminant over every entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "baseKind", content = "kind")]
pub enum EntityKind {
    Component(ComponentKind),
    Wire(WireKind),
    Port(PortKind),
}

impl From<ComponentKind> for EntityKind {
    fn from(kind: ComponentKind) -> Self {
        EntityKind::Component(kind)
    }
}

impl From<WireKind> for EntityKind {
    fn from(kind: WireKind) -> Self {
        EntityKind::Wire(kind)
    }
}

impl From<PortKind> for EntityKind {
    fn from(kind: PortKind) -> Self {
        EntityKind::Port(kind)
    }
}
