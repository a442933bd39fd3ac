//! Descriptor types: editable-property schemas and per-entity info records.

use indexmap::IndexMap;
use serde::Serialize;

use super::records::{
    default_component, default_port, default_wire, ComponentRecord, PortRecord, WireRecord,
};
use super::units::AngleUnit;
use crate::core::IcDesignerError;
use crate::model::{ComponentKind, EntityKind, Guid, PortKind, WireKind};

/// How a single property is edited in the property inspector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PropInfo {
    Float {
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        step: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        initial: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        unit: Option<AngleUnit>,
    },
    Color {
        label: String,
        initial: String,
    },
}

impl PropInfo {
    pub fn float(label: &str, step: f64) -> Self {
        PropInfo::Float {
            label: label.to_string(),
            step: Some(step),
            initial: None,
            unit: None,
        }
    }

    pub fn color(label: &str, initial: &str) -> Self {
        PropInfo::Color {
            label: label.to_string(),
            initial: initial.to_string(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PropInfo::Float { label, .. } | PropInfo::Color { label, .. } => label,
        }
    }

    pub fn step(&self) -> Option<f64> {
        match self {
            PropInfo::Float { step, .. } => *step,
            PropInfo::Color { .. } => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            PropInfo::Float { .. } => "float",
            PropInfo::Color { .. } => "color",
        }
    }
}

/// Ordered property name -> editor descriptor mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PropSchema {
    entries: IndexMap<String, PropInfo>,
}

impl PropSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a property, keeping first-insertion order.
    pub fn insert(&mut self, key: impl Into<String>, info: PropInfo) {
        self.entries.insert(key.into(), info);
    }

    pub fn with(mut self, key: impl Into<String>, info: PropInfo) -> Self {
        self.insert(key, info);
        self
    }

    pub fn get(&self, key: &str) -> Option<&PropInfo> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropInfo)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Port counts per port group, written as `"2,1"` (group 0 = inputs, group 1 = outputs).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortConfig {
    counts: Vec<usize>,
}

impl PortConfig {
    pub fn new(counts: Vec<usize>) -> Self {
        Self { counts }
    }

    pub fn parse(config: &str) -> Result<Self, IcDesignerError> {
        let counts = config
            .split(',')
            .map(|part| {
                part.trim().parse::<usize>().map_err(|_| {
                    IcDesignerError::PortConfig(format!("Invalid port config '{}'", config))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { counts })
    }

    pub fn group_count(&self) -> usize {
        self.counts.len()
    }

    /// Ports in a group; missing groups have none.
    pub fn count(&self, group: usize) -> usize {
        self.counts.get(group).copied().unwrap_or(0)
    }
}

impl std::fmt::Display for PortConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.counts.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

/// Port descriptor. Ports currently expose no editable properties.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortInfo {
    pub kind: PortKind,
    #[serde(rename = "propInfo")]
    pub prop_info: PropSchema,
}

impl PortInfo {
    /// Default value for a port of `parent`, at `index` within `group`.
    pub fn default_value(&self, id: Guid, parent: Guid, group: u32, index: usize) -> PortRecord {
        default_port(self.kind, id, parent, group, index)
    }
}

/// Port layout part of a component descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortSchema {
    /// Builds default ports for the component
    pub default: PortInfo,
    pub initial_config: String,
    pub allow_changes: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_group: Option<u32>,
}

impl PortSchema {
    pub fn initial(&self) -> Result<PortConfig, IcDesignerError> {
        PortConfig::parse(&self.initial_config)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInfo {
    pub kind: ComponentKind,
    pub port_info: PortSchema,
    pub prop_info: PropSchema,
}

impl ComponentInfo {
    /// Fresh component record of this kind.
    pub fn default_value(&self, id: Guid) -> ComponentRecord {
        default_component(self.kind, id)
    }

    /// Default ports for a component record, following the initial config.
    pub fn default_ports(&self, parent: Guid) -> Result<Vec<PortRecord>, IcDesignerError> {
        let config = self.port_info.initial()?;
        let mut ports = Vec::new();
        for group in 0..config.group_count() {
            for index in 0..config.count(group) {
                ports.push(self.port_info.default.default_value(
                    Guid::new(),
                    parent,
                    group as u32,
                    index,
                ));
            }
        }
        Ok(ports)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireInfo {
    pub kind: WireKind,
    pub prop_info: PropSchema,
}

impl WireInfo {
    pub fn default_value(&self, id: Guid, p1: Guid, p2: Guid) -> WireRecord {
        default_wire(self.kind, id, p1, p2)
    }
}

/// Descriptor for any entity, discriminated by its kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "baseKind")]
pub enum EntityInfo {
    Component(ComponentInfo),
    Wire(WireInfo),
    Port(PortInfo),
}

impl EntityInfo {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityInfo::Component(info) => EntityKind::Component(info.kind),
            EntityInfo::Wire(info) => EntityKind::Wire(info.kind),
            EntityInfo::Port(info) => EntityKind::Port(info.kind),
        }
    }

    pub fn prop_info(&self) -> &PropSchema {
        match self {
            EntityInfo::Component(info) => &info.prop_info,
            EntityInfo::Wire(info) => &info.prop_info,
            EntityInfo::Port(info) => &info.prop_info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_config_parse() {
        let config = PortConfig::parse("3, 1").unwrap();
        assert_eq!(config.group_count(), 2);
        assert_eq!(config.count(0), 3);
        assert_eq!(config.count(1), 1);
        assert_eq!(config.count(5), 0);
        assert_eq!(config.to_string(), "3,1");

        assert!(PortConfig::parse("").is_err());
        assert!(PortConfig::parse("2,x").is_err());
    }

    #[test]
    fn test_prop_schema_keeps_order_and_replaces() {
        let mut schema = PropSchema::new()
            .with("x", PropInfo::float("X", 1.0))
            .with("y", PropInfo::float("Y", 1.0));
        schema.insert("x", PropInfo::float("X Position", 2.0));

        let keys: Vec<&str> = schema.keys().collect();
        assert_eq!(keys, vec!["x", "y"]);
        assert_eq!(schema.get("x").and_then(|p| p.step()), Some(2.0));
    }

    #[test]
    fn test_prop_schema_serializes_as_object() {
        let schema = PropSchema::new().with("color", PropInfo::color("Color", "#ffffff"));
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["color"]["type"], "color");
        assert_eq!(json["color"]["initial"], "#ffffff");
    }

    #[test]
    fn test_prop_schema_serializes_in_insertion_order() {
        let schema = PropSchema::new()
            .with("y", PropInfo::float("Y", 1.0))
            .with("x", PropInfo::float("X", 1.0))
            .with("angle", PropInfo::float("Angle", 45.0));
        let json = serde_json::to_string(&schema).unwrap();

        let y = json.find("\"y\"").unwrap();
        let x = json.find("\"x\"").unwrap();
        let angle = json.find("\"angle\"").unwrap();
        assert!(y < x && x < angle, "{}", json);
    }
}
