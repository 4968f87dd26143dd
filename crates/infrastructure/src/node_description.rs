use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use domain::{CommandClass, Device, DomainError, ValueId, ZwInfo};
use serde::{Deserialize, Serialize};

/// One value a node exposes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueDescription {
    pub command_class: u8,
    #[serde(default = "default_instance")]
    pub instance: u8,
    pub index: u16,
    #[serde(default)]
    pub units: Option<String>,
}

fn default_instance() -> u8 {
    1
}

/// JSON description of a node as discovered on the network: its
/// identification plus the values it exposes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescription {
    pub node_id: u8,
    #[serde(default)]
    pub manufacturer_id: String,
    #[serde(default)]
    pub product_type: String,
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub values: Vec<ValueDescription>,
}

impl NodeDescription {
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let description: Self = serde_json::from_str(json)
            .map_err(|e| DomainError::InvalidNodeDescription(e.to_string()))?;
        description.validate()?;
        Ok(description)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read node description {}", path.display()))?;
        Ok(Self::from_json(&json)?)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.node_id == 0 {
            return Err(DomainError::InvalidNodeDescription(
                "node id 0 is reserved".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for value in &self.values {
            if !seen.insert((value.command_class, value.instance, value.index)) {
                return Err(DomainError::InvalidNodeDescription(format!(
                    "duplicate value {}-{}-{}-{}",
                    self.node_id, value.command_class, value.instance, value.index
                )));
            }
        }
        Ok(())
    }

    pub fn zw_info(&self) -> ZwInfo {
        ZwInfo::new(
            self.node_id,
            self.manufacturer_id.clone(),
            self.product_type.clone(),
            self.product_id.clone(),
        )
    }

    pub fn device_id(&self) -> String {
        format!("zwave-{}", self.node_id)
    }

    /// Fresh, unclassified device for this node
    pub fn to_device(&self) -> Device {
        let mut device = Device::new(self.device_id(), self.zw_info());
        if let Some(name) = &self.name {
            device.set_name(name.clone());
        }
        device
    }

    pub fn value_ids(&self) -> impl Iterator<Item = ValueId> + '_ {
        self.values.iter().map(|v| {
            let id = ValueId::new(
                self.node_id,
                CommandClass(v.command_class),
                v.instance,
                v.index,
            );
            match &v.units {
                Some(units) => id.with_units(units.clone()),
                None => id,
            }
        })
    }
}
