use serde::{Deserialize, Serialize};

use crate::device::{Device, DeviceType, ZwInfo};
use crate::error::{DomainError, Result};

/// Identification fields a quirk applies to. Absent fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuirkMatch {
    #[serde(default)]
    pub manufacturer_id: Option<String>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub node_id: Option<u8>,
}

impl QuirkMatch {
    pub fn manufacturer(manufacturer_id: impl Into<String>) -> Self {
        Self {
            manufacturer_id: Some(manufacturer_id.into()),
            ..Self::default()
        }
    }

    pub fn product(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = Some(product_id.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.manufacturer_id.is_none()
            && self.product_type.is_none()
            && self.product_id.is_none()
            && self.node_id.is_none()
    }

    pub fn matches(&self, info: &ZwInfo) -> bool {
        field_matches(&self.manufacturer_id, &info.manufacturer_id)
            && field_matches(&self.product_type, &info.product_type)
            && field_matches(&self.product_id, &info.product_id)
            && self.node_id.is_none_or(|id| id == info.node_id)
    }
}

fn field_matches(expected: &Option<String>, actual: &str) -> bool {
    expected.as_deref().is_none_or(|e| e == actual)
}

/// A configuration parameter write pushed to the node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigWrite {
    pub instance: u8,
    pub index: u16,
    pub value: i32,
}

impl ConfigWrite {
    pub fn new(instance: u8, index: u16, value: i32) -> Self {
        Self {
            instance,
            index,
            value,
        }
    }
}

/// A configuration write pushed after a switch has been classified,
/// optionally only when the device ended up as a given type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwitchConfigWrite {
    pub instance: u8,
    pub index: u16,
    pub value: i32,
    #[serde(default)]
    pub only_for: Option<DeviceType>,
}

impl SwitchConfigWrite {
    pub fn always(write: ConfigWrite) -> Self {
        Self {
            instance: write.instance,
            index: write.index,
            value: write.value,
            only_for: None,
        }
    }

    pub fn only_for(write: ConfigWrite, device_type: DeviceType) -> Self {
        Self {
            only_for: Some(device_type),
            ..Self::always(write)
        }
    }

    pub fn applies_to(&self, device_type: DeviceType) -> bool {
        self.only_for.is_none_or(|t| t == device_type)
    }

    pub fn write(&self) -> ConfigWrite {
        ConfigWrite::new(self.instance, self.index, self.value)
    }
}

/// Vendor/model specific override: properties to hide, configuration to
/// push before classification and configuration to push once a switch
/// has been recognised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuirkRule {
    #[serde(default)]
    pub description: Option<String>,
    pub matches: QuirkMatch,
    #[serde(default)]
    pub exclude_properties: Vec<String>,
    #[serde(default)]
    pub set_configs: Vec<ConfigWrite>,
    #[serde(default)]
    pub switch_configs: Vec<SwitchConfigWrite>,
}

impl QuirkRule {
    pub fn new(matches: QuirkMatch) -> Self {
        Self {
            description: None,
            matches,
            exclude_properties: Vec::new(),
            set_configs: Vec::new(),
            switch_configs: Vec::new(),
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn exclude(mut self, property: impl Into<String>) -> Self {
        self.exclude_properties.push(property.into());
        self
    }

    pub fn set_config(mut self, write: ConfigWrite) -> Self {
        self.set_configs.push(write);
        self
    }

    pub fn switch_config(mut self, write: SwitchConfigWrite) -> Self {
        self.switch_configs.push(write);
        self
    }

    pub fn matches(&self, device: &Device) -> bool {
        self.matches.matches(device.zw_info())
    }

    pub fn excludes(&self, property: &str) -> bool {
        self.exclude_properties.iter().any(|p| p == property)
    }

    /// Rejects rules that would apply to every device or do nothing.
    pub fn validate(&self) -> Result<()> {
        if self.matches.is_empty() {
            return Err(DomainError::InvalidQuirk(format!(
                "{} has no match fields and would apply to every device",
                self.label()
            )));
        }
        if self.exclude_properties.is_empty()
            && self.set_configs.is_empty()
            && self.switch_configs.is_empty()
        {
            return Err(DomainError::InvalidQuirk(format!(
                "{} neither excludes properties nor sets configuration",
                self.label()
            )));
        }
        Ok(())
    }

    fn label(&self) -> String {
        match &self.description {
            Some(d) => format!("quirk '{}'", d),
            None => "quirk".to_string(),
        }
    }
}
