use serde::{Serialize, Serializer};

use super::{DeviceType, ZwInfo};
use crate::property::Property;

/// A Z-Wave node as exposed by the bridge: its identification, the type it
/// was classified as and the properties backing it.
///
/// # Requirements
/// - Must have a unique `id`
/// - Starts as a generic `Thing` with no properties and the default name
/// - Property names are unique; inserting an existing name replaces it in place
#[derive(Debug, Clone, Serialize)]
pub struct Device {
    id: String,
    #[serde(rename = "zwInfo")]
    zw_info: ZwInfo,
    #[serde(rename = "type")]
    device_type: DeviceType,
    name: String,
    #[serde(serialize_with = "properties_by_name")]
    properties: Vec<Property>,
}

impl Device {
    /// Name a device carries until someone gives it a real one
    pub const DEFAULT_NAME: &'static str = "";

    pub fn new(id: impl Into<String>, zw_info: ZwInfo) -> Self {
        Self {
            id: id.into(),
            zw_info,
            device_type: DeviceType::default(),
            name: Self::DEFAULT_NAME.to_string(),
            properties: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn zw_info(&self) -> &ZwInfo {
        &self.zw_info
    }

    pub fn node_id(&self) -> u8 {
        self.zw_info.node_id
    }

    pub fn device_type(&self) -> DeviceType {
        self.device_type
    }

    pub fn set_device_type(&mut self, device_type: DeviceType) {
        self.device_type = device_type;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn has_default_name(&self) -> bool {
        self.name == Self::DEFAULT_NAME
    }

    /// Insert a property, replacing any existing one with the same name.
    pub fn insert_property(&mut self, property: Property) {
        match self.properties.iter_mut().find(|p| p.name == property.name) {
            Some(existing) => *existing = property,
            None => self.properties.push(property),
        }
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }

    /// Properties in insertion order
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn property_names(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}

fn properties_by_name<S>(properties: &[Property], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(properties.iter().map(|p| (p.name.as_str(), p)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_class::CommandClass;
    use crate::property::PropertyDescription;
    use crate::value_id::ValueId;

    fn device() -> Device {
        Device::new("zwave-5", ZwInfo::new(5, "0x0086", "0x0003", "0x0060"))
    }

    #[test]
    fn test_device_creation() {
        let device = device();

        assert_eq!(device.id(), "zwave-5");
        assert_eq!(device.node_id(), 5);
        assert_eq!(device.device_type(), DeviceType::Thing);
        assert!(device.has_default_name());
        assert_eq!(device.property_count(), 0);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut device = device();
        let on = ValueId::new(5, CommandClass::SWITCH_BINARY, 1, 0);
        let level = ValueId::new(5, CommandClass::SWITCH_MULTILEVEL, 1, 0);

        device.insert_property(Property::new("on", PropertyDescription::boolean(), on));
        device.insert_property(Property::new("level", PropertyDescription::percent(), level.clone()));
        device.insert_property(Property::new("on", PropertyDescription::boolean(), level.clone()));

        assert_eq!(device.property_names(), vec!["on", "level"]);
        assert_eq!(device.property("on").unwrap().value_id, level);
    }

    #[test]
    fn test_rename() {
        let mut device = device();
        device.set_name("Kitchen plug");
        assert!(!device.has_default_name());
        assert_eq!(device.name(), "Kitchen plug");
    }

    #[test]
    fn test_serializes_properties_keyed_by_name() {
        let mut device = device();
        device.set_device_type(DeviceType::OnOffSwitch);
        device.insert_property(Property::new(
            "on",
            PropertyDescription::boolean(),
            ValueId::new(5, CommandClass::SWITCH_BINARY, 1, 0),
        ));

        let json = serde_json::to_value(&device).unwrap();
        assert_eq!(json["type"], "onOffSwitch");
        assert_eq!(json["properties"]["on"]["description"]["type"], "boolean");
        assert_eq!(json["properties"]["on"]["valueId"]["commandClass"], 0x25);
        assert_eq!(json["zwInfo"]["manufacturerId"], "0x0086");
    }
}
