use domain::{
    CommandClass, ConfigWrite, ConfigWriter, Device, DeviceType, PropertyDescription, QuirkTable,
    Transforms, ValueId, ValueResolver,
};
use tracing::{debug, info};

use crate::property_builder::PropertyBuilder;

/// State handed from detector to detector during one classification pass.
///
/// Owns the mutable borrow of the device for the duration of the pass.
pub struct ClassificationContext<'a> {
    device: &'a mut Device,
    resolver: &'a dyn ValueResolver,
    writer: &'a dyn ConfigWriter,
    quirks: &'a QuirkTable,
    builder: PropertyBuilder<'a>,
}

impl<'a> ClassificationContext<'a> {
    pub fn new(
        device: &'a mut Device,
        resolver: &'a dyn ValueResolver,
        writer: &'a dyn ConfigWriter,
        quirks: &'a QuirkTable,
    ) -> Self {
        Self {
            device,
            resolver,
            writer,
            quirks,
            builder: PropertyBuilder::new(quirks),
        }
    }

    pub fn device(&self) -> &Device {
        &*self.device
    }

    pub fn quirks(&self) -> &QuirkTable {
        self.quirks
    }

    pub fn find_value_id(
        &self,
        command_class: CommandClass,
        instance: u8,
        index: u16,
    ) -> Option<ValueId> {
        self.resolver.find_value_id(command_class, instance, index)
    }

    pub fn add_property(
        &mut self,
        name: &str,
        description: PropertyDescription,
        value_id: Option<ValueId>,
        transforms: Transforms,
    ) -> bool {
        self.builder
            .add_property(self.device, name, description, value_id, transforms)
    }

    pub fn set_device_type(&mut self, device_type: DeviceType) {
        if self.device.device_type() != device_type {
            debug!(
                device_id = %self.device.id(),
                from = %self.device.device_type(),
                to = %device_type,
                "Device type changed"
            );
        }
        self.device.set_device_type(device_type);
    }

    pub fn set_name(&mut self, name: String) {
        info!(device_id = %self.device.id(), name = %name, "Renaming device");
        self.device.set_name(name);
    }

    pub fn set_config_value(&self, write: ConfigWrite) {
        info!(
            device_id = %self.device.id(),
            instance = write.instance,
            index = write.index,
            value = write.value,
            "Setting configuration value"
        );
        self.writer.set_config_value(
            self.device.node_id(),
            write.instance,
            write.index,
            write.value,
        );
    }
}
