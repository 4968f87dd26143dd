use domain::{Device, Property, PropertyDescription, QuirkTable, Transforms, ValueId};
use tracing::{debug, info};

/// Creates properties on a device, honouring quirk exclusions.
pub struct PropertyBuilder<'a> {
    quirks: &'a QuirkTable,
}

impl<'a> PropertyBuilder<'a> {
    pub fn new(quirks: &'a QuirkTable) -> Self {
        Self { quirks }
    }

    /// Binds `name` to `value_id` on the device.
    ///
    /// Returns `false` without touching the device when the value is absent
    /// or a matching quirk excludes the property. An existing property with
    /// the same name is replaced.
    pub fn add_property(
        &self,
        device: &mut Device,
        name: &str,
        description: PropertyDescription,
        value_id: Option<ValueId>,
        transforms: Transforms,
    ) -> bool {
        let Some(value_id) = value_id else {
            return false;
        };

        if self.quirks.is_excluded(device, name) {
            info!(
                device_id = %device.id(),
                property = name,
                value_id = %value_id,
                "Property excluded by quirk"
            );
            return false;
        }

        debug!(
            device_id = %device.id(),
            property = name,
            value_id = %value_id,
            "Adding property"
        );
        device.insert_property(
            Property::new(name, description, value_id).with_transforms(transforms),
        );
        true
    }
}
