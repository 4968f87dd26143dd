use domain::command_class::index;
use domain::property::names;
use domain::{CommandClass, DeviceType, PropertyDescription, Transforms, Unit, ValueId};
use tracing::debug;

use crate::classifier::ClassificationContext;

/// Binary switch and dimmer values found at one instance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwitchValues {
    pub binary: Option<ValueId>,
    pub level: Option<ValueId>,
}

impl SwitchValues {
    pub fn probe(ctx: &ClassificationContext<'_>, instance: u8) -> Self {
        Self {
            binary: ctx.find_value_id(
                CommandClass::SWITCH_BINARY,
                instance,
                index::SWITCH_BINARY_STATE,
            ),
            level: ctx.find_value_id(
                CommandClass::SWITCH_MULTILEVEL,
                instance,
                index::SWITCH_MULTILEVEL_LEVEL,
            ),
        }
    }

    pub fn is_present(&self) -> bool {
        self.binary.is_some() || self.level.is_some()
    }
}

/// Suffix appended to property names for a switch instance.
/// The primary instance has none.
pub fn suffix_for(instance: u8, primary: bool) -> String {
    if primary {
        String::new()
    } else {
        instance.to_string()
    }
}

/// Exposes the switch (and any meter) at `instance`.
///
/// `suffix` is empty for the primary switch; secondary outlets keep the
/// generic type and get numbered property names.
pub fn init_switch(ctx: &mut ClassificationContext<'_>, values: SwitchValues, instance: u8, suffix: &str) {
    let primary = suffix.is_empty();
    debug!(
        device_id = %ctx.device().id(),
        instance,
        binary = values.binary.is_some(),
        level = values.level.is_some(),
        "Initialising switch"
    );

    match (values.binary, values.level) {
        (Some(binary), level) => {
            ctx.set_device_type(if primary {
                DeviceType::OnOffSwitch
            } else {
                DeviceType::Thing
            });
            ctx.add_property(
                &format!("{}{}", names::ON, suffix),
                PropertyDescription::boolean(),
                Some(binary),
                Transforms::NONE,
            );

            if let Some(level) = level {
                if primary {
                    ctx.set_device_type(DeviceType::MultiLevelSwitch);
                }
                ctx.add_property(
                    &format!("{}{}", names::LEVEL, suffix),
                    PropertyDescription::percent(),
                    Some(level),
                    Transforms::LEVEL,
                );
            }
        }
        (None, Some(level)) => {
            // Dimmer without a binary switch: on/off is driven through the level
            ctx.set_device_type(if primary {
                DeviceType::MultiLevelSwitch
            } else {
                DeviceType::Thing
            });
            ctx.add_property(
                &format!("{}{}", names::ON, suffix),
                PropertyDescription::boolean(),
                Some(level.clone()),
                Transforms::ON_OFF_LEVEL,
            );
            ctx.add_property(
                &format!("{}{}", names::LEVEL, suffix),
                PropertyDescription::percent(),
                Some(level),
                Transforms::ON_OFF_LEVEL,
            );
        }
        (None, None) => return,
    }

    init_meter(ctx, instance, suffix);

    for write in ctx.quirks().switch_configs_for(ctx.device()) {
        ctx.set_config_value(write);
    }
}

fn init_meter(ctx: &mut ClassificationContext<'_>, instance: u8, suffix: &str) {
    let meters = [
        (names::INSTANTANEOUS_POWER, index::METER_POWER, Unit::Watt),
        (names::VOLTAGE, index::METER_VOLTAGE, Unit::Volt),
        (names::CURRENT, index::METER_CURRENT, Unit::Ampere),
    ];

    for (name, meter_index, unit) in meters {
        let Some(value_id) = ctx.find_value_id(CommandClass::METER, instance, meter_index) else {
            continue;
        };
        if suffix.is_empty() {
            ctx.set_device_type(DeviceType::SmartPlug);
        }
        ctx.add_property(
            &format!("{}{}", name, suffix),
            PropertyDescription::number().with_unit(unit),
            Some(value_id),
            Transforms::NONE,
        );
    }
}
