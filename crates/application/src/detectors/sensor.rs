use domain::command_class::index;
use domain::property::names;
use domain::{CommandClass, DeviceType, PropertyDescription, ReadTransform, Transforms, Unit};

use crate::classifier::ClassificationContext;

/// Sensors are only looked for on the root instance
const SENSOR_INSTANCE: u8 = 1;

/// Home security notifications: motion and tamper share one value and are
/// told apart by their read transforms.
pub fn init_alarm(ctx: &mut ClassificationContext<'_>) {
    let Some(value_id) = ctx.find_value_id(
        CommandClass::ALARM,
        SENSOR_INSTANCE,
        index::ALARM_HOME_SECURITY,
    ) else {
        return;
    };

    ctx.add_property(
        names::MOTION,
        PropertyDescription::boolean(),
        Some(value_id.clone()),
        Transforms::read_only(ReadTransform::ParseAlarmMotion),
    );
    ctx.add_property(
        names::TAMPER,
        PropertyDescription::boolean(),
        Some(value_id),
        Transforms::read_only(ReadTransform::ParseAlarmTamper),
    );
}

pub fn init_temperature(ctx: &mut ClassificationContext<'_>) {
    let Some(value_id) = ctx.find_value_id(
        CommandClass::SENSOR_MULTILEVEL,
        SENSOR_INSTANCE,
        index::SENSOR_MULTILEVEL_TEMPERATURE,
    ) else {
        return;
    };

    let unit = Unit::from_temperature_units(value_id.units());
    ctx.add_property(
        names::TEMPERATURE,
        PropertyDescription::number().with_optional_unit(unit),
        Some(value_id),
        Transforms::NONE,
    );
}

pub fn init_luminance(ctx: &mut ClassificationContext<'_>) {
    init_multilevel_sensor(
        ctx,
        names::LUMINANCE,
        index::SENSOR_MULTILEVEL_LUMINANCE,
        Some(Unit::Lux),
    );
}

pub fn init_humidity(ctx: &mut ClassificationContext<'_>) {
    init_multilevel_sensor(
        ctx,
        names::HUMIDITY,
        index::SENSOR_MULTILEVEL_HUMIDITY,
        Some(Unit::Percent),
    );
}

pub fn init_ultraviolet(ctx: &mut ClassificationContext<'_>) {
    init_multilevel_sensor(
        ctx,
        names::ULTRAVIOLET,
        index::SENSOR_MULTILEVEL_ULTRAVIOLET,
        None,
    );
}

fn init_multilevel_sensor(
    ctx: &mut ClassificationContext<'_>,
    name: &str,
    sensor_index: u16,
    unit: Option<Unit>,
) {
    let value_id = ctx.find_value_id(CommandClass::SENSOR_MULTILEVEL, SENSOR_INSTANCE, sensor_index);
    ctx.add_property(
        name,
        PropertyDescription::number().with_optional_unit(unit),
        value_id,
        Transforms::NONE,
    );
}

/// Binary sensor, plus the naming fallback for devices that are still a
/// plain thing.
///
/// Runs last among the sensors: a binary sensor only becomes the device
/// type when nothing else has been found.
pub fn init_binary_sensor(ctx: &mut ClassificationContext<'_>) {
    let value_id = ctx.find_value_id(
        CommandClass::SENSOR_BINARY,
        SENSOR_INSTANCE,
        index::SENSOR_BINARY_STATE,
    );

    if let Some(value_id) = value_id {
        if ctx.device().property_count() == 0 {
            ctx.set_device_type(DeviceType::BinarySensor);
        }
        ctx.add_property(
            names::ON,
            PropertyDescription::boolean(),
            Some(value_id),
            Transforms::NONE,
        );
    }

    if ctx.device().device_type() == DeviceType::Thing && ctx.device().has_default_name() {
        let name = format!("{}-thing", ctx.device().id());
        ctx.set_name(name);
    }
}
