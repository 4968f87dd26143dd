use domain::command_class::index;
use domain::property::names;
use domain::{CommandClass, PropertyDescription, Transforms};

use crate::classifier::ClassificationContext;

/// Battery level, independent of what the device turned out to be.
pub fn init_battery(ctx: &mut ClassificationContext<'_>) {
    let value_id = ctx.find_value_id(CommandClass::BATTERY, 1, index::BATTERY_LEVEL);
    ctx.add_property(
        names::BATTERY_LEVEL,
        PropertyDescription::percent(),
        value_id,
        Transforms::NONE,
    );
}
