mod common;

use application::Classifier;
use common::{FakeNode, generic_device};
use domain::command_class::index;
use domain::{CommandClass, DeviceType, ReadTransform, Transforms, Unit, WriteTransform};

const BINARY: CommandClass = CommandClass::SWITCH_BINARY;
const LEVEL: CommandClass = CommandClass::SWITCH_MULTILEVEL;

#[test]
fn binary_switch_only_is_on_off_switch() {
    let node = FakeNode::new(2).with_value(BINARY, 1, index::SWITCH_BINARY_STATE);
    let mut device = generic_device(2);

    Classifier::with_builtin_quirks().classify(&mut device, &node, &node);

    assert_eq!(device.device_type(), DeviceType::OnOffSwitch);
    assert_eq!(device.property_names(), vec!["on"]);

    let on = device.property("on").unwrap();
    assert_eq!(on.value_id, node.value(BINARY, 1, 0));
    assert_eq!(on.transforms(), Transforms::NONE);
}

#[test]
fn binary_and_dimmer_is_multi_level_switch() {
    let node = FakeNode::new(3)
        .with_value(BINARY, 1, index::SWITCH_BINARY_STATE)
        .with_value(LEVEL, 1, index::SWITCH_MULTILEVEL_LEVEL);
    let mut device = generic_device(3);

    Classifier::with_builtin_quirks().classify(&mut device, &node, &node);

    assert_eq!(device.device_type(), DeviceType::MultiLevelSwitch);
    assert!(device.has_property("on"));

    let level = device.property("level").unwrap();
    assert_eq!(level.description.minimum, Some(0.0));
    assert_eq!(level.description.maximum, Some(100.0));
    assert_eq!(level.description.unit, Some(Unit::Percent));
    assert_eq!(level.set_transform, Some(WriteTransform::SetLevel));
    assert_eq!(level.parse_transform, Some(ReadTransform::ParseLevel));
    assert_eq!(level.value_id, node.value(LEVEL, 1, 0));
}

#[test]
fn dimmer_only_drives_on_off_through_level() {
    let node = FakeNode::new(4).with_value(LEVEL, 1, index::SWITCH_MULTILEVEL_LEVEL);
    let mut device = generic_device(4);

    Classifier::with_builtin_quirks().classify(&mut device, &node, &node);

    assert_eq!(device.device_type(), DeviceType::MultiLevelSwitch);
    assert_eq!(device.property_names(), vec!["on", "level"]);

    let on = device.property("on").unwrap();
    let level = device.property("level").unwrap();
    assert_eq!(on.value_id, level.value_id);
    assert_eq!(on.transforms(), Transforms::ON_OFF_LEVEL);
    assert_eq!(level.transforms(), Transforms::ON_OFF_LEVEL);
}

#[test]
fn numbered_instances_replace_the_root_switch() {
    // Instance 1 is only exposed when no numbered instance exists, even
    // though it has its own switch values here.
    let node = FakeNode::new(5)
        .with_value(BINARY, 1, 0)
        .with_value(LEVEL, 1, 0)
        .with_value(BINARY, 2, 0)
        .with_value(LEVEL, 2, 0);
    let mut device = generic_device(5);

    Classifier::with_builtin_quirks().classify(&mut device, &node, &node);

    assert_eq!(device.property_names(), vec!["on2", "level2"]);
    assert!(!device.has_property("on"));
    assert!(!device.has_property("level"));
    assert_eq!(device.property("on2").unwrap().value_id, node.value(BINARY, 2, 0));
    // Secondary outlets are not a type of their own
    assert_eq!(device.device_type(), DeviceType::Thing);
}

#[test]
fn enumeration_stops_at_first_gap() {
    let node = FakeNode::new(6)
        .with_value(BINARY, 1, 0)
        .with_value(BINARY, 2, 0)
        .with_value(BINARY, 3, 0)
        // 4 missing, so 5 is never reached
        .with_value(BINARY, 5, 0);
    let mut device = generic_device(6);

    Classifier::with_builtin_quirks().classify(&mut device, &node, &node);

    assert_eq!(device.property_names(), vec!["on2", "on3"]);
}

#[test]
fn numbered_dimmer_only_instance() {
    let node = FakeNode::new(7)
        .with_value(BINARY, 1, 0)
        .with_value(LEVEL, 2, 0);
    let mut device = generic_device(7);

    Classifier::with_builtin_quirks().classify(&mut device, &node, &node);

    assert_eq!(device.device_type(), DeviceType::Thing);
    assert_eq!(device.property_names(), vec!["on2", "level2"]);
    assert_eq!(
        device.property("on2").unwrap().transforms(),
        Transforms::ON_OFF_LEVEL
    );
}

#[test]
fn metering_switch_is_smart_plug() {
    let node = FakeNode::new(8)
        .with_value(BINARY, 1, 0)
        .with_value(CommandClass::METER, 1, index::METER_POWER)
        .with_value(CommandClass::METER, 1, index::METER_VOLTAGE)
        .with_value(CommandClass::METER, 1, index::METER_CURRENT);
    let mut device = generic_device(8);

    Classifier::with_builtin_quirks().classify(&mut device, &node, &node);

    assert_eq!(device.device_type(), DeviceType::SmartPlug);
    assert_eq!(
        device.property_names(),
        vec!["on", "instantaneousPower", "voltage", "current"]
    );
    assert_eq!(
        device.property("instantaneousPower").unwrap().description.unit,
        Some(Unit::Watt)
    );
    assert_eq!(device.property("voltage").unwrap().description.unit, Some(Unit::Volt));
    assert_eq!(device.property("current").unwrap().description.unit, Some(Unit::Ampere));
}

#[test]
fn metering_dimmer_is_smart_plug() {
    let node = FakeNode::new(9)
        .with_value(BINARY, 1, 0)
        .with_value(LEVEL, 1, 0)
        .with_value(CommandClass::METER, 1, index::METER_POWER);
    let mut device = generic_device(9);

    Classifier::with_builtin_quirks().classify(&mut device, &node, &node);

    assert_eq!(device.device_type(), DeviceType::SmartPlug);
    assert_eq!(device.property_names(), vec!["on", "level", "instantaneousPower"]);
}

#[test]
fn numbered_meters_are_suffixed_and_keep_generic_type() {
    let node = FakeNode::new(10)
        .with_value(BINARY, 1, 0)
        .with_value(BINARY, 2, 0)
        .with_value(CommandClass::METER, 2, index::METER_POWER)
        .with_value(BINARY, 3, 0)
        .with_value(CommandClass::METER, 3, index::METER_POWER);
    let mut device = generic_device(10);

    Classifier::with_builtin_quirks().classify(&mut device, &node, &node);

    assert_eq!(device.device_type(), DeviceType::Thing);
    assert_eq!(
        device.property_names(),
        vec!["on2", "instantaneousPower2", "on3", "instantaneousPower3"]
    );
}

#[test]
fn switch_skips_sensors_but_not_battery() {
    let node = FakeNode::new(11)
        .with_value(BINARY, 1, 0)
        .with_value(CommandClass::SENSOR_MULTILEVEL, 1, index::SENSOR_MULTILEVEL_TEMPERATURE)
        .with_value(CommandClass::BATTERY, 1, index::BATTERY_LEVEL);
    let mut device = generic_device(11);

    Classifier::with_builtin_quirks().classify(&mut device, &node, &node);

    assert_eq!(device.device_type(), DeviceType::OnOffSwitch);
    assert_eq!(device.property_names(), vec!["on", "batteryLevel"]);
    // Switches keep the default name
    assert!(device.has_default_name());
}

#[test]
fn generic_switch_pushes_no_configuration() {
    let node = FakeNode::new(12)
        .with_value(BINARY, 1, 0)
        .with_value(CommandClass::METER, 1, index::METER_POWER);
    let mut device = generic_device(12);

    Classifier::with_builtin_quirks().classify(&mut device, &node, &node);

    assert!(node.writes().is_empty());
}
