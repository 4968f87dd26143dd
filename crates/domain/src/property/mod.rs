mod description;
mod entity;
mod transform;

pub use description::{PropertyDescription, Unit, ValueType};
pub use entity::Property;
pub use transform::{ReadTransform, Transforms, WriteTransform};

/// Property names exposed by classified devices
pub mod names {
    pub const ON: &str = "on";
    pub const LEVEL: &str = "level";
    pub const INSTANTANEOUS_POWER: &str = "instantaneousPower";
    pub const VOLTAGE: &str = "voltage";
    pub const CURRENT: &str = "current";
    pub const MOTION: &str = "motion";
    pub const TAMPER: &str = "tamper";
    pub const TEMPERATURE: &str = "temperature";
    pub const LUMINANCE: &str = "luminance";
    pub const HUMIDITY: &str = "humidity";
    pub const ULTRAVIOLET: &str = "ultraviolet";
    pub const BATTERY_LEVEL: &str = "batteryLevel";
}
