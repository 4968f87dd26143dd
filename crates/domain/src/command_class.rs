use serde::{Deserialize, Serialize};

/// Z-Wave command class identifier
///
/// Kept open (a newtype rather than an enum) because nodes advertise many
/// command classes the classifier never looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandClass(pub u8);

impl CommandClass {
    pub const BASIC: Self = Self(0x20);
    pub const SWITCH_BINARY: Self = Self(0x25);
    pub const SWITCH_MULTILEVEL: Self = Self(0x26);
    pub const SENSOR_BINARY: Self = Self(0x30);
    pub const SENSOR_MULTILEVEL: Self = Self(0x31);
    pub const METER: Self = Self(0x32);
    pub const CONFIGURATION: Self = Self(0x70);
    pub const ALARM: Self = Self(0x71);
    pub const BATTERY: Self = Self(0x80);

    pub fn id(&self) -> u8 {
        self.0
    }

    /// Human readable name for the command classes this crate knows about.
    pub fn name(&self) -> Option<&'static str> {
        match *self {
            Self::BASIC => Some("BASIC"),
            Self::SWITCH_BINARY => Some("SWITCH_BINARY"),
            Self::SWITCH_MULTILEVEL => Some("SWITCH_MULTILEVEL"),
            Self::SENSOR_BINARY => Some("SENSOR_BINARY"),
            Self::SENSOR_MULTILEVEL => Some("SENSOR_MULTILEVEL"),
            Self::METER => Some("METER"),
            Self::CONFIGURATION => Some("CONFIGURATION"),
            Self::ALARM => Some("ALARM"),
            Self::BATTERY => Some("BATTERY"),
            _ => None,
        }
    }
}

impl From<u8> for CommandClass {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CommandClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} (0x{:02x})", name, self.0),
            None => write!(f, "0x{:02x}", self.0),
        }
    }
}

/// Value indices within a command class, as exposed by the Z-Wave driver.
pub mod index {
    pub const SWITCH_BINARY_STATE: u16 = 0;
    pub const SWITCH_MULTILEVEL_LEVEL: u16 = 0;
    pub const SENSOR_BINARY_STATE: u16 = 0;
    pub const BATTERY_LEVEL: u16 = 0;

    pub const METER_POWER: u16 = 8;
    pub const METER_VOLTAGE: u16 = 16;
    pub const METER_CURRENT: u16 = 20;

    pub const SENSOR_MULTILEVEL_TEMPERATURE: u16 = 1;
    pub const SENSOR_MULTILEVEL_LUMINANCE: u16 = 3;
    pub const SENSOR_MULTILEVEL_HUMIDITY: u16 = 5;
    pub const SENSOR_MULTILEVEL_ULTRAVIOLET: u16 = 27;

    /// Notification slot carrying the home security (burglar) events
    pub const ALARM_HOME_SECURITY: u16 = 10;
}

/// Manufacturer ids, formatted the way the driver reports them.
pub mod manufacturer {
    pub const AEOTEC: &str = "0x0086";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_command_class_display() {
        assert_eq!(CommandClass::SWITCH_BINARY.to_string(), "SWITCH_BINARY (0x25)");
        assert_eq!(CommandClass::BATTERY.id(), 0x80);
    }

    #[test]
    fn test_unknown_command_class_display() {
        let cc = CommandClass::from(0x86);
        assert_eq!(cc.name(), None);
        assert_eq!(cc.to_string(), "0x86");
    }
}
