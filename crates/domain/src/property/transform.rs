use serde::{Deserialize, Serialize};

/// Named conversion applied when writing a property value to the node.
///
/// Only the name is recorded here; the value runtime owns the behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WriteTransform {
    /// Number 0-100 written straight to a multilevel switch
    #[serde(rename = "setLevelValue")]
    SetLevel,
    /// Boolean/level written through a multilevel switch (on = 100, off = 0)
    #[serde(rename = "setOnOffLevelValue")]
    SetOnOffLevel,
}

impl WriteTransform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SetLevel => "setLevelValue",
            Self::SetOnOffLevel => "setOnOffLevelValue",
        }
    }
}

/// Named conversion applied when reading a raw node value into a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadTransform {
    #[serde(rename = "parseLevelZwValue")]
    ParseLevel,
    /// level == 0 reads as off
    #[serde(rename = "parseOnOffLevelZwValue")]
    ParseOnOffLevel,
    /// Motion bit of the home security notification
    #[serde(rename = "parseAlarmMotionZwValue")]
    ParseAlarmMotion,
    /// Tamper bit of the home security notification
    #[serde(rename = "parseAlarmTamperZwValue")]
    ParseAlarmTamper,
}

impl ReadTransform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ParseLevel => "parseLevelZwValue",
            Self::ParseOnOffLevel => "parseOnOffLevelZwValue",
            Self::ParseAlarmMotion => "parseAlarmMotionZwValue",
            Self::ParseAlarmTamper => "parseAlarmTamperZwValue",
        }
    }
}

/// The pair of named transforms a property uses, either of which may be absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Transforms {
    pub set: Option<WriteTransform>,
    pub parse: Option<ReadTransform>,
}

impl Transforms {
    /// Raw value in both directions
    pub const NONE: Self = Self {
        set: None,
        parse: None,
    };

    /// Direct dimmer level control
    pub const LEVEL: Self = Self {
        set: Some(WriteTransform::SetLevel),
        parse: Some(ReadTransform::ParseLevel),
    };

    /// On/off (and level) driven through a dimmer level
    pub const ON_OFF_LEVEL: Self = Self {
        set: Some(WriteTransform::SetOnOffLevel),
        parse: Some(ReadTransform::ParseOnOffLevel),
    };

    pub const fn read_only(parse: ReadTransform) -> Self {
        Self {
            set: None,
            parse: Some(parse),
        }
    }
}

impl std::fmt::Display for WriteTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for ReadTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
