use serde::{Deserialize, Serialize};

/// High-level type a classified device is exposed as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeviceType {
    OnOffSwitch,
    MultiLevelSwitch,
    SmartPlug,
    BinarySensor,
    /// Generic fallback for anything not recognised as one of the above
    #[default]
    Thing,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnOffSwitch => "onOffSwitch",
            Self::MultiLevelSwitch => "multiLevelSwitch",
            Self::SmartPlug => "smartPlug",
            Self::BinarySensor => "binarySensor",
            Self::Thing => "thing",
        }
    }

    pub fn is_switch(&self) -> bool {
        matches!(
            self,
            Self::OnOffSwitch | Self::MultiLevelSwitch | Self::SmartPlug
        )
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
