use serde::{Deserialize, Serialize};

/// Identification fields reported by the Z-Wave driver for a node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZwInfo {
    pub node_id: u8,
    /// e.g. "0x0086"
    #[serde(default)]
    pub manufacturer_id: String,
    #[serde(default)]
    pub product_type: String,
    #[serde(default)]
    pub product_id: String,
}

impl ZwInfo {
    pub fn new(
        node_id: u8,
        manufacturer_id: impl Into<String>,
        product_type: impl Into<String>,
        product_id: impl Into<String>,
    ) -> Self {
        Self {
            node_id,
            manufacturer_id: manufacturer_id.into(),
            product_type: product_type.into(),
            product_id: product_id.into(),
        }
    }
}
