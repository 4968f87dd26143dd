use serde::{Deserialize, Serialize};

use super::{PropertyDescription, ReadTransform, Transforms, WriteTransform};
use crate::value_id::ValueId;

/// A named, typed property bound to one value on the node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    pub description: PropertyDescription,
    pub value_id: ValueId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_transform: Option<WriteTransform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_transform: Option<ReadTransform>,
}

impl Property {
    pub fn new(name: impl Into<String>, description: PropertyDescription, value_id: ValueId) -> Self {
        Self {
            name: name.into(),
            description,
            value_id,
            set_transform: None,
            parse_transform: None,
        }
    }

    pub fn with_transforms(mut self, transforms: Transforms) -> Self {
        self.set_transform = transforms.set;
        self.parse_transform = transforms.parse;
        self
    }

    pub fn transforms(&self) -> Transforms {
        Transforms {
            set: self.set_transform,
            parse: self.parse_transform,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
