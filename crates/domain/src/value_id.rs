use crate::command_class::CommandClass;
use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Handle to one concrete value on a node: (command class, instance, index).
///
/// Obtained from a [`ValueResolver`](crate::driver::ValueResolver); a value
/// that does not exist is simply never handed out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueId {
    pub node_id: u8,
    pub command_class: CommandClass,
    pub instance: u8,
    pub index: u16,
    /// Unit string reported by the node for this value ("C", "F", "W", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

impl ValueId {
    pub fn new(node_id: u8, command_class: CommandClass, instance: u8, index: u16) -> Self {
        Self {
            node_id,
            command_class,
            instance,
            index,
            units: None,
        }
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    pub fn units(&self) -> Option<&str> {
        self.units.as_deref()
    }
}

impl std::fmt::Display for ValueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.node_id,
            self.command_class.id(),
            self.instance,
            self.index
        )
    }
}

impl FromStr for ValueId {
    type Err = DomainError;

    /// Parses the canonical `<node>-<cc>-<instance>-<index>` form.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 4 {
            return Err(DomainError::InvalidValueId(format!(
                "expected <node>-<cc>-<instance>-<index>, got '{}'",
                s
            )));
        }

        let field = |name: &str, raw: &str| {
            DomainError::InvalidValueId(format!("bad {} '{}' in '{}'", name, raw, s))
        };

        let node_id = parts[0].parse::<u8>().map_err(|_| field("node", parts[0]))?;
        let cc = parts[1]
            .parse::<u8>()
            .map_err(|_| field("command class", parts[1]))?;
        let instance = parts[2]
            .parse::<u8>()
            .map_err(|_| field("instance", parts[2]))?;
        let index = parts[3].parse::<u16>().map_err(|_| field("index", parts[3]))?;

        Ok(Self::new(node_id, CommandClass(cc), instance, index))
    }
}
