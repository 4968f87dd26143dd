use std::collections::HashMap;
use std::sync::Mutex;

use domain::{CommandClass, ConfigWriter, ValueId, ValueResolver};
use serde::Serialize;

use crate::node_description::NodeDescription;

/// A configuration write as received by the node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedWrite {
    pub node_id: u8,
    pub instance: u8,
    pub index: u16,
    pub value: i32,
}

/// In-memory node built from a [`NodeDescription`].
///
/// Answers value lookups from the description and records configuration
/// writes instead of sending them anywhere.
pub struct SimulatedNode {
    node_id: u8,
    values: HashMap<(CommandClass, u8, u16), ValueId>,
    writes: Mutex<Vec<RecordedWrite>>,
}

impl SimulatedNode {
    pub fn from_description(description: &NodeDescription) -> Self {
        let values = description
            .value_ids()
            .map(|id| ((id.command_class, id.instance, id.index), id))
            .collect();

        Self {
            node_id: description.node_id,
            values,
            writes: Mutex::new(Vec::new()),
        }
    }

    pub fn node_id(&self) -> u8 {
        self.node_id
    }

    pub fn value_count(&self) -> usize {
        self.values.len()
    }

    /// Writes received so far, oldest first
    pub fn config_writes(&self) -> Vec<RecordedWrite> {
        self.writes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl ValueResolver for SimulatedNode {
    fn find_value_id(
        &self,
        command_class: CommandClass,
        instance: u8,
        index: u16,
    ) -> Option<ValueId> {
        let found = self.values.get(&(command_class, instance, index)).cloned();
        tracing::trace!(
            node_id = self.node_id,
            command_class = %command_class,
            instance,
            index,
            found = found.is_some(),
            "Simulated value lookup"
        );
        found
    }
}

impl ConfigWriter for SimulatedNode {
    fn set_config_value(&self, node_id: u8, instance: u8, index: u16, value: i32) {
        if node_id != self.node_id {
            tracing::warn!(
                node_id,
                simulated_node_id = self.node_id,
                "Simulator received write for another node"
            );
        }
        // Just log the write
        tracing::info!(node_id, instance, index, value, "Simulator received config write");
        self.writes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedWrite {
                node_id,
                instance,
                index,
                value,
            });
    }
}
