#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use domain::{CommandClass, ConfigWriter, Device, ValueId, ValueResolver, ZwInfo};

/// What the classifier did to the node, in order
#[derive(Debug, Clone, PartialEq)]
pub enum NodeCall {
    Probe(CommandClass, u8, u16),
    Write { instance: u8, index: u16, value: i32 },
}

/// In-memory node: answers lookups from a fixed value table and journals
/// every probe and configuration write.
#[derive(Default)]
pub struct FakeNode {
    node_id: u8,
    values: HashMap<(CommandClass, u8, u16), ValueId>,
    calls: Mutex<Vec<NodeCall>>,
}

impl FakeNode {
    pub fn new(node_id: u8) -> Self {
        Self {
            node_id,
            ..Self::default()
        }
    }

    pub fn with_value(self, command_class: CommandClass, instance: u8, index: u16) -> Self {
        let id = ValueId::new(self.node_id, command_class, instance, index);
        self.with(id)
    }

    pub fn with(mut self, id: ValueId) -> Self {
        self.values
            .insert((id.command_class, id.instance, id.index), id);
        self
    }

    pub fn value(&self, command_class: CommandClass, instance: u8, index: u16) -> ValueId {
        self.values[&(command_class, instance, index)].clone()
    }

    pub fn calls(&self) -> Vec<NodeCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<(u8, u16, i32)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                NodeCall::Write {
                    instance,
                    index,
                    value,
                } => Some((instance, index, value)),
                NodeCall::Probe(..) => None,
            })
            .collect()
    }
}

impl ValueResolver for FakeNode {
    fn find_value_id(
        &self,
        command_class: CommandClass,
        instance: u8,
        index: u16,
    ) -> Option<ValueId> {
        self.calls
            .lock()
            .unwrap()
            .push(NodeCall::Probe(command_class, instance, index));
        self.values.get(&(command_class, instance, index)).cloned()
    }
}

impl ConfigWriter for FakeNode {
    fn set_config_value(&self, node_id: u8, instance: u8, index: u16, value: i32) {
        assert_eq!(node_id, self.node_id, "write addressed to the wrong node");
        self.calls.lock().unwrap().push(NodeCall::Write {
            instance,
            index,
            value,
        });
    }
}

pub fn device(node_id: u8, manufacturer_id: &str, product_id: &str) -> Device {
    Device::new(
        format!("zwave-{}", node_id),
        ZwInfo::new(node_id, manufacturer_id, "0x0001", product_id),
    )
}

/// A vendor none of the built-in quirks know about
pub fn generic_device(node_id: u8) -> Device {
    device(node_id, "0x010f", "0x1000")
}
