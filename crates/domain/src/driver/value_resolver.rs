use crate::command_class::CommandClass;
use crate::value_id::ValueId;

/// Looks up values a node exposes.
///
/// Implemented by whatever owns the node's value table (the Z-Wave driver,
/// a simulator, a test fake).
pub trait ValueResolver: Send + Sync {
    /// Returns the value at (command class, instance, index), or `None`
    /// when the node does not expose it.
    fn find_value_id(&self, command_class: CommandClass, instance: u8, index: u16)
    -> Option<ValueId>;
}
