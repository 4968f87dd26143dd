/// Pushes configuration parameters to a node (COMMAND_CLASS_CONFIGURATION).
///
/// Fire-and-forget: the classifier never looks at the outcome.
pub trait ConfigWriter: Send + Sync {
    fn set_config_value(&self, node_id: u8, instance: u8, index: u16, value: i32);
}
