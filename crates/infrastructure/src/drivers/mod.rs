mod simulated_node;

pub use simulated_node::{RecordedWrite, SimulatedNode};
