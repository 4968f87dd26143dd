//! Infrastructure layer - Configuration and node adapters

pub mod config;
pub mod drivers;
pub mod node_description;

pub use config::ClassifierConfig;
pub use drivers::{RecordedWrite, SimulatedNode};
pub use node_description::{NodeDescription, ValueDescription};
