//! Application layer - Device classification
//!
//! Turns the values a Z-Wave node exposes into a device type and a set of
//! named properties, applying vendor quirks along the way.

pub mod classifier;
pub mod detectors;
pub mod property_builder;

pub use classifier::{ClassificationContext, Classifier};
pub use property_builder::PropertyBuilder;
