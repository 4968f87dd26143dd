//! Feature detectors.
//!
//! Each detector probes the node for one feature family and, only when the
//! values are there, adds properties and may change the device type. They
//! never remove what another detector added.

pub mod battery;
pub mod sensor;
pub mod switch;

pub use switch::SwitchValues;
