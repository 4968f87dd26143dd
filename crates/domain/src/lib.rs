//! Domain layer - Pure model of classified Z-Wave devices
//!
//! This crate contains:
//! - Vocabulary (command classes, value indices, property names)
//! - Entities (Device, Property) and value objects (ValueId, DeviceType)
//! - Quirk rules and the built-in quirk table
//! - Collaborator interfaces (traits) for value lookup and configuration writes
//!
//! Principles:
//! - No dependencies on infrastructure
//! - Testable in isolation

pub mod command_class;
pub mod device;
pub mod driver;
pub mod error;
pub mod property;
pub mod quirk;
pub mod value_id;

// Re-export commonly used types
pub use command_class::CommandClass;
pub use device::{Device, DeviceType, ZwInfo};
pub use driver::{ConfigWriter, ValueResolver};
pub use error::DomainError;
pub use property::{
    Property, PropertyDescription, ReadTransform, Transforms, Unit, ValueType, WriteTransform,
};
pub use quirk::{ConfigWrite, QuirkMatch, QuirkRule, QuirkTable, SwitchConfigWrite};
pub use value_id::ValueId;
