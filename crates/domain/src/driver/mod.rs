mod config_writer;
mod value_resolver;

pub use config_writer::ConfigWriter;
pub use value_resolver::ValueResolver;
