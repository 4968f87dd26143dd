mod rule;
mod table;

pub use rule::{ConfigWrite, QuirkMatch, QuirkRule, SwitchConfigWrite};
pub use table::{BUILTIN_QUIRKS_VERSION, QuirkTable};
