use config::{Config, ConfigError, Environment, File};
use domain::{DomainError, QuirkRule, QuirkTable};
use serde::{Deserialize, Serialize};

/// Settings for the classifier, loaded once at process start.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ClassifierConfig {
    #[serde(default = "default_use_builtin_quirks")]
    pub use_builtin_quirks: bool,
    /// Site-specific rules, applied after the built-in ones
    #[serde(default)]
    pub quirks: Vec<QuirkRule>,
}

fn default_use_builtin_quirks() -> bool {
    true
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            use_builtin_quirks: default_use_builtin_quirks(),
            quirks: Vec::new(),
        }
    }
}

impl ClassifierConfig {
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            .set_default("use_builtin_quirks", true)?
            // Local config file, e.g. config/default.toml
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(false))
            // Per run mode overrides, e.g. config/production.toml
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false))
            // Environment variables (e.g. ZWAVE__USE_BUILTIN_QUIRKS=false)
            .add_source(Environment::with_prefix("ZWAVE").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Builds the quirk table: built-ins first (if enabled), then the
    /// configured rules in file order.
    pub fn quirk_table(&self) -> Result<QuirkTable, DomainError> {
        let mut table = if self.use_builtin_quirks {
            QuirkTable::builtin()
        } else {
            QuirkTable::empty()
        };
        table.extend(self.quirks.clone())?;
        Ok(table)
    }
}
