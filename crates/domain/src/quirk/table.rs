use crate::command_class::manufacturer;
use crate::device::{Device, DeviceType};
use crate::error::Result;
use crate::property::names;

use super::{ConfigWrite, QuirkMatch, QuirkRule, SwitchConfigWrite};

/// Bumped whenever the built-in rule list changes
pub const BUILTIN_QUIRKS_VERSION: u32 = 1;

/// Ordered set of quirk rules.
///
/// Every matching rule applies: exclusions are unioned and configuration
/// writes are concatenated in table order.
#[derive(Debug, Clone, Default)]
pub struct QuirkTable {
    rules: Vec<QuirkRule>,
}

impl QuirkTable {
    pub fn new(rules: Vec<QuirkRule>) -> Result<Self> {
        let mut table = Self::default();
        table.extend(rules)?;
        Ok(table)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Rules bundled with the bridge
    pub fn builtin() -> Self {
        Self {
            rules: vec![
                // Smart Switch 6 advertises a multilevel switch, but setting
                // it does nothing.
                QuirkRule::new(QuirkMatch::manufacturer(manufacturer::AEOTEC).product("0x0060"))
                    .describe("Aeotec ZW096 Smart Switch 6: no-op dimmer")
                    .exclude(names::LEVEL),
                // MultiSensor 6: report motion via Basic Set instead of
                // Binary Sensor reports.
                QuirkRule::new(QuirkMatch::manufacturer(manufacturer::AEOTEC).product("0x0064"))
                    .describe("Aeotec ZW100 MultiSensor 6: motion sensor via Basic Set")
                    .set_config(ConfigWrite::new(1, 5, 1)),
                // Aeotec switches: report button presses, and for metering
                // plugs report every 1 W change.
                QuirkRule::new(QuirkMatch::manufacturer(manufacturer::AEOTEC))
                    .describe("Aeotec switches: button and meter reporting")
                    .switch_config(SwitchConfigWrite::always(ConfigWrite::new(1, 80, 2)))
                    .switch_config(SwitchConfigWrite::only_for(
                        ConfigWrite::new(1, 90, 1),
                        DeviceType::SmartPlug,
                    ))
                    .switch_config(SwitchConfigWrite::only_for(
                        ConfigWrite::new(1, 91, 1),
                        DeviceType::SmartPlug,
                    )),
            ],
        }
    }

    /// Append rules after the existing ones, validating each.
    pub fn extend(&mut self, rules: Vec<QuirkRule>) -> Result<()> {
        for rule in &rules {
            rule.validate()?;
        }
        self.rules.extend(rules);
        Ok(())
    }

    pub fn rules(&self) -> &[QuirkRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn matching<'a>(&'a self, device: &'a Device) -> impl Iterator<Item = &'a QuirkRule> + 'a {
        self.rules.iter().filter(move |rule| rule.matches(device))
    }

    pub fn config_overrides_for(&self, device: &Device) -> Vec<ConfigWrite> {
        self.matching(device)
            .flat_map(|rule| rule.set_configs.iter().copied())
            .collect()
    }

    /// Writes to push once a switch is classified, filtered by the type the
    /// device currently has.
    pub fn switch_configs_for(&self, device: &Device) -> Vec<ConfigWrite> {
        let device_type = device.device_type();
        self.matching(device)
            .flat_map(|rule| rule.switch_configs.iter())
            .filter(|w| w.applies_to(device_type))
            .map(SwitchConfigWrite::write)
            .collect()
    }

    pub fn is_excluded(&self, device: &Device, property: &str) -> bool {
        self.matching(device).any(|rule| rule.excludes(property))
    }
}
