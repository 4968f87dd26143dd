mod context;

pub use context::ClassificationContext;

use domain::quirk::BUILTIN_QUIRKS_VERSION;
use domain::{ConfigWriter, Device, DeviceType, QuirkTable, ValueResolver};
use tracing::{debug, info};

use crate::detectors::switch::{self, SwitchValues};
use crate::detectors::{battery, sensor};

/// Decides what a Z-Wave node is exposed as and which properties back it.
///
/// Steps:
/// 1. Push configuration from matching quirks
/// 2. Switch branch: switches/dimmers (and their meters), per instance
/// 3. Sensor branch, only if no switch was found
/// 4. Battery, always
///
/// Classification is total: missing values skip the feature, nothing fails.
pub struct Classifier {
    quirks: QuirkTable,
}

impl Classifier {
    pub fn new(quirks: QuirkTable) -> Self {
        info!(rules = quirks.len(), "Classifier created");
        Self { quirks }
    }

    /// Classifier using only the bundled quirk rules
    pub fn with_builtin_quirks() -> Self {
        debug!(version = BUILTIN_QUIRKS_VERSION, "Using built-in quirks");
        Self::new(QuirkTable::builtin())
    }

    pub fn quirks(&self) -> &QuirkTable {
        &self.quirks
    }

    /// Runs one classification pass over `device`, mutating it in place.
    ///
    /// Must not run concurrently with another pass over the same device.
    pub fn classify(
        &self,
        device: &mut Device,
        resolver: &dyn ValueResolver,
        writer: &dyn ConfigWriter,
    ) {
        let mut ctx = ClassificationContext::new(device, resolver, writer, &self.quirks);

        // 1. Quirk configuration, before anything is probed
        for write in self.quirks.config_overrides_for(ctx.device()) {
            ctx.set_config_value(write);
        }

        // 2./3. Switch or sensors
        let primary = SwitchValues::probe(&ctx, 1);
        if primary.is_present() {
            classify_switches(&mut ctx, primary);
        } else {
            classify_sensors(&mut ctx);
        }

        // 4. Battery
        battery::init_battery(&mut ctx);

        let device = ctx.device();
        info!(
            device_id = %device.id(),
            device_type = %device.device_type(),
            properties = ?device.property_names(),
            "Device classified"
        );
    }
}

/// Multi-outlet devices expose their outlets on instances 2, 3, ... and
/// only those are used; instance 1 is exposed on its own only when no
/// numbered instance exists.
fn classify_switches(ctx: &mut ClassificationContext<'_>, primary: SwitchValues) {
    let mut switch_count = 0;

    for instance in 2..=u8::MAX {
        let values = SwitchValues::probe(ctx, instance);
        if !values.is_present() {
            break;
        }
        switch::init_switch(ctx, values, instance, &switch::suffix_for(instance, false));
        switch_count += 1;
    }

    if switch_count == 0 {
        switch::init_switch(ctx, primary, 1, &switch::suffix_for(1, true));
    } else {
        debug!(
            device_id = %ctx.device().id(),
            switch_count,
            "Using numbered switch instances only"
        );
    }
}

fn classify_sensors(ctx: &mut ClassificationContext<'_>) {
    ctx.set_device_type(DeviceType::Thing);

    // Order matters for the binary sensor only
    sensor::init_alarm(ctx);
    sensor::init_temperature(ctx);
    sensor::init_luminance(ctx);
    sensor::init_humidity(ctx);
    sensor::init_ultraviolet(ctx);
    sensor::init_binary_sensor(ctx);
}
