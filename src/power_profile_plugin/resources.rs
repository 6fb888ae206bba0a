use bevy::prelude::*;
use crate::common::types::EBatteryClass;
use crate::power_entities_plugin::ElectricBattery;

/// Maps a battery's stock output to its subtype. Only meaningful while the
/// battery still carries its spawn-time stats.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct StockDefaults(pub Vec<(i32, EBatteryClass)>);

impl Default for StockDefaults {
    fn default() -> Self {
        StockDefaults(
            EBatteryClass::ALL
                .iter()
                .map(|class| (ElectricBattery::vanilla(*class).max_output, *class))
                .collect(),
        )
    }
}

impl StockDefaults {
    /// First match wins.
    pub fn classify(&self, max_output: i32) -> Option<EBatteryClass> {
        self.0
            .iter()
            .find(|(stock, _)| *stock == max_output)
            .map(|(_, class)| *class)
    }
}

/// Whether the spawn hook is live. Set after the initial bulk apply and
/// cleared before the shutdown revert.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PluginLifecycle {
    pub ready: bool,
}
