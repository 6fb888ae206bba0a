use bevy::prelude::*;
use chrono::{DateTime, Utc};
use crate::common::types::EBatteryClass;

/// Host is up and the world is loaded.
#[derive(Event, Debug, Clone, Default)]
pub struct ServerInitialized;

/// Host is unloading the plugin or shutting down.
#[derive(Event, Debug, Clone, Default)]
pub struct ServerShutdown;

#[derive(Event, Debug, Clone)]
pub struct ReloadRequested {
    pub requested_by: String,
}

#[derive(Event, Debug, Clone)]
pub struct PowerProfilesReloaded {
    pub reverted: ScanReport,
    pub applied: ScanReport,
}

/// Tells connected observers that a battery's stats changed.
#[derive(Event, Debug, Clone)]
pub struct BatteryTelemetryRefresh {
    pub entity: Entity,
    pub class: EBatteryClass,
    pub refreshed_at: DateTime<Utc>,
}

/// Per-kind counts from a bulk scan: (entities touched, entities seen).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub solar_panels: (usize, usize),
    pub batteries: (usize, usize),
    pub wind_turbines: (usize, usize),
    pub fuel_generators: (usize, usize),
}

impl ScanReport {
    pub fn touched(&self) -> usize {
        self.solar_panels.0 + self.batteries.0 + self.wind_turbines.0 + self.fuel_generators.0
    }
}
