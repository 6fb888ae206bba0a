//! In-place stat mutation for a single entity.
//!
//! Batteries carry no subtype tag, so their subtype is read off `max_output`.
//! Apply reads it against the stock table (the battery is still vanilla),
//! revert reads it against the configured outputs (the battery is configured).
//! If two battery classes share an output the first class in
//! `EBatteryClass::ALL` wins; `PowerSettings::validate` warns about that.

use crate::common::types::{EBatteryClass, EEntityClass};
use crate::power_entities_plugin::{
    ElectricBattery, FuelGenerator, SolarPanel, WindTurbine,
};
use super::config::PowerSettings;
use super::resources::StockDefaults;

pub fn classify(battery: &ElectricBattery, stock: &StockDefaults) -> Option<EBatteryClass> {
    stock.classify(battery.max_output)
}

/// Subtype of a battery currently carrying configured stats.
pub fn classify_configured(battery: &ElectricBattery, settings: &PowerSettings) -> Option<EBatteryClass> {
    EBatteryClass::ALL
        .into_iter()
        .find(|class| settings.battery(*class).max_output == battery.max_output)
}

/// Returns the class that was applied, or `None` if the battery was left alone.
pub fn apply_battery(
    battery: &mut ElectricBattery,
    settings: &PowerSettings,
    stock: &StockDefaults,
) -> Option<EBatteryClass> {
    let class = classify(battery, stock)?;
    let profile = settings.battery(class);
    battery.max_output = profile.max_output;
    battery.max_capacity_seconds = profile.max_capacity_seconds;
    battery.charge_ratio = profile.efficiency;
    Some(class)
}

pub fn revert_battery(battery: &mut ElectricBattery, settings: &PowerSettings) -> Option<EBatteryClass> {
    let class = classify_configured(battery, settings)?;
    *battery = ElectricBattery::vanilla(class);
    Some(class)
}

pub fn apply_solar_panel(panel: &mut SolarPanel, settings: &PowerSettings) {
    panel.maximal_power_output = settings.profile(EEntityClass::SolarPanel).max_output;
}

pub fn revert_solar_panel(panel: &mut SolarPanel) {
    *panel = SolarPanel::vanilla();
}

pub fn apply_wind_turbine(turbine: &mut WindTurbine, settings: &PowerSettings) {
    turbine.max_power_generation = settings.profile(EEntityClass::WindTurbine).max_output;
}

pub fn revert_wind_turbine(turbine: &mut WindTurbine) {
    *turbine = WindTurbine::vanilla();
}

pub fn apply_fuel_generator(generator: &mut FuelGenerator, settings: &PowerSettings) {
    generator.electric_amount = settings.profile(EEntityClass::FuelGenerator).max_output;
}

pub fn revert_fuel_generator(generator: &mut FuelGenerator) {
    *generator = FuelGenerator::vanilla();
}
