use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use crate::common::types::EBatteryClass;

pub const VANILLA_CHARGE_RATIO: f32 = 0.8;
pub const VANILLA_INBOUND_ENERGY_RATIO: f32 = 1.0;
pub const VANILLA_SOLAR_PANEL_OUTPUT: i32 = 20;
pub const VANILLA_WIND_TURBINE_OUTPUT: i32 = 100;
pub const VANILLA_FUEL_GENERATOR_OUTPUT: i32 = 40;

#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component, Serialize, Deserialize)]
pub struct ElectricBattery {
    pub max_output: i32,
    pub max_capacity_seconds: i32,
    /// Fraction of inbound power that ends up stored.
    pub charge_ratio: f32,
    pub inbound_energy_ratio: f32,
}

impl ElectricBattery {
    /// Stats a battery of `class` carries when the host spawns it.
    pub fn vanilla(class: EBatteryClass) -> Self {
        let (max_output, max_capacity_seconds) = match class {
            EBatteryClass::Large => (100, 14400),
            EBatteryClass::Medium => (50, 3600),
            EBatteryClass::Small => (10, 900),
        };
        Self {
            max_output,
            max_capacity_seconds,
            charge_ratio: VANILLA_CHARGE_RATIO,
            inbound_energy_ratio: VANILLA_INBOUND_ENERGY_RATIO,
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
#[reflect(Component, Serialize, Deserialize)]
pub struct SolarPanel {
    pub maximal_power_output: i32,
}

impl SolarPanel {
    pub fn vanilla() -> Self {
        Self { maximal_power_output: VANILLA_SOLAR_PANEL_OUTPUT }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
#[reflect(Component, Serialize, Deserialize)]
pub struct WindTurbine {
    pub max_power_generation: i32,
}

impl WindTurbine {
    pub fn vanilla() -> Self {
        Self { max_power_generation: VANILLA_WIND_TURBINE_OUTPUT }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
#[reflect(Component, Serialize, Deserialize)]
pub struct FuelGenerator {
    pub electric_amount: i32,
}

impl FuelGenerator {
    pub fn vanilla() -> Self {
        Self { electric_amount: VANILLA_FUEL_GENERATOR_OUTPUT }
    }
}
