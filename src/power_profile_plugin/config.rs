// a strongly typed schema for the power settings file

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use crate::common::types::{EBatteryClass, EEntityClass};
use crate::power_entities_plugin::ElectricBattery;
use super::resources::StockDefaults;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PowerProfile {
    pub max_output: i32,
    /// Battery charge ratio, 0.0 to 1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_capacity_seconds: Option<i32>,
}

impl PowerProfile {
    pub fn scalar(max_output: i32) -> Self {
        Self { max_output, efficiency: None, max_capacity_seconds: None }
    }

    pub fn battery(max_output: i32, efficiency: f32, max_capacity_seconds: i32) -> Self {
        Self {
            max_output,
            efficiency: Some(efficiency),
            max_capacity_seconds: Some(max_capacity_seconds),
        }
    }
}

/// A battery profile with every field resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryProfile {
    pub max_output: i32,
    pub efficiency: f32,
    pub max_capacity_seconds: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Resource)]
#[serde(rename_all = "PascalCase", default)]
pub struct PowerSettings {
    pub solar_panel: PowerProfile,
    pub large_battery: PowerProfile,
    pub medium_battery: PowerProfile,
    pub small_battery: PowerProfile,
    pub wind_turbine: PowerProfile,
    pub fuel_generator: PowerProfile,
}

impl Default for PowerSettings {
    fn default() -> Self {
        Self {
            solar_panel: PowerProfile::scalar(100),
            large_battery: PowerProfile::battery(100, 1.0, 14400),
            medium_battery: PowerProfile::battery(50, 1.0, 7200),
            small_battery: PowerProfile::battery(10, 1.0, 1800),
            wind_turbine: PowerProfile::scalar(150),
            fuel_generator: PowerProfile::scalar(60),
        }
    }
}

impl PowerSettings {
    pub fn profile(&self, class: EEntityClass) -> &PowerProfile {
        match class {
            EEntityClass::SolarPanel => &self.solar_panel,
            EEntityClass::LargeBattery => &self.large_battery,
            EEntityClass::MediumBattery => &self.medium_battery,
            EEntityClass::SmallBattery => &self.small_battery,
            EEntityClass::WindTurbine => &self.wind_turbine,
            EEntityClass::FuelGenerator => &self.fuel_generator,
        }
    }

    /// Fields left out of the file fall back to the class's vanilla stats.
    pub fn battery(&self, class: EBatteryClass) -> BatteryProfile {
        let profile = self.profile(class.entity_class());
        let vanilla = ElectricBattery::vanilla(class);
        BatteryProfile {
            max_output: profile.max_output,
            efficiency: profile.efficiency.unwrap_or(vanilla.charge_ratio),
            max_capacity_seconds: profile.max_capacity_seconds.unwrap_or(vanilla.max_capacity_seconds),
        }
    }

    /// Lists suspicious values. Nothing here rejects the settings; a collision
    /// between battery outputs only makes classification ambiguous.
    pub fn validate(&self, stock: &StockDefaults) -> Vec<String> {
        let mut warnings = Vec::new();

        for class in EEntityClass::ALL {
            let profile = self.profile(class);
            if profile.max_output < 0 {
                warnings.push(format!("{}: MaxOutput {} is negative", class, profile.max_output));
            }
            if let Some(efficiency) = profile.efficiency {
                if !(0.0..=1.0).contains(&efficiency) {
                    warnings.push(format!("{}: Efficiency {} is outside 0..1", class, efficiency));
                }
            }
            if let Some(seconds) = profile.max_capacity_seconds {
                if seconds < 0 {
                    warnings.push(format!("{}: MaxCapacitySeconds {} is negative", class, seconds));
                }
            }
        }

        for (i, a) in EBatteryClass::ALL.iter().enumerate() {
            let output = self.battery(*a).max_output;
            for b in EBatteryClass::ALL.iter().skip(i + 1) {
                if self.battery(*b).max_output == output {
                    warnings.push(format!(
                        "{} and {} share MaxOutput {}; reverting cannot tell them apart",
                        a, b, output
                    ));
                }
            }
            if let Some(other) = stock.classify(output).filter(|other| other != a) {
                warnings.push(format!(
                    "{} MaxOutput {} equals the stock output of {}; freshly reverted batteries may be misread",
                    a, output, other
                ));
            }
        }

        warnings
    }
}
