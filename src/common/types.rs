use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every entity kind whose power stats are managed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Reflect)]
#[reflect(Serialize, Deserialize)]
pub enum EEntityClass {
    SolarPanel,
    LargeBattery,
    MediumBattery,
    SmallBattery,
    WindTurbine,
    FuelGenerator,
}

impl EEntityClass {
    pub const ALL: [EEntityClass; 6] = [
        EEntityClass::SolarPanel,
        EEntityClass::LargeBattery,
        EEntityClass::MediumBattery,
        EEntityClass::SmallBattery,
        EEntityClass::WindTurbine,
        EEntityClass::FuelGenerator,
    ];
}

impl fmt::Display for EEntityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EEntityClass::SolarPanel => "Solar Panel",
            EEntityClass::LargeBattery => "Large Battery",
            EEntityClass::MediumBattery => "Medium Battery",
            EEntityClass::SmallBattery => "Small Battery",
            EEntityClass::WindTurbine => "Wind Turbine",
            EEntityClass::FuelGenerator => "Fuel Generator",
        };
        f.write_str(name)
    }
}

/// Battery subtypes. The host exposes no subtype tag on a battery, only its
/// output stat, so these are inferred (see `StockDefaults::classify`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Reflect)]
#[reflect(Serialize, Deserialize)]
pub enum EBatteryClass {
    Large,
    Medium,
    Small,
}

impl EBatteryClass {
    /// Revert checks configured outputs in this order; first match wins.
    pub const ALL: [EBatteryClass; 3] = [EBatteryClass::Large, EBatteryClass::Medium, EBatteryClass::Small];

    pub fn entity_class(self) -> EEntityClass {
        match self {
            EBatteryClass::Large => EEntityClass::LargeBattery,
            EBatteryClass::Medium => EEntityClass::MediumBattery,
            EBatteryClass::Small => EEntityClass::SmallBattery,
        }
    }
}

impl fmt::Display for EBatteryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.entity_class().fmt(f)
    }
}

/// The four component kinds a bulk scan walks over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Reflect)]
#[reflect(Serialize, Deserialize)]
pub enum EPowerEntityKind {
    SolarPanel,
    Battery,
    WindTurbine,
    FuelGenerator,
}

impl EPowerEntityKind {
    pub fn plural(self) -> &'static str {
        match self {
            EPowerEntityKind::SolarPanel => "Solar Panels",
            EPowerEntityKind::Battery => "Batteries",
            EPowerEntityKind::WindTurbine => "Wind Turbines",
            EPowerEntityKind::FuelGenerator => "Fuel Generators",
        }
    }
}
