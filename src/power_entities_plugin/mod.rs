use bevy::prelude::*;

use crate::common::types::{EBatteryClass, EEntityClass, EPowerEntityKind};

pub mod components;

pub use components::*;

pub struct PowerEntitiesPlugin;

impl Plugin for PowerEntitiesPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<components::ElectricBattery>()
            .register_type::<components::SolarPanel>()
            .register_type::<components::WindTurbine>()
            .register_type::<components::FuelGenerator>()
            .register_type::<EEntityClass>()
            .register_type::<EBatteryClass>()
            .register_type::<EPowerEntityKind>();

        // Debug-log stat changes only in debug mode
        #[cfg(debug_assertions)]
        app.add_systems(PostUpdate, debug_battery_changes_system);
    }
}

#[cfg(debug_assertions)]
fn debug_battery_changes_system(
    query: Query<(Entity, &components::ElectricBattery), Changed<components::ElectricBattery>>,
) {
    for (e, battery) in query.iter() {
        debug!(
            "Battery {:?} → output: {}, capacity: {}s, charge ratio: {}",
            e, battery.max_output, battery.max_capacity_seconds, battery.charge_ratio
        );
    }
}
