use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use std::path::PathBuf;
use std::time::Duration;

use crate::command_plugin::CommandPlugin;
use crate::common::types::EBatteryClass;
use crate::power_entities_plugin::{ElectricBattery, FuelGenerator, PowerEntitiesPlugin, SolarPanel, WindTurbine};
use crate::power_profile_plugin::PowerProfilePlugin;

/// Server tick used by the headless runner.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Builds the headless server app. Logging is left to the caller.
pub fn setup_bevy_app(config_path: impl Into<PathBuf>) -> App {
    let mut app = App::new();

    app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(TICK_INTERVAL)))
       .add_plugins(PowerEntitiesPlugin)
       .add_plugins(PowerProfilePlugin { config_path: config_path.into() })
       .add_plugins(CommandPlugin);

    app
}

/// A handful of vanilla entities, one or more of every managed kind.
pub fn spawn_demo_world(world: &mut World) {
    world.spawn(SolarPanel::vanilla());
    world.spawn(SolarPanel::vanilla());
    world.spawn(ElectricBattery::vanilla(EBatteryClass::Large));
    world.spawn(ElectricBattery::vanilla(EBatteryClass::Medium));
    world.spawn(ElectricBattery::vanilla(EBatteryClass::Small));
    world.spawn(WindTurbine::vanilla());
    world.spawn(FuelGenerator::vanilla());
    info!("Spawned demo world");
}
