use bevy::prelude::*;
use std::path::PathBuf;

use crate::localization::Lang;

pub mod config;
pub mod events;
pub mod profile;
pub mod resources;
pub mod store;
pub mod systems;

pub use config::{BatteryProfile, PowerProfile, PowerSettings};
pub use events::*;
pub use resources::{PluginLifecycle, StockDefaults};
pub use store::ConfigStore;
pub use systems::{
    on_server_initialized_system,
    on_server_shutdown_system,
    reload_power_profiles_system,
    PowerEntities,
};

pub const DEFAULT_CONFIG_PATH: &str = "config/power_profiles.json";

pub struct PowerProfilePlugin {
    pub config_path: PathBuf,
}

impl Default for PowerProfilePlugin {
    fn default() -> Self {
        Self { config_path: PathBuf::from(DEFAULT_CONFIG_PATH) }
    }
}

impl Plugin for PowerProfilePlugin {
    fn build(&self, app: &mut App) {
        // A host may insert its own stock table before adding the plugin.
        let stock = app
            .world()
            .get_resource::<StockDefaults>()
            .cloned()
            .unwrap_or_default();
        let store = ConfigStore::new(self.config_path.clone());
        let settings = store.load_or_default(&stock);

        app.init_resource::<Lang>()
            .init_resource::<PluginLifecycle>()
            .insert_resource(stock)
            .insert_resource(store)
            .insert_resource(settings)
            .add_event::<ServerInitialized>()
            .add_event::<ServerShutdown>()
            .add_event::<ReloadRequested>()
            .add_event::<PowerProfilesReloaded>()
            .add_event::<BatteryTelemetryRefresh>()
            .add_observer(systems::on_battery_spawned)
            .add_observer(systems::on_solar_panel_spawned)
            .add_observer(systems::on_wind_turbine_spawned)
            .add_observer(systems::on_fuel_generator_spawned)
            .add_systems(Update, (
                reload_power_profiles_system,
                on_server_initialized_system
                    .after(reload_power_profiles_system),
                on_server_shutdown_system
                    .after(on_server_initialized_system),
            ));

        info!("PowerProfilePlugin loaded with settings from {}", self.config_path.display());
    }
}
