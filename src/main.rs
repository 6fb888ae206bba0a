use bevy::prelude::*;
use power_profiles::app_setup::{setup_bevy_app, spawn_demo_world};
use power_profiles::console_bridge::ConsoleBridgePlugin;
use power_profiles::power_profile_plugin::{ServerInitialized, DEFAULT_CONFIG_PATH};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG wins; otherwise info for everything.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    let config_path = args
        .iter()
        .position(|arg| arg == "--config")
        .and_then(|i| args.get(i + 1))
        .cloned()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    info!("Starting power profile server with config '{}'", config_path);

    let mut app = setup_bevy_app(config_path);
    app.add_plugins(ConsoleBridgePlugin);

    // The host world is loaded before the server reports ready.
    spawn_demo_world(app.world_mut());
    app.world_mut().send_event(ServerInitialized);

    info!("Type '/be reload' to reload the settings file, 'quit' to revert and exit.");
    app.run();

    info!("Power profile server shutting down.");
}
