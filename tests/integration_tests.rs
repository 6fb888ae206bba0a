use bevy::prelude::*;
use power_profiles::app_setup::setup_bevy_app;
use power_profiles::command_plugin::{ChatCommand, ChatReply, CommandCaller, Permissions, ADMIN_PERMISSION};
use power_profiles::common::types::EBatteryClass;
use power_profiles::power_entities_plugin::{ElectricBattery, FuelGenerator, SolarPanel, WindTurbine};
use power_profiles::power_profile_plugin::{
    BatteryTelemetryRefresh, ConfigStore, PluginLifecycle, PowerProfile, PowerProfilesReloaded,
    PowerSettings, ServerInitialized, ServerShutdown,
};
use std::fs;
use std::path::PathBuf;

fn config_path(test_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("power_profiles_it_{}_{}", std::process::id(), test_name));
    let _ = fs::remove_dir_all(&dir);
    dir.join("power_profiles.json")
}

fn custom_settings() -> PowerSettings {
    PowerSettings {
        solar_panel: PowerProfile::scalar(120),
        large_battery: PowerProfile::battery(300, 0.95, 28800),
        medium_battery: PowerProfile::battery(150, 0.9, 7200),
        small_battery: PowerProfile::battery(25, 1.0, 1800),
        wind_turbine: PowerProfile::scalar(250),
        fuel_generator: PowerProfile::scalar(75),
    }
}

/// Entities of a small world, spawned before the server reports ready.
struct WorldHandles {
    panel: Entity,
    large: Entity,
    medium: Entity,
    small: Entity,
    turbine: Entity,
    generator: Entity,
}

fn spawn_world(app: &mut App) -> WorldHandles {
    let world = app.world_mut();
    WorldHandles {
        panel: world.spawn(SolarPanel::vanilla()).id(),
        large: world.spawn(ElectricBattery::vanilla(EBatteryClass::Large)).id(),
        medium: world.spawn(ElectricBattery::vanilla(EBatteryClass::Medium)).id(),
        small: world.spawn(ElectricBattery::vanilla(EBatteryClass::Small)).id(),
        turbine: world.spawn(WindTurbine::vanilla()).id(),
        generator: world.spawn(FuelGenerator::vanilla()).id(),
    }
}

fn started_app(test_name: &str, settings: &PowerSettings) -> (App, WorldHandles, ConfigStore) {
    let store = ConfigStore::new(config_path(test_name));
    store.save(settings).unwrap();

    let mut app = setup_bevy_app(store.path().to_path_buf());
    let handles = spawn_world(&mut app);
    app.world_mut().send_event(ServerInitialized);
    app.update();
    (app, handles, store)
}

fn battery(app: &App, entity: Entity) -> ElectricBattery {
    *app.world().get::<ElectricBattery>(entity).unwrap()
}

fn drain<E: Event>(app: &mut App) -> Vec<E> {
    app.world_mut().resource_mut::<Events<E>>().drain().collect()
}

fn chat(app: &mut App, caller: CommandCaller, args: &[&str]) {
    app.world_mut().send_event(ChatCommand {
        caller,
        command: "be".into(),
        args: args.iter().map(|a| a.to_string()).collect(),
    });
    app.update();
}

fn player(is_admin: bool) -> CommandCaller {
    CommandCaller { user_id: "76561198000000001".into(), display_name: "player".into(), is_admin }
}

#[test]
fn server_ready_applies_profiles_to_existing_entities() {
    let (mut app, h, _store) = started_app("ready", &custom_settings());

    assert_eq!(app.world().get::<SolarPanel>(h.panel).unwrap().maximal_power_output, 120);
    assert_eq!(battery(&app, h.large).max_output, 300);
    assert_eq!(battery(&app, h.large).max_capacity_seconds, 28800);
    assert!((battery(&app, h.large).charge_ratio - 0.95).abs() < f32::EPSILON);
    assert_eq!(battery(&app, h.medium).max_output, 150);
    assert_eq!(battery(&app, h.small).max_output, 25);
    assert_eq!(app.world().get::<WindTurbine>(h.turbine).unwrap().max_power_generation, 250);
    assert_eq!(app.world().get::<FuelGenerator>(h.generator).unwrap().electric_amount, 75);
    assert!(app.world().resource::<PluginLifecycle>().ready);

    let refreshed: Vec<_> = drain::<BatteryTelemetryRefresh>(&mut app);
    assert_eq!(refreshed.len(), 3);
    assert!(refreshed.iter().any(|r| r.entity == h.small && r.class == EBatteryClass::Small));
}

#[test]
fn spawn_hook_applies_only_once_ready() {
    let store = ConfigStore::new(config_path("spawn_hook"));
    store.save(&custom_settings()).unwrap();
    let mut app = setup_bevy_app(store.path().to_path_buf());

    let early = app.world_mut().spawn(ElectricBattery::vanilla(EBatteryClass::Medium)).id();
    assert_eq!(battery(&app, early), ElectricBattery::vanilla(EBatteryClass::Medium));

    app.world_mut().send_event(ServerInitialized);
    app.update();
    assert_eq!(battery(&app, early).max_output, 150);

    let late = app.world_mut().spawn(ElectricBattery::vanilla(EBatteryClass::Small)).id();
    assert_eq!(battery(&app, late).max_output, 25);
    assert_eq!(battery(&app, late).max_capacity_seconds, 1800);

    let panel = app.world_mut().spawn(SolarPanel::vanilla()).id();
    assert_eq!(app.world().get::<SolarPanel>(panel).unwrap().maximal_power_output, 120);

    let custom = ElectricBattery { max_output: 33, max_capacity_seconds: 10, charge_ratio: 0.5, inbound_energy_ratio: 1.0 };
    let odd = app.world_mut().spawn(custom).id();
    assert_eq!(battery(&app, odd), custom);
}

#[test]
fn shutdown_restores_vanilla_constants() {
    let (mut app, h, _store) = started_app("shutdown", &custom_settings());

    app.world_mut().send_event(ServerShutdown);
    app.update();

    assert_eq!(*app.world().get::<SolarPanel>(h.panel).unwrap(), SolarPanel::vanilla());
    assert_eq!(battery(&app, h.large), ElectricBattery::vanilla(EBatteryClass::Large));
    assert_eq!(battery(&app, h.medium), ElectricBattery::vanilla(EBatteryClass::Medium));
    assert_eq!(battery(&app, h.small), ElectricBattery::vanilla(EBatteryClass::Small));
    assert_eq!(*app.world().get::<WindTurbine>(h.turbine).unwrap(), WindTurbine::vanilla());
    assert_eq!(*app.world().get::<FuelGenerator>(h.generator).unwrap(), FuelGenerator::vanilla());
    assert!(!app.world().resource::<PluginLifecycle>().ready);

    // The hook is off again after shutdown.
    let after = app.world_mut().spawn(ElectricBattery::vanilla(EBatteryClass::Large)).id();
    assert_eq!(battery(&app, after), ElectricBattery::vanilla(EBatteryClass::Large));
}

#[test]
fn stock_valued_config_reverts_each_battery_to_its_own_class() {
    let (mut app, h, _store) = started_app("stock_valued", &PowerSettings::default());

    app.world_mut().send_event(ServerShutdown);
    app.update();

    assert_eq!(battery(&app, h.large), ElectricBattery::vanilla(EBatteryClass::Large));
    assert_eq!(battery(&app, h.medium), ElectricBattery::vanilla(EBatteryClass::Medium));
    assert_eq!(battery(&app, h.small), ElectricBattery::vanilla(EBatteryClass::Small));
}

#[test]
fn admin_reload_reverts_with_old_settings_then_applies_new_ones() {
    let (mut app, h, store) = started_app("reload", &custom_settings());
    drain::<PowerProfilesReloaded>(&mut app);

    let mut updated = custom_settings();
    updated.large_battery = PowerProfile::battery(400, 0.85, 36000);
    updated.medium_battery.max_output = 200;
    updated.small_battery.max_output = 40;
    updated.solar_panel.max_output = 90;
    store.save(&updated).unwrap();

    chat(&mut app, player(true), &["reload"]);

    assert_eq!(*app.world().resource::<PowerSettings>(), updated);
    assert_eq!(battery(&app, h.large).max_output, 400);
    assert_eq!(battery(&app, h.large).max_capacity_seconds, 36000);
    assert_eq!(battery(&app, h.medium).max_output, 200);
    assert_eq!(battery(&app, h.small).max_output, 40);
    assert_eq!(app.world().get::<SolarPanel>(h.panel).unwrap().maximal_power_output, 90);

    let reloads = drain::<PowerProfilesReloaded>(&mut app);
    assert_eq!(reloads.len(), 1);
    assert_eq!(reloads[0].reverted.batteries, (3, 3));
    assert_eq!(reloads[0].applied.batteries, (3, 3));

    let replies = drain::<ChatReply>(&mut app);
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].message, "Reloading power profiles...");
}

#[test]
fn granted_permission_allows_reload() {
    let (mut app, _h, _store) = started_app("granted", &custom_settings());
    app.world_mut().resource_mut::<Permissions>().grant("76561198000000001", ADMIN_PERMISSION);

    chat(&mut app, player(false), &["reload"]);

    assert_eq!(drain::<PowerProfilesReloaded>(&mut app).len(), 1);
}

#[test]
fn reload_after_shutdown_leaves_the_world_vanilla() {
    let (mut app, h, store) = started_app("reload_after_shutdown", &custom_settings());
    app.world_mut().send_event(ServerShutdown);
    app.update();

    let mut updated = custom_settings();
    updated.large_battery.max_output = 350;
    store.save(&updated).unwrap();
    drain::<PowerProfilesReloaded>(&mut app);

    chat(&mut app, player(true), &["reload"]);

    assert_eq!(*app.world().resource::<PowerSettings>(), updated);
    assert_eq!(battery(&app, h.large), ElectricBattery::vanilla(EBatteryClass::Large));
    assert_eq!(*app.world().get::<SolarPanel>(h.panel).unwrap(), SolarPanel::vanilla());
    let reloads = drain::<PowerProfilesReloaded>(&mut app);
    assert_eq!(reloads.len(), 1);
    assert_eq!(reloads[0].applied.touched(), 0);
    assert!(!app.world().resource::<PluginLifecycle>().ready);

    app.world_mut().send_event(ServerShutdown);
    app.update();
    assert_eq!(battery(&app, h.large), ElectricBattery::vanilla(EBatteryClass::Large));
    assert_eq!(battery(&app, h.small), ElectricBattery::vanilla(EBatteryClass::Small));
}

#[test]
fn reload_before_ready_does_not_double_apply() {
    let mut settings = custom_settings();
    // Large output equals the medium stock output, so a second apply would
    // reread the large battery as a medium one.
    settings.large_battery = PowerProfile::battery(50, 0.95, 28800);
    settings.medium_battery = PowerProfile::battery(75, 0.5, 1000);

    let store = ConfigStore::new(config_path("reload_before_ready"));
    store.save(&settings).unwrap();
    let mut app = setup_bevy_app(store.path().to_path_buf());
    let h = spawn_world(&mut app);

    chat(&mut app, player(true), &["reload"]);
    assert_eq!(battery(&app, h.large), ElectricBattery::vanilla(EBatteryClass::Large));
    assert_eq!(battery(&app, h.medium), ElectricBattery::vanilla(EBatteryClass::Medium));

    app.world_mut().send_event(ServerInitialized);
    app.update();

    let large = battery(&app, h.large);
    assert_eq!(large.max_output, 50);
    assert_eq!(large.max_capacity_seconds, 28800);
    assert!((large.charge_ratio - 0.95).abs() < f32::EPSILON);
    assert_eq!(battery(&app, h.medium).max_output, 75);
    assert_eq!(battery(&app, h.medium).max_capacity_seconds, 1000);
}

#[test]
fn reload_without_permission_is_rejected() {
    let (mut app, h, _store) = started_app("denied", &custom_settings());
    drain::<PowerProfilesReloaded>(&mut app);
    let before = battery(&app, h.large);

    chat(&mut app, player(false), &["reload"]);

    let replies = drain::<ChatReply>(&mut app);
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].message, "You don't have permission to use this command.");
    assert!(drain::<PowerProfilesReloaded>(&mut app).is_empty());
    assert_eq!(battery(&app, h.large), before);
}

#[test]
fn bare_command_prints_help_without_touching_state() {
    let (mut app, h, _store) = started_app("help", &custom_settings());
    let before = battery(&app, h.medium);

    chat(&mut app, player(false), &[]);
    let replies = drain::<ChatReply>(&mut app);
    assert_eq!(
        replies.iter().map(|r| r.message.as_str()).collect::<Vec<_>>(),
        vec!["====== Player Commands ======", "/be reload => Reloads the config."]
    );

    chat(&mut app, player(true), &["frobnicate"]);
    assert_eq!(drain::<ChatReply>(&mut app).len(), 2);

    assert!(drain::<PowerProfilesReloaded>(&mut app).is_empty());
    assert_eq!(battery(&app, h.medium), before);
}

#[test]
fn other_commands_are_ignored() {
    let (mut app, _h, _store) = started_app("other", &custom_settings());
    app.world_mut().send_event(ChatCommand {
        caller: player(true),
        command: "kit".into(),
        args: vec!["reload".into()],
    });
    app.update();

    assert!(drain::<ChatReply>(&mut app).is_empty());
    assert!(drain::<PowerProfilesReloaded>(&mut app).is_empty());
}

#[test]
fn corrupt_config_falls_back_to_defaults_and_heals() {
    let path = config_path("corrupt");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{\"LargeBattery\": ").unwrap();

    let app = setup_bevy_app(path.clone());

    assert_eq!(*app.world().resource::<PowerSettings>(), PowerSettings::default());
    let healed: PowerSettings = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(healed, PowerSettings::default());
}
