use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use chrono::Utc;

use crate::common::types::{EBatteryClass, EPowerEntityKind};
use crate::localization::{Lang, MessageId};
use crate::power_entities_plugin::{ElectricBattery, FuelGenerator, SolarPanel, WindTurbine};
use super::config::PowerSettings;
use super::events::{
    BatteryTelemetryRefresh, PowerProfilesReloaded, ReloadRequested, ScanReport,
    ServerInitialized, ServerShutdown,
};
use super::profile;
use super::resources::{PluginLifecycle, StockDefaults};
use super::store::ConfigStore;

/// Every live entity the plugin manages. Iterating these queries is the full
/// world scan.
#[derive(SystemParam)]
pub struct PowerEntities<'w, 's> {
    batteries: Query<'w, 's, (Entity, &'static mut ElectricBattery)>,
    solar_panels: Query<'w, 's, &'static mut SolarPanel>,
    wind_turbines: Query<'w, 's, &'static mut WindTurbine>,
    fuel_generators: Query<'w, 's, &'static mut FuelGenerator>,
    telemetry: EventWriter<'w, BatteryTelemetryRefresh>,
}

impl PowerEntities<'_, '_> {
    pub fn apply_all(&mut self, settings: &PowerSettings, stock: &StockDefaults, lang: &Lang) -> ScanReport {
        let mut report = ScanReport::default();

        log_scan_start(lang, MessageId::ScanApply, EPowerEntityKind::SolarPanel);
        for mut panel in self.solar_panels.iter_mut() {
            profile::apply_solar_panel(&mut panel, settings);
            report.solar_panels.0 += 1;
            report.solar_panels.1 += 1;
        }
        log_scan_summary(lang, EPowerEntityKind::SolarPanel, report.solar_panels);

        log_scan_start(lang, MessageId::ScanApply, EPowerEntityKind::Battery);
        for (entity, mut battery) in self.batteries.iter_mut() {
            report.batteries.1 += 1;
            if let Some(class) = profile::apply_battery(&mut battery, settings, stock) {
                report.batteries.0 += 1;
                send_refresh(&mut self.telemetry, entity, class);
            }
        }
        log_scan_summary(lang, EPowerEntityKind::Battery, report.batteries);

        log_scan_start(lang, MessageId::ScanApply, EPowerEntityKind::WindTurbine);
        for mut turbine in self.wind_turbines.iter_mut() {
            profile::apply_wind_turbine(&mut turbine, settings);
            report.wind_turbines.0 += 1;
            report.wind_turbines.1 += 1;
        }
        log_scan_summary(lang, EPowerEntityKind::WindTurbine, report.wind_turbines);

        log_scan_start(lang, MessageId::ScanApply, EPowerEntityKind::FuelGenerator);
        for mut generator in self.fuel_generators.iter_mut() {
            profile::apply_fuel_generator(&mut generator, settings);
            report.fuel_generators.0 += 1;
            report.fuel_generators.1 += 1;
        }
        log_scan_summary(lang, EPowerEntityKind::FuelGenerator, report.fuel_generators);

        report
    }

    /// `settings` must be the configuration the entities were applied with.
    pub fn revert_all(&mut self, settings: &PowerSettings, lang: &Lang) -> ScanReport {
        let mut report = ScanReport::default();

        log_scan_start(lang, MessageId::ScanRevert, EPowerEntityKind::SolarPanel);
        for mut panel in self.solar_panels.iter_mut() {
            profile::revert_solar_panel(&mut panel);
            report.solar_panels.0 += 1;
            report.solar_panels.1 += 1;
        }
        log_scan_summary(lang, EPowerEntityKind::SolarPanel, report.solar_panels);

        log_scan_start(lang, MessageId::ScanRevert, EPowerEntityKind::Battery);
        for (entity, mut battery) in self.batteries.iter_mut() {
            report.batteries.1 += 1;
            match profile::revert_battery(&mut battery, settings) {
                Some(class) => {
                    report.batteries.0 += 1;
                    send_refresh(&mut self.telemetry, entity, class);
                }
                None => debug!("Battery {:?} with output {} matches no configured profile", entity, battery.max_output),
            }
        }
        log_scan_summary(lang, EPowerEntityKind::Battery, report.batteries);

        log_scan_start(lang, MessageId::ScanRevert, EPowerEntityKind::WindTurbine);
        for mut turbine in self.wind_turbines.iter_mut() {
            profile::revert_wind_turbine(&mut turbine);
            report.wind_turbines.0 += 1;
            report.wind_turbines.1 += 1;
        }
        log_scan_summary(lang, EPowerEntityKind::WindTurbine, report.wind_turbines);

        log_scan_start(lang, MessageId::ScanRevert, EPowerEntityKind::FuelGenerator);
        for mut generator in self.fuel_generators.iter_mut() {
            profile::revert_fuel_generator(&mut generator);
            report.fuel_generators.0 += 1;
            report.fuel_generators.1 += 1;
        }
        log_scan_summary(lang, EPowerEntityKind::FuelGenerator, report.fuel_generators);

        report
    }
}

fn log_scan_start(lang: &Lang, id: MessageId, kind: EPowerEntityKind) {
    info!("{}", lang.format(id, &[&kind.plural()]));
}

fn log_scan_summary(lang: &Lang, kind: EPowerEntityKind, (touched, seen): (usize, usize)) {
    info!("{}", lang.format(MessageId::ScanSummary, &[&kind.plural(), &touched, &seen]));
}

fn send_refresh(writer: &mut EventWriter<BatteryTelemetryRefresh>, entity: Entity, class: EBatteryClass) {
    writer.write(BatteryTelemetryRefresh { entity, class, refreshed_at: Utc::now() });
}

pub fn on_server_initialized_system(
    mut events: EventReader<ServerInitialized>,
    mut lifecycle: ResMut<PluginLifecycle>,
    settings: Res<PowerSettings>,
    stock: Res<StockDefaults>,
    lang: Res<Lang>,
    mut entities: PowerEntities,
) {
    for _ in events.read() {
        if lifecycle.ready {
            warn!("Server initialized twice; power profiles are already applied");
            continue;
        }
        let report = entities.apply_all(&settings, &stock, &lang);
        lifecycle.ready = true;
        info!("Power profiles applied to {} entities", report.touched());
    }
}

pub fn on_server_shutdown_system(
    mut events: EventReader<ServerShutdown>,
    mut lifecycle: ResMut<PluginLifecycle>,
    settings: Res<PowerSettings>,
    lang: Res<Lang>,
    mut entities: PowerEntities,
) {
    for _ in events.read() {
        if !lifecycle.ready {
            warn!("Shutdown received before initialization; nothing to revert");
            continue;
        }
        lifecycle.ready = false;
        let report = entities.revert_all(&settings, &lang);
        info!("Power profiles reverted on {} entities", report.touched());
    }
}

/// Revert with the old settings, reload the file, apply the new settings.
/// The revert has to see the old values or configured batteries go
/// unrecognized. Outside the ready window entities are vanilla, so only the
/// file is reloaded.
pub fn reload_power_profiles_system(
    mut requests: EventReader<ReloadRequested>,
    lifecycle: Res<PluginLifecycle>,
    store: Res<ConfigStore>,
    stock: Res<StockDefaults>,
    lang: Res<Lang>,
    mut settings: ResMut<PowerSettings>,
    mut entities: PowerEntities,
    mut reloaded: EventWriter<PowerProfilesReloaded>,
) {
    for request in requests.read() {
        info!("Reloading power profiles (requested by '{}')", request.requested_by);
        if !lifecycle.ready {
            *settings = store.load_or_default(&stock);
            info!("Server not ready; settings reloaded without touching entities");
            reloaded.write(PowerProfilesReloaded {
                reverted: ScanReport::default(),
                applied: ScanReport::default(),
            });
            continue;
        }
        let reverted = entities.revert_all(&settings, &lang);
        *settings = store.load_or_default(&stock);
        let applied = entities.apply_all(&settings, &stock, &lang);
        reloaded.write(PowerProfilesReloaded { reverted, applied });
    }
}

pub fn on_battery_spawned(
    trigger: Trigger<OnAdd, ElectricBattery>,
    lifecycle: Res<PluginLifecycle>,
    settings: Res<PowerSettings>,
    stock: Res<StockDefaults>,
    mut batteries: Query<&mut ElectricBattery>,
    mut telemetry: EventWriter<BatteryTelemetryRefresh>,
) {
    if !lifecycle.ready {
        return;
    }
    let entity = trigger.target();
    let Ok(mut battery) = batteries.get_mut(entity) else { return };
    match profile::apply_battery(&mut battery, &settings, &stock) {
        Some(class) => send_refresh(&mut telemetry, entity, class),
        None => debug!("Spawned battery {:?} has non-stock output {}", entity, battery.max_output),
    }
}

pub fn on_solar_panel_spawned(
    trigger: Trigger<OnAdd, SolarPanel>,
    lifecycle: Res<PluginLifecycle>,
    settings: Res<PowerSettings>,
    mut panels: Query<&mut SolarPanel>,
) {
    if !lifecycle.ready {
        return;
    }
    if let Ok(mut panel) = panels.get_mut(trigger.target()) {
        profile::apply_solar_panel(&mut panel, &settings);
    }
}

pub fn on_wind_turbine_spawned(
    trigger: Trigger<OnAdd, WindTurbine>,
    lifecycle: Res<PluginLifecycle>,
    settings: Res<PowerSettings>,
    mut turbines: Query<&mut WindTurbine>,
) {
    if !lifecycle.ready {
        return;
    }
    if let Ok(mut turbine) = turbines.get_mut(trigger.target()) {
        profile::apply_wind_turbine(&mut turbine, &settings);
    }
}

pub fn on_fuel_generator_spawned(
    trigger: Trigger<OnAdd, FuelGenerator>,
    lifecycle: Res<PluginLifecycle>,
    settings: Res<PowerSettings>,
    mut generators: Query<&mut FuelGenerator>,
) {
    if !lifecycle.ready {
        return;
    }
    if let Ok(mut generator) = generators.get_mut(trigger.target()) {
        profile::apply_fuel_generator(&mut generator, &settings);
    }
}
