// Declare all modules that make up the library
pub mod common;
pub mod error;
pub mod app_setup;
pub mod localization;
pub mod console_bridge;

pub mod power_entities_plugin;
pub mod power_profile_plugin;
pub mod command_plugin;
