use bevy::prelude::*;
pub mod events;
pub mod resources;
pub mod systems;

pub use events::{ChatCommand, ChatReply, CommandCaller};
pub use resources::Permissions;
pub use systems::handle_chat_commands_system;

use crate::localization::Lang;
use crate::power_profile_plugin::reload_power_profiles_system;

pub const COMMAND_NAME: &str = "be";
pub const ADMIN_PERMISSION: &str = "be.admin";

/// Needs `PowerProfilePlugin` added first.
pub struct CommandPlugin;

impl Plugin for CommandPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Permissions>()
            .init_resource::<Lang>()
            .add_event::<ChatCommand>()
            .add_event::<ChatReply>()
            .add_systems(Update, handle_chat_commands_system
                .before(reload_power_profiles_system));
        info!("CommandPlugin loaded, listening for /{}", COMMAND_NAME);
    }
}
