use bevy::prelude::*;
use super::events::{ChatCommand, ChatReply, CommandCaller};
use super::resources::Permissions;
use super::{ADMIN_PERMISSION, COMMAND_NAME};
use crate::localization::{Lang, MessageId};
use crate::power_profile_plugin::ReloadRequested;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ECommandAction {
    Help,
    Reload,
}

/// Anything other than exactly `reload` is a request for help.
pub fn parse_args(args: &[String]) -> ECommandAction {
    match args {
        [only] if only == "reload" => ECommandAction::Reload,
        _ => ECommandAction::Help,
    }
}

pub fn has_admin_permission(caller: &CommandCaller, permissions: &Permissions) -> bool {
    caller.is_admin || permissions.user_has_permission(&caller.user_id, ADMIN_PERMISSION)
}

pub fn handle_chat_commands_system(
    mut commands: EventReader<ChatCommand>,
    permissions: Res<Permissions>,
    lang: Res<Lang>,
    mut replies: EventWriter<ChatReply>,
    mut reloads: EventWriter<ReloadRequested>,
) {
    for command in commands.read() {
        if command.command != COMMAND_NAME {
            continue;
        }
        let reply = |message: &str| ChatReply {
            user_id: command.caller.user_id.clone(),
            message: message.to_string(),
        };

        match parse_args(&command.args) {
            ECommandAction::Help => {
                replies.write(reply(lang.get(MessageId::HelpHeader)));
                replies.write(reply(lang.get(MessageId::HelpReload)));
            }
            ECommandAction::Reload if !has_admin_permission(&command.caller, &permissions) => {
                info!("'{}' tried to reload power profiles without permission", command.caller.display_name);
                replies.write(reply(lang.get(MessageId::NoPermission)));
            }
            ECommandAction::Reload => {
                reloads.write(ReloadRequested { requested_by: command.caller.display_name.clone() });
                replies.write(reply(lang.get(MessageId::Reloading)));
            }
        }
    }
}
