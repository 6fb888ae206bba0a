use bevy::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCaller {
    pub user_id: String,
    pub display_name: String,
    /// Host-level super-admin flag; bypasses permission grants.
    pub is_admin: bool,
}

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ChatCommand {
    pub caller: CommandCaller,
    pub command: String,
    pub args: Vec<String>,
}

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub user_id: String,
    pub message: String,
}
