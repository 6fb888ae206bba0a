use bevy::prelude::*;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::io::BufRead;
use std::thread;

use crate::command_plugin::{handle_chat_commands_system, ChatCommand, ChatReply, CommandCaller};
use crate::power_profile_plugin::ServerShutdown;

pub const CONSOLE_USER_ID: &str = "console";

/// Lines typed on the server console, fed in from a reader thread.
#[derive(Resource)]
pub struct ConsoleLineReceiver(pub Receiver<String>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EConsoleInput {
    Command(ChatCommand),
    Quit,
    Empty,
}

/// `/be reload` and `be reload` are the same command. The console caller is
/// always a super-admin.
pub fn parse_console_line(line: &str) -> EConsoleInput {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return EConsoleInput::Empty;
    };
    let command = first.trim_start_matches('/');
    if command == "quit" {
        return EConsoleInput::Quit;
    }
    EConsoleInput::Command(ChatCommand {
        caller: CommandCaller {
            user_id: CONSOLE_USER_ID.to_string(),
            display_name: "Server Console".to_string(),
            is_admin: true,
        },
        command: command.to_string(),
        args: words.map(str::to_string).collect(),
    })
}

/// Spawns the stdin reader thread and returns the Bevy-side end.
pub fn spawn_stdin_reader() -> ConsoleLineReceiver {
    let (sender, receiver): (Sender<String>, Receiver<String>) = unbounded();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if sender.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    error!("Console: failed to read stdin: {}", e);
                    break;
                }
            }
        }
    });
    ConsoleLineReceiver(receiver)
}

pub fn ingest_console_lines_system(
    channel: Res<ConsoleLineReceiver>,
    mut chat_commands: EventWriter<ChatCommand>,
    mut shutdown: EventWriter<ServerShutdown>,
    mut exit: EventWriter<AppExit>,
) {
    while let Ok(line) = channel.0.try_recv() {
        match parse_console_line(&line) {
            EConsoleInput::Command(command) => {
                chat_commands.write(command);
            }
            EConsoleInput::Quit => {
                info!("Console: shutting down");
                shutdown.write(ServerShutdown);
                exit.write(AppExit::Success);
            }
            EConsoleInput::Empty => (),
        }
    }
}

pub fn print_console_replies_system(mut replies: EventReader<ChatReply>) {
    for reply in replies.read().filter(|r| r.user_id == CONSOLE_USER_ID) {
        println!("{}", reply.message);
    }
}

pub struct ConsoleBridgePlugin;

impl Plugin for ConsoleBridgePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(spawn_stdin_reader())
            .add_systems(Update, (
                ingest_console_lines_system
                    .before(handle_chat_commands_system),
                print_console_replies_system
                    .after(handle_chat_commands_system),
            ));
    }
}
