use bevy::prelude::*;
use std::collections::HashMap;

/// Ids of every user-facing or log-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    NoPermission,
    HelpHeader,
    HelpReload,
    Reloading,
    ScanApply,
    ScanRevert,
    ScanSummary,
}

impl MessageId {
    pub fn key(self) -> &'static str {
        match self {
            MessageId::NoPermission => "NoPermission",
            MessageId::HelpHeader => "HelpHeader",
            MessageId::HelpReload => "HelpReload",
            MessageId::Reloading => "Reloading",
            MessageId::ScanApply => "ScanApply",
            MessageId::ScanRevert => "ScanRevert",
            MessageId::ScanSummary => "ScanSummary",
        }
    }
}

const EN_MESSAGES: [(MessageId, &str); 7] = [
    (MessageId::NoPermission, "You don't have permission to use this command."),
    (MessageId::HelpHeader, "====== Player Commands ======"),
    (MessageId::HelpReload, "/be reload => Reloads the config."),
    (MessageId::Reloading, "Reloading power profiles..."),
    (MessageId::ScanApply, "Finding and adjusting all {0}. (This may take some time)"),
    (MessageId::ScanRevert, "Finding and reverting all {0}. (This may take some time)"),
    (MessageId::ScanSummary, "{0}: {1} of {2} updated."),
];

/// Message templates for a single locale. Placeholders are `{0}`, `{1}`, ...
#[derive(Resource, Debug, Clone)]
pub struct Lang(pub HashMap<String, String>);

impl Default for Lang {
    fn default() -> Self {
        Self::english()
    }
}

impl Lang {
    pub fn english() -> Self {
        Lang(
            EN_MESSAGES
                .iter()
                .map(|(id, template)| (id.key().to_string(), template.to_string()))
                .collect(),
        )
    }

    /// Falls back to the key itself when a template is missing.
    pub fn get(&self, id: MessageId) -> &str {
        self.0.get(id.key()).map(String::as_str).unwrap_or(id.key())
    }

    pub fn format(&self, id: MessageId, args: &[&dyn std::fmt::Display]) -> String {
        let mut message = self.get(id).to_string();
        for (i, arg) in args.iter().enumerate() {
            message = message.replace(&format!("{{{}}}", i), &arg.to_string());
        }
        message
    }
}
