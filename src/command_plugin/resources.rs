use bevy::prelude::*;
use std::collections::{HashMap, HashSet};

/// Permission grants keyed by user id.
#[derive(Resource, Debug, Default, Clone)]
pub struct Permissions(pub HashMap<String, HashSet<String>>);

impl Permissions {
    pub fn grant(&mut self, user_id: &str, permission: &str) {
        self.0
            .entry(user_id.to_string())
            .or_default()
            .insert(permission.to_string());
    }

    pub fn revoke(&mut self, user_id: &str, permission: &str) {
        if let Some(granted) = self.0.get_mut(user_id) {
            granted.remove(permission);
        }
    }

    pub fn user_has_permission(&self, user_id: &str, permission: &str) -> bool {
        self.0
            .get(user_id)
            .is_some_and(|granted| granted.contains(permission))
    }
}
