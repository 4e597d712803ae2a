use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::camera::MovementDirection;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping movement directions to key codes.
pub struct KeybindingOptions {
    /// Maps direction → key string (e.g. `Forward` → `"KeyW"`).
    pub bindings: HashMap<MovementDirection, String>,
    /// Reverse lookup cache (key string → direction). Rebuilt on load.
    #[serde(skip)]
    key_to_direction: HashMap<String, MovementDirection>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (MovementDirection::Forward, "KeyW".into()),
            (MovementDirection::Backward, "KeyS".into()),
            (MovementDirection::StrafeLeft, "KeyA".into()),
            (MovementDirection::StrafeRight, "KeyD".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_direction: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → direction).
    ///
    /// Must be called after deserializing, since the cache is `serde(skip)`.
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_direction.clear();
        for (direction, key) in &self.bindings {
            let _ = self.key_to_direction.insert(key.clone(), *direction);
        }
    }

    /// Look up the movement direction for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<MovementDirection> {
        self.key_to_direction.get(key).copied()
    }
}
