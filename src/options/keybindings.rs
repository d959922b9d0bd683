use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Action-to-key bindings for the demo viewer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeybindingOptions {
    /// Maps action name to key string (e.g. "reset_view" -> "KeyR").
    /// Key strings use the `winit::keyboard::KeyCode` debug format.
    pub bindings: HashMap<String, String>,
    /// Reverse lookup cache (key string -> action name). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("reset_view".to_owned(), "KeyR".to_owned()),
            ("quit".to_owned(), "Escape".to_owned()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key -> action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), action.clone());
        }
    }

    /// Look up the action name for a given key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.key_to_action.get(key).map(String::as_str)
    }
}
