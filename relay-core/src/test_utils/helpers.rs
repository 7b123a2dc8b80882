// File: relay-core/src/test_utils/helpers.rs

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use relay_common::models::Tristate;
use relay_common::text::Component;
use relay_common::traits::CommandSource;

/// A `CommandSource` that remembers everything sent to it and answers
/// permission checks from a fixed table.
#[derive(Debug, Default)]
pub struct RecordingSource {
    permissions: HashMap<String, Tristate>,
    fallback: Tristate,
    messages: Mutex<Vec<Component>>,
}

impl RecordingSource {
    /// Every node `Undefined`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every node `True`, like the server console.
    pub fn allow_all() -> Self {
        Self {
            fallback: Tristate::True,
            ..Self::default()
        }
    }

    pub fn with_permission(mut self, node: &str, value: Tristate) -> Self {
        self.permissions.insert(node.to_string(), value);
        self
    }

    pub fn messages(&self) -> Vec<Component> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn plain_messages(&self) -> Vec<String> {
        self.messages().iter().map(Component::plain_text).collect()
    }
}

impl CommandSource for RecordingSource {
    fn permission_value(&self, node: &str) -> Tristate {
        self.permissions.get(node).copied().unwrap_or(self.fallback)
    }

    fn send_message(&self, message: Component) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }
}
