//! Board configuration.

use crate::banner::DEFAULT_HIDE_DELAY_MS;

/// Configuration for the activity board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Prefix for API paths (default: empty, same origin)
    pub api_base: String,
    /// Delay before the message banner hides again (default: 5000)
    pub message_hide_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            message_hide_ms: DEFAULT_HIDE_DELAY_MS,
        }
    }
}

impl BoardConfig {
    /// Use a different API origin, e.g. `http://localhost:8000`.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}
