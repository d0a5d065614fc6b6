//! Exit-time behaviour.

use serde::Deserialize;

/// `[shutdown]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ShutdownConfig {
    /// Ask on the terminal whether to run a final auction scan.
    #[serde(default = "default_prompt")]
    pub prompt: bool,
    /// Lookahead for the final scan when not prompting. Unset skips it.
    #[serde(default)]
    pub exit_scan_hours: Option<u32>,
}

const fn default_prompt() -> bool {
    true
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            exit_scan_hours: None,
        }
    }
}
