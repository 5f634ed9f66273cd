//! Writer and display configuration

use serde::{Deserialize, Serialize};

/// Where events are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WriterConfig {
    #[default]
    Stderr,
    Stdout,
}

/// Display configuration
///
/// Independent toggles that map directly to flags and config keys.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show timestamps
    pub time: bool,
    /// Show source location (`file:line`)
    pub source: bool,
    /// Show target module
    pub target: bool,
    /// Show thread IDs
    pub thread_ids: bool,
    /// Use ANSI colors
    pub colors: bool,
    /// Show span list in JSON
    pub span_list: bool,
    /// Flatten JSON events
    pub flatten: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time: true,
            source: cfg!(debug_assertions),
            target: true,
            thread_ids: false,
            colors: std::io::IsTerminal::is_terminal(&std::io::stderr()),
            span_list: true,
            flatten: true,
        }
    }
}

impl DisplayConfig {
    /// Applies `VERITY_LOG_TIME`, `VERITY_LOG_SOURCE` and `VERITY_LOG_COLORS`.
    pub(super) fn apply_vars(&mut self, var: &impl Fn(&str) -> Option<String>) {
        let flag = |name: &str| var(name).map(|v| v != "0" && !v.eq_ignore_ascii_case("false"));
        if let Some(time) = flag("VERITY_LOG_TIME") {
            self.time = time;
        }
        if let Some(source) = flag("VERITY_LOG_SOURCE") {
            self.source = source;
        }
        if let Some(colors) = flag("VERITY_LOG_COLORS") {
            self.colors = colors;
        }
    }
}
