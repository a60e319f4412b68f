//! # Showcase configuration — `showcase.toml`
//!
//! Construction-time settings for the three widgets. The launchers read this
//! file (the web build embeds it, the desktop build loads it from disk) and
//! hand each section to the matching component.
//!
//! ## Structure
//!
//! ```toml
//! [counter]
//! initial_value = 0
//! step = 1
//!
//! [contact]
//! submit_delay_ms = 2000   # simulated submission latency
//!
//! [directory]
//! endpoint = "https://jsonplaceholder.typicode.com/users"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ShowcaseConfig`] | Top-level config with TOML parsing, an endpoint override and the canonical filename. |
//! | [`CounterConfig`] | Starting value and step of the counter widget. |
//! | [`ContactConfig`] | Latency of the simulated contact submission. |
//! | [`DirectoryConfig`] | Users endpoint queried by the directory widget. |
//!
//! Every field has a default, so a missing or empty file is equivalent to
//! [`ShowcaseConfig::default`].

use serde::{Deserialize, Serialize};

/// Public endpoint serving the demo user batch.
pub const DEFAULT_USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Top-level configuration stored in `showcase.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowcaseConfig {
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

/// Counter widget settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CounterConfig {
    #[serde(default)]
    pub initial_value: i64,
    #[serde(default = "default_step")]
    pub step: i64,
}

fn default_step() -> i64 {
    1
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            initial_value: 0,
            step: default_step(),
        }
    }
}

/// Contact form settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Milliseconds the simulated submission waits before succeeding.
    #[serde(default = "default_submit_delay")]
    pub submit_delay_ms: u64,
}

fn default_submit_delay() -> u64 {
    2000
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay(),
        }
    }
}

/// User directory settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_USERS_ENDPOINT.to_string()
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl ShowcaseConfig {
    /// Builder method to point the directory at another users endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.directory.endpoint = endpoint.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "showcase.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
