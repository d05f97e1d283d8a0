//! Transition configuration
//!
//! Loads transition settings from `transition.toml`, with environment
//! variables taking precedence over file values.
//!
//! ```toml
//! [classes]
//! names = "fade"
//!
//! [timing]
//! enter_ms = 300
//! exit_ms = 150
//!
//! [behavior]
//! appear = true
//! initially_in = true
//! ```
//!
//! Explicit class names use a table instead of a prefix:
//!
//! ```toml
//! [classes.names]
//! enter = "slide-in"
//! enterActive = "slide-in-running"
//! exitDone = "gone"
//! ```

use rune_transition::{ClassNames, ClassNamesError, TransitionProps, TransitionTimeout};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default configuration file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "transition.toml";

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid class names: {0}")]
    InvalidClassNames(#[from] ClassNamesError),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TransitionConfig {
    /// Class-name settings
    pub classes: ClassesConfig,
    /// Sequence completion settings
    pub timing: TimingConfig,
    /// Mount-time behavior
    pub behavior: BehaviorConfig,
    /// Demo driver settings
    pub demo: DemoConfig,
}

/// Class-name configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ClassesConfig {
    /// Prefix string or explicit mapping. Unset means callbacks only.
    pub names: Option<ClassNames>,
}

/// Timing configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    /// Enter sequence duration in milliseconds
    pub enter_ms: u64,
    /// Exit sequence duration in milliseconds
    pub exit_ms: u64,
    /// Appear sequence duration in milliseconds (defaults to `enter_ms`)
    pub appear_ms: Option<u64>,
    /// Ignore durations and wait for a transition-end signal instead
    pub wait_for_end_signal: bool,
}

/// Mount-time behavior
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Run the appear sequence when mounted already present
    pub appear: bool,
    /// Presence flag at mount time
    pub initially_in: bool,
}

/// Demo driver configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Number of presence flips to perform
    pub toggles: u32,
    /// Simulated frame time in milliseconds
    pub tick_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            enter_ms: 300,
            exit_ms: 300,
            appear_ms: None,
            wait_for_end_signal: false,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            toggles: 2,
            tick_ms: 16,
        }
    }
}

impl TransitionConfig {
    /// Load and validate configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `transition.toml` in the current directory,
    /// or return the default configuration if it is missing or invalid
    pub fn load_or_default() -> Self {
        Self::load_from_file(DEFAULT_CONFIG_FILE).unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        // Class names
        if let Ok(prefix) = std::env::var("TRANSITION_CLASS_PREFIX") {
            self.classes.names = Some(ClassNames::Prefix(prefix));
        }

        // Behavior
        if let Ok(val) = std::env::var("TRANSITION_APPEAR") {
            self.behavior.appear = parse_flag(&val);
        }
        if let Ok(val) = std::env::var("TRANSITION_INITIALLY_IN") {
            self.behavior.initially_in = parse_flag(&val);
        }

        // Timing
        if let Ok(val) = std::env::var("TRANSITION_ENTER_MS") {
            if let Ok(ms) = val.parse::<u64>() {
                self.timing.enter_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("TRANSITION_EXIT_MS") {
            if let Ok(ms) = val.parse::<u64>() {
                self.timing.exit_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("TRANSITION_APPEAR_MS") {
            if let Ok(ms) = val.parse::<u64>() {
                self.timing.appear_ms = Some(ms);
            }
        }
        if let Ok(val) = std::env::var("TRANSITION_WAIT_FOR_END") {
            self.timing.wait_for_end_signal = parse_flag(&val);
        }

        // Demo
        if let Ok(val) = std::env::var("TRANSITION_DEMO_TOGGLES") {
            if let Ok(toggles) = val.parse::<u32>() {
                self.demo.toggles = toggles;
            }
        }
        if let Ok(val) = std::env::var("TRANSITION_DEMO_TICK_MS") {
            if let Ok(tick) = val.parse::<u64>() {
                self.demo.tick_ms = tick;
            }
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from transition.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }

    /// Like [`load`](Self::load), but only a missing `transition.toml` falls
    /// back to defaults. Unreadable, malformed or invalid files are errors.
    pub fn try_load() -> Result<Self, ConfigError> {
        Self::try_load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load `path` (defaults if it does not exist), apply environment
    /// overrides and validate the result.
    pub fn try_load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut config = match Self::load_from_file(path) {
            Ok(config) => config,
            Err(ConfigError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Self::default()
            }
            Err(err) => return Err(err),
        };
        config.merge_with_env();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(names) = &self.classes.names {
            names.validate()?;
        }
        Ok(())
    }

    /// Completion policy handed to the phase engine.
    pub fn timeout(&self) -> TransitionTimeout {
        if self.timing.wait_for_end_signal {
            return TransitionTimeout::EndSignal;
        }
        TransitionTimeout::Fixed {
            enter: Duration::from_millis(self.timing.enter_ms),
            exit: Duration::from_millis(self.timing.exit_ms),
            appear: self.timing.appear_ms.map(Duration::from_millis),
        }
    }

    /// Mount-time props without callbacks.
    pub fn props<N>(&self) -> TransitionProps<N> {
        let mut props = TransitionProps::new(self.behavior.initially_in)
            .appear(self.behavior.appear)
            .timeout(self.timeout());
        props.class_names = self.classes.names.clone();
        props
    }
}

fn parse_flag(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}
