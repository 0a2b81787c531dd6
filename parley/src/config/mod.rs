//! Configuration system for the `Parley` client.
//!
//! Supports layered configuration with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/parley/config.toml`)
//! 4. Compiled defaults
//!
//! Missing config file is not an error (defaults are used). An explicit
//! `--config` path that doesn't exist is an error.

use std::path::PathBuf;
use std::time::Duration;

use parley_core::composer::DEFAULT_EMOJI;
use parley_core::contact::DEFAULT_ROSTER;
use parley_core::message::DEFAULT_TIMESTAMP_FORMAT;
use parley_core::session::{DEFAULT_LOCAL_NAME, HistoryScope, SessionConfig};
use parley_core::typing::DEFAULT_QUIET_PERIOD;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// The configured emoji list has no glyphs.
    #[error("emoji list is empty")]
    EmptyPalette,

    /// The UI tick rate must be at least one millisecond.
    #[error("tick_rate_ms must be greater than zero")]
    ZeroTickRate,
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

/// Top-level TOML config file structure.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    chat: ChatFileConfig,
    ui: UiFileConfig,
}

/// `[chat]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ChatFileConfig {
    roster: Option<Vec<String>>,
    local_name: Option<String>,
    history_scope: Option<HistoryScope>,
    emoji: Option<Vec<String>>,
}

/// `[ui]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct UiFileConfig {
    tick_rate_ms: Option<u64>,
    typing_quiet_ms: Option<u64>,
    timestamp_format: Option<String>,
    narrow_width: Option<u16>,
}

// ---------------------------------------------------------------------------
// Resolved configuration (concrete types, all fields populated)
// ---------------------------------------------------------------------------

/// Fully resolved client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    // -- Chat --
    /// Contact display names, in roster order.
    pub roster: Vec<String>,
    /// Display name of the local user.
    pub local_name: String,
    /// Whether contacts have separate timelines.
    pub history_scope: HistoryScope,
    /// Glyphs offered by the emoji picker.
    pub emoji: Vec<String>,

    // -- UI --
    /// Interval at which the event loop ticks session timers.
    pub tick_rate: Duration,
    /// Quiet period before the typing indicator clears.
    pub typing_quiet_period: Duration,
    /// Timestamp display format string (chrono).
    pub timestamp_format: String,
    /// Terminal widths below this many columns use the single-panel layout.
    pub narrow_width: u16,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            roster: DEFAULT_ROSTER.iter().map(ToString::to_string).collect(),
            local_name: DEFAULT_LOCAL_NAME.to_string(),
            history_scope: HistoryScope::PerContact,
            emoji: DEFAULT_EMOJI.iter().map(ToString::to_string).collect(),
            tick_rate: Duration::from_millis(50),
            typing_quiet_period: DEFAULT_QUIET_PERIOD,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            narrow_width: 80,
        }
    }
}

impl ClientConfig {
    /// Load configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// CLI args and env vars are parsed via `clap`. If `--config` is given
    /// and the file does not exist, returns an error. If no `--config` is
    /// given, the default path (`~/.config/parley/config.toml`) is tried
    /// and silently ignored if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config file cannot be read or parsed,
    /// or if it configures an empty emoji list.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Self::resolve(cli, &file)
    }

    /// Resolve a `ClientConfig` from CLI args and a parsed config file.
    ///
    /// Priority: CLI > file > default. This is separated from `load()` to
    /// enable unit testing without CLI parsing.
    fn resolve(cli: &CliArgs, file: &ConfigFile) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let emoji = file.chat.emoji.clone().unwrap_or(defaults.emoji);
        if emoji.iter().all(|g| g.trim().is_empty()) {
            return Err(ConfigError::EmptyPalette);
        }

        if file.ui.tick_rate_ms == Some(0) {
            return Err(ConfigError::ZeroTickRate);
        }

        let history_scope = if cli.shared_history {
            HistoryScope::Shared
        } else {
            file.chat.history_scope.unwrap_or(defaults.history_scope)
        };

        Ok(Self {
            roster: file.chat.roster.clone().unwrap_or(defaults.roster),
            local_name: file
                .chat
                .local_name
                .clone()
                .unwrap_or(defaults.local_name),
            history_scope,
            emoji,
            tick_rate: file
                .ui
                .tick_rate_ms
                .map_or(defaults.tick_rate, Duration::from_millis),
            typing_quiet_period: file
                .ui
                .typing_quiet_ms
                .map_or(defaults.typing_quiet_period, Duration::from_millis),
            timestamp_format: cli
                .timestamp_format
                .clone()
                .or_else(|| file.ui.timestamp_format.clone())
                .unwrap_or(defaults.timestamp_format),
            narrow_width: cli
                .narrow_width
                .or(file.ui.narrow_width)
                .unwrap_or(defaults.narrow_width),
        })
    }

    /// Build the [`SessionConfig`] for the conversation state machine.
    #[must_use]
    pub fn to_session_config(&self) -> SessionConfig {
        SessionConfig {
            roster: self.roster.clone(),
            emoji: self
                .emoji
                .iter()
                .filter(|g| !g.trim().is_empty())
                .cloned()
                .collect(),
            typing_quiet_period: self.typing_quiet_period,
            timestamp_format: self.timestamp_format.clone(),
            local_name: self.local_name.clone(),
            history_scope: self.history_scope,
        }
    }
}

/// CLI arguments parsed by clap.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Terminal chat client")]
pub struct CliArgs {
    /// Path to config file (default: `~/.config/parley/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Timestamp display format (chrono format string).
    #[arg(long)]
    pub timestamp_format: Option<String>,

    /// Width in columns below which only one panel is shown.
    #[arg(long)]
    pub narrow_width: Option<u16>,

    /// Share one message history between all contacts.
    #[arg(long)]
    pub shared_history: bool,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", env = "PARLEY_LOG")]
    pub log_level: String,

    /// Path to log file (default: `$TMPDIR/parley.log`).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Load and parse a TOML config file.
///
/// If `explicit_path` is `Some`, the file must exist (error if not).
/// If `explicit_path` is `None`, the default path is tried and missing file
/// is treated as empty config.
fn load_config_file(explicit_path: Option<&std::path::Path>) -> Result<ConfigFile, ConfigError> {
    let path = if let Some(p) = explicit_path {
        let contents = std::fs::read_to_string(p).map_err(|e| ConfigError::ReadFile {
            path: p.to_path_buf(),
            source: e,
        })?;
        return Ok(toml::from_str(&contents)?);
    } else {
        let Some(config_dir) = dirs::config_dir() else {
            return Ok(ConfigFile::default());
        };
        config_dir.join("parley").join("config.toml")
    };

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(e) => Err(ConfigError::ReadFile { path, source: e }),
    }
}
