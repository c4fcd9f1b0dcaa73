//! # Round-Robin Scheduler Configuration

use core::fmt;
use rrsim_execution::{ExecResult, InputError, Tick};

/// How the engine advances the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stepping {
    /// One tick at a time, rescanning arrivals after every tick
    #[default]
    PerTick,
    /// Jump straight to the next event (slice end or next arrival)
    NextEvent,
}

impl Stepping {
    /// Parse from a config value
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "per-tick" | "per_tick" | "tick" => Some(Self::PerTick),
            "next-event" | "next_event" | "event" => Some(Self::NextEvent),
            _ => None,
        }
    }

    /// Config value spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PerTick => "per-tick",
            Self::NextEvent => "next-event",
        }
    }
}

/// Configuration for the round-robin scheduler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRobinConfig {
    /// Maximum ticks a process runs before preemption
    pub quantum: Tick,
    /// Clock stepping strategy
    pub stepping: Stepping,
    /// Abort once the clock passes this tick
    pub tick_limit: Option<Tick>,
    /// Keep the execution timeline
    pub record_timeline: bool,
}

impl RoundRobinConfig {
    /// Default quantum: 2 ticks
    pub const DEFAULT_QUANTUM: Tick = 2;

    /// Create default configuration
    pub fn new() -> Self {
        Self {
            quantum: Self::DEFAULT_QUANTUM,
            stepping: Stepping::PerTick,
            tick_limit: None,
            record_timeline: true,
        }
    }

    /// Create a configuration with the given quantum
    pub fn with_quantum(quantum: Tick) -> Self {
        Self {
            quantum,
            ..Self::new()
        }
    }

    /// Create an event-driven configuration
    pub fn event_driven(quantum: Tick) -> Self {
        Self {
            quantum,
            stepping: Stepping::NextEvent,
            ..Self::new()
        }
    }

    /// Check the configuration before a run
    pub fn validate(&self) -> ExecResult<()> {
        if self.quantum == 0 {
            return Err(InputError::NonPositiveQuantum.into());
        }
        Ok(())
    }

    /// Parse `key = value` lines
    ///
    /// Blank lines and lines starting with `#` or `;` are ignored. Unset
    /// keys keep their defaults.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut config = Self::new();

        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            let (key, value) = parse_key_value(line)
                .ok_or(ConfigError::MalformedLine { line: index + 1 })?;
            config.apply_setting(index + 1, key, value)?;
        }

        Ok(config)
    }

    /// Apply a setting
    fn apply_setting(&mut self, line: usize, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = ConfigError::InvalidValue { line };
        match key {
            "quantum" | "time_slice" => {
                self.quantum = value.parse().map_err(|_| invalid)?;
            }
            "stepping" => {
                self.stepping = Stepping::from_str(value).ok_or(invalid)?;
            }
            "tick_limit" | "tick-limit" => {
                self.tick_limit = match value {
                    "none" | "off" => None,
                    v => Some(v.parse().map_err(|_| invalid)?),
                };
            }
            "record_timeline" | "record-timeline" => {
                self.record_timeline = parse_bool(value).ok_or(invalid)?;
            }
            _ => return Err(ConfigError::UnknownKey { line }),
        }
        Ok(())
    }
}

impl Default for RoundRobinConfig {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::const_assert!(RoundRobinConfig::DEFAULT_QUANTUM > 0);

/// Parse key-value pair
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.splitn(2, '=');
    let key = parts.next()?.trim();
    let value = parts.next()?.trim();

    // Remove quotes
    let value = value.trim_matches('"').trim_matches('\'');

    Some((key, value))
}

/// Parse bool
fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Line is not `key = value`
    MalformedLine {
        /// Offending line (1-based)
        line: usize,
    },
    /// Key is not recognised
    UnknownKey {
        /// Offending line (1-based)
        line: usize,
    },
    /// Value does not parse for its key
    InvalidValue {
        /// Offending line (1-based)
        line: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLine { line } => write!(f, "Line {}: expected key = value", line),
            Self::UnknownKey { line } => write!(f, "Line {}: unknown key", line),
            Self::InvalidValue { line } => write!(f, "Line {}: invalid value", line),
        }
    }
}
