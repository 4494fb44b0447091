//! Runner configuration.
//!
//! Defaults follow the terminal: colors on stdout are on when stdout is a
//! terminal, the tty mirror is on when stdout is redirected. The mirror keeps
//! its own color switch, so piped output still shows up live and colored on
//! the controlling terminal. A YAML file and a handful of environment
//! variables can override them.

use crate::errors::{Result, SpektralError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Groups with at least this many cases hide their individual pass messages.
pub const DEFAULT_SUPPRESS_THRESHOLD: usize = 50;
const DEFAULT_TTY_PATH: &str = "/dev/tty";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    pub suppress_threshold: usize,
    /// Colors on the primary stream (stdout).
    pub use_colors: bool,
    pub mirror_tty: bool,
    /// Colors on the tty mirror. Independent of `use_colors`, which is off
    /// whenever stdout is redirected.
    pub mirror_colors: bool,
    pub tty_path: PathBuf,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        let interactive = atty::is(atty::Stream::Stdout);
        Self {
            suppress_threshold: DEFAULT_SUPPRESS_THRESHOLD,
            use_colors: interactive,
            mirror_tty: !interactive,
            mirror_colors: true,
            tty_path: PathBuf::from(DEFAULT_TTY_PATH),
        }
    }
}

impl RunnerConfig {
    /// A config for programmatic capture: no colors, no tty mirror.
    pub fn plain() -> Self {
        Self {
            use_colors: false,
            mirror_tty: false,
            mirror_colors: false,
            ..Self::default()
        }
    }

    pub fn from_yaml_str(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| SpektralError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&source)
    }

    /// Turns colors off on both streams.
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self.mirror_colors = false;
        self
    }

    /// Applies `NO_COLOR`, `SPEKTRAL_NO_TTY` and `SPEKTRAL_SUPPRESS_THRESHOLD`.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            self = self.without_colors();
        }
        if lookup("SPEKTRAL_NO_TTY").is_some_and(|v| !v.is_empty()) {
            self.mirror_tty = false;
        }
        if let Some(raw) = lookup("SPEKTRAL_SUPPRESS_THRESHOLD") {
            match raw.trim().parse() {
                Ok(threshold) => self.suppress_threshold = threshold,
                Err(_) => tracing::warn!(value = %raw, "ignoring invalid SPEKTRAL_SUPPRESS_THRESHOLD"),
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = RunnerConfig::from_yaml_str("suppress_threshold: 10\n").unwrap();
        assert_eq!(config.suppress_threshold, 10);
        assert_eq!(config.tty_path, PathBuf::from("/dev/tty"));
        assert!(config.mirror_colors);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = RunnerConfig::from_yaml_str("threshold: 10\n").unwrap_err();
        assert!(matches!(err, SpektralError::ConfigParse(_)));
    }

    #[test]
    fn load_reports_missing_file_path() {
        let err = RunnerConfig::load(Path::new("does/not/exist.yaml")).unwrap_err();
        match err {
            SpektralError::Config { path, .. } => {
                assert_eq!(path, PathBuf::from("does/not/exist.yaml"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn env_overrides_disable_color_and_tty() {
        let vars: HashMap<&str, &str> = [
            ("NO_COLOR", "1"),
            ("SPEKTRAL_NO_TTY", "yes"),
            ("SPEKTRAL_SUPPRESS_THRESHOLD", "5"),
        ]
        .into_iter()
        .collect();
        let base = RunnerConfig {
            use_colors: true,
            mirror_tty: true,
            ..RunnerConfig::default()
        };
        let config = base.with_overrides(|k| vars.get(k).map(|v| v.to_string()));
        assert!(!config.use_colors);
        assert!(!config.mirror_colors);
        assert!(!config.mirror_tty);
        assert_eq!(config.suppress_threshold, 5);
    }

    #[test]
    fn mirror_colors_do_not_follow_stdout() {
        let config = RunnerConfig {
            use_colors: false,
            mirror_tty: true,
            ..RunnerConfig::default()
        };
        assert!(config.mirror_colors);
        assert!(!config.clone().without_colors().mirror_colors);
    }

    #[test]
    fn invalid_threshold_override_is_ignored() {
        let config = RunnerConfig::plain().with_overrides(|k| {
            (k == "SPEKTRAL_SUPPRESS_THRESHOLD").then(|| "lots".to_string())
        });
        assert_eq!(config.suppress_threshold, DEFAULT_SUPPRESS_THRESHOLD);
    }
}
