//! Configuration management for tabrepl.
//!
//! Settings come from environment variables and are then overridden by
//! command-line flags. Recognized variables:
//!
//! - `TABREPL_MAX_WIDTH`: maximum wrap width for text output (default: 100)
//! - `TABREPL_FORMAT`: `text`, `html` or `json` (default: text)
//! - `TABREPL_VERBOSE`: `1`/`true` to start sessions in verbose mode
//! - `NO_COLOR`: standard switch to disable colors (any value)
//! - `TABREPL_COLOR`: `0`/`false` to disable colors

use crate::output::{DEFAULT_MAX_CONTENT_WIDTH, OutputConfig, OutputFormat};
use std::env;

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Text formatting settings.
    pub output: OutputConfig,
    /// Format lines are rendered in.
    pub format: OutputFormat,
    /// Whether sessions start in verbose mode.
    pub verbose: bool,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value if set.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_width = match lookup("TABREPL_MAX_WIDTH") {
            Some(s) if !s.is_empty() => match s.parse() {
                Ok(width) if width > 0 => width,
                _ => {
                    tracing::warn!(
                        env_var = "TABREPL_MAX_WIDTH",
                        value = %s,
                        default = DEFAULT_MAX_CONTENT_WIDTH,
                        "Invalid value, using default"
                    );
                    DEFAULT_MAX_CONTENT_WIDTH
                }
            },
            _ => DEFAULT_MAX_CONTENT_WIDTH,
        };

        let format = match lookup("TABREPL_FORMAT") {
            Some(s) if !s.is_empty() => OutputFormat::from_name(&s).unwrap_or_else(|| {
                tracing::warn!(
                    env_var = "TABREPL_FORMAT",
                    value = %s,
                    "Invalid value (expected 'text', 'html' or 'json'), using default"
                );
                OutputFormat::default()
            }),
            _ => OutputFormat::default(),
        };

        let verbose = match lookup("TABREPL_VERBOSE") {
            Some(v) if v == "1" || v.eq_ignore_ascii_case("true") => true,
            Some(v) if v == "0" || v.eq_ignore_ascii_case("false") || v.is_empty() => false,
            Some(v) => {
                tracing::warn!(
                    env_var = "TABREPL_VERBOSE",
                    value = %v,
                    "Invalid value (expected '1', 'true', '0', or 'false'), using default"
                );
                false
            }
            None => false,
        };

        // Respect NO_COLOR standard (https://no-color.org/)
        let use_colors = lookup("NO_COLOR").is_none()
            && lookup("TABREPL_COLOR")
                .is_none_or(|v| v != "0" && !v.eq_ignore_ascii_case("false"));

        Self {
            output: OutputConfig::new(max_width, use_colors),
            format,
            verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_with(&[]);
        assert_eq!(config, Config::default());
        assert!(config.output.use_colors);
        assert_eq!(config.output.max_width, DEFAULT_MAX_CONTENT_WIDTH);
    }

    #[test]
    fn test_all_variables() {
        let config = config_with(&[
            ("TABREPL_MAX_WIDTH", "60"),
            ("TABREPL_FORMAT", "html"),
            ("TABREPL_VERBOSE", "true"),
            ("TABREPL_COLOR", "0"),
        ]);
        assert_eq!(config.output, OutputConfig::new(60, false));
        assert_eq!(config.format, OutputFormat::Html);
        assert!(config.verbose);
    }

    #[test]
    fn test_no_color_wins() {
        let config = config_with(&[("NO_COLOR", ""), ("TABREPL_COLOR", "1")]);
        assert!(!config.output.use_colors);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_with(&[
            ("TABREPL_MAX_WIDTH", "wide"),
            ("TABREPL_FORMAT", "xml"),
            ("TABREPL_VERBOSE", "sometimes"),
        ]);
        assert_eq!(config.output.max_width, DEFAULT_MAX_CONTENT_WIDTH);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.verbose);
    }

    #[test]
    fn test_zero_width_falls_back() {
        let config = config_with(&[("TABREPL_MAX_WIDTH", "0")]);
        assert_eq!(config.output.max_width, DEFAULT_MAX_CONTENT_WIDTH);
    }
}
