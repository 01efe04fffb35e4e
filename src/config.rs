use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

pub struct Config {
  pub tick_rate_ms: u64,
  pub ignore_patterns: Vec<String>,
}

#[derive(Deserialize, Default)]
struct TomlConfig {
  general: Option<GeneralConfig>,
  ignore: Option<IgnoreConfig>,
}

#[derive(Deserialize, Default)]
struct GeneralConfig {
  tick_rate_ms: Option<u64>,
}

#[derive(Deserialize, Default)]
struct IgnoreConfig {
  patterns: Option<Vec<String>>,
}

impl Default for Config {
  fn default() -> Self {
    let mut config = Config::empty();
    let mut errors = Vec::new();
    config.apply_toml_str(Config::default_toml(), &mut errors);
    config
  }
}

impl Config {
  fn empty() -> Self {
    Config {
      tick_rate_ms: 100,
      ignore_patterns: Vec::new(),
    }
  }

  /// Loads `~/.config/fsel/config.toml` over the defaults. Parse problems are
  /// collected for the status bar, never fatal.
  pub fn load() -> (Self, Vec<String>) {
    let mut config = Config::default();
    let mut errors = Vec::new();

    if let Ok(path) = Config::config_path()
      && path.exists()
    {
      match std::fs::read_to_string(&path) {
        Ok(s) => config.apply_toml_str(&s, &mut errors),
        Err(e) => errors.push(format!("failed to read {}: {e}", path.display())),
      }
    }

    (config, errors)
  }

  pub fn config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir()
      .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    Ok(dir.join("fsel").join("config.toml"))
  }

  fn apply_toml_str(&mut self, s: &str, errors: &mut Vec<String>) {
    let toml_config: TomlConfig = match toml::from_str(s) {
      Ok(c) => c,
      Err(e) => {
        errors.push(format!("failed to parse config.toml: {e}"));
        return;
      }
    };

    if let Some(general) = toml_config.general
      && let Some(tick) = general.tick_rate_ms
    {
      self.tick_rate_ms = tick;
    }

    if let Some(ignore) = toml_config.ignore
      && let Some(patterns) = ignore.patterns
    {
      self.ignore_patterns = patterns;
    }
  }

  pub fn default_toml() -> &'static str {
    r#"[general]
tick_rate_ms = 100    # event loop tick rate in ms

[ignore]
# Extra directory-name globs to skip during the scan, on top of the
# built-in set (.git, node_modules, target, __pycache__, ...).
patterns = []
"#
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.tick_rate_ms, 100);
    assert!(config.ignore_patterns.is_empty());
  }

  #[test]
  fn test_default_toml_parses_cleanly() {
    let mut config = Config::empty();
    let mut errors = Vec::new();
    config.apply_toml_str(Config::default_toml(), &mut errors);
    assert!(errors.is_empty(), "{errors:?}");
  }

  #[test]
  fn test_apply_overrides() {
    let mut config = Config::default();
    let mut errors = Vec::new();
    config.apply_toml_str(
      r#"
[general]
tick_rate_ms = 50

[ignore]
patterns = ["build", "*.egg-info"]
"#,
      &mut errors,
    );
    assert!(errors.is_empty());
    assert_eq!(config.tick_rate_ms, 50);
    assert_eq!(config.ignore_patterns, vec!["build", "*.egg-info"]);
  }

  #[test]
  fn test_partial_config_keeps_defaults() {
    let mut config = Config::default();
    let mut errors = Vec::new();
    config.apply_toml_str("[ignore]\npatterns = [\"dist\"]\n", &mut errors);
    assert!(errors.is_empty());
    assert_eq!(config.tick_rate_ms, 100);
    assert_eq!(config.ignore_patterns, vec!["dist"]);
  }

  #[test]
  fn test_malformed_toml_collects_error() {
    let mut config = Config::default();
    let mut errors = Vec::new();
    config.apply_toml_str("not = [valid", &mut errors);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("failed to parse"));
    // previous values survive
    assert_eq!(config.tick_rate_ms, 100);
  }
}
