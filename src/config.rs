//! Configuration loading and parsing for `launchpad.toml` files.
//!
//! The file is optional. It can widen the set of ignored directories and
//! override parts of the detected deployment plan.
use log::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::{
    detection::types::{
        DEFAULT_HEALTH_EXPECT, DEFAULT_HEALTH_PATH, DEFAULT_HEALTH_TIMEOUT,
        Detection, Healthcheck,
    },
    result::{LaunchpadError, Result},
};

/// Default configuration filename, looked up in the project root.
pub const DEFAULT_CONFIG_FILE: &str = "launchpad.toml";

/// Tree scanning settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)] // Use default for missing fields
pub struct DetectConfig {
    /// Extra directory names to skip while scanning, on top of the built-in
    /// list (node_modules, target, .git, ...).
    pub ignore_dirs: Vec<String>,
}

/// Healthcheck replacing the detected one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct HealthOverride {
    /// HTTP path to probe (default: "/")
    pub path: String,
    /// Expected HTTP status (default: 200)
    pub expect: u16,
    /// Seconds to wait for the app to become healthy (default: 30)
    pub timeout_seconds: u32,
}

impl Default for HealthOverride {
    fn default() -> Self {
        Self {
            path: DEFAULT_HEALTH_PATH.to_string(),
            expect: DEFAULT_HEALTH_EXPECT,
            timeout_seconds: DEFAULT_HEALTH_TIMEOUT,
        }
    }
}

impl From<&HealthOverride> for Healthcheck {
    fn from(health: &HealthOverride) -> Self {
        Healthcheck::new(&health.path, health.expect, health.timeout_seconds)
    }
}

/// User supplied replacements for parts of the detected plan. Any field
/// left out keeps the detected value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Overrides {
    /// Build commands, run in order
    pub build: Option<Vec<String>>,
    /// Run commands
    pub run: Option<Vec<String>>,
    /// Environment variable names the app expects
    pub env: Option<Vec<String>>,
    /// Healthcheck settings
    pub health: Option<HealthOverride>,
}

impl Overrides {
    pub fn is_empty(&self) -> bool {
        self.build.is_none()
            && self.run.is_none()
            && self.env.is_none()
            && self.health.is_none()
    }

    /// Replace the overridden parts of `detection`. The names of the
    /// replaced fields are recorded under the `overridden` meta key.
    pub fn apply(&self, mut detection: Detection) -> Detection {
        if self.is_empty() {
            return detection;
        }

        let mut overridden = vec![];

        if let Some(build) = &self.build {
            detection.build = build.clone();
            overridden.push("build");
        }

        if let Some(run) = &self.run {
            detection.run = run.clone();
            overridden.push("run");
        }

        if let Some(env) = &self.env {
            detection.env = env.clone();
            overridden.push("env");
        }

        if let Some(health) = &self.health {
            detection.health = health.into();
            overridden.push("health");
        }

        debug!("applying plan overrides: {}", overridden.join(", "));

        detection
            .meta
            .insert("overridden".to_string(), overridden.join(","));

        detection
    }
}

/// Root configuration structure for `launchpad.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// Tree scanning settings.
    pub detect: DetectConfig,
    /// Replacements for the detected plan.
    pub overrides: Overrides,
}

impl Config {
    /// Parse and validate configuration text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration for the project at `root`.
    ///
    /// An explicit path must exist. Without one, `launchpad.toml` in the
    /// project root is used when present and defaults otherwise.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(LaunchpadError::invalid_config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => {
                let path = root.join(DEFAULT_CONFIG_FILE);
                if !path.is_file() {
                    debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                    return Ok(Config::default());
                }
                path
            }
        };

        debug!("loading config from {}", path.display());

        let content = fs::read_to_string(&path)?;
        Self::parse(&content)
    }

    fn validate(&self) -> Result<()> {
        if let Some(health) = &self.overrides.health {
            if !(100..=599).contains(&health.expect) {
                return Err(LaunchpadError::invalid_config(format!(
                    "overrides.health.expect must be an HTTP status, got {}",
                    health.expect
                )));
            }

            if health.timeout_seconds == 0 {
                return Err(LaunchpadError::invalid_config(
                    "overrides.health.timeout_seconds must be greater than 0",
                ));
            }
        }

        if self.detect.ignore_dirs.iter().any(|d| d.trim().is_empty()) {
            return Err(LaunchpadError::invalid_config(
                "detect.ignore_dirs entries must not be empty",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn detection() -> Detection {
        let mut detection = Detection::undetected("Go");
        detection.framework = "Go".to_string();
        detection.build = vec!["go build".to_string()];
        detection.run = vec!["./app".to_string()];
        detection
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.overrides.is_empty());
        assert!(config.detect.ignore_dirs.is_empty());
    }

    #[test]
    fn parses_full_config() {
        let config = Config::parse(
            r#"
[detect]
ignore_dirs = ["fixtures", "docs"]

[overrides]
run = ["./bin/server --port 9000"]
env = ["PORT"]

[overrides.health]
path = "/healthz"
"#,
        )
        .unwrap();

        assert_eq!(config.detect.ignore_dirs, vec!["fixtures", "docs"]);
        assert_eq!(
            config.overrides.run,
            Some(vec!["./bin/server --port 9000".to_string()])
        );
        assert!(config.overrides.build.is_none());

        let health = config.overrides.health.unwrap();
        assert_eq!(health.path, "/healthz");
        assert_eq!(health.expect, 200);
        assert_eq!(health.timeout_seconds, 30);
    }

    #[test]
    fn rejects_invalid_status() {
        let result = Config::parse("[overrides.health]\nexpect = 42");
        assert!(matches!(result, Err(LaunchpadError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_zero_timeout() {
        let result = Config::parse("[overrides.health]\ntimeout_seconds = 0");
        assert!(matches!(result, Err(LaunchpadError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_malformed_toml() {
        let result = Config::parse("[detect\nignore_dirs = 1");
        assert!(matches!(result, Err(LaunchpadError::TomlParseError(_))));
    }

    #[test]
    fn apply_without_overrides_is_identity() {
        let detected = detection();
        let applied = Overrides::default().apply(detected.clone());
        assert_eq!(applied, detected);
    }

    #[test]
    fn apply_replaces_only_given_fields() {
        let overrides = Overrides {
            run: Some(vec!["./app --prod".to_string()]),
            health: Some(HealthOverride {
                path: "/ready".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };

        let applied = overrides.apply(detection());

        assert_eq!(applied.build, vec!["go build"]);
        assert_eq!(applied.run, vec!["./app --prod"]);
        assert_eq!(applied.health.path, "/ready");
        assert_eq!(applied.meta["overridden"], "run,health");
    }

    #[test]
    fn apply_fills_undetected_projects() {
        let overrides = Overrides {
            build: Some(vec!["make".to_string()]),
            ..Default::default()
        };

        let applied = overrides.apply(Detection::undetected("Unknown"));

        assert!(!applied.is_detected());
        assert_eq!(applied.build, vec!["make"]);
    }

    #[test]
    fn load_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path(), None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_reads_project_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "[detect]\nignore_dirs = [\"fixtures\"]",
        )
        .unwrap();

        let config = Config::load(dir.path(), None).unwrap();
        assert_eq!(config.detect.ignore_dirs, vec!["fixtures"]);
    }

    #[test]
    fn load_requires_explicit_file_to_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("custom.toml");

        let result = Config::load(dir.path(), Some(&missing));
        assert!(matches!(result, Err(LaunchpadError::InvalidConfig(_))));
    }
}
