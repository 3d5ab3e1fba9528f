//! Detect command implementation.
use log::*;
use std::{
    fmt::{self, Display},
    path::Path,
};

use crate::{
    config::Config, detection::manager::detect_project_with,
    detection::types::Detection, result::Result,
};

/// Detect the project at `path`, apply configured overrides and print the
/// result as JSON or as a human readable summary.
pub fn execute(path: &Path, json: bool, config: Option<&Path>) -> Result<()> {
    let config = Config::load(path, config)?;

    let detection = detect_project_with(path, &config.detect.ignore_dirs)?;
    let detection = config.overrides.apply(detection);

    if json {
        println!("{}", serde_json::to_string_pretty(&detection)?);
        return Ok(());
    }

    if !detection.is_detected() {
        warn!("no framework detected in {}", path.display());
    }

    print!("{}", Summary(&detection));

    Ok(())
}

/// Human readable summary of a detection.
pub struct Summary<'a>(pub &'a Detection);

fn section(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    lines: &[String],
) -> fmt::Result {
    if lines.is_empty() {
        return Ok(());
    }
    writeln!(f, "{title}:")?;
    for line in lines {
        writeln!(f, "  {line}")?;
    }
    Ok(())
}

impl Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let detection = self.0;

        if detection.is_detected() {
            writeln!(
                f,
                "Framework: {} ({})",
                detection.framework, detection.language
            )?;
            writeln!(f, "Score: {:.1}", detection.score)?;
            section(f, "Signals", &detection.signals)?;
        } else {
            writeln!(
                f,
                "No framework detected (language: {})",
                detection.language
            )?;
        }

        section(f, "Build", &detection.build)?;
        section(f, "Run", &detection.run)?;

        if detection.is_detected() || !detection.run.is_empty() {
            let health = &detection.health;
            writeln!(
                f,
                "Health: GET {} -> {} (timeout {}s)",
                health.path, health.expect, health.timeout_seconds
            )?;
        }

        if !detection.env.is_empty() {
            writeln!(f, "Env: {}", detection.env.join(", "))?;
        }

        let meta = detection
            .meta
            .iter()
            .map(|(key, value)| format!("{key} = {value}"))
            .collect::<Vec<String>>();
        section(f, "Meta", &meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::types::Healthcheck;

    #[test]
    fn renders_detected_plan() {
        let mut detection = Detection::undetected("Go");
        detection.framework = "Gin".to_string();
        detection.score = 7.0;
        detection.signals = vec!["gin dependency".to_string()];
        detection.build = vec!["go mod download".to_string()];
        detection.run = vec!["./app".to_string()];
        detection.health = Healthcheck::at("/ping");
        detection.env = vec!["PORT".to_string(), "GIN_MODE".to_string()];
        detection
            .meta
            .insert("module".to_string(), "example.com/api".to_string());

        let output = Summary(&detection).to_string();

        assert!(output.starts_with("Framework: Gin (Go)\nScore: 7.0\n"));
        assert!(output.contains("Signals:\n  gin dependency\n"));
        assert!(output.contains("Build:\n  go mod download\n"));
        assert!(output.contains("Run:\n  ./app\n"));
        assert!(output.contains("Health: GET /ping -> 200 (timeout 30s)\n"));
        assert!(output.contains("Env: PORT, GIN_MODE\n"));
        assert!(output.contains("Meta:\n  module = example.com/api\n"));
    }

    #[test]
    fn renders_undetected_project() {
        let output = Summary(&Detection::undetected("Unknown")).to_string();

        assert_eq!(output, "No framework detected (language: Unknown)\n");
    }

    #[test]
    fn detected_json_has_stable_keys() {
        let detection = Detection::undetected("Python");
        let json = serde_json::to_value(&detection).unwrap();

        for key in [
            "framework",
            "language",
            "score",
            "signals",
            "build",
            "run",
            "health",
            "env",
            "meta",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
    }
}
