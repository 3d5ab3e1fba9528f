use serde::Deserialize;

use crate::{
    detection::types::Plan,
    ecosystem::{framework::Framework, traits::PlanBuilder},
    fs::FileSystem,
};

const DEFAULT_BINARY: &str = "app";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CargoManifest {
    package: Option<CargoPackage>,
    bin: Vec<CargoTarget>,
}

#[derive(Debug, Deserialize)]
struct CargoPackage {
    name: String,
}

#[derive(Debug, Deserialize)]
struct CargoTarget {
    name: Option<String>,
}

/// Name of the binary `cargo build` produces: the first `[[bin]]` target,
/// else the package name.
fn binary_name(fs: &dyn FileSystem) -> String {
    let manifest: CargoManifest =
        toml::from_str(&fs.read("Cargo.toml")).unwrap_or_default();

    manifest
        .bin
        .into_iter()
        .find_map(|bin| bin.name)
        .or(manifest.package.map(|p| p.name))
        .unwrap_or_else(|| DEFAULT_BINARY.to_string())
}

/// Plan builder for Rust projects.
pub struct RustPlanner {}

impl RustPlanner {
    pub fn new() -> Self {
        Self {}
    }
}

impl PlanBuilder for RustPlanner {
    fn build_plan(&self, framework: Framework, fs: &dyn FileSystem) -> Plan {
        let binary = binary_name(fs);

        let plan = Plan::new()
            .with_build(["cargo build --release"])
            .with_run([format!("./target/release/{binary}")])
            .with_env(&["PORT", "RUST_LOG"])
            .with_meta("binary", binary);

        match framework {
            Framework::Rocket => {
                plan.with_env(&["ROCKET_ADDRESS", "ROCKET_PORT"])
            }
            _ => plan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::memory::MemoryFileSystem;

    #[test]
    fn runs_package_binary() {
        let fs = MemoryFileSystem::new().with_file(
            "Cargo.toml",
            "[package]\nname = \"api\"\nversion = \"0.1.0\"\n\n[dependencies]\naxum = \"0.7\"",
        );

        let plan = RustPlanner::new().build_plan(Framework::Axum, &fs);
        assert_eq!(plan.build, vec!["cargo build --release"]);
        assert_eq!(plan.run, vec!["./target/release/api"]);
        assert_eq!(plan.meta["binary"], "api");
    }

    #[test]
    fn prefers_explicit_bin_target() {
        let fs = MemoryFileSystem::new().with_file(
            "Cargo.toml",
            "[package]\nname = \"api\"\n\n[[bin]]\nname = \"server\"\npath = \"src/bin/server.rs\"",
        );

        let plan = RustPlanner::new().build_plan(Framework::Rocket, &fs);
        assert_eq!(plan.run, vec!["./target/release/server"]);
        assert!(plan.env.contains(&"ROCKET_PORT".to_string()));
    }

    #[test]
    fn malformed_manifest_uses_default_binary() {
        let fs = MemoryFileSystem::new().with_file("Cargo.toml", "[package");
        let plan = RustPlanner::new().build_plan(Framework::Rust, &fs);
        assert_eq!(plan.run, vec!["./target/release/app"]);
    }
}
