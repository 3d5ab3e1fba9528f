use log::*;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::fs::FileSystem;

pub const PACKAGE_JSON: &str = "package.json";

/// The parts of package.json detection and planning care about.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PackageJson {
    pub main: Option<String>,
    pub scripts: BTreeMap<String, String>,
    pub dependencies: BTreeMap<String, Value>,
    pub dev_dependencies: BTreeMap<String, Value>,
    pub workspaces: Option<Value>,
}

impl PackageJson {
    /// Best-effort parse of the root package.json. A missing or malformed
    /// manifest yields empty maps.
    pub fn parse(fs: &dyn FileSystem) -> Self {
        let content = fs.read(PACKAGE_JSON);
        if content.trim().is_empty() {
            return Self::default();
        }

        match serde_json::from_str(&content) {
            Ok(manifest) => manifest,
            Err(e) => {
                warn!("ignoring malformed {PACKAGE_JSON}: {e}");
                Self::default()
            }
        }
    }

    /// True when `name` is a runtime or dev dependency.
    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains_key(name)
            || self.dev_dependencies.contains_key(name)
    }

    pub fn has_script(&self, name: &str) -> bool {
        self.scripts.contains_key(name)
    }

    pub fn has_workspaces(&self) -> bool {
        matches!(
            &self.workspaces,
            Some(Value::Array(_)) | Some(Value::Object(_))
        )
    }
}
