use regex::Regex;
use std::sync::LazyLock;

use crate::{
    detection::types::Plan,
    ecosystem::{framework::Framework, traits::PlanBuilder},
    fs::FileSystem,
};

static MODULE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^module\s+(\S+)").unwrap());

/// Plan builder for Go projects. Every Go web framework compiles to a
/// single static binary, so the plans only differ in environment.
pub struct GoPlanner {}

impl GoPlanner {
    pub fn new() -> Self {
        Self {}
    }

    /// Package holding `func main`: the root, or the first `cmd/<name>`.
    fn main_package(&self, fs: &dyn FileSystem) -> String {
        if fs.has("main.go") {
            return ".".to_string();
        }

        fs.list_dirs("cmd")
            .into_iter()
            .find(|dir| fs.has(&format!("cmd/{dir}/main.go")))
            .map(|dir| format!("./cmd/{dir}"))
            .unwrap_or_else(|| ".".to_string())
    }
}

impl PlanBuilder for GoPlanner {
    fn build_plan(&self, framework: Framework, fs: &dyn FileSystem) -> Plan {
        let package = self.main_package(fs);

        let plan = Plan::new()
            .with_build([
                "go mod download".to_string(),
                format!("CGO_ENABLED=0 go build -o app {package}"),
            ])
            .with_run(["./app"])
            .with_env(&["PORT"]);

        let plan = match framework {
            Framework::Gin => plan.with_env(&["GIN_MODE"]),
            _ => plan,
        };

        let go_mod = fs.read("go.mod");
        match MODULE_REGEX.captures(&go_mod) {
            Some(caps) => plan.with_meta("module", &caps[1]),
            None => plan,
        }
    }
}
