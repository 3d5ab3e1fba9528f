use regex::Regex;
use std::sync::LazyLock;

use crate::{
    detection::types::Plan,
    ecosystem::{framework::Framework, traits::PlanBuilder},
    fs::FileSystem,
};

static APP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"app:\s*:(\w+)").unwrap());

const DEFAULT_APP: &str = "app";

/// OTP application name declared in mix.exs.
fn app_name(fs: &dyn FileSystem) -> String {
    APP_REGEX
        .captures(&fs.read("mix.exs"))
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| DEFAULT_APP.to_string())
}

/// Plan builder for Elixir projects.
pub struct ElixirPlanner {}

impl ElixirPlanner {
    pub fn new() -> Self {
        Self {}
    }
}

impl PlanBuilder for ElixirPlanner {
    fn build_plan(&self, framework: Framework, fs: &dyn FileSystem) -> Plan {
        let app = app_name(fs);

        let mut build = vec![
            "mix local.hex --force",
            "mix local.rebar --force",
            "MIX_ENV=prod mix deps.get --only prod",
            "MIX_ENV=prod mix compile",
        ];

        if framework == Framework::Phoenix && fs.dir_exists("assets") {
            build.push("MIX_ENV=prod mix assets.deploy");
        }
        build.push("MIX_ENV=prod mix release");

        let plan = Plan::new()
            .with_build(build)
            .with_run([format!("_build/prod/rel/{app}/bin/{app} start")])
            .with_env(&["MIX_ENV", "PORT"])
            .with_meta("project_name", app);

        match framework {
            Framework::Phoenix => plan.with_env(&[
                "SECRET_KEY_BASE",
                "DATABASE_URL",
                "PHX_HOST",
                "PHX_SERVER",
            ]),
            _ => plan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::memory::MemoryFileSystem;

    #[test]
    fn phoenix_release() {
        let fs = MemoryFileSystem::new()
            .with_file(
                "mix.exs",
                "def project do\n  [\n    app: :hello,\n    version: \"0.1.0\"",
            )
            .with_dir("assets");

        let plan = ElixirPlanner::new().build_plan(Framework::Phoenix, &fs);
        assert!(
            plan.build
                .contains(&"MIX_ENV=prod mix assets.deploy".to_string())
        );
        assert_eq!(plan.build.last().unwrap(), "MIX_ENV=prod mix release");
        assert_eq!(plan.run, vec!["_build/prod/rel/hello/bin/hello start"]);
        assert_eq!(plan.meta["project_name"], "hello");
    }

    #[test]
    fn unknown_app_name_uses_default() {
        let plan = ElixirPlanner::new()
            .build_plan(Framework::Elixir, &MemoryFileSystem::new());
        assert_eq!(plan.run, vec!["_build/prod/rel/app/bin/app start"]);
    }
}
