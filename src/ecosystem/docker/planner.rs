use regex::Regex;
use std::sync::LazyLock;

use crate::{
    detection::types::Plan,
    ecosystem::{
        docker::detector::COMPOSE_FILES, framework::Framework,
        traits::PlanBuilder,
    },
    fs::FileSystem,
};

static EXPOSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mi)^\s*EXPOSE\s+(\d+)").unwrap());

const DEFAULT_PORT: &str = "8080";

/// Plan builder for container deployments.
pub struct DockerPlanner {}

impl DockerPlanner {
    pub fn new() -> Self {
        Self {}
    }

    fn compose(&self, fs: &dyn FileSystem) -> Plan {
        let plan = Plan::new()
            .with_build(["docker compose build"])
            .with_run(["docker compose up -d"]);

        match COMPOSE_FILES.iter().find(|f| fs.has(f)) {
            Some(file) => plan.with_meta("compose_file", *file),
            None => plan,
        }
    }

    fn dockerfile(&self, fs: &dyn FileSystem) -> Plan {
        let dockerfile = fs.read("Dockerfile");
        let exposed = EXPOSE_REGEX
            .captures(&dockerfile)
            .map(|caps| caps[1].to_string());
        let port = exposed.as_deref().unwrap_or(DEFAULT_PORT);

        let plan = Plan::new()
            .with_build(["docker build -t app ."])
            .with_run([format!("docker run -d -p {port}:{port} app")])
            .with_env(&["PORT"]);

        match exposed {
            Some(port) => plan.with_meta("exposed_port", port),
            None => plan,
        }
    }
}

impl PlanBuilder for DockerPlanner {
    fn build_plan(&self, framework: Framework, fs: &dyn FileSystem) -> Plan {
        match framework {
            Framework::DockerCompose => self.compose(fs),
            _ => self.dockerfile(fs),
        }
    }
}
