use crate::{
    detection::types::{Healthcheck, Plan},
    ecosystem::{
        framework::Framework, java::build_tool::JavaBuildTool,
        traits::PlanBuilder,
    },
    fs::FileSystem,
};

/// Plan builder for JVM frameworks.
pub struct JavaPlanner {}

impl JavaPlanner {
    pub fn new() -> Self {
        Self {}
    }
}

impl PlanBuilder for JavaPlanner {
    fn build_plan(&self, framework: Framework, fs: &dyn FileSystem) -> Plan {
        let tool = JavaBuildTool::detect(fs);

        let plan = Plan::new()
            .with_build([tool.build_command()])
            .with_env(&["PORT", "JAVA_OPTS"])
            .with_meta("build_tool", tool.to_string())
            .with_meta("build_output", tool.output_dir());

        match framework {
            Framework::SpringBoot => plan
                .with_run([format!("java -jar {}", tool.jar_glob())])
                .with_health(Healthcheck::at("/actuator/health"))
                .with_env(&["SPRING_PROFILES_ACTIVE", "SERVER_PORT"]),
            Framework::Quarkus => plan
                .with_run([format!(
                    "java -jar {}/quarkus-app/quarkus-run.jar",
                    tool.output_dir()
                )])
                .with_health(Healthcheck::at("/q/health"))
                .with_env(&["QUARKUS_HTTP_PORT"]),
            _ => plan.with_run([format!("java -jar {}", tool.jar_glob())]),
        }
    }
}
