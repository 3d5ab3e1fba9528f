use std::path::Path;

use crate::{
    detection::types::Plan,
    ecosystem::{
        dotnet::detector::WEB_SDK, framework::Framework, traits::PlanBuilder,
    },
    fs::FileSystem,
};

/// Project files at the root, in top-level directories and under `src/`,
/// in that order.
fn project_files(fs: &dyn FileSystem) -> Vec<String> {
    let mut dirs = vec![String::new()];
    dirs.extend(fs.list_dirs("."));
    dirs.extend(fs.list_dirs("src").into_iter().map(|d| format!("src/{d}")));

    dirs.iter()
        .flat_map(|dir| {
            fs.list_files(if dir.is_empty() { "." } else { dir })
                .into_iter()
                .filter(|f| f.ends_with(".csproj") || f.ends_with(".fsproj"))
                .map(move |f| {
                    if dir.is_empty() { f } else { format!("{dir}/{f}") }
                })
        })
        .collect()
}

/// Plan builder for .NET projects.
pub struct DotNetPlanner {}

impl DotNetPlanner {
    pub fn new() -> Self {
        Self {}
    }
}

impl PlanBuilder for DotNetPlanner {
    fn build_plan(&self, framework: Framework, fs: &dyn FileSystem) -> Plan {
        let projects = project_files(fs);
        let project = projects
            .iter()
            .find(|p| fs.read(p).contains(WEB_SDK))
            .or(projects.first());

        let name = project
            .and_then(|p| Path::new(p).file_stem())
            .and_then(|s| s.to_str())
            .unwrap_or("app")
            .to_string();

        let publish = match project {
            Some(path) if path.contains('/') => {
                format!("dotnet publish {path} -c Release -o out")
            }
            _ => "dotnet publish -c Release -o out".to_string(),
        };

        let plan = Plan::new()
            .with_build(["dotnet restore".to_string(), publish])
            .with_run([format!("dotnet out/{name}.dll")])
            .with_meta("project_name", name)
            .with_meta("build_output", "out");

        match framework {
            Framework::AspNetCore => plan.with_env(&[
                "ASPNETCORE_URLS",
                "ASPNETCORE_ENVIRONMENT",
                "ConnectionStrings__*",
            ]),
            _ => plan.with_env(&["DOTNET_ENVIRONMENT"]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::memory::MemoryFileSystem;

    #[test]
    fn publishes_root_project() {
        let fs = MemoryFileSystem::new()
            .with_file("Shop.Api.csproj", WEB_SDK)
            .with_file("Program.cs", "");

        let plan = DotNetPlanner::new().build_plan(Framework::AspNetCore, &fs);
        assert_eq!(
            plan.build,
            vec!["dotnet restore", "dotnet publish -c Release -o out"]
        );
        assert_eq!(plan.run, vec!["dotnet out/Shop.Api.dll"]);
        assert_eq!(plan.meta["project_name"], "Shop.Api");
        assert_eq!(plan.health.path, "/");
    }

    #[test]
    fn prefers_web_project_in_solution() {
        let fs = MemoryFileSystem::new()
            .with_file("App.sln", "")
            .with_file("src/Core/Core.csproj", "Microsoft.NET.Sdk")
            .with_file("src/Web/Web.csproj", WEB_SDK);

        let plan = DotNetPlanner::new().build_plan(Framework::AspNetCore, &fs);
        assert_eq!(
            plan.build[1],
            "dotnet publish src/Web/Web.csproj -c Release -o out"
        );
        assert_eq!(plan.run, vec!["dotnet out/Web.dll"]);
    }
}
