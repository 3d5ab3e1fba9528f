use serde_json::Value;

use crate::{
    detection::types::{Plan, static_site_sentinel},
    ecosystem::{
        framework::Framework,
        node::{
            adapter::{FrameworkAdapter, RunMode, detect_framework_adapter},
            monorepo::MonorepoType,
            next_config::{NextOutputMode, detect_router},
            package_json::PackageJson,
            package_manager::PackageManager,
        },
        traits::PlanBuilder,
    },
    fs::FileSystem,
};

const NODE_ENV: &[&str] = &["NODE_ENV", "PORT"];

/// Shared context of every JavaScript plan.
struct NodeContext {
    pm: PackageManager,
    pkg: PackageJson,
    monorepo: MonorepoType,
}

impl NodeContext {
    fn load(fs: &dyn FileSystem) -> Self {
        Self {
            pm: PackageManager::detect(fs),
            pkg: PackageJson::parse(fs),
            monorepo: MonorepoType::detect(fs),
        }
    }

    /// Install, then the build script when the manifest defines one.
    fn build(&self) -> Vec<String> {
        let mut build = vec![self.pm.install_command().to_string()];
        if self.pkg.has_script("build") {
            build.push(self.pm.build_command());
        }
        build
    }

    /// Install and build even without a build script, for frameworks whose
    /// output only exists after building.
    fn compiled(&self) -> Vec<String> {
        vec![
            self.pm.install_command().to_string(),
            self.pm.build_command(),
        ]
    }

    fn plan(&self, build: Vec<String>) -> Plan {
        let plan = Plan::new()
            .with_build(build)
            .with_env(NODE_ENV)
            .with_meta("package_manager", self.pm.to_string());

        if self.monorepo.is_monorepo() {
            return plan.with_meta("monorepo", self.monorepo.to_string());
        }
        plan
    }
}

fn platform_comment(
    framework: Framework,
    adapter: &FrameworkAdapter,
) -> String {
    format!(
        "# {framework} uses the {} adapter - deploy to {} or switch to a \
         node adapter to self-host",
        adapter.kind, adapter.kind
    )
}

fn with_adapter(plan: Plan, adapter: &FrameworkAdapter) -> Plan {
    let plan = plan.with_meta("adapter", adapter.kind.to_string());
    match &adapter.package {
        Some(package) => plan.with_meta("adapter_package", package.clone()),
        None => plan,
    }
}

/// Plan builder for JavaScript and TypeScript frameworks.
pub struct NodePlanner {}

impl NodePlanner {
    pub fn new() -> Self {
        Self {}
    }

    fn next(&self, ctx: &NodeContext, fs: &dyn FileSystem) -> Plan {
        let mode = NextOutputMode::detect(fs);
        let run = match mode {
            NextOutputMode::Export => static_site_sentinel("out"),
            NextOutputMode::Standalone => {
                "node .next/standalone/server.js".to_string()
            }
            NextOutputMode::Default => ctx.pm.start_command().to_string(),
        };

        ctx.plan(ctx.compiled())
            .with_run([run])
            .with_env(&["NEXT_PUBLIC_*"])
            .with_meta("output_mode", mode.to_string())
            .with_meta("build_output", mode.build_output())
            .with_meta("router", detect_router(fs))
    }

    fn nuxt(&self, ctx: &NodeContext) -> Plan {
        ctx.plan(ctx.compiled())
            .with_run(["node .output/server/index.mjs"])
            .with_env(&["NUXT_*", "NUXT_PUBLIC_*"])
            .with_meta("build_output", ".output")
    }

    fn remix(&self, ctx: &NodeContext) -> Plan {
        let adapter = detect_framework_adapter(&ctx.pkg, Framework::Remix);
        let plan = with_adapter(ctx.plan(ctx.compiled()), &adapter)
            .with_meta("build_output", "build");

        match adapter.run_mode {
            RunMode::Platform => {
                plan.with_run([platform_comment(Framework::Remix, &adapter)])
            }
            RunMode::Static => plan.with_run([static_site_sentinel("build")]),
            RunMode::Server => {
                let start = if ctx.pkg.has_script("start") {
                    ctx.pm.start_command().to_string()
                } else {
                    "npx remix-serve ./build/index.js".to_string()
                };
                plan.with_run([
                    start,
                    "npx remix-serve ./build/server/index.js".to_string(),
                ])
            }
        }
    }

    fn astro(&self, ctx: &NodeContext) -> Plan {
        let adapter = detect_framework_adapter(&ctx.pkg, Framework::Astro);
        let plan = with_adapter(ctx.plan(ctx.compiled()), &adapter)
            .with_env(&["PUBLIC_*"])
            .with_meta("build_output", "dist");

        match adapter.run_mode {
            RunMode::Static => plan.with_run([static_site_sentinel("dist")]),
            RunMode::Platform => {
                plan.with_run([platform_comment(Framework::Astro, &adapter)])
            }
            RunMode::Server => plan
                .with_run(["node ./dist/server/entry.mjs"])
                .with_env(&["HOST"]),
        }
    }

    fn svelte(&self, ctx: &NodeContext) -> Plan {
        if !ctx.pkg.has_dependency("@sveltejs/kit") {
            return ctx
                .plan(ctx.compiled())
                .with_run([static_site_sentinel("dist")])
                .with_meta("build_output", "dist")
                .with_meta("sveltekit", "false");
        }

        let adapter = detect_framework_adapter(&ctx.pkg, Framework::Svelte);
        let plan = with_adapter(ctx.plan(ctx.compiled()), &adapter)
            .with_env(&["PUBLIC_*", "ORIGIN"])
            .with_meta("sveltekit", "true")
            .with_meta("build_output", "build");

        match adapter.run_mode {
            RunMode::Static => plan.with_run([static_site_sentinel("build")]),
            RunMode::Platform => {
                plan.with_run([platform_comment(Framework::Svelte, &adapter)])
            }
            RunMode::Server => plan.with_run(["node build"]),
        }
    }

    fn spa(&self, ctx: &NodeContext, output: &str) -> Plan {
        ctx.plan(ctx.compiled())
            .with_run([static_site_sentinel(output)])
            .with_meta("build_output", output)
    }

    fn react(&self, ctx: &NodeContext) -> Plan {
        let output = if ctx.pkg.has_dependency("react-scripts") {
            "build"
        } else {
            "dist"
        };
        self.spa(ctx, output).with_env(&["REACT_APP_*", "VITE_*"])
    }

    fn angular(&self, ctx: &NodeContext, fs: &dyn FileSystem) -> Plan {
        let (output, application_builder) = angular_output(fs);
        let browser = if application_builder {
            format!("{output}/browser")
        } else {
            output.clone()
        };

        let ssr = ctx.pkg.has_dependency("@angular/ssr")
            || ctx.pkg.has_dependency("@nguniversal/express-engine");

        let plan = ctx
            .plan(ctx.compiled())
            .with_meta("build_output", browser.clone())
            .with_meta("ssr", ssr.to_string());

        if ssr {
            return plan.with_run([format!("node {output}/server/server.mjs")]);
        }
        plan.with_run([static_site_sentinel(&browser)])
    }

    fn nest(&self, ctx: &NodeContext) -> Plan {
        ctx.plan(ctx.compiled())
            .with_run([
                "node dist/main".to_string(),
                ctx.pm.run_script("start:prod"),
            ])
            .with_meta("build_output", "dist")
    }

    /// Express, Fastify, Hono and plain Node servers.
    fn server(&self, ctx: &NodeContext, fs: &dyn FileSystem) -> Plan {
        let plan = ctx.plan(ctx.build());

        if ctx.pkg.has_script("start") {
            return plan.with_run([ctx.pm.start_command()]);
        }

        let entry = ctx
            .pkg
            .main
            .clone()
            .filter(|main| fs.has(main))
            .or_else(|| {
                ["server.js", "app.js", "index.js", "server.ts", "index.ts"]
                    .iter()
                    .find(|f| fs.has(f))
                    .map(|f| f.to_string())
            })
            .unwrap_or_else(|| "index.js".to_string());

        let run = if entry.ends_with(".ts") {
            format!("npx tsx {entry}")
        } else {
            format!("node {entry}")
        };
        plan.with_run([run])
    }

    fn deno(&self, fs: &dyn FileSystem) -> Plan {
        let config = [fs.read("deno.json"), fs.read("deno.jsonc")].concat();
        let run = if config.contains("\"start\"") {
            "deno task start".to_string()
        } else {
            let entry = ["main.ts", "server.ts", "mod.ts", "main.js"]
                .into_iter()
                .find(|f| fs.has(f))
                .unwrap_or("main.ts");
            format!("deno run --allow-net --allow-env --allow-read {entry}")
        };

        let plan = Plan::new().with_run([run]).with_env(&["PORT", "DENO_*"]);
        if fs.has("main.ts") {
            return plan.with_build(["deno cache main.ts"]);
        }
        plan
    }
}

/// Output path of the default Angular project and whether it uses the
/// application builder (which nests browser files under `browser/`).
fn angular_output(fs: &dyn FileSystem) -> (String, bool) {
    let parsed = serde_json::from_str::<Value>(&fs.read("angular.json"))
        .unwrap_or(Value::Null);

    let project = parsed["defaultProject"]
        .as_str()
        .map(String::from)
        .or_else(|| {
            parsed["projects"]
                .as_object()
                .and_then(|p| p.keys().next().cloned())
        });

    let Some(project) = project else {
        return ("dist".to_string(), false);
    };

    let build = &parsed["projects"][&project]["architect"]["build"];
    let builder = build["builder"].as_str().unwrap_or_default();
    let output = match &build["options"]["outputPath"] {
        Value::String(path) => path.clone(),
        Value::Object(obj) => obj
            .get("base")
            .and_then(Value::as_str)
            .map(String::from)
            .unwrap_or_else(|| format!("dist/{project}")),
        _ => format!("dist/{project}"),
    };

    (output, builder.ends_with(":application"))
}

impl PlanBuilder for NodePlanner {
    fn build_plan(&self, framework: Framework, fs: &dyn FileSystem) -> Plan {
        if framework == Framework::Deno {
            return self.deno(fs);
        }

        let ctx = NodeContext::load(fs);
        match framework {
            Framework::NextJs => self.next(&ctx, fs),
            Framework::Nuxt => self.nuxt(&ctx),
            Framework::Remix => self.remix(&ctx),
            Framework::Astro => self.astro(&ctx),
            Framework::Svelte => self.svelte(&ctx),
            Framework::Vue | Framework::Vite => {
                self.spa(&ctx, "dist").with_env(&["VITE_*"])
            }
            Framework::Gatsby => self.spa(&ctx, "public"),
            Framework::React => self.react(&ctx),
            Framework::Angular => self.angular(&ctx, fs),
            Framework::NestJs => self.nest(&ctx),
            _ => self.server(&ctx, fs),
        }
    }
}
