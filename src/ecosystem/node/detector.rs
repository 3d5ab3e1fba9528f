use crate::{
    detection::{
        builder::{DetectionBuilder, PriorityRule},
        helper::DetectionHelper,
        scoring::*,
        types::Candidate,
    },
    ecosystem::{
        framework::Framework,
        node::{
            next_config::NEXT_CONFIG_FILES,
            package_json::{PACKAGE_JSON, PackageJson},
        },
        traits::LanguageDetector,
    },
    fs::{FileSystem, TreeScan},
};

const SERVER_ENTRY_FILES: &[&str] = &[
    "server.js",
    "server.ts",
    "app.js",
    "app.ts",
    "index.js",
    "index.ts",
    "src/server.js",
    "src/server.ts",
    "src/app.js",
    "src/app.ts",
    "src/index.js",
    "src/index.ts",
];

/// Detector for JavaScript and TypeScript projects.
pub struct NodeDetector {}

impl NodeDetector {
    pub fn new() -> Self {
        Self {}
    }

    fn next(&self, fs: &dyn FileSystem) -> Candidate {
        DetectionBuilder::new(fs, Framework::NextJs)
            .check_any_file(NEXT_CONFIG_FILES, CONFIG_FILE, "next.config found")
            .check_dependency(
                PACKAGE_JSON,
                "\"next\"",
                DEPENDENCY,
                "next dependency",
            )
            .check_content(
                PACKAGE_JSON,
                "next build",
                SCRIPT_PATTERN,
                "next build script",
            )
            .when_identified(|b| {
                b.check_any_dir(
                    &["app", "pages", "src/app", "src/pages"],
                    DIRECTORY,
                    "app/ or pages/ directory",
                )
            })
            .build()
    }

    fn nuxt(&self, fs: &dyn FileSystem) -> Candidate {
        DetectionBuilder::new(fs, Framework::Nuxt)
            .check_any_file(
                &["nuxt.config.ts", "nuxt.config.js", "nuxt.config.mjs"],
                CONFIG_FILE,
                "nuxt.config found",
            )
            .check_dependency_priority(
                PACKAGE_JSON,
                &[
                    PriorityRule::new("\"nuxt\"", DEPENDENCY, "nuxt dependency"),
                    PriorityRule::new(
                        "\"nuxt3\"",
                        DEPENDENCY,
                        "nuxt3 dependency",
                    ),
                ],
            )
            .when_identified(|b| {
                b.check_any_dir(
                    &["pages", "server"],
                    DIRECTORY,
                    "nuxt directories",
                )
                .check_dir(".nuxt", MINOR_INDICATOR, ".nuxt build directory")
            })
            .build()
    }

    fn remix(&self, fs: &dyn FileSystem) -> Candidate {
        DetectionBuilder::new(fs, Framework::Remix)
            .check_any_file(
                &["remix.config.js", "remix.config.mjs"],
                CONFIG_FILE,
                "remix.config found",
            )
            .check_dependency(
                PACKAGE_JSON,
                "@remix-run/",
                DEPENDENCY,
                "@remix-run dependency",
            )
            .check_multiple_content(
                &["vite.config.ts", "vite.config.js"],
                "@remix-run/dev",
                FILE_PATTERN,
                "remix vite plugin",
            )
            .check_content(
                PACKAGE_JSON,
                "remix build",
                SCRIPT_PATTERN,
                "remix build script",
            )
            .when_identified(|b| {
                b.check_dir("app/routes", DIRECTORY, "app/routes directory")
            })
            .build()
    }

    fn astro(&self, fs: &dyn FileSystem, files: &[String]) -> Candidate {
        DetectionBuilder::new(fs, Framework::Astro)
            .check_any_file(
                &["astro.config.mjs", "astro.config.js", "astro.config.ts"],
                CONFIG_FILE,
                "astro.config found",
            )
            .check_dependency(
                PACKAGE_JSON,
                "\"astro\"",
                DEPENDENCY,
                "astro dependency",
            )
            .check_extension(files, ".astro", MINOR_INDICATOR, ".astro files")
            .when_identified(|b| {
                b.check_dir("src/pages", DIRECTORY, "src/pages directory")
            })
            .build()
    }

    fn svelte(&self, fs: &dyn FileSystem, files: &[String]) -> Candidate {
        DetectionBuilder::new(fs, Framework::Svelte)
            .check_any_file(
                &["svelte.config.js", "svelte.config.mjs", "svelte.config.ts"],
                CONFIG_FILE,
                "svelte.config found",
            )
            .check_dependency_priority(
                PACKAGE_JSON,
                &[
                    PriorityRule::new(
                        "@sveltejs/kit",
                        DEPENDENCY,
                        "SvelteKit dependency",
                    ),
                    PriorityRule::new(
                        "\"svelte\"",
                        DEPENDENCY,
                        "svelte dependency",
                    ),
                ],
            )
            .check_extension(files, ".svelte", MINOR_INDICATOR, ".svelte files")
            .when_identified(|b| {
                b.check_dir("src/routes", DIRECTORY, "src/routes directory")
            })
            .build()
    }

    fn vue(&self, fs: &dyn FileSystem, files: &[String]) -> Candidate {
        DetectionBuilder::new(fs, Framework::Vue)
            .check_file("vue.config.js", CONFIG_FILE, "vue.config.js found")
            .check_dependency_priority(
                PACKAGE_JSON,
                &[
                    PriorityRule::new(
                        "@vue/cli-service",
                        BUILD_TOOL,
                        "Vue CLI",
                    ),
                    PriorityRule::new(
                        "@vitejs/plugin-vue",
                        BUILD_TOOL,
                        "vite vue plugin",
                    ),
                ],
            )
            .check_dependency(
                PACKAGE_JSON,
                "\"vue\"",
                DEPENDENCY,
                "vue dependency",
            )
            .check_extension(files, ".vue", MINOR_INDICATOR, ".vue files")
            .build()
    }

    fn angular(&self, fs: &dyn FileSystem) -> Candidate {
        DetectionBuilder::new(fs, Framework::Angular)
            .check_file("angular.json", CONFIG_FILE, "angular.json found")
            .check_dependency(
                PACKAGE_JSON,
                "@angular/core",
                DEPENDENCY,
                "@angular/core dependency",
            )
            .check_dependency(
                PACKAGE_JSON,
                "@angular/cli",
                BUILD_TOOL,
                "Angular CLI",
            )
            .when_identified(|b| {
                b.check_dir("src/app", DIRECTORY, "src/app directory")
            })
            .build()
    }

    fn gatsby(&self, fs: &dyn FileSystem) -> Candidate {
        DetectionBuilder::new(fs, Framework::Gatsby)
            .check_any_file(
                &["gatsby-config.js", "gatsby-config.ts", "gatsby-config.mjs"],
                CONFIG_FILE,
                "gatsby-config found",
            )
            .check_dependency(
                PACKAGE_JSON,
                "\"gatsby\"",
                DEPENDENCY,
                "gatsby dependency",
            )
            .check_file("gatsby-node.js", MINOR_INDICATOR, "gatsby-node.js")
            .build()
    }

    fn react(&self, fs: &dyn FileSystem, files: &[String]) -> Candidate {
        DetectionBuilder::new(fs, Framework::React)
            .check_dependency_priority(
                PACKAGE_JSON,
                &[
                    PriorityRule::new(
                        "react-scripts",
                        BUILD_TOOL,
                        "Create React App",
                    ),
                    PriorityRule::new(
                        "@vitejs/plugin-react",
                        BUILD_TOOL,
                        "vite react plugin",
                    ),
                ],
            )
            .check_dependency(
                PACKAGE_JSON,
                "\"react-dom\"",
                DEPENDENCY,
                "react-dom dependency",
            )
            .when_identified(|b| {
                b.check_condition(
                    crate::fs::contains_ext(files, ".jsx")
                        || crate::fs::contains_ext(files, ".tsx"),
                    MINOR_INDICATOR,
                    "JSX sources",
                )
            })
            .build()
    }

    fn vite(&self, fs: &dyn FileSystem) -> Candidate {
        DetectionBuilder::new(fs, Framework::Vite)
            .check_any_file(
                &["vite.config.js", "vite.config.ts", "vite.config.mjs"],
                FILE_PATTERN,
                "vite.config found",
            )
            .check_dependency(
                PACKAGE_JSON,
                "\"vite\"",
                BUILD_TOOL,
                "vite dependency",
            )
            .build()
    }

    fn nest(&self, fs: &dyn FileSystem) -> Candidate {
        let builder = DetectionBuilder::new(fs, Framework::NestJs)
            .check_file("nest-cli.json", CONFIG_FILE, "nest-cli.json found")
            .check_dependency(
                PACKAGE_JSON,
                "@nestjs/core",
                DEPENDENCY,
                "@nestjs/core dependency",
            )
            .check_dependency(
                PACKAGE_JSON,
                "@nestjs/cli",
                BUILD_TOOL,
                "Nest CLI",
            );

        // src/main.ts is too common to count on its own.
        let gated = builder.score() > 0.0 && fs.has("src/main.ts");
        builder
            .check_condition(gated, MINOR_INDICATOR, "src/main.ts entry")
            .build()
    }

    fn server_framework(
        &self,
        fs: &dyn FileSystem,
        pkg: &PackageJson,
        framework: Framework,
        dependency: &str,
    ) -> Candidate {
        let has_dependency = pkg.has_dependency(dependency);
        let has_entry = SERVER_ENTRY_FILES.iter().any(|f| fs.has(f));
        let has_start = pkg.has_script("start");

        DetectionBuilder::new(fs, framework)
            .check_condition(
                has_dependency,
                DEPENDENCY,
                &format!("{dependency} dependency"),
            )
            .check_condition(
                has_dependency && has_entry,
                FILE_PATTERN,
                "server entry file",
            )
            .check_condition(
                has_dependency && has_start,
                SCRIPT_PATTERN,
                "start script",
            )
            .build()
    }

    fn deno(&self, fs: &dyn FileSystem) -> Candidate {
        DetectionBuilder::new(fs, Framework::Deno)
            .check_any_file(
                &["deno.json", "deno.jsonc"],
                CONFIG_FILE,
                "deno.json found",
            )
            .check_file("deno.lock", LOCKFILE, "deno.lock found")
            .build()
    }

    fn generic(&self, fs: &dyn FileSystem, files: &[String]) -> Candidate {
        DetectionBuilder::new(fs, Framework::Node)
            .check_file(PACKAGE_JSON, BUILD_TOOL, "package.json found")
            .check_any_file(
                &[
                    "package-lock.json",
                    "yarn.lock",
                    "pnpm-lock.yaml",
                    "bun.lockb",
                    "bun.lock",
                ],
                LOCKFILE,
                "lockfile found",
            )
            .check_condition(
                crate::fs::contains_ext(files, ".js")
                    || crate::fs::contains_ext(files, ".ts"),
                MINOR_INDICATOR,
                "JavaScript sources",
            )
            .build()
    }
}

impl LanguageDetector for NodeDetector {
    fn name(&self) -> &str {
        "node"
    }

    fn detect(&self, fs: &dyn FileSystem, scan: &TreeScan) -> Vec<Candidate> {
        let files = &scan.files;
        let deno = DetectionHelper::scored(vec![self.deno(fs)]);

        if !fs.has(PACKAGE_JSON) {
            return deno;
        }

        let pkg = PackageJson::parse(fs);

        let specific = vec![
            self.next(fs),
            self.nuxt(fs),
            self.remix(fs),
            self.astro(fs, files),
            self.svelte(fs, files),
            self.vue(fs, files),
            self.angular(fs),
            self.gatsby(fs),
            self.react(fs, files),
            self.vite(fs),
            self.nest(fs),
            self.server_framework(fs, &pkg, Framework::Express, "express"),
            self.server_framework(fs, &pkg, Framework::Fastify, "fastify"),
            self.server_framework(fs, &pkg, Framework::Hono, "hono"),
        ];

        let mut candidates =
            DetectionHelper::specific_or_generic(specific, 0.0, || {
                self.generic(fs, files)
            });
        candidates.extend(deno);
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::memory::MemoryFileSystem;

    fn detect(fs: &MemoryFileSystem) -> Vec<Candidate> {
        let scan = fs.scan_tree().unwrap();
        NodeDetector::new().detect(fs, &scan)
    }

    fn best(candidates: &[Candidate]) -> &Candidate {
        let mut best = &candidates[0];
        for c in candidates.iter().skip(1) {
            if c.score > best.score {
                best = c;
            }
        }
        best
    }

    #[test]
    fn no_manifest_no_candidates() {
        let fs = MemoryFileSystem::new().with_file("index.js", "");
        assert!(detect(&fs).is_empty());
    }

    #[test]
    fn detects_next() {
        let fs = MemoryFileSystem::new()
            .with_file(
                "package.json",
                r#"{"scripts":{"build":"next build"},"dependencies":{"next":"14","react":"18","react-dom":"18"}}"#,
            )
            .with_file("next.config.js", "module.exports = {}")
            .with_file("pages/index.tsx", "");

        let candidates = detect(&fs);
        let winner = best(&candidates);
        assert_eq!(winner.framework, Framework::NextJs);
        assert_eq!(
            winner.score,
            CONFIG_FILE + DEPENDENCY + DIRECTORY + SCRIPT_PATTERN
        );
        assert!(candidates.iter().all(|c| c.framework != Framework::Node));
    }

    #[test]
    fn sveltekit_is_credited_once() {
        let fs = MemoryFileSystem::new()
            .with_file(
                "package.json",
                r#"{"devDependencies":{"@sveltejs/kit":"2","svelte":"4"}}"#,
            )
            .with_file("svelte.config.js", "")
            .with_file("src/routes/+page.svelte", "");

        let candidates = detect(&fs);
        let svelte = candidates
            .iter()
            .find(|c| c.framework == Framework::Svelte)
            .unwrap();
        assert_eq!(
            svelte.score,
            CONFIG_FILE + DEPENDENCY + DIRECTORY + MINOR_INDICATOR
        );
        assert!(svelte.signals.contains(&"SvelteKit dependency".to_string()));
    }

    #[test]
    fn express_needs_the_dependency() {
        let fs = MemoryFileSystem::new()
            .with_file("package.json", r#"{"scripts":{"start":"node x"}}"#)
            .with_file("server.js", "");

        let candidates = detect(&fs);
        assert!(candidates.iter().all(|c| c.framework != Framework::Express));
        assert_eq!(candidates[0].framework, Framework::Node);
    }

    #[test]
    fn detects_express_server() {
        let fs = MemoryFileSystem::new()
            .with_file(
                "package.json",
                r#"{"scripts":{"start":"node server.js"},"dependencies":{"express":"4"}}"#,
            )
            .with_file("server.js", "");

        let winner = best(&detect(&fs)).clone();
        assert_eq!(winner.framework, Framework::Express);
        assert_eq!(winner.score, DEPENDENCY + FILE_PATTERN + SCRIPT_PATTERN);
    }

    #[test]
    fn generic_node_when_nothing_specific_matches() {
        let fs = MemoryFileSystem::new()
            .with_file("package.json", r#"{"name":"tool"}"#)
            .with_file("package-lock.json", "{}")
            .with_file("index.js", "");

        let candidates = detect(&fs);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].framework, Framework::Node);
        assert_eq!(
            candidates[0].score,
            BUILD_TOOL + LOCKFILE + MINOR_INDICATOR
        );
    }

    #[test]
    fn common_directories_do_not_claim_a_framework() {
        let fs = MemoryFileSystem::new()
            .with_file("package.json", r#"{"dependencies":{"koa":"2"}}"#)
            .with_file("package-lock.json", "{}")
            .with_file("server/index.js", "")
            .with_file("pages/about.js", "")
            .with_file("src/app/main.js", "")
            .with_file("src/pages/home.js", "")
            .with_file("src/routes/users.js", "")
            .with_file("src/App.jsx", "");

        let candidates = detect(&fs);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].framework, Framework::Node);
    }

    #[test]
    fn deno_without_package_json() {
        let fs = MemoryFileSystem::new()
            .with_file("deno.json", "{}")
            .with_file("main.ts", "");

        let candidates = detect(&fs);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].framework, Framework::Deno);
    }
}
