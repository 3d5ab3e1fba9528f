use crate::{
    detection::types::{Plan, static_site_sentinel},
    ecosystem::{framework::Framework, traits::PlanBuilder},
    fs::FileSystem,
};

/// Plan builder for static sites. Every plan ends in the static sentinel.
pub struct StaticSitePlanner {}

impl StaticSitePlanner {
    pub fn new() -> Self {
        Self {}
    }
}

impl PlanBuilder for StaticSitePlanner {
    fn build_plan(&self, framework: Framework, fs: &dyn FileSystem) -> Plan {
        match framework {
            Framework::Hugo => Plan::new()
                .with_build(["hugo --minify"])
                .with_run([static_site_sentinel("public")])
                .with_env(&["HUGO_ENV", "HUGO_BASEURL"])
                .with_meta("build_output", "public"),
            Framework::Jekyll => Plan::new()
                .with_build(["bundle install", "bundle exec jekyll build"])
                .with_run([static_site_sentinel("_site")])
                .with_env(&["JEKYLL_ENV"])
                .with_meta("build_output", "_site"),
            _ => {
                let root = if fs.has("index.html") { "." } else { "public" };
                Plan::new()
                    .with_run([static_site_sentinel(root)])
                    .with_meta("build_output", root)
            }
        }
    }
}
