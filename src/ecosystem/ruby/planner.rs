use crate::{
    detection::types::{Healthcheck, Plan},
    ecosystem::{framework::Framework, traits::PlanBuilder},
    fs::FileSystem,
};

const BUNDLE_INSTALL: &str = "bundle install";

/// Plan builder for Ruby frameworks.
pub struct RubyPlanner {}

impl RubyPlanner {
    pub fn new() -> Self {
        Self {}
    }

    fn rails(&self, fs: &dyn FileSystem) -> Plan {
        let run = if fs.has("config/puma.rb") {
            "bundle exec puma -C config/puma.rb"
        } else {
            "bundle exec rails server -b 0.0.0.0 -p 3000"
        };

        let mut build = vec![BUNDLE_INSTALL];
        if fs.dir_exists("app/assets") || fs.dir_exists("app/javascript") {
            build.push("bundle exec rails assets:precompile");
        }

        Plan::new()
            .with_build(build)
            .with_run([run])
            .with_health(Healthcheck::at("/up"))
            .with_env(&[
                "RAILS_ENV",
                "RAILS_MASTER_KEY",
                "SECRET_KEY_BASE",
                "DATABASE_URL",
                "PORT",
            ])
    }

    fn rack(&self, fs: &dyn FileSystem) -> Plan {
        let run = if fs.has("config.ru") {
            "bundle exec rackup -o 0.0.0.0 -p 4567".to_string()
        } else {
            let script = ["app.rb", "server.rb", "main.rb"]
                .into_iter()
                .find(|f| fs.has(f))
                .unwrap_or("app.rb");
            format!("bundle exec ruby {script}")
        };

        Plan::new()
            .with_build([BUNDLE_INSTALL])
            .with_run([run])
            .with_env(&["RACK_ENV", "PORT"])
    }
}

impl PlanBuilder for RubyPlanner {
    fn build_plan(&self, framework: Framework, fs: &dyn FileSystem) -> Plan {
        match framework {
            Framework::Rails => self.rails(fs),
            _ => self.rack(fs),
        }
    }
}
