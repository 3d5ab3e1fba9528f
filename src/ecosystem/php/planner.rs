use crate::{
    detection::types::{Healthcheck, Plan},
    ecosystem::{
        framework::Framework,
        node::{package_json::PACKAGE_JSON, package_manager::PackageManager},
        traits::PlanBuilder,
    },
    fs::FileSystem,
};

const COMPOSER_INSTALL: &str =
    "composer install --no-dev --optimize-autoloader --no-interaction";

/// Plan builder for PHP frameworks.
pub struct PhpPlanner {}

impl PhpPlanner {
    pub fn new() -> Self {
        Self {}
    }

    /// Frontend assets bundled through the project's package.json.
    fn assets(&self, fs: &dyn FileSystem) -> Vec<String> {
        if !fs.has(PACKAGE_JSON) {
            return vec![];
        }

        let pm = PackageManager::detect(fs);
        vec![pm.install_command().to_string(), pm.build_command()]
    }

    fn laravel(&self, fs: &dyn FileSystem) -> Plan {
        Plan::new()
            .with_build([COMPOSER_INSTALL])
            .with_build(self.assets(fs))
            .with_build([
                "php artisan config:cache",
                "php artisan route:cache",
                "php artisan view:cache",
            ])
            .with_run(["php artisan serve --host=0.0.0.0 --port=8000"])
            .with_health(Healthcheck::at("/up"))
            .with_env(&["APP_KEY", "APP_ENV", "APP_URL", "DB_*"])
    }

    fn symfony(&self, fs: &dyn FileSystem) -> Plan {
        Plan::new()
            .with_build([COMPOSER_INSTALL])
            .with_build(self.assets(fs))
            .with_build(["php bin/console cache:clear --env=prod"])
            .with_run(["php -S 0.0.0.0:8000 -t public"])
            .with_env(&["APP_ENV", "APP_SECRET", "DATABASE_URL"])
    }

    fn generic(&self, fs: &dyn FileSystem) -> Plan {
        let build: &[&str] = if fs.has("composer.json") {
            &[COMPOSER_INSTALL]
        } else {
            &[]
        };

        let run = if fs.dir_exists("public") {
            "php -S 0.0.0.0:8000 -t public"
        } else {
            "php -S 0.0.0.0:8000"
        };

        Plan::new().with_build(build.iter().copied()).with_run([run])
    }
}

impl PlanBuilder for PhpPlanner {
    fn build_plan(&self, framework: Framework, fs: &dyn FileSystem) -> Plan {
        match framework {
            Framework::Laravel => self.laravel(fs),
            Framework::Symfony => self.symfony(fs),
            _ => self.generic(fs),
        }
    }
}
