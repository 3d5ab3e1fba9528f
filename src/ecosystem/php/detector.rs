use crate::{
    detection::{
        builder::DetectionBuilder, helper::DetectionHelper, scoring::*,
        types::Candidate,
    },
    ecosystem::{framework::Framework, traits::LanguageDetector},
    fs::{FileSystem, TreeScan},
};

/// Detector for PHP projects.
pub struct PhpDetector {}

impl PhpDetector {
    pub fn new() -> Self {
        Self {}
    }

    fn laravel(&self, fs: &dyn FileSystem) -> Candidate {
        DetectionBuilder::new(fs, Framework::Laravel)
            .check_file("artisan", CONFIG_FILE, "artisan found")
            .check_dependency(
                "composer.json",
                "laravel/framework",
                DEPENDENCY,
                "laravel/framework dependency",
            )
            .when_identified(|b| {
                b.check_file(
                    "bootstrap/app.php",
                    FILE_PATTERN,
                    "bootstrap/app.php",
                )
                .check_dir("routes", DIRECTORY, "routes directory")
            })
            .build()
    }

    fn symfony(&self, fs: &dyn FileSystem) -> Candidate {
        DetectionBuilder::new(fs, Framework::Symfony)
            .check_file("config/bundles.php", CONFIG_FILE, "bundles.php found")
            .check_dependency(
                "composer.json",
                "symfony/framework-bundle",
                DEPENDENCY,
                "symfony/framework-bundle dependency",
            )
            .check_file("symfony.lock", LOCKFILE, "symfony.lock found")
            .when_identified(|b| {
                b.check_file("bin/console", FILE_PATTERN, "bin/console found")
            })
            .build()
    }

    fn generic(&self, fs: &dyn FileSystem, files: &[String]) -> Candidate {
        DetectionBuilder::new(fs, Framework::Php)
            .check_file("composer.json", BUILD_TOOL, "composer.json found")
            .check_file("composer.lock", LOCKFILE, "composer.lock found")
            .check_any_file(
                &["index.php", "public/index.php"],
                FILE_PATTERN,
                "index.php found",
            )
            .check_extension(files, ".php", MINOR_INDICATOR, "PHP sources")
            .build()
    }
}

impl LanguageDetector for PhpDetector {
    fn name(&self) -> &str {
        "php"
    }

    fn detect(&self, fs: &dyn FileSystem, scan: &TreeScan) -> Vec<Candidate> {
        let specific = vec![self.laravel(fs), self.symfony(fs)];

        DetectionHelper::specific_or_generic(specific, 0.0, || {
            self.generic(fs, &scan.files)
        })
    }
}
