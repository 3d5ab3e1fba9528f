use crate::{
    detection::{
        builder::DetectionBuilder, helper::DetectionHelper, scoring::*,
        types::Candidate,
    },
    ecosystem::{framework::Framework, traits::LanguageDetector},
    fs::{FileSystem, TreeScan},
};

/// Detector for Elixir projects.
pub struct ElixirDetector {}

impl ElixirDetector {
    pub fn new() -> Self {
        Self {}
    }

    fn phoenix(&self, fs: &dyn FileSystem) -> Candidate {
        let web_dir = fs.list_dirs("lib").iter().any(|d| d.ends_with("_web"));

        DetectionBuilder::new(fs, Framework::Phoenix)
            .check_dependency("mix.exs", ":phoenix", DEPENDENCY, "phoenix dep")
            .check_file("config/config.exs", CONFIG_FILE, "config.exs found")
            .check_condition(web_dir, DIRECTORY, "lib/*_web directory")
            .check_dir("assets", MINOR_INDICATOR, "assets directory")
            .build()
    }

    fn generic(&self, fs: &dyn FileSystem, files: &[String]) -> Candidate {
        DetectionBuilder::new(fs, Framework::Elixir)
            .check_file("mix.exs", BUILD_TOOL, "mix.exs found")
            .check_file("mix.lock", LOCKFILE, "mix.lock found")
            .check_extension(files, ".ex", MINOR_INDICATOR, "Elixir sources")
            .build()
    }
}

impl LanguageDetector for ElixirDetector {
    fn name(&self) -> &str {
        "elixir"
    }

    fn detect(&self, fs: &dyn FileSystem, scan: &TreeScan) -> Vec<Candidate> {
        // Phoenix layouts without the dependency are not Phoenix.
        let specific = if fs.read("mix.exs").contains(":phoenix") {
            vec![self.phoenix(fs)]
        } else {
            vec![]
        };

        DetectionHelper::specific_or_generic(specific, 0.0, || {
            self.generic(fs, &scan.files)
        })
    }
}
