use crate::{
    detection::{
        builder::{DetectionBuilder, PriorityRule},
        helper::DetectionHelper,
        scoring::*,
        types::Candidate,
    },
    ecosystem::{framework::Framework, traits::LanguageDetector},
    fs::{FileSystem, TreeScan},
};

/// Detector for Ruby web projects.
pub struct RubyDetector {}

impl RubyDetector {
    pub fn new() -> Self {
        Self {}
    }

    fn rails(&self, fs: &dyn FileSystem) -> Candidate {
        DetectionBuilder::new(fs, Framework::Rails)
            .check_file(
                "config/application.rb",
                CONFIG_FILE,
                "config/application.rb found",
            )
            .check_dependency_priority(
                "Gemfile",
                &[
                    PriorityRule::new("gem 'rails'", DEPENDENCY, "rails gem"),
                    PriorityRule::new("gem \"rails\"", DEPENDENCY, "rails gem"),
                ],
            )
            .check_file("bin/rails", FILE_PATTERN, "bin/rails found")
            .when_identified(|b| {
                b.check_dir("app/controllers", DIRECTORY, "app/controllers")
            })
            .build()
    }

    fn sinatra(&self, fs: &dyn FileSystem) -> Candidate {
        DetectionBuilder::new(fs, Framework::Sinatra)
            .check_dependency("Gemfile", "sinatra", DEPENDENCY, "sinatra gem")
            .check_multiple_content(
                &["app.rb", "config.ru", "server.rb"],
                "sinatra",
                FILE_PATTERN,
                "sinatra required",
            )
            .build()
    }

    fn generic(&self, fs: &dyn FileSystem, files: &[String]) -> Candidate {
        DetectionBuilder::new(fs, Framework::Ruby)
            .check_file("Gemfile", BUILD_TOOL, "Gemfile found")
            .check_file("Gemfile.lock", LOCKFILE, "Gemfile.lock found")
            .check_file("config.ru", FILE_PATTERN, "config.ru found")
            .check_extension(files, ".rb", MINOR_INDICATOR, "Ruby sources")
            .build()
    }
}

impl LanguageDetector for RubyDetector {
    fn name(&self) -> &str {
        "ruby"
    }

    fn detect(&self, fs: &dyn FileSystem, scan: &TreeScan) -> Vec<Candidate> {
        // Jekyll sites are Ruby projects but belong to the static detector.
        if fs.read("Gemfile").contains("jekyll") {
            return vec![];
        }

        let specific = vec![self.rails(fs), self.sinatra(fs)];

        DetectionHelper::specific_or_generic(specific, 0.0, || {
            self.generic(fs, &scan.files)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::memory::MemoryFileSystem;

    fn detect(fs: &MemoryFileSystem) -> Vec<Candidate> {
        let scan = fs.scan_tree().unwrap();
        RubyDetector::new().detect(fs, &scan)
    }

    #[test]
    fn detects_rails() {
        let fs = MemoryFileSystem::new()
            .with_file(
                "Gemfile",
                "source 'https://rubygems.org'\ngem 'rails', '~> 7.1'",
            )
            .with_file("config/application.rb", "")
            .with_file("bin/rails", "")
            .with_file("app/controllers/application_controller.rb", "");

        let candidates = detect(&fs);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].framework, Framework::Rails);
        assert_eq!(
            candidates[0].score,
            CONFIG_FILE + DEPENDENCY + FILE_PATTERN + DIRECTORY
        );
    }

    #[test]
    fn detects_sinatra() {
        let fs = MemoryFileSystem::new()
            .with_file("Gemfile", "gem 'sinatra'")
            .with_file("app.rb", "require 'sinatra'");

        let candidates = detect(&fs);
        assert_eq!(candidates[0].framework, Framework::Sinatra);
    }

    #[test]
    fn controllers_directory_alone_is_not_rails() {
        let fs = MemoryFileSystem::new()
            .with_file("Gemfile", "gem 'hanami'")
            .with_file("app/controllers/home.rb", "");

        let candidates = detect(&fs);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].framework, Framework::Ruby);
    }

    #[test]
    fn generic_ruby_and_jekyll_skip() {
        let fs = MemoryFileSystem::new()
            .with_file("Gemfile", "gem 'nokogiri'")
            .with_file("main.rb", "");
        assert_eq!(detect(&fs)[0].framework, Framework::Ruby);

        let fs = MemoryFileSystem::new().with_file("Gemfile", "gem 'jekyll'");
        assert!(detect(&fs).is_empty());
    }
}
