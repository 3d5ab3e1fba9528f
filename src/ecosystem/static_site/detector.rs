use crate::{
    detection::{
        builder::DetectionBuilder, helper::DetectionHelper, scoring::*,
        types::Candidate,
    },
    ecosystem::{framework::Framework, traits::LanguageDetector},
    fs::{FileSystem, TreeScan},
};

pub const HUGO_CONFIGS: &[&str] = &["hugo.toml", "hugo.yaml", "hugo.json"];

/// Detector for static site generators and plain HTML sites.
pub struct StaticSiteDetector {}

impl StaticSiteDetector {
    pub fn new() -> Self {
        Self {}
    }

    fn hugo(&self, fs: &dyn FileSystem) -> Candidate {
        DetectionBuilder::new(fs, Framework::Hugo)
            .check_any_file(HUGO_CONFIGS, CONFIG_FILE, "hugo config found")
            .check_multiple_content(
                &["config.toml", "config.yaml"],
                "baseURL",
                FILE_PATTERN,
                "baseURL in site config",
            )
            .check_dir("content", DIRECTORY, "content directory")
            .check_dir("layouts", DIRECTORY, "layouts directory")
            .check_any_dir(
                &["themes", "archetypes"],
                MINOR_INDICATOR,
                "themes or archetypes directory",
            )
            .build()
    }

    fn jekyll(&self, fs: &dyn FileSystem) -> Candidate {
        DetectionBuilder::new(fs, Framework::Jekyll)
            .check_file("_config.yml", CONFIG_FILE, "_config.yml found")
            .check_dependency("Gemfile", "jekyll", DEPENDENCY, "jekyll gem")
            .when_identified(|b| {
                b.check_dir("_posts", DIRECTORY, "_posts directory").check_dir(
                    "_layouts",
                    MINOR_INDICATOR,
                    "_layouts directory",
                )
            })
            .build()
    }

    fn generic(&self, fs: &dyn FileSystem, files: &[String]) -> Candidate {
        DetectionBuilder::new(fs, Framework::StaticSite)
            .check_any_file(
                &["index.html", "public/index.html"],
                FILE_PATTERN,
                "index.html found",
            )
            .check_extension(files, ".css", MINOR_INDICATOR, "stylesheets")
            .build()
    }
}

impl LanguageDetector for StaticSiteDetector {
    fn name(&self) -> &str {
        "static"
    }

    fn detect(&self, fs: &dyn FileSystem, scan: &TreeScan) -> Vec<Candidate> {
        // content/ and layouts/ alone are too common to claim Hugo.
        let hugo = self.hugo(fs);
        let mut specific = vec![self.jekyll(fs)];
        if hugo.score >= STATIC_GENERATOR_THRESHOLD {
            specific.insert(0, hugo);
        }

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
        StaticSiteDetector::new().detect(fs, &scan)
    }

    #[test]
    fn detects_hugo() {
        let fs = MemoryFileSystem::new()
            .with_file("hugo.toml", "baseURL = 'https://example.org/'")
            .with_file("content/_index.md", "")
            .with_dir("layouts");

        let candidates = detect(&fs);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].framework, Framework::Hugo);
        assert_eq!(candidates[0].score, CONFIG_FILE + DIRECTORY + DIRECTORY);
    }

    #[test]
    fn hugo_layout_dirs_alone_fall_back_to_generic() {
        let fs = MemoryFileSystem::new()
            .with_file("content/post.md", "")
            .with_file("layouts/base.html", "")
            .with_file("index.html", "");

        let candidates = detect(&fs);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].framework, Framework::StaticSite);
    }

    #[test]
    fn detects_jekyll() {
        let fs = MemoryFileSystem::new()
            .with_file("_config.yml", "title: blog")
            .with_file("Gemfile", "gem \"jekyll\"")
            .with_file("_posts/2024-01-01-hello.md", "");

        let candidates = detect(&fs);
        assert_eq!(candidates[0].framework, Framework::Jekyll);
    }

    #[test]
    fn posts_directory_alone_is_not_jekyll() {
        let fs = MemoryFileSystem::new()
            .with_file("_posts/notes.md", "")
            .with_file("index.html", "");

        let candidates = detect(&fs);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].framework, Framework::StaticSite);
    }
}
