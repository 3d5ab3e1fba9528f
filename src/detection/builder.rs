//! Fluent accumulator used by every framework detector.
//!
//! Each `check_*` adds its weight and signal only when the check matches,
//! and returns the builder for chaining:
//!
//! ```ignore
//! let candidate = DetectionBuilder::new(fs, Framework::NextJs)
//!     .check_any_file(&["next.config.js", "next.config.mjs"], CONFIG_FILE, "next.config found")
//!     .check_dependency("package.json", "\"next\"", DEPENDENCY, "next dependency")
//!     .build();
//! ```
//!
//! Checks only read from the filesystem. A missing or unreadable file fails
//! the check silently.

use crate::{
    detection::types::Candidate, ecosystem::framework::Framework,
    fs::FileSystem,
};

/// One rule of [`DetectionBuilder::check_dependency_priority`].
#[derive(Debug, Clone, Copy)]
pub struct PriorityRule<'r> {
    pub pattern: &'r str,
    pub score: f64,
    pub signal: &'r str,
}

impl<'r> PriorityRule<'r> {
    pub const fn new(pattern: &'r str, score: f64, signal: &'r str) -> Self {
        Self {
            pattern,
            score,
            signal,
        }
    }
}

/// Case-insensitive substring search.
pub fn content_contains(content: &str, needle: &str) -> bool {
    content.to_lowercase().contains(&needle.to_lowercase())
}

pub struct DetectionBuilder<'a> {
    fs: &'a dyn FileSystem,
    framework: Framework,
    language: String,
    score: f64,
    signals: Vec<String>,
}

impl<'a> DetectionBuilder<'a> {
    pub fn new(fs: &'a dyn FileSystem, framework: Framework) -> Self {
        Self {
            fs,
            framework,
            language: framework.language().to_string(),
            score: 0.0,
            signals: vec![],
        }
    }

    /// Override the language label (Docker tags itself with the project's
    /// dominant language).
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    fn matched(mut self, score: f64, signal: &str) -> Self {
        debug_assert!(score >= 0.0, "signal weights are never negative");
        self.score += score;
        self.signals.push(signal.to_string());
        self
    }

    pub fn check_file(self, path: &str, score: f64, signal: &str) -> Self {
        if self.fs.has(path) {
            return self.matched(score, signal);
        }
        self
    }

    /// Scores once if any of `paths` exists.
    pub fn check_any_file(
        self,
        paths: &[&str],
        score: f64,
        signal: &str,
    ) -> Self {
        if paths.iter().any(|p| self.fs.has(p)) {
            return self.matched(score, signal);
        }
        self
    }

    pub fn check_dir(self, path: &str, score: f64, signal: &str) -> Self {
        if self.fs.dir_exists(path) {
            return self.matched(score, signal);
        }
        self
    }

    /// Scores once if any of `paths` is a directory.
    pub fn check_any_dir(
        self,
        paths: &[&str],
        score: f64,
        signal: &str,
    ) -> Self {
        if paths.iter().any(|p| self.fs.dir_exists(p)) {
            return self.matched(score, signal);
        }
        self
    }

    /// Case-insensitive substring search within one file.
    pub fn check_dependency(
        self,
        file: &str,
        substring: &str,
        score: f64,
        signal: &str,
    ) -> Self {
        if content_contains(&self.fs.read(file), substring) {
            return self.matched(score, signal);
        }
        self
    }

    /// Alias of [`Self::check_dependency`] for non-manifest files.
    pub fn check_content(
        self,
        file: &str,
        substring: &str,
        score: f64,
        signal: &str,
    ) -> Self {
        self.check_dependency(file, substring, score, signal)
    }

    /// Substring search across several files, scoring once on first hit.
    pub fn check_multiple_content(
        self,
        files: &[&str],
        substring: &str,
        score: f64,
        signal: &str,
    ) -> Self {
        let found = files
            .iter()
            .any(|f| content_contains(&self.fs.read(f), substring));
        if found {
            return self.matched(score, signal);
        }
        self
    }

    pub fn check_extension(
        self,
        files: &[String],
        ext: &str,
        score: f64,
        signal: &str,
    ) -> Self {
        if crate::fs::contains_ext(files, ext) {
            return self.matched(score, signal);
        }
        self
    }

    /// Escape hatch for composite predicates.
    pub fn check_condition(
        self,
        condition: bool,
        score: f64,
        signal: &str,
    ) -> Self {
        if condition {
            return self.matched(score, signal);
        }
        self
    }

    /// Tries each rule in order and stops at the first match, so a more
    /// specific dependency (`@sveltejs/kit`) is not double-credited with the
    /// generic one (`svelte`).
    pub fn check_dependency_priority(
        self,
        file: &str,
        rules: &[PriorityRule<'_>],
    ) -> Self {
        let content = self.fs.read(file);
        match rules.iter().find(|r| content_contains(&content, r.pattern)) {
            Some(rule) => self.matched(rule.score, rule.signal),
            None => self,
        }
    }

    /// Runs the `layout` checks only when an identifying signal (config
    /// file, dependency) already matched. Names like `app/` or `routes/`
    /// are too common to claim a framework on their own.
    pub fn when_identified(self, layout: impl FnOnce(Self) -> Self) -> Self {
        if self.score > 0.0 {
            return layout(self);
        }
        self
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn build(self) -> Candidate {
        Candidate {
            framework: self.framework,
            name: self.framework.name().to_string(),
            language: self.language,
            score: self.score,
            signals: self.signals,
        }
    }
}
