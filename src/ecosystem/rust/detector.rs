use crate::{
    detection::{
        builder::DetectionBuilder, helper::DetectionHelper, scoring::*,
        types::Candidate,
    },
    ecosystem::{framework::Framework, traits::LanguageDetector},
    fs::{FileSystem, TreeScan},
};

const CARGO_TOML: &str = "Cargo.toml";

/// Web frameworks and the crate name they are depended on by.
const WEB_FRAMEWORKS: &[(Framework, &str)] = &[
    (Framework::Axum, "axum"),
    (Framework::ActixWeb, "actix-web"),
    (Framework::Rocket, "rocket"),
];

/// Detector for Rust projects.
pub struct RustDetector {}

impl RustDetector {
    pub fn new() -> Self {
        Self {}
    }

    fn web_framework(
        &self,
        fs: &dyn FileSystem,
        files: &[String],
        framework: Framework,
        krate: &str,
    ) -> Candidate {
        let builder = DetectionBuilder::new(fs, framework).check_dependency(
            CARGO_TOML,
            krate,
            DEPENDENCY,
            &format!("{krate} dependency"),
        );

        // Manifest and sources only count toward a framework the manifest
        // actually names.
        if builder.score() == 0.0 {
            return builder.build();
        }

        builder
            .check_file(CARGO_TOML, BUILD_TOOL, "Cargo.toml found")
            .check_dependency(
                CARGO_TOML,
                "tokio",
                MINOR_INDICATOR,
                "tokio runtime",
            )
            .check_extension(files, ".rs", MINOR_INDICATOR, "Rust sources")
            .build()
    }

    fn generic(&self, fs: &dyn FileSystem, files: &[String]) -> Candidate {
        DetectionBuilder::new(fs, Framework::Rust)
            .check_file(CARGO_TOML, BUILD_TOOL, "Cargo.toml found")
            .check_file("Cargo.lock", LOCKFILE, "Cargo.lock found")
            .check_file("src/main.rs", FILE_PATTERN, "src/main.rs found")
            .check_extension(files, ".rs", MINOR_INDICATOR, "Rust sources")
            .build()
    }
}

impl LanguageDetector for RustDetector {
    fn name(&self) -> &str {
        "rust"
    }

    fn detect(&self, fs: &dyn FileSystem, scan: &TreeScan) -> Vec<Candidate> {
        let specific = WEB_FRAMEWORKS
            .iter()
            .map(|(framework, krate)| {
                self.web_framework(fs, &scan.files, *framework, krate)
            })
            .collect();

        DetectionHelper::specific_or_generic(
            specific,
            WEB_FRAMEWORK_THRESHOLD,
            || self.generic(fs, &scan.files),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::memory::MemoryFileSystem;

    fn detect(fs: &MemoryFileSystem) -> Vec<Candidate> {
        let scan = fs.scan_tree().unwrap();
        RustDetector::new().detect(fs, &scan)
    }

    #[test]
    fn detects_axum() {
        let fs = MemoryFileSystem::new()
            .with_file(
                "Cargo.toml",
                "[package]\nname = \"api\"\n\n[dependencies]\naxum = \"0.7\"\ntokio = { version = \"1\" }",
            )
            .with_file("src/main.rs", "");

        let candidates = detect(&fs);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].framework, Framework::Axum);
        assert_eq!(
            candidates[0].score,
            DEPENDENCY + BUILD_TOOL + MINOR_INDICATOR + MINOR_INDICATOR
        );
        assert!(candidates[0].score >= WEB_FRAMEWORK_THRESHOLD);
    }

    #[test]
    fn cli_crate_is_generic_rust() {
        let fs = MemoryFileSystem::new()
            .with_file("Cargo.toml", "[package]\nname = \"tool\"")
            .with_file("Cargo.lock", "")
            .with_file("src/main.rs", "");

        let candidates = detect(&fs);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].framework, Framework::Rust);
    }
}
