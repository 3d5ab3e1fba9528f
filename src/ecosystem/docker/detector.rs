use crate::{
    detection::{
        builder::DetectionBuilder, helper::DetectionHelper,
        language::dominant_language, scoring::*, types::Candidate,
    },
    ecosystem::{framework::Framework, traits::LanguageDetector},
    fs::{FileSystem, TreeScan},
};

/// Compose file names, in the order `docker compose` looks them up.
pub const COMPOSE_FILES: &[&str] = &[
    "compose.yaml",
    "compose.yml",
    "docker-compose.yaml",
    "docker-compose.yml",
];

/// Cross-cutting container detector.
pub struct DockerDetector {}

impl DockerDetector {
    pub fn new() -> Self {
        Self {}
    }

    fn compose(&self, fs: &dyn FileSystem) -> Candidate {
        DetectionBuilder::new(fs, Framework::DockerCompose)
            .check_any_file(COMPOSE_FILES, DOCKER_COMPOSE, "compose file found")
            .build()
    }

    fn dockerfile(&self, fs: &dyn FileSystem, language: &str) -> Candidate {
        DetectionBuilder::new(fs, Framework::Dockerfile)
            .with_language(language)
            .check_file("Dockerfile", CONFIG_FILE, "Dockerfile found")
            .check_file(
                ".dockerignore",
                MINOR_INDICATOR,
                ".dockerignore found",
            )
            .build()
    }
}

impl LanguageDetector for DockerDetector {
    fn name(&self) -> &str {
        "docker"
    }

    fn detect(&self, fs: &dyn FileSystem, scan: &TreeScan) -> Vec<Candidate> {
        let language = dominant_language(&scan.extensions)
            .unwrap_or(Framework::Dockerfile.language());

        DetectionHelper::scored(vec![
            self.compose(fs),
            self.dockerfile(fs, language),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::memory::MemoryFileSystem;

    fn detect(fs: &MemoryFileSystem) -> Vec<Candidate> {
        let scan = fs.scan_tree().unwrap();
        DockerDetector::new().detect(fs, &scan)
    }

    #[test]
    fn dockerfile_is_tagged_with_dominant_language() {
        let fs = MemoryFileSystem::new()
            .with_file("Dockerfile", "FROM python:3.12")
            .with_file("app.py", "")
            .with_file("worker.py", "");

        let candidates = detect(&fs);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].framework, Framework::Dockerfile);
        assert_eq!(candidates[0].language, "Python");
        assert_eq!(candidates[0].score, CONFIG_FILE);
    }

    #[test]
    fn dockerfile_without_sources_is_docker() {
        let fs = MemoryFileSystem::new().with_file("Dockerfile", "FROM nginx");
        assert_eq!(detect(&fs)[0].language, "Docker");
    }

    #[test]
    fn compose_scores_above_any_config_file() {
        let fs = MemoryFileSystem::new()
            .with_file("docker-compose.yml", "services: {}")
            .with_file("Dockerfile", "");

        let candidates = detect(&fs);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].framework, Framework::DockerCompose);
        assert!(candidates[0].score > CONFIG_FILE);
    }
}
