use crate::{
    detection::{
        builder::{DetectionBuilder, content_contains},
        helper::DetectionHelper,
        scoring::*,
        types::Candidate,
    },
    ecosystem::{
        framework::Framework,
        java::build_tool::{BUILD_FILES, JavaBuildTool},
        traits::LanguageDetector,
    },
    fs::{FileSystem, TreeScan},
};

const APPLICATION_CONFIGS: &[&str] = &[
    "src/main/resources/application.properties",
    "src/main/resources/application.yml",
    "src/main/resources/application.yaml",
];

/// Detector for JVM projects.
pub struct JavaDetector {}

impl JavaDetector {
    pub fn new() -> Self {
        Self {}
    }

    /// Framework candidate scored only when the build files name its
    /// dependency.
    fn jvm_framework(
        &self,
        fs: &dyn FileSystem,
        manifests: &str,
        framework: Framework,
        dependency: &str,
        config_marker: Option<&str>,
    ) -> Candidate {
        let builder = DetectionBuilder::new(fs, framework);
        if !content_contains(manifests, dependency) {
            return builder.build();
        }

        let builder = builder
            .check_condition(
                true,
                DEPENDENCY,
                &format!("{dependency} dependency"),
            )
            .check_any_file(BUILD_FILES, BUILD_TOOL, "build file found");

        let builder = match config_marker {
            Some(marker) => builder.check_multiple_content(
                APPLICATION_CONFIGS,
                marker,
                CONFIG_FILE,
                "application config",
            ),
            None => builder.check_any_file(
                APPLICATION_CONFIGS,
                CONFIG_FILE,
                "application config",
            ),
        };

        builder.build()
    }

    fn generic(&self, fs: &dyn FileSystem, files: &[String]) -> Candidate {
        DetectionBuilder::new(fs, Framework::Java)
            .check_any_file(BUILD_FILES, BUILD_TOOL, "build file found")
            .check_any_file(
                &["mvnw", "gradlew"],
                MINOR_INDICATOR,
                "build wrapper found",
            )
            .check_condition(
                crate::fs::contains_ext(files, ".java")
                    || crate::fs::contains_ext(files, ".kt"),
                MINOR_INDICATOR,
                "JVM sources",
            )
            .build()
    }
}

impl LanguageDetector for JavaDetector {
    fn name(&self) -> &str {
        "java"
    }

    fn detect(&self, fs: &dyn FileSystem, scan: &TreeScan) -> Vec<Candidate> {
        let manifests = JavaBuildTool::manifests(fs);

        let specific = vec![
            self.jvm_framework(
                fs,
                &manifests,
                Framework::SpringBoot,
                "org.springframework.boot",
                None,
            ),
            self.jvm_framework(
                fs,
                &manifests,
                Framework::Quarkus,
                "io.quarkus",
                Some("quarkus."),
            ),
        ];

        DetectionHelper::specific_or_generic(specific, 0.0, || {
            self.generic(fs, &scan.files)
        })
    }
}
