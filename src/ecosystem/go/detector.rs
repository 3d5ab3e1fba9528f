use crate::{
    detection::{
        builder::DetectionBuilder, helper::DetectionHelper, scoring::*,
        types::Candidate,
    },
    ecosystem::{framework::Framework, traits::LanguageDetector},
    fs::{FileSystem, TreeScan},
};

/// Web frameworks and the module path they are imported by.
const WEB_FRAMEWORKS: &[(Framework, &str)] = &[
    (Framework::Gin, "github.com/gin-gonic/gin"),
    (Framework::Echo, "github.com/labstack/echo"),
    (Framework::Fiber, "github.com/gofiber/fiber"),
    (Framework::Chi, "github.com/go-chi/chi"),
];

/// Upper bound on source files read when looking for imports.
const MAX_SOURCES: usize = 200;

/// Detector for Go projects.
pub struct GoDetector {}

impl GoDetector {
    pub fn new() -> Self {
        Self {}
    }

    fn sources(&self, fs: &dyn FileSystem, scan: &TreeScan) -> Vec<String> {
        scan.files_with_ext("go")
            .filter(|f| !f.starts_with("vendor/"))
            .take(MAX_SOURCES)
            .map(|f| fs.read(f))
            .collect()
    }

    fn web_framework(
        &self,
        fs: &dyn FileSystem,
        sources: &[String],
        framework: Framework,
        module: &str,
    ) -> Candidate {
        let imported = sources.iter().any(|src| src.contains(module));

        DetectionBuilder::new(fs, framework)
            .check_dependency(
                "go.mod",
                module,
                DEPENDENCY,
                &format!("{module} in go.mod"),
            )
            .check_condition(
                imported,
                FILE_PATTERN,
                &format!("{module} imported"),
            )
            // go.mod only counts toward a framework the sources import.
            .check_condition(
                imported && fs.has("go.mod"),
                BUILD_TOOL,
                "go.mod found",
            )
            .build()
    }

    fn generic(&self, fs: &dyn FileSystem, files: &[String]) -> Candidate {
        DetectionBuilder::new(fs, Framework::Go)
            .check_file("go.mod", BUILD_TOOL, "go.mod found")
            .check_file("go.sum", LOCKFILE, "go.sum found")
            .check_file("main.go", FILE_PATTERN, "main.go found")
            .check_extension(files, ".go", MINOR_INDICATOR, "Go sources")
            .build()
    }
}

impl LanguageDetector for GoDetector {
    fn name(&self) -> &str {
        "go"
    }

    fn detect(&self, fs: &dyn FileSystem, scan: &TreeScan) -> Vec<Candidate> {
        let sources = self.sources(fs, scan);

        let specific = WEB_FRAMEWORKS
            .iter()
            .map(|(framework, module)| {
                self.web_framework(fs, &sources, *framework, module)
            })
            .collect();

        DetectionHelper::specific_or_generic(
            specific,
            WEB_FRAMEWORK_THRESHOLD,
            || self.generic(fs, &scan.files),
        )
    }
}
