use crate::{
    detection::{
        builder::DetectionBuilder, helper::DetectionHelper, scoring::*,
        types::Candidate,
    },
    ecosystem::{
        framework::Framework, python::PYTHON_MANIFESTS,
        traits::LanguageDetector,
    },
    fs::{FileSystem, TreeScan},
};

const APP_MODULES: &[&str] = &[
    "main.py",
    "app.py",
    "app/main.py",
    "src/main.py",
    "api/main.py",
    "wsgi.py",
    "application.py",
];

/// Detector for Python web projects.
pub struct PythonDetector {}

impl PythonDetector {
    pub fn new() -> Self {
        Self {}
    }

    fn django(&self, fs: &dyn FileSystem, files: &[String]) -> Candidate {
        DetectionBuilder::new(fs, Framework::Django)
            .check_file("manage.py", CONFIG_FILE, "manage.py found")
            .check_multiple_content(
                PYTHON_MANIFESTS,
                "django",
                DEPENDENCY,
                "django dependency",
            )
            .when_identified(|b| {
                b.check_condition(
                    files.iter().any(|f| {
                        f.ends_with("/settings.py") || f.contains("/settings/")
                    }),
                    FILE_PATTERN,
                    "settings module",
                )
                .check_condition(
                    files.iter().any(|f| f.ends_with("urls.py")),
                    MINOR_INDICATOR,
                    "urls.py found",
                )
            })
            .build()
    }

    fn fastapi(&self, fs: &dyn FileSystem) -> Candidate {
        DetectionBuilder::new(fs, Framework::FastApi)
            .check_multiple_content(
                PYTHON_MANIFESTS,
                "fastapi",
                DEPENDENCY,
                "fastapi dependency",
            )
            .check_multiple_content(
                APP_MODULES,
                "FastAPI(",
                FILE_PATTERN,
                "FastAPI app instance",
            )
            .when_identified(|b| {
                b.check_multiple_content(
                    PYTHON_MANIFESTS,
                    "uvicorn",
                    MINOR_INDICATOR,
                    "uvicorn dependency",
                )
            })
            .build()
    }

    fn flask(&self, fs: &dyn FileSystem) -> Candidate {
        DetectionBuilder::new(fs, Framework::Flask)
            .check_multiple_content(
                PYTHON_MANIFESTS,
                "flask",
                DEPENDENCY,
                "flask dependency",
            )
            .check_multiple_content(
                APP_MODULES,
                "Flask(__name__",
                FILE_PATTERN,
                "Flask app instance",
            )
            .build()
    }

    fn generic(&self, fs: &dyn FileSystem, files: &[String]) -> Candidate {
        DetectionBuilder::new(fs, Framework::Python)
            .check_any_file(
                &["requirements.txt", "pyproject.toml", "setup.py", "Pipfile"],
                BUILD_TOOL,
                "Python manifest found",
            )
            .check_any_file(
                &["uv.lock", "pdm.lock", "poetry.lock", "Pipfile.lock"],
                LOCKFILE,
                "lockfile found",
            )
            .check_extension(files, ".py", MINOR_INDICATOR, "Python sources")
            .build()
    }
}

impl LanguageDetector for PythonDetector {
    fn name(&self) -> &str {
        "python"
    }

    fn detect(&self, fs: &dyn FileSystem, scan: &TreeScan) -> Vec<Candidate> {
        let files = &scan.files;

        let specific = vec![
            self.django(fs, files),
            self.fastapi(fs),
            self.flask(fs),
        ];

        DetectionHelper::specific_or_generic(specific, 0.0, || {
            self.generic(fs, files)
        })
    }
}
