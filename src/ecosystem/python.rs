pub mod detector;
pub mod django;
pub mod package_manager;
pub mod planner;

/// Dependency manifests searched for package names.
pub const PYTHON_MANIFESTS: &[&str] = &[
    "requirements.txt",
    "pyproject.toml",
    "Pipfile",
    "setup.py",
    "requirements/base.txt",
    "requirements/production.txt",
    "requirements/prod.txt",
];
