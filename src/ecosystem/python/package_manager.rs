use std::fmt::Display;

use crate::fs::FileSystem;

/// Python dependency manager inferred from lockfiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PythonPackageManager {
    Uv,
    Pdm,
    Poetry,
    Pipenv,
    Pip,
}

impl PythonPackageManager {
    /// Lockfile sniffing in priority order; pip when nothing matches.
    pub fn detect(fs: &dyn FileSystem) -> Self {
        if fs.has("uv.lock") {
            return PythonPackageManager::Uv;
        }

        if fs.has("pdm.lock") {
            return PythonPackageManager::Pdm;
        }

        if fs.has("poetry.lock") {
            return PythonPackageManager::Poetry;
        }

        if fs.has("Pipfile.lock") || fs.has("Pipfile") {
            return PythonPackageManager::Pipenv;
        }

        PythonPackageManager::Pip
    }

    pub fn install_command(&self, fs: &dyn FileSystem) -> &'static str {
        match self {
            PythonPackageManager::Uv => "uv sync --frozen",
            PythonPackageManager::Pdm => "pdm install --prod",
            PythonPackageManager::Poetry => {
                "poetry install --no-interaction --no-root"
            }
            PythonPackageManager::Pipenv => "pipenv install --deploy",
            PythonPackageManager::Pip => {
                if !fs.has("requirements.txt") && fs.has("pyproject.toml") {
                    "pip install ."
                } else {
                    "pip install -r requirements.txt"
                }
            }
        }
    }

    /// Prefix running a command inside the managed environment, with its
    /// trailing space. Empty for pip.
    pub fn run_prefix(&self) -> &'static str {
        match self {
            PythonPackageManager::Uv => "uv run ",
            PythonPackageManager::Pdm => "pdm run ",
            PythonPackageManager::Poetry => "poetry run ",
            PythonPackageManager::Pipenv => "pipenv run ",
            PythonPackageManager::Pip => "",
        }
    }
}

impl Display for PythonPackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PythonPackageManager::Uv => f.write_str("uv"),
            PythonPackageManager::Pdm => f.write_str("pdm"),
            PythonPackageManager::Poetry => f.write_str("poetry"),
            PythonPackageManager::Pipenv => f.write_str("pipenv"),
            PythonPackageManager::Pip => f.write_str("pip"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::memory::MemoryFileSystem;

    #[test]
    fn lockfile_priority() {
        let fs = MemoryFileSystem::new()
            .with_file("poetry.lock", "")
            .with_file("uv.lock", "");
        assert_eq!(PythonPackageManager::detect(&fs), PythonPackageManager::Uv);

        let fs = MemoryFileSystem::new()
            .with_file("poetry.lock", "")
            .with_file("Pipfile", "");
        assert_eq!(
            PythonPackageManager::detect(&fs),
            PythonPackageManager::Poetry
        );
    }

    #[test]
    fn pipfile_without_lock_is_pipenv() {
        let fs = MemoryFileSystem::new().with_file("Pipfile", "");
        let pm = PythonPackageManager::detect(&fs);
        assert_eq!(pm, PythonPackageManager::Pipenv);
        assert_eq!(pm.run_prefix(), "pipenv run ");
    }

    #[test]
    fn pip_installs_from_requirements_or_project() {
        let fs = MemoryFileSystem::new().with_file("requirements.txt", "");
        let pm = PythonPackageManager::detect(&fs);
        assert_eq!(pm, PythonPackageManager::Pip);
        assert_eq!(pm.install_command(&fs), "pip install -r requirements.txt");
        assert_eq!(pm.run_prefix(), "");

        let fs = MemoryFileSystem::new().with_file("pyproject.toml", "");
        assert_eq!(pm.install_command(&fs), "pip install .");
    }
}
