//! Django project layout helpers: ASGI/WSGI classification and project
//! package discovery.

use log::*;
use regex::Regex;
use std::{fmt::Display, sync::LazyLock};

use crate::{
    detection::builder::content_contains,
    ecosystem::python::PYTHON_MANIFESTS, fs::FileSystem,
};

/// Project name used when the settings package cannot be located.
pub const PLACEHOLDER_PROJECT: &str = "myproject";

/// Directories commonly holding the Django settings package.
const COMMON_PROJECT_DIRS: &[&str] =
    &["config", "core", "project", "app", "src"];

const ASGI_SERVERS: &[&str] = &["uvicorn", "daphne", "channels"];

static SETTINGS_MODULE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"DJANGO_SETTINGS_MODULE["']\s*,\s*["']([\w.]+)["']"#)
        .unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DjangoServerType {
    Asgi,
    Wsgi,
}

impl Display for DjangoServerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DjangoServerType::Asgi => f.write_str("asgi"),
            DjangoServerType::Wsgi => f.write_str("wsgi"),
        }
    }
}

/// Package named by `DJANGO_SETTINGS_MODULE` in manage.py, e.g. "mysite"
/// for "mysite.settings".
fn settings_package(fs: &dyn FileSystem) -> Option<String> {
    let manage = fs.read("manage.py");
    let caps = SETTINGS_MODULE_REGEX.captures(&manage)?;
    caps[1].split('.').next().map(String::from)
}

/// Candidate project package directories: the manage.py settings package,
/// the common layout names, then every other top-level directory.
fn project_dirs(fs: &dyn FileSystem) -> Vec<String> {
    let mut dirs: Vec<String> = vec![];

    let listed = settings_package(fs)
        .into_iter()
        .chain(COMMON_PROJECT_DIRS.iter().map(|d| d.to_string()))
        .chain(fs.list_dirs("."));

    for dir in listed {
        if !dirs.contains(&dir) && fs.dir_exists(&dir) {
            dirs.push(dir);
        }
    }

    dirs
}

fn settings_files(dir: &str) -> [String; 3] {
    [
        format!("{dir}/settings.py"),
        format!("{dir}/settings/base.py"),
        format!("{dir}/settings/__init__.py"),
    ]
}

impl DjangoServerType {
    /// Five-tier cascade, strongest evidence first:
    /// 1. asgi.py at the root
    /// 2. asgi.py in a project package
    /// 3. ASGI_APPLICATION in a settings file
    /// 4. an ASGI server in a dependency manifest
    /// 5. wsgi.py at the root or in a project package
    ///
    /// WSGI when nothing matches.
    pub fn detect(fs: &dyn FileSystem) -> Self {
        if fs.has("asgi.py") {
            debug!("django: asgi.py at project root");
            return DjangoServerType::Asgi;
        }

        let dirs = project_dirs(fs);

        if let Some(dir) = dirs.iter().find(|d| fs.has(&format!("{d}/asgi.py")))
        {
            debug!("django: {dir}/asgi.py found");
            return DjangoServerType::Asgi;
        }

        let mut settings = vec!["settings.py".to_string()];
        settings.extend(dirs.iter().flat_map(|d| settings_files(d)));
        if settings
            .iter()
            .any(|f| fs.read(f).contains("ASGI_APPLICATION"))
        {
            debug!("django: ASGI_APPLICATION set in settings");
            return DjangoServerType::Asgi;
        }

        for manifest in PYTHON_MANIFESTS {
            let content = fs.read(manifest);
            if let Some(server) =
                ASGI_SERVERS.iter().find(|s| content_contains(&content, s))
            {
                debug!("django: {server} listed in {manifest}");
                return DjangoServerType::Asgi;
            }
        }

        if fs.has("wsgi.py")
            || dirs.iter().any(|d| fs.has(&format!("{d}/wsgi.py")))
        {
            debug!("django: wsgi.py found");
        }

        DjangoServerType::Wsgi
    }
}

/// Name of the package holding settings/asgi/wsgi, if one can be found.
pub fn detect_project_name(fs: &dyn FileSystem) -> Option<String> {
    if let Some(package) = settings_package(fs) {
        if fs.dir_exists(&package) {
            return Some(package);
        }
    }

    project_dirs(fs).into_iter().find(|dir| {
        ["settings.py", "settings/__init__.py", "asgi.py", "wsgi.py"]
            .iter()
            .any(|f| fs.has(&format!("{dir}/{f}")))
    })
}

/// Process-manager invocation serving the project on port 8000.
pub fn django_run_command(
    server_type: DjangoServerType,
    project: Option<&str>,
) -> String {
    let project = project.unwrap_or(PLACEHOLDER_PROJECT);
    match server_type {
        DjangoServerType::Asgi => format!(
            "uvicorn {project}.asgi:application --host 0.0.0.0 --port 8000"
        ),
        DjangoServerType::Wsgi => format!(
            "gunicorn {project}.wsgi:application --bind 0.0.0.0:8000"
        ),
    }
}
