//! Read-only filesystem abstraction used by every detector.
//!
//! Detectors never touch the OS directly. They receive a [`FileSystem`]
//! rooted at the project directory and address files with forward-slash
//! paths relative to that root (`"package.json"`, `"config/asgi.py"`).
//! Missing or unreadable files are indistinguishable from absent ones: the
//! only hard failure is [`FileSystem::scan_tree`] on an inaccessible root.

#[cfg(test)]
pub mod memory;

use log::*;
use std::{
    borrow::Cow,
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};
use walkdir::{DirEntry, WalkDir};

use crate::result::{LaunchpadError, Result};

/// Directories never descended into while scanning a project tree.
pub const IGNORED_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    ".venv",
    "venv",
    "__pycache__",
    "dist",
    "build",
    ".next",
    ".nuxt",
    ".svelte-kit",
    "target",
];

/// Result of a single recursive walk of the project tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeScan {
    /// Relative paths of every regular file, sorted
    pub files: Vec<String>,
    /// Number of files per lowercase extension (without the leading dot)
    pub extensions: BTreeMap<String, usize>,
}

impl TreeScan {
    /// Record a file found during the walk.
    pub fn record(&mut self, path: &str) {
        if let Some(ext) = Path::new(path).extension().and_then(|e| e.to_str())
        {
            *self.extensions.entry(ext.to_lowercase()).or_default() += 1;
        }
        self.files.push(path.to_string());
    }

    /// Iterate over files ending with the given extension.
    pub fn files_with_ext<'a>(
        &'a self,
        ext: &'a str,
    ) -> impl Iterator<Item = &'a String> + 'a {
        self.files.iter().filter(move |f| has_ext(f, ext))
    }
}

/// Abstraction over a project tree.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// True when `path` exists and is a regular file.
    fn has(&self, path: &str) -> bool;

    /// Full content of `path`, or an empty string when missing/unreadable.
    fn read(&self, path: &str) -> String;

    /// True when `path` exists and is a directory.
    fn dir_exists(&self, path: &str) -> bool;

    /// Sorted names of the immediate subdirectories of `path`, skipping
    /// ignored directories.
    fn list_dirs(&self, path: &str) -> Vec<String>;

    /// Sorted names of the regular files directly inside `path`.
    fn list_files(&self, path: &str) -> Vec<String>;

    /// Walk the whole tree once, skipping [`IGNORED_DIRS`].
    fn scan_tree(&self) -> Result<TreeScan>;
}

/// True if any path in `files` ends with `ext` (case-insensitive). The
/// extension may be given with or without the leading dot.
pub fn contains_ext(files: &[String], ext: &str) -> bool {
    files.iter().any(|f| has_ext(f, ext))
}

fn has_ext(file: &str, ext: &str) -> bool {
    let ext = ext.trim_start_matches('.').to_lowercase();
    file.to_lowercase().ends_with(&format!(".{ext}"))
}

/// Normalizes a relative path: backslashes become forward slashes and
/// `.` segments are dropped. Borrows when nothing needs to change.
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if !path.contains('\\') && !path.starts_with("./") && !path.contains("/./")
    {
        return Cow::Borrowed(path);
    }

    let unified = path.replace('\\', "/");
    let segments = unified
        .split('/')
        .filter(|segment| *segment != ".")
        .collect::<Vec<&str>>();

    Cow::Owned(segments.join("/"))
}

/// [`FileSystem`] backed by the local disk.
#[derive(Debug, Clone)]
pub struct LocalFileSystem {
    root: PathBuf,
    ignore_dirs: Vec<String>,
}

impl LocalFileSystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ignore_dirs: IGNORED_DIRS.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Skip additional directory names while scanning.
    pub fn with_ignore_dirs(mut self, dirs: &[String]) -> Self {
        for dir in dirs {
            if !self.ignore_dirs.contains(dir) {
                self.ignore_dirs.push(dir.clone());
            }
        }
        self
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(normalize_path(path).as_ref())
    }

    fn is_ignored_name(&self, name: &str) -> bool {
        self.ignore_dirs.iter().any(|d| d == name)
    }

    fn is_ignored(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.is_ignored_name(name))
    }
}

impl FileSystem for LocalFileSystem {
    fn has(&self, path: &str) -> bool {
        self.resolve(path).is_file()
    }

    fn read(&self, path: &str) -> String {
        fs::read_to_string(self.resolve(path)).unwrap_or_default()
    }

    fn dir_exists(&self, path: &str) -> bool {
        self.resolve(path).is_dir()
    }

    fn list_dirs(&self, path: &str) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.resolve(path)) else {
            return vec![];
        };

        let mut dirs = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().to_str().map(String::from))
            .filter(|name| !self.is_ignored_name(name))
            .collect::<Vec<String>>();

        dirs.sort();
        dirs
    }

    fn list_files(&self, path: &str) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.resolve(path)) else {
            return vec![];
        };

        let mut files = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().to_str().map(String::from))
            .collect::<Vec<String>>();

        files.sort();
        files
    }

    fn scan_tree(&self) -> Result<TreeScan> {
        // An unreadable root is the one failure detection cannot recover from
        fs::read_dir(&self.root)
            .map_err(|e| LaunchpadError::scan_failed(&self.root, e))?;

        let mut scan = TreeScan::default();

        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.is_ignored(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("skipping unreadable entry: {e}");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(&self.root) else {
                continue;
            };

            let relative = relative.to_string_lossy();
            scan.record(&normalize_path(&relative));
        }

        debug!(
            "scanned {} files under {}",
            scan.files.len(),
            self.root.display()
        );

        Ok(scan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, path: &str, content: &str) {
        let full = root.join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
    }

    #[test]
    fn contains_ext_is_case_insensitive() {
        let files = vec!["src/Main.GO".to_string(), "README".to_string()];
        assert!(contains_ext(&files, ".go"));
        assert!(contains_ext(&files, "go"));
        assert!(!contains_ext(&files, "rs"));
    }

    #[test]
    fn contains_ext_does_not_match_partial_names() {
        let files = vec!["docs/rust".to_string()];
        assert!(!contains_ext(&files, "rs"));
    }

    #[test]
    fn normalize_path_borrows_clean_paths() {
        assert!(matches!(normalize_path("src/app.py"), Cow::Borrowed(_)));
        assert_eq!(normalize_path(".\\src\\app.py"), "src/app.py");
    }

    #[test]
    fn normalize_path_only_drops_dot_segments() {
        assert_eq!(normalize_path("./config/./asgi.py"), "config/asgi.py");
        assert_eq!(normalize_path("././main.go"), "main.go");
        assert_eq!(normalize_path("v1./x"), "v1./x");
        assert_eq!(normalize_path("./v1./x"), "v1./x");
    }

    #[test]
    fn read_returns_empty_string_for_missing_file() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFileSystem::new(tmp.path());
        assert_eq!(fs.read("missing.txt"), "");
        assert!(!fs.has("missing.txt"));
    }

    #[test]
    fn has_is_false_for_directories() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("app")).unwrap();
        let fs = LocalFileSystem::new(tmp.path());
        assert!(!fs.has("app"));
        assert!(fs.dir_exists("app"));
    }

    #[test]
    fn scan_tree_skips_noise_directories() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "package.json", "{}");
        write(tmp.path(), "src/index.ts", "");
        write(tmp.path(), "node_modules/next/index.js", "");
        write(tmp.path(), ".git/HEAD", "");
        write(tmp.path(), "dist/bundle.js", "");

        let scan = LocalFileSystem::new(tmp.path()).scan_tree().unwrap();

        assert_eq!(scan.files, vec!["package.json", "src/index.ts"]);
        assert_eq!(scan.extensions.get("json"), Some(&1));
        assert_eq!(scan.extensions.get("ts"), Some(&1));
        assert_eq!(scan.extensions.get("js"), None);
    }

    #[test]
    fn scan_tree_honours_extra_ignore_dirs() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "main.go", "");
        write(tmp.path(), "fixtures/app.py", "");

        let scan = LocalFileSystem::new(tmp.path())
            .with_ignore_dirs(&["fixtures".to_string()])
            .scan_tree()
            .unwrap();

        assert_eq!(scan.files, vec!["main.go"]);
    }

    #[test]
    fn scan_tree_counts_lowercase_extensions() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "A.PY", "");
        write(tmp.path(), "b.py", "");

        let scan = LocalFileSystem::new(tmp.path()).scan_tree().unwrap();
        assert_eq!(scan.extensions.get("py"), Some(&2));
    }

    #[test]
    fn scan_tree_fails_for_missing_root() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");

        let result = LocalFileSystem::new(&missing).scan_tree();
        assert!(matches!(result, Err(LaunchpadError::ScanFailed { .. })));
    }

    #[test]
    fn list_dirs_returns_sorted_subdirectories() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "zeta/settings.py", "");
        write(tmp.path(), "alpha/settings.py", "");
        write(tmp.path(), "node_modules/x/index.js", "");
        write(tmp.path(), "manage.py", "");

        let fs = LocalFileSystem::new(tmp.path());
        assert_eq!(fs.list_dirs("."), vec!["alpha", "zeta"]);
        assert!(fs.list_dirs("missing").is_empty());
    }

    #[test]
    fn list_files_skips_directories() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "Web.csproj", "");
        write(tmp.path(), "Program.cs", "");
        write(tmp.path(), "Controllers/Home.cs", "");

        let fs = LocalFileSystem::new(tmp.path());
        assert_eq!(fs.list_files("."), vec!["Program.cs", "Web.csproj"]);
    }
}
