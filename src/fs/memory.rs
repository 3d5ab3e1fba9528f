//! In-memory project tree for detector tests.

use std::collections::{BTreeMap, BTreeSet};

use super::{FileSystem, IGNORED_DIRS, TreeScan, normalize_path};
use crate::result::Result;

/// Fully in-memory [`FileSystem`] that can be pre-populated with files and
/// directories.
///
/// ```ignore
/// let fs = MemoryFileSystem::new()
///     .with_file("package.json", r#"{"dependencies":{"next":"13"}}"#)
///     .with_dir("app");
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryFileSystem {
    files: BTreeMap<String, String>,
    dirs: BTreeSet<String>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file; parent directories are created implicitly.
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.add_file(path, content);
        self
    }

    /// Add an empty directory.
    pub fn with_dir(mut self, path: &str) -> Self {
        self.add_dir(path);
        self
    }

    pub fn add_file(&mut self, path: &str, content: &str) {
        let path = clean(path);
        if let Some((parent, _)) = path.rsplit_once('/') {
            self.add_dir(parent);
        }
        self.files.insert(path, content.to_string());
    }

    pub fn add_dir(&mut self, path: &str) {
        let path = clean(path);
        let mut current = String::new();
        for part in path.split('/').filter(|p| !p.is_empty()) {
            if !current.is_empty() {
                current.push('/');
            }
            current.push_str(part);
            self.dirs.insert(current.clone());
        }
    }
}

fn clean(path: &str) -> String {
    normalize_path(path).trim_matches('/').to_string()
}

impl FileSystem for MemoryFileSystem {
    fn has(&self, path: &str) -> bool {
        self.files.contains_key(&clean(path))
    }

    fn read(&self, path: &str) -> String {
        self.files.get(&clean(path)).cloned().unwrap_or_default()
    }

    fn dir_exists(&self, path: &str) -> bool {
        let path = clean(path);
        path.is_empty() || path == "." || self.dirs.contains(&path)
    }

    fn list_dirs(&self, path: &str) -> Vec<String> {
        let path = clean(path);
        let prefix = if path.is_empty() || path == "." {
            String::new()
        } else {
            format!("{path}/")
        };

        self.dirs
            .iter()
            .filter_map(|dir| dir.strip_prefix(&prefix))
            .filter(|rest| !rest.is_empty() && !rest.contains('/'))
            .filter(|name| !IGNORED_DIRS.contains(name))
            .map(String::from)
            .collect()
    }

    fn list_files(&self, path: &str) -> Vec<String> {
        let path = clean(path);
        let prefix = if path.is_empty() || path == "." {
            String::new()
        } else {
            format!("{path}/")
        };

        self.files
            .keys()
            .filter_map(|file| file.strip_prefix(&prefix))
            .filter(|rest| !rest.contains('/'))
            .map(String::from)
            .collect()
    }

    fn scan_tree(&self) -> Result<TreeScan> {
        let mut scan = TreeScan::default();

        for path in self.files.keys() {
            let ignored = path
                .split('/')
                .rev()
                .skip(1)
                .any(|part| IGNORED_DIRS.contains(&part));

            if !ignored {
                scan.record(path);
            }
        }

        Ok(scan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_create_parent_directories() {
        let fs = MemoryFileSystem::new().with_file("a/b/c.txt", "x");
        assert!(fs.dir_exists("a"));
        assert!(fs.dir_exists("a/b"));
        assert!(fs.has("a/b/c.txt"));
        assert!(!fs.has("a/b"));
        assert_eq!(fs.read("./a/b/c.txt"), "x");
    }

    #[test]
    fn list_dirs_only_returns_direct_children() {
        let fs = MemoryFileSystem::new()
            .with_file("myproject/settings.py", "")
            .with_file("myproject/sub/x.py", "")
            .with_file("node_modules/a/b.js", "");

        assert_eq!(fs.list_dirs("."), vec!["myproject"]);
        assert_eq!(fs.list_dirs("myproject"), vec!["sub"]);
    }

    #[test]
    fn list_files_only_returns_direct_children() {
        let fs = MemoryFileSystem::new()
            .with_file("Api.csproj", "")
            .with_file("Program.cs", "")
            .with_file("src/Lib.cs", "");

        assert_eq!(fs.list_files("."), vec!["Api.csproj", "Program.cs"]);
        assert_eq!(fs.list_files("src"), vec!["Lib.cs"]);
    }

    #[test]
    fn scan_tree_skips_ignored_directories() {
        let fs = MemoryFileSystem::new()
            .with_file("main.go", "")
            .with_file("node_modules/x/index.js", "")
            .with_file("dist/out.js", "");

        let scan = fs.scan_tree().unwrap();
        assert_eq!(scan.files, vec!["main.go"]);
    }
}
