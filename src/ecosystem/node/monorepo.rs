use std::fmt::Display;

use crate::{
    ecosystem::node::package_json::PackageJson, fs::FileSystem,
};

/// JavaScript monorepo tooling at the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonorepoType {
    Turborepo,
    Nx,
    Lerna,
    PnpmWorkspaces,
    NpmWorkspaces,
    None,
}

impl MonorepoType {
    /// Config files in fixed priority order, then a `workspaces` key in
    /// package.json.
    pub fn detect(fs: &dyn FileSystem) -> Self {
        if fs.has("turbo.json") {
            return MonorepoType::Turborepo;
        }

        if fs.has("nx.json") {
            return MonorepoType::Nx;
        }

        if fs.has("lerna.json") {
            return MonorepoType::Lerna;
        }

        if fs.has("pnpm-workspace.yaml") {
            return MonorepoType::PnpmWorkspaces;
        }

        if PackageJson::parse(fs).has_workspaces() {
            return MonorepoType::NpmWorkspaces;
        }

        MonorepoType::None
    }

    pub fn is_monorepo(&self) -> bool {
        !matches!(self, MonorepoType::None)
    }
}

impl Display for MonorepoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MonorepoType::Turborepo => f.write_str("turborepo"),
            MonorepoType::Nx => f.write_str("nx"),
            MonorepoType::Lerna => f.write_str("lerna"),
            MonorepoType::PnpmWorkspaces => f.write_str("pnpm-workspaces"),
            MonorepoType::NpmWorkspaces => f.write_str("npm-workspaces"),
            MonorepoType::None => f.write_str("none"),
        }
    }
}
