use std::fmt::Display;

use crate::fs::FileSystem;

/// JavaScript package manager inferred from lockfiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Bun,
    YarnBerry,
    Pnpm,
    Yarn,
    Npm,
}

impl PackageManager {
    /// Lockfile sniffing in priority order; npm when nothing matches.
    pub fn detect(fs: &dyn FileSystem) -> Self {
        if fs.has("bun.lockb") || fs.has("bun.lock") {
            return PackageManager::Bun;
        }

        if fs.has(".yarnrc.yml") {
            return PackageManager::YarnBerry;
        }

        if fs.has("pnpm-lock.yaml") {
            return PackageManager::Pnpm;
        }

        if fs.has("yarn.lock") {
            return PackageManager::Yarn;
        }

        PackageManager::Npm
    }

    pub fn install_command(&self) -> &'static str {
        match self {
            PackageManager::Bun => "bun install",
            PackageManager::YarnBerry => "yarn install --immutable",
            PackageManager::Pnpm => "pnpm install --frozen-lockfile",
            PackageManager::Yarn => "yarn install --frozen-lockfile",
            PackageManager::Npm => "npm install",
        }
    }

    pub fn build_command(&self) -> String {
        self.run_script("build")
    }

    pub fn start_command(&self) -> &'static str {
        match self {
            PackageManager::Bun => "bun run start",
            PackageManager::YarnBerry | PackageManager::Yarn => "yarn start",
            PackageManager::Pnpm => "pnpm start",
            PackageManager::Npm => "npm start",
        }
    }

    /// Command running a package.json script.
    pub fn run_script(&self, script: &str) -> String {
        match self {
            PackageManager::Bun => format!("bun run {script}"),
            PackageManager::YarnBerry | PackageManager::Yarn => {
                format!("yarn {script}")
            }
            PackageManager::Pnpm => format!("pnpm {script}"),
            PackageManager::Npm => format!("npm run {script}"),
        }
    }
}

impl Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackageManager::Bun => f.write_str("bun"),
            PackageManager::YarnBerry => f.write_str("yarn-berry"),
            PackageManager::Pnpm => f.write_str("pnpm"),
            PackageManager::Yarn => f.write_str("yarn"),
            PackageManager::Npm => f.write_str("npm"),
        }
    }
}
