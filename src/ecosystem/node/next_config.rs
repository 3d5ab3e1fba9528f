use regex::Regex;
use std::{fmt::Display, sync::LazyLock};

use crate::fs::FileSystem;

pub const NEXT_CONFIG_FILES: &[&str] = &[
    "next.config.js",
    "next.config.mjs",
    "next.config.ts",
    "next.config.cjs",
];

static OUTPUT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"output\s*:\s*["'`](export|standalone)["'`]"#).unwrap()
});

/// `output` setting of next.config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextOutputMode {
    /// `next start` server
    Default,
    /// Self-contained server in .next/standalone
    Standalone,
    /// Static HTML export in out/
    Export,
}

impl NextOutputMode {
    pub fn detect(fs: &dyn FileSystem) -> Self {
        for file in NEXT_CONFIG_FILES {
            let content = fs.read(file);
            if let Some(caps) = OUTPUT_REGEX.captures(&content) {
                return match &caps[1] {
                    "export" => NextOutputMode::Export,
                    _ => NextOutputMode::Standalone,
                };
            }
        }

        NextOutputMode::Default
    }

    pub fn build_output(&self) -> &'static str {
        match self {
            NextOutputMode::Export => "out",
            NextOutputMode::Default | NextOutputMode::Standalone => ".next",
        }
    }
}

impl Display for NextOutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NextOutputMode::Default => f.write_str("default"),
            NextOutputMode::Standalone => f.write_str("standalone"),
            NextOutputMode::Export => f.write_str("export"),
        }
    }
}

/// "app" for the App Router, "pages" otherwise.
pub fn detect_router(fs: &dyn FileSystem) -> &'static str {
    if fs.dir_exists("app") || fs.dir_exists("src/app") {
        "app"
    } else {
        "pages"
    }
}
