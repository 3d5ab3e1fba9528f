use serde::Serialize;
use std::collections::BTreeMap;

use crate::ecosystem::framework::Framework;

pub const DEFAULT_HEALTH_PATH: &str = "/";
pub const DEFAULT_HEALTH_EXPECT: u16 = 200;
pub const DEFAULT_HEALTH_TIMEOUT: u32 = 30;

/// A scored hypothesis that the project uses one framework.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Framework this candidate stands for; selects the plan builder
    pub framework: Framework,
    /// Display name (e.g. "Next.js")
    pub name: String,
    /// Source language label (e.g. "JavaScript/TypeScript")
    pub language: String,
    /// Sum of the weights of every matched signal
    pub score: f64,
    /// Matched signals in check order
    pub signals: Vec<String>,
}

/// How the deployment layer verifies the app came up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Healthcheck {
    pub path: String,
    /// Expected HTTP status
    pub expect: u16,
    pub timeout_seconds: u32,
}

impl Healthcheck {
    pub fn new(path: &str, expect: u16, timeout_seconds: u32) -> Self {
        Self {
            path: path.to_string(),
            expect,
            timeout_seconds,
        }
    }

    /// Default check on a conventional endpoint.
    pub fn at(path: &str) -> Self {
        Self::new(path, DEFAULT_HEALTH_EXPECT, DEFAULT_HEALTH_TIMEOUT)
    }
}

impl Default for Healthcheck {
    fn default() -> Self {
        Self::at(DEFAULT_HEALTH_PATH)
    }
}

/// Build/run/health/env/meta recipe produced by a plan builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plan {
    /// Shell commands, in order; later ones assume earlier ones succeeded
    pub build: Vec<String>,
    /// Candidate run commands. A command starting with `#` is a sentinel
    /// meaning no server process should be started.
    pub run: Vec<String>,
    pub health: Healthcheck,
    /// Conventional environment variable names (documentation only)
    pub env: Vec<String>,
    /// Framework-specific annotations, every key optional
    pub meta: BTreeMap<String, String>,
}

impl Plan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_build<S: Into<String>>(
        mut self,
        commands: impl IntoIterator<Item = S>,
    ) -> Self {
        self.build.extend(commands.into_iter().map(Into::into));
        self
    }

    pub fn with_run<S: Into<String>>(
        mut self,
        commands: impl IntoIterator<Item = S>,
    ) -> Self {
        self.run.extend(commands.into_iter().map(Into::into));
        self
    }

    pub fn with_health(mut self, health: Healthcheck) -> Self {
        self.health = health;
        self
    }

    pub fn with_env(mut self, names: &[&str]) -> Self {
        self.env.extend(names.iter().map(|n| n.to_string()));
        self
    }

    pub fn with_meta(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// True when the plan starts no server process.
    pub fn is_static(&self) -> bool {
        !self.run.is_empty() && self.run.iter().all(|cmd| cmd.starts_with('#'))
    }
}

/// Comment run command telling the deployment layer to serve `dir` as
/// static files instead of starting a process.
pub fn static_site_sentinel(dir: &str) -> String {
    format!("# Static site - serve {dir}/ with nginx or CDN")
}

/// Final result of a detection run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection {
    /// Winning framework name, empty when nothing was detected
    pub framework: String,
    pub language: String,
    pub score: f64,
    pub signals: Vec<String>,
    pub build: Vec<String>,
    pub run: Vec<String>,
    pub health: Healthcheck,
    pub env: Vec<String>,
    pub meta: BTreeMap<String, String>,
}

impl Detection {
    /// Assemble the result from the winning candidate and its plan.
    pub fn from_candidate(candidate: Candidate, plan: Plan) -> Self {
        Self {
            framework: candidate.name,
            language: candidate.language,
            score: candidate.score,
            signals: candidate.signals,
            build: plan.build,
            run: plan.run,
            health: plan.health,
            env: plan.env,
            meta: plan.meta,
        }
    }

    /// Valid but uninformative result carrying only the dominant language.
    pub fn undetected(language: impl Into<String>) -> Self {
        Self {
            framework: String::new(),
            language: language.into(),
            score: 0.0,
            signals: vec![],
            build: vec![],
            run: vec![],
            health: Healthcheck::default(),
            env: vec![],
            meta: BTreeMap::new(),
        }
    }

    pub fn is_detected(&self) -> bool {
        !self.framework.is_empty()
    }
}
