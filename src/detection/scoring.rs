//! Signal weights shared by every detector.
//!
//! Identical signal kinds score identically across all detectors, so these
//! are the only place weights are defined. Strength order:
//! config file > build tool ≈ dependency > lockfile ≈ file pattern >
//! directory ≈ script pattern > minor indicator.

/// Framework-specific configuration file (`next.config.js`, `manage.py`).
pub const CONFIG_FILE: f64 = 3.0;
/// Build tool or CLI present (`@angular/cli`, `mvnw`, `Cargo.toml`).
pub const BUILD_TOOL: f64 = 2.5;
/// Framework package named in a dependency manifest.
pub const DEPENDENCY: f64 = 2.5;
/// Lockfile present.
pub const LOCKFILE: f64 = 2.0;
/// Conventional source file or import pattern.
pub const FILE_PATTERN: f64 = 2.0;
/// Conventional directory layout.
pub const DIRECTORY: f64 = 1.0;
/// Script entry in a manifest (`"build": "next build"`).
pub const SCRIPT_PATTERN: f64 = 1.0;
/// Weak supporting evidence.
pub const MINOR_INDICATOR: f64 = 0.5;
/// Compose file. Outranks any single framework signal and triggers the
/// Compose override in the orchestrator.
pub const DOCKER_COMPOSE: f64 = 5.0;

/// Minimum score before a specific Go or Rust web framework is preferred
/// over the generic language fallback.
pub const WEB_FRAMEWORK_THRESHOLD: f64 = 4.0;
/// Minimum score before a static-site generator preempts the generic
/// static-site read.
pub const STATIC_GENERATOR_THRESHOLD: f64 = 3.0;
