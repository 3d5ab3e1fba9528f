//! Framework detection and deployment planning.
//!
//! Given a project directory, launchpad scores every framework it knows
//! against the files present, picks the winner and produces the commands
//! needed to build, run and health-check it.
//!
//! ```rust,ignore
//! let detection = launchpad::detect_project(Path::new("./my-app"))?;
//! println!("{} -> {:?}", detection.framework, detection.run);
//! ```
pub mod cli;
pub mod command;
pub mod config;
pub mod detection;
pub mod ecosystem;
pub mod error;
pub mod fs;
pub mod result;

pub use detection::{
    manager::{DetectionManager, detect_project, detect_project_with},
    types::{Detection, Healthcheck},
};
pub use ecosystem::framework::{Ecosystem, Framework};
pub use result::{LaunchpadError, Result};
