//! Result types for launchpad.
//!
//! Every fallible function in the crate returns [`Result<T>`], which carries
//! a [`LaunchpadError`]. Detection itself only fails when the project root
//! cannot be scanned; everything else degrades to "no signal".
//!
//! ```rust,ignore
//! use crate::result::Result;
//!
//! fn load() -> Result<Config> {
//!     let content = std::fs::read_to_string("launchpad.toml")?;
//!     Ok(toml::from_str(&content)?)
//! }
//! ```

pub use crate::error::{LaunchpadError, Result};
