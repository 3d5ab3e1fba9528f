//! Command execution for the launchpad CLI.

/// Detect a project's framework and print its deployment plan.
pub mod detect;

/// List the supported frameworks.
pub mod frameworks;
