//! Framework detection: the scoring DSL, shared types and the orchestrator
//! that turns a project tree into a [`types::Detection`].

pub mod builder;
pub mod helper;
pub mod language;
pub mod manager;
pub mod scoring;
pub mod types;
