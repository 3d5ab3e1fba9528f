//! JavaScript / TypeScript frameworks (npm, yarn, pnpm, bun and Deno).

pub mod adapter;
pub mod detector;
pub mod monorepo;
pub mod next_config;
pub mod package_json;
pub mod package_manager;
pub mod planner;
