pub mod build_tool;
pub mod detector;
pub mod planner;
