pub mod detector;
pub mod planner;
