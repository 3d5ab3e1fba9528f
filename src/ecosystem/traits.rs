use crate::{
    detection::types::{Candidate, Plan},
    ecosystem::framework::Framework,
    fs::{FileSystem, TreeScan},
};

/// Produces the scored candidates for one language family.
pub trait LanguageDetector {
    fn name(&self) -> &str;
    fn detect(&self, fs: &dyn FileSystem, scan: &TreeScan) -> Vec<Candidate>;
}

/// Produces the deployment plan for a framework that won detection.
pub trait PlanBuilder {
    fn build_plan(&self, framework: Framework, fs: &dyn FileSystem) -> Plan;
}
