use log::*;
use std::path::Path;

use crate::{
    detection::{
        language::dominant_language,
        types::{Candidate, Detection},
    },
    ecosystem::{
        self, dispatch::Planner, framework::Framework,
        traits::LanguageDetector, traits::PlanBuilder,
    },
    fs::{FileSystem, LocalFileSystem, TreeScan},
    result::{LaunchpadError, Result},
};

/// Language reported when no known source file exists.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

pub struct DetectionManager {
    fs: Box<dyn FileSystem>,
    detectors: Vec<Box<dyn LanguageDetector>>,
}

impl DetectionManager {
    pub fn new(
        fs: Box<dyn FileSystem>,
        detectors: Vec<Box<dyn LanguageDetector>>,
    ) -> Self {
        Self { fs, detectors }
    }

    /// Manager with every built-in language detector registered.
    pub fn with_default_detectors(fs: Box<dyn FileSystem>) -> Self {
        Self::new(fs, ecosystem::detectors())
    }

    /// Scan the tree once, score every framework, and build the plan of
    /// the winner.
    pub fn detect(&self) -> Result<Detection> {
        let scan = self.fs.scan_tree()?;

        let language =
            dominant_language(&scan.extensions).unwrap_or(UNKNOWN_LANGUAGE);

        debug!("dominant language: {language}");

        let candidates = self.collect_candidates(&scan);

        let Some(winner) = Self::select(candidates) else {
            warn!("no framework detected, falling back to generic settings");
            return Ok(Detection::undetected(language));
        };

        info!(
            "detected {} ({}) with score {:.1}",
            winner.name, winner.language, winner.score
        );

        let plan = Planner::new(winner.framework.ecosystem())
            .build_plan(winner.framework, self.fs.as_ref());

        Ok(Detection::from_candidate(winner, plan))
    }

    /// Run every registered detector, in registration order.
    fn collect_candidates(&self, scan: &TreeScan) -> Vec<Candidate> {
        let mut candidates = vec![];

        for detector in self.detectors.iter() {
            let found = detector.detect(self.fs.as_ref(), scan);

            for candidate in found.iter() {
                debug!(
                    "[{}] {} scored {:.1}: {:?}",
                    detector.name(),
                    candidate.name,
                    candidate.score,
                    candidate.signals
                );
            }

            candidates.extend(found);
        }

        candidates
    }

    /// A Compose file overrides everything. Otherwise the first candidate
    /// with the strictly highest score wins, so ties go to the detector
    /// registered first.
    fn select(mut candidates: Vec<Candidate>) -> Option<Candidate> {
        if let Some(position) = candidates.iter().position(|c| {
            c.framework == Framework::DockerCompose && c.score > 0.0
        }) {
            info!("compose file found: deploying the compose stack");
            return Some(candidates.swap_remove(position));
        }

        let mut best: Option<Candidate> = None;

        for candidate in candidates {
            if candidate.score <= 0.0 {
                continue;
            }

            match &best {
                Some(current) if current.score >= candidate.score => {}
                _ => best = Some(candidate),
            }
        }

        best
    }
}

/// Detect the framework of the project rooted at `root`.
pub fn detect_project(root: &Path) -> Result<Detection> {
    detect_project_with(root, &[])
}

/// Like [`detect_project`], skipping `ignore_dirs` in addition to the
/// built-in noise directories.
pub fn detect_project_with(
    root: &Path,
    ignore_dirs: &[String],
) -> Result<Detection> {
    if !root.exists() {
        return Err(LaunchpadError::ProjectNotFound(root.to_path_buf()));
    }

    if !root.is_dir() {
        return Err(LaunchpadError::NotADirectory(root.to_path_buf()));
    }

    debug!("detecting framework for path: {}", root.display());

    let fs = LocalFileSystem::new(root).with_ignore_dirs(ignore_dirs);

    DetectionManager::with_default_detectors(Box::new(fs)).detect()
}
