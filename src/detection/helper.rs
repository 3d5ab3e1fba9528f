use crate::detection::types::Candidate;

/// Applies the specific-over-generic policy shared by language detectors.
pub struct DetectionHelper {}

impl DetectionHelper {
    /// Keep the specific candidates that score above zero and reach
    /// `threshold`. Only when none qualify is `fallback` evaluated, and its
    /// candidate kept if it scored at all.
    pub fn specific_or_generic<F: FnOnce() -> Candidate>(
        specific: Vec<Candidate>,
        threshold: f64,
        fallback: F,
    ) -> Vec<Candidate> {
        let qualified = specific
            .into_iter()
            .filter(|c| c.score > 0.0 && c.score >= threshold)
            .collect::<Vec<Candidate>>();

        if !qualified.is_empty() {
            return qualified;
        }

        let generic = fallback();
        if generic.score > 0.0 {
            vec![generic]
        } else {
            vec![]
        }
    }

    /// Drop candidates that matched nothing.
    pub fn scored(candidates: Vec<Candidate>) -> Vec<Candidate> {
        candidates.into_iter().filter(|c| c.score > 0.0).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecosystem::framework::Framework;

    fn candidate(framework: Framework, score: f64) -> Candidate {
        Candidate {
            framework,
            name: framework.name().to_string(),
            language: framework.language().to_string(),
            score,
            signals: vec![],
        }
    }

    #[test]
    fn qualified_specific_candidates_suppress_generic() {
        let mut fallback_called = false;
        let result = DetectionHelper::specific_or_generic(
            vec![candidate(Framework::Gin, 4.5), candidate(Framework::Echo, 2.0)],
            4.0,
            || {
                fallback_called = true;
                candidate(Framework::Go, 3.0)
            },
        );

        assert!(!fallback_called);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].framework, Framework::Gin);
    }

    #[test]
    fn generic_used_when_nothing_qualifies() {
        let result = DetectionHelper::specific_or_generic(
            vec![candidate(Framework::Gin, 2.5)],
            4.0,
            || candidate(Framework::Go, 3.0),
        );

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].framework, Framework::Go);
    }

    #[test]
    fn zero_score_generic_is_dropped() {
        let result = DetectionHelper::specific_or_generic(vec![], 0.0, || {
            candidate(Framework::Go, 0.0)
        });
        assert!(result.is_empty());
    }
}
