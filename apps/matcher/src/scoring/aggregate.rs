//! Match Aggregator — combines the four subscores into one overall percentage.
//!
//! overall = w_skills·skills + w_text·text + w_experience·experience + w_education·education
//!
//! The weight table is validated to sum to 1.0, so the overall score stays in [0, 100]
//! whenever every subscore does. Aggregation never fails: empty inputs produce the
//! documented neutral/zero subscores.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::errors::WeightError;
use crate::extraction::skills::taxonomy_skills;
use crate::models::matching::{CandidateInput, JobInput, MatchResult, UpskillRecommendation};
use crate::scoring::education::EducationScorer;
use crate::scoring::experience::ExperienceScorer;
use crate::scoring::similarity::TextSimilarityScorer;
use crate::scoring::skills::{matched_skills, SkillCoverageScorer};
use crate::scoring::upskilling::{recommend_upskilling, DEFAULT_UPSKILL_LIMIT};
use crate::scoring::{clamp_percent, round2, Subscore, Subscorer};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    skills: f64,
    text: f64,
    experience: f64,
    education: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 0.40,
            text: 0.20,
            experience: 0.25,
            education: 0.15,
        }
    }
}

impl MatchWeights {
    pub fn new(skills: f64, text: f64, experience: f64, education: f64) -> Result<Self, WeightError> {
        let weights = Self {
            skills,
            text,
            experience,
            education,
        };
        for kind in Subscore::ALL {
            let w = weights.weight(kind);
            if !w.is_finite() || w < 0.0 {
                return Err(WeightError::Invalid(kind.as_str()));
            }
        }
        let sum = weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(WeightError::BadSum(sum));
        }
        Ok(weights)
    }

    pub fn weight(&self, kind: Subscore) -> f64 {
        match kind {
            Subscore::Skills => self.skills,
            Subscore::Text => self.text,
            Subscore::Experience => self.experience,
            Subscore::Education => self.education,
        }
    }

    pub fn sum(&self) -> f64 {
        Subscore::ALL.iter().map(|k| self.weight(*k)).sum()
    }
}

/// Scores (job, candidate) pairs. Cheap to clone and safe to share across threads.
#[derive(Clone)]
pub struct MatchAggregator {
    weights: MatchWeights,
    scorers: Vec<Arc<dyn Subscorer>>,
    upskill_limit: usize,
}

impl Default for MatchAggregator {
    fn default() -> Self {
        Self::new(MatchWeights::default())
    }
}

impl MatchAggregator {
    /// The built-in scorers under the given weights.
    pub fn new(weights: MatchWeights) -> Self {
        Self {
            weights,
            scorers: vec![
                Arc::new(SkillCoverageScorer),
                Arc::new(TextSimilarityScorer::default()),
                Arc::new(ExperienceScorer),
                Arc::new(EducationScorer),
            ],
            upskill_limit: DEFAULT_UPSKILL_LIMIT,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.weights)
            .with_scorer(Arc::new(TextSimilarityScorer {
                max_features: config.similarity_max_features,
            }))
            .with_upskill_limit(config.upskill_limit)
    }

    /// Replaces the scorer for `scorer.kind()`.
    pub fn with_scorer(mut self, scorer: Arc<dyn Subscorer>) -> Self {
        self.scorers.retain(|s| s.kind() != scorer.kind());
        self.scorers.push(scorer);
        self
    }

    pub fn with_upskill_limit(mut self, limit: usize) -> Self {
        self.upskill_limit = limit;
        self
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    fn subscore(&self, kind: Subscore, job: &JobInput, candidate: &CandidateInput) -> f64 {
        self.scorers
            .iter()
            .find(|s| s.kind() == kind)
            .map_or(0.0, |s| clamp_percent(s.score(job, candidate)))
    }

    pub fn evaluate(&self, job: &JobInput, candidate: &CandidateInput) -> MatchResult {
        let skill_match = self.subscore(Subscore::Skills, job, candidate);
        let text_similarity = self.subscore(Subscore::Text, job, candidate);
        let experience_match = self.subscore(Subscore::Experience, job, candidate);
        let education_match = self.subscore(Subscore::Education, job, candidate);

        let overall = self.weights.skills * skill_match
            + self.weights.text * text_similarity
            + self.weights.experience * experience_match
            + self.weights.education * education_match;
        let overall_match = clamp_percent(round2(overall));

        debug!(
            overall_match,
            skill_match, text_similarity, experience_match, education_match, "Computed match"
        );

        MatchResult {
            overall_match,
            skill_match,
            text_similarity,
            experience_match,
            education_match,
            matched_skills: matched_skills(
                &taxonomy_skills(&job.description),
                &taxonomy_skills(&candidate.skills_text),
            ),
        }
    }

    /// Missing job skills the candidate should learn, most important first.
    pub fn upskilling(&self, job: &JobInput, candidate: &CandidateInput) -> Vec<UpskillRecommendation> {
        recommend_upskilling(
            &taxonomy_skills(&job.description),
            &taxonomy_skills(&candidate.skills_text),
            self.upskill_limit,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{EducationEntry, ExperienceEntry};

    struct Fixed(Subscore, f64);

    impl Subscorer for Fixed {
        fn kind(&self) -> Subscore {
            self.0
        }

        fn score(&self, _job: &JobInput, _candidate: &CandidateInput) -> f64 {
            self.1
        }
    }

    fn scenario() -> (JobInput, CandidateInput) {
        let job = JobInput::new(
            "Looking for a Python developer with 3+ years experience, Bachelor's degree required",
        );
        let candidate = CandidateInput {
            skills_text: "python, sql".to_string(),
            profile_text: String::new(),
            experience: vec![ExperienceEntry {
                duration: "4 years".to_string(),
                ..Default::default()
            }],
            education: vec![EducationEntry {
                degree: "Bachelor of Science".to_string(),
                ..Default::default()
            }],
        };
        (job, candidate)
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_aggregator_is_shareable_across_threads() {
        assert_send_sync::<MatchAggregator>();

        let aggregator = MatchAggregator::default();
        let (job, candidate) = scenario();
        let expected = aggregator.evaluate(&job, &candidate);
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| aggregator.evaluate(&job, &candidate)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        assert_eq!(MatchWeights::default().sum(), 1.0);
    }

    #[test]
    fn test_weight_validation() {
        assert!(MatchWeights::new(0.5, 0.5, 0.0, 0.0).is_ok());
        assert_eq!(
            MatchWeights::new(-0.1, 0.6, 0.25, 0.25),
            Err(WeightError::Invalid("skills"))
        );
        assert!(matches!(
            MatchWeights::new(0.4, 0.4, 0.4, 0.4),
            Err(WeightError::BadSum(_))
        ));
        assert_eq!(
            MatchWeights::new(0.25, f64::NAN, 0.25, 0.5),
            Err(WeightError::Invalid("text"))
        );
    }

    #[test]
    fn test_documented_scenario() {
        let (job, candidate) = scenario();
        let result = MatchAggregator::default().evaluate(&job, &candidate);

        // The job text also contains the one-letter taxonomy skill "r" (weight 0.8), which
        // the candidate's "python, sql" does not, so python's 1.0 covers 1.0 of 1.8.
        assert_eq!(result.skill_match, 55.56);
        assert_eq!(result.matched_skills, vec!["python".to_string()]);
        assert_eq!(result.text_similarity, 0.0);
        assert_eq!(result.experience_match, 100.0);
        assert_eq!(result.education_match, 70.0);

        let expected = round2(0.40 * 55.56 + 0.20 * 0.0 + 0.25 * 100.0 + 0.15 * 70.0);
        assert_eq!(result.overall_match, expected);
    }

    #[test]
    fn test_empty_inputs_produce_defaults() {
        let result =
            MatchAggregator::default().evaluate(&JobInput::default(), &CandidateInput::default());
        assert_eq!(result.skill_match, 0.0);
        assert_eq!(result.text_similarity, 0.0);
        assert_eq!(result.experience_match, 50.0);
        assert_eq!(result.education_match, 50.0);
        assert_eq!(result.overall_match, 20.0);
        assert!(result.matched_skills.is_empty());
    }

    #[test]
    fn test_perfect_candidate_scores_hundred() {
        let aggregator = MatchAggregator::default()
            .with_scorer(Arc::new(Fixed(Subscore::Text, 100.0)))
            .with_scorer(Arc::new(Fixed(Subscore::Experience, 100.0)))
            .with_scorer(Arc::new(Fixed(Subscore::Education, 100.0)));
        let job = JobInput::new("Kubernetes");
        let candidate = CandidateInput {
            skills_text: "kubernetes".to_string(),
            ..Default::default()
        };
        assert_eq!(aggregator.evaluate(&job, &candidate).overall_match, 100.0);
    }

    #[test]
    fn test_out_of_range_subscores_are_clamped() {
        let aggregator = MatchAggregator::default()
            .with_scorer(Arc::new(Fixed(Subscore::Skills, 250.0)))
            .with_scorer(Arc::new(Fixed(Subscore::Text, -40.0)));
        let result = aggregator.evaluate(&JobInput::default(), &CandidateInput::default());
        assert_eq!(result.skill_match, 100.0);
        assert_eq!(result.text_similarity, 0.0);
        assert!((0.0..=100.0).contains(&result.overall_match));
    }

    #[test]
    fn test_custom_weights() {
        let weights = MatchWeights::new(0.0, 0.0, 1.0, 0.0).unwrap();
        let (job, candidate) = scenario();
        let result = MatchAggregator::new(weights).evaluate(&job, &candidate);
        assert_eq!(result.overall_match, 100.0);
    }

    #[test]
    fn test_upskilling_lists_missing_job_skills() {
        let job = JobInput::new("React, Node.js and Bootstrap");
        let candidate = CandidateInput {
            skills_text: "react".to_string(),
            ..Default::default()
        };
        let recs = MatchAggregator::default().upskilling(&job, &candidate);
        let names: Vec<&str> = recs.iter().map(|r| r.skill.as_str()).collect();
        assert_eq!(names, vec!["node.js", "bootstrap"]);
    }

    #[test]
    fn test_upskill_limit_applies() {
        let job = JobInput::new("Python Java Rust Kotlin Scala Swift");
        let recs = MatchAggregator::default()
            .with_upskill_limit(2)
            .upskilling(&job, &CandidateInput::default());
        assert_eq!(recs.len(), 2);
    }
}
