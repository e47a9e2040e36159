use crate::models::matching::{CandidateInput, JobInput};
use crate::models::profile::EducationEntry;
use crate::scoring::{Subscore, Subscorer, NEUTRAL_SCORE};

const REQUIREMENT_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "degree",
    "diploma",
    "certification",
];

/// Degree tiers in strict priority order; the first tier with a marker present wins.
const DEGREE_TIERS: &[(&[&str], f64)] = &[
    (&["phd", "doctorate"], 100.0),
    (&["master"], 85.0),
    (&["bachelor", "b.s.", "b.a."], 70.0),
    (&["diploma", "certificate"], 50.0),
];

const UNRECOGNISED_DEGREE_SCORE: f64 = 30.0;

pub fn requires_education(job_text: &str) -> bool {
    let text = job_text.to_lowercase();
    REQUIREMENT_KEYWORDS.iter().any(|kw| text.contains(kw))
}

/// Tier score for the concatenated degree strings.
pub fn degree_tier(education: &[EducationEntry]) -> f64 {
    let degrees = education
        .iter()
        .map(|e| e.degree.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    DEGREE_TIERS
        .iter()
        .find(|(markers, _)| markers.iter().any(|m| degrees.contains(m)))
        .map_or(UNRECOGNISED_DEGREE_SCORE, |(_, score)| *score)
}

/// 50 when the job names no education requirement. A candidate with no education on
/// record is also treated as unknown and gets 50.
pub fn education_match(job_text: &str, education: &[EducationEntry]) -> f64 {
    if !requires_education(job_text) || education.is_empty() {
        return NEUTRAL_SCORE;
    }
    degree_tier(education)
}

pub struct EducationScorer;

impl Subscorer for EducationScorer {
    fn kind(&self) -> Subscore {
        Subscore::Education
    }

    fn score(&self, job: &JobInput, candidate: &CandidateInput) -> f64 {
        education_match(&job.description, &candidate.education)
    }
}
