use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::matching::{CandidateInput, JobInput};
use crate::models::profile::ExperienceEntry;
use crate::scoring::{clamp_percent, Subscore, Subscorer, NEUTRAL_SCORE};

static REQUIRED_YEARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\+?\s*years?\s*(?:of\s*)?experience").expect("valid regex")
});

static DURATION_YEARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*years?").expect("valid regex"));

/// First "`N`(+) years (of) experience" figure in the job text.
pub fn required_years(job_text: &str) -> Option<f64> {
    REQUIRED_YEARS
        .captures(job_text)
        .and_then(|caps| caps[1].parse::<f64>().ok())
}

/// Sum of the first "`N` years" figure in each entry's duration. Unparseable entries add 0.
pub fn candidate_years(experience: &[ExperienceEntry]) -> f64 {
    experience
        .iter()
        .filter_map(|entry| DURATION_YEARS.captures(&entry.duration))
        .filter_map(|caps| caps[1].parse::<f64>().ok())
        .sum()
}

/// 50 without a stated requirement; otherwise proportional coverage capped at 100.
pub fn experience_match(job_text: &str, experience: &[ExperienceEntry]) -> f64 {
    let Some(required) = required_years(job_text) else {
        return NEUTRAL_SCORE;
    };
    let years = candidate_years(experience);
    if years >= required {
        100.0
    } else {
        clamp_percent(years / required * 100.0)
    }
}

pub struct ExperienceScorer;

impl Subscorer for ExperienceScorer {
    fn kind(&self) -> Subscore {
        Subscore::Experience
    }

    fn score(&self, job: &JobInput, candidate: &CandidateInput) -> f64 {
        experience_match(&job.description, &candidate.experience)
    }
}
