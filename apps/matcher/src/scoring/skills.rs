//! Weighted skill coverage between the job's taxonomy skills and the candidate's.
//!
//! skill_match = Σ min(job_weight, candidate_weight) over shared skills
//!             / Σ job_weight over all job skills × 100

use std::collections::{HashMap, HashSet};

use crate::extraction::skills::taxonomy_skills;
use crate::models::matching::{CandidateInput, JobInput};
use crate::scoring::{clamp_percent, round2, Subscore, Subscorer};
use crate::taxonomy::SkillEntry;

fn weights_by_name(skills: &[SkillEntry]) -> HashMap<String, f64> {
    skills
        .iter()
        .map(|s| (s.name.to_lowercase(), s.weight))
        .collect()
}

/// Job skills with case-insensitive duplicates collapsed, first occurrence kept.
fn distinct<'a>(skills: &'a [SkillEntry]) -> impl Iterator<Item = &'a SkillEntry> {
    let mut seen = HashSet::new();
    skills
        .iter()
        .filter(move |s| seen.insert(s.name.to_lowercase()))
}

/// Weighted coverage in [0, 100], rounded to 2 decimals. 0 when the job lists no skills.
pub fn skill_match(job_skills: &[SkillEntry], candidate_skills: &[SkillEntry]) -> f64 {
    let candidate = weights_by_name(candidate_skills);

    let mut total_weight = 0.0_f64;
    let mut matched_weight = 0.0_f64;
    for job_skill in distinct(job_skills) {
        total_weight += job_skill.weight;
        if let Some(&candidate_weight) = candidate.get(&job_skill.name.to_lowercase()) {
            matched_weight += job_skill.weight.min(candidate_weight);
        }
    }

    if total_weight <= 0.0 {
        return 0.0;
    }
    clamp_percent(round2(matched_weight / total_weight * 100.0))
}

/// Job skill names, in job order, that the candidate also has (case-insensitive).
pub fn matched_skills(job_skills: &[SkillEntry], candidate_skills: &[SkillEntry]) -> Vec<String> {
    let candidate: HashSet<String> = candidate_skills
        .iter()
        .map(|s| s.name.to_lowercase())
        .collect();
    distinct(job_skills)
        .filter(|s| candidate.contains(&s.name.to_lowercase()))
        .map(|s| s.name.clone())
        .collect()
}

/// Unweighted overlap |job ∩ candidate| / |job| × 100, used on the resume side where
/// skills carry no weight. 0 when either side is empty.
pub fn keyword_overlap<S: AsRef<str>>(job_skills: &[S], candidate_skills: &[S]) -> f64 {
    if job_skills.is_empty() || candidate_skills.is_empty() {
        return 0.0;
    }
    let job: HashSet<String> = job_skills.iter().map(|s| s.as_ref().to_lowercase()).collect();
    let candidate: HashSet<String> = candidate_skills
        .iter()
        .map(|s| s.as_ref().to_lowercase())
        .collect();
    let shared = job.intersection(&candidate).count();
    round2(shared as f64 / job_skills.len() as f64 * 100.0)
}

/// Skill subscore: taxonomy scan of the job description vs the candidate's skill text.
pub struct SkillCoverageScorer;

impl Subscorer for SkillCoverageScorer {
    fn kind(&self) -> Subscore {
        Subscore::Skills
    }

    fn score(&self, job: &JobInput, candidate: &CandidateInput) -> f64 {
        skill_match(
            &taxonomy_skills(&job.description),
            &taxonomy_skills(&candidate.skills_text),
        )
    }
}
