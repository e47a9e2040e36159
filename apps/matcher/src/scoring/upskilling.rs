use std::cmp::Ordering;
use std::collections::HashSet;

use crate::models::matching::{Priority, UpskillRecommendation};
use crate::taxonomy::SkillEntry;

pub const DEFAULT_UPSKILL_LIMIT: usize = 10;

/// Job skills the candidate lacks, highest priority first, heavier weights first within a
/// tier, truncated to `limit`.
pub fn recommend_upskilling(
    job_skills: &[SkillEntry],
    candidate_skills: &[SkillEntry],
    limit: usize,
) -> Vec<UpskillRecommendation> {
    let held: HashSet<String> = candidate_skills
        .iter()
        .map(|s| s.name.to_lowercase())
        .collect();

    let mut seen = HashSet::new();
    let mut missing: Vec<&SkillEntry> = job_skills
        .iter()
        .filter(|s| !held.contains(&s.name.to_lowercase()))
        .filter(|s| seen.insert(s.name.to_lowercase()))
        .collect();

    missing.sort_by(|a, b| {
        Priority::from_weight(b.weight)
            .cmp(&Priority::from_weight(a.weight))
            .then_with(|| b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal))
    });

    missing
        .into_iter()
        .take(limit)
        .map(|s| UpskillRecommendation {
            skill: s.name.clone(),
            category: s.category,
            priority: Priority::from_weight(s.weight),
        })
        .collect()
}
