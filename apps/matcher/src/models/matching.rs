use serde::{Deserialize, Serialize};

use crate::models::profile::{EducationEntry, ExperienceEntry, ExtractedProfile};
use crate::taxonomy::SkillCategory;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobInput {
    #[serde(default)]
    pub description: String,
}

impl JobInput {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateInput {
    /// Free-form skill list, e.g. "python, sql".
    #[serde(default)]
    pub skills_text: String,
    #[serde(default)]
    pub profile_text: String,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
}

impl CandidateInput {
    /// Builds matching input from a parsed resume: skills comma-joined, profile text is
    /// the candidate's name.
    pub fn from_profile(profile: &ExtractedProfile) -> Self {
        Self {
            skills_text: profile
                .skills
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            profile_text: format!("{} {}", profile.first_name(), profile.last_name())
                .trim()
                .to_string(),
            experience: profile.experience.clone(),
            education: profile.education.clone(),
        }
    }
}

/// Outcome of scoring one candidate against one job. All scores are in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub overall_match: f64,
    pub skill_match: f64,
    pub text_similarity: f64,
    pub experience_match: f64,
    pub education_match: f64,
    pub matched_skills: Vec<String>,
}

impl MatchResult {
    /// Whether the job is worth surfacing to the candidate at the given threshold.
    pub fn is_recommendable(&self, threshold: f64) -> bool {
        self.overall_match >= threshold
    }
}

/// Ordered so that `High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn from_weight(weight: f64) -> Self {
        if weight >= 0.9 {
            Priority::High
        } else if weight >= 0.7 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}

/// A job skill the candidate lacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpskillRecommendation {
    pub skill: String,
    pub category: SkillCategory,
    pub priority: Priority,
}
