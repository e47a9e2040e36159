//! Match scoring — four independent subscorers behind one trait, combined by
//! `aggregate::MatchAggregator` through a replaceable weight table.
//!
//! Every scorer is a pure function of its inputs and returns a value in [0, 100].
//! Missing signal yields a documented neutral value, never an error.

pub mod aggregate;
pub mod education;
pub mod experience;
pub mod similarity;
pub mod skills;
pub mod upskilling;

use serde::{Deserialize, Serialize};

use crate::models::matching::{CandidateInput, JobInput};

/// Score used when a scorer finds no requirement to measure against.
pub const NEUTRAL_SCORE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subscore {
    Skills,
    Text,
    Experience,
    Education,
}

impl Subscore {
    pub const ALL: [Subscore; 4] = [
        Subscore::Skills,
        Subscore::Text,
        Subscore::Experience,
        Subscore::Education,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subscore::Skills => "skills",
            Subscore::Text => "text",
            Subscore::Experience => "experience",
            Subscore::Education => "education",
        }
    }
}

/// A `(job, candidate) → [0, 100]` scorer. Implement this to swap how one subscore is
/// computed without touching aggregation.
pub trait Subscorer: Send + Sync {
    fn kind(&self) -> Subscore;

    fn score(&self, job: &JobInput, candidate: &CandidateInput) -> f64;
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(55.555_555), 55.56);
        assert_eq!(round2(100.0), 100.0);
        assert_eq!(round2(0.004), 0.0);
    }

    #[test]
    fn test_clamp_percent() {
        assert_eq!(clamp_percent(-3.0), 0.0);
        assert_eq!(clamp_percent(100.000_01), 100.0);
        assert_eq!(clamp_percent(f64::NAN), 0.0);
        assert_eq!(clamp_percent(42.5), 42.5);
    }

    #[test]
    fn test_subscore_names() {
        let names: Vec<&str> = Subscore::ALL.iter().map(Subscore::as_str).collect();
        assert_eq!(names, vec!["skills", "text", "experience", "education"]);
    }
}
