//! Skill Extractor.
//!
//! - `taxonomy_skills`: weighted taxonomy scan, used for job descriptions and candidate
//!   skill lists during matching.
//! - `resume_skills`: flat keyword hits plus phrases introduced by "proficient in",
//!   "experience with" and similar. The phrase capture runs to end of line and is split on
//!   commas, so trailing noise ("python and go for backend work") is kept as-is.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::taxonomy::{taxonomy, SkillEntry, RESUME_KEYWORDS};

const CONTEXT_PHRASES: &[&str] = &[
    "proficient in",
    "skilled in",
    "experience with",
    "knowledge of",
    "expertise in",
];

static CONTEXT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    CONTEXT_PHRASES
        .iter()
        .map(|phrase| Regex::new(&format!(r"{phrase} ([^\n]+)")).expect("valid regex"))
        .collect()
});

pub fn taxonomy_skills(text: &str) -> Vec<SkillEntry> {
    taxonomy().scan(text)
}

pub fn resume_skills(text: &str) -> BTreeSet<String> {
    let text_lower = text.to_lowercase();

    let mut found: BTreeSet<String> = RESUME_KEYWORDS
        .iter()
        .filter(|keyword| text_lower.contains(*keyword))
        .map(|keyword| (*keyword).to_string())
        .collect();

    for pattern in CONTEXT_PATTERNS.iter() {
        for caps in pattern.captures_iter(&text_lower) {
            found.extend(
                caps[1]
                    .split(',')
                    .map(str::trim)
                    .filter(|fragment| !fragment.is_empty())
                    .map(str::to_string),
            );
        }
    }

    found
}
