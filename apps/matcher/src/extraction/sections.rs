//! Section Segmenter — carves experience and education blocks out of free resume text.
//!
//! Each section kind has an ordered list of header alternatives. The first alternative
//! found anywhere in the text (case-insensitive, spanning lines) wins; its body runs to
//! the next known header keyword or end of text.
//!
//! Entry extraction inside a block is deliberately narrow: only lines shaped exactly as
//! `company - position - duration - location` or `degree - institution - year` (hyphen or
//! en dash) are recognised. Everything else is dropped without error.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::profile::{EducationEntry, ExperienceEntry};

/// A header alternative plus the keywords that end its body.
struct SectionPattern {
    header: Regex,
    terminator: Regex,
}

impl SectionPattern {
    fn new(header: &str, terminators: &[&str]) -> Self {
        Self {
            header: Regex::new(&format!(r"(?i){header}[:\s]*")).expect("valid regex"),
            terminator: Regex::new(&format!("(?i){}", terminators.join("|")))
                .expect("valid regex"),
        }
    }

    fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        let header = self.header.find(text)?;
        let rest = &text[header.end()..];
        let end = self.terminator.find(rest).map_or(rest.len(), |m| m.start());
        Some(&rest[..end])
    }
}

/// Result of looking for one section kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section<'t> {
    Found(&'t str),
    Missing,
}

impl<'t> Section<'t> {
    pub fn body(&self) -> &'t str {
        match self {
            Section::Found(body) => body,
            Section::Missing => "",
        }
    }
}

const EXPERIENCE_END: &[&str] = &["education", "skills", "projects"];
const EDUCATION_END: &[&str] = &["experience", "skills", "projects"];

static EXPERIENCE_PATTERNS: Lazy<Vec<SectionPattern>> = Lazy::new(|| {
    vec![
        SectionPattern::new("experience", EXPERIENCE_END),
        SectionPattern::new("work history", EXPERIENCE_END),
        SectionPattern::new("employment", EXPERIENCE_END),
    ]
});

static EDUCATION_PATTERNS: Lazy<Vec<SectionPattern>> = Lazy::new(|| {
    vec![
        SectionPattern::new("education", EDUCATION_END),
        SectionPattern::new("academic", EDUCATION_END),
        SectionPattern::new("qualifications", EDUCATION_END),
    ]
});

fn first_match<'t>(patterns: &[SectionPattern], text: &'t str) -> Section<'t> {
    patterns
        .iter()
        .find_map(|pattern| pattern.capture(text))
        .map_or(Section::Missing, Section::Found)
}

pub fn experience_section(text: &str) -> Section<'_> {
    first_match(&EXPERIENCE_PATTERNS, text)
}

pub fn education_section(text: &str) -> Section<'_> {
    first_match(&EDUCATION_PATTERNS, text)
}

// ────────────────────────────────────────────────────────────────────────────
// Entry lines
// ────────────────────────────────────────────────────────────────────────────

static EXPERIENCE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"([A-Za-z\s&]+)\s*[-–]\s*([A-Za-z\s&]+)\s*[-–]\s*([A-Za-z0-9\s,]+)\s*[-–]\s*([A-Za-z0-9\s,]+)",
    )
    .expect("valid regex")
});

static EDUCATION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"([A-Za-z\s]*(?:Bachelor|Master|PhD|B\.S\.|M\.S\.|B\.A\.|M\.A\.)[A-Za-z\s]*)\s*[-–]\s*([A-Za-z\s&]+)\s*[-–]\s*([A-Za-z0-9\s,]+)",
    )
    .expect("valid regex")
});

/// Parses `company - position - duration - location`.
pub fn parse_experience_line(line: &str) -> Option<ExperienceEntry> {
    let caps = EXPERIENCE_LINE.captures(line)?;
    Some(ExperienceEntry {
        company: caps[1].trim().to_string(),
        position: caps[2].trim().to_string(),
        duration: caps[3].trim().to_string(),
        location: caps[4].trim().to_string(),
    })
}

/// Parses `degree - institution - year`; the degree must carry a recognised marker.
pub fn parse_education_line(line: &str) -> Option<EducationEntry> {
    let caps = EDUCATION_LINE.captures(line)?;
    Some(EducationEntry {
        degree: caps[1].trim().to_string(),
        institution: caps[2].trim().to_string(),
        year: caps[3].trim().to_string(),
    })
}

pub fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    let section = experience_section(text);
    if section == Section::Missing {
        debug!("No experience section detected");
    }
    section.body().lines().filter_map(parse_experience_line).collect()
}

pub fn extract_education(text: &str) -> Vec<EducationEntry> {
    let section = education_section(text);
    if section == Section::Missing {
        debug!("No education section detected");
    }
    section.body().lines().filter_map(parse_education_line).collect()
}

/// First non-empty line, trimmed.
pub fn extract_name(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\n\
        jane@example.com\n\
        \n\
        Experience\n\
        Acme Corp - Engineer - 3 years - Remote\n\
        Globex & Co - Senior Engineer – 2 years - New York\n\
        Freelance consulting for various clients\n\
        \n\
        Education\n\
        Bachelor of Science - State University - 2018\n\
        Master of Science - Tech Institute - 2020\n\
        Online bootcamp, 2021\n\
        \n\
        Skills\n\
        Python, SQL\n";

    #[test]
    fn test_single_experience_line() {
        let text = "Experience\nAcme Corp - Engineer - 3 years - Remote";
        let entries = extract_experience(text);
        assert_eq!(
            entries,
            vec![ExperienceEntry {
                company: "Acme Corp".to_string(),
                position: "Engineer".to_string(),
                duration: "3 years".to_string(),
                location: "Remote".to_string(),
            }]
        );
    }

    #[test]
    fn test_experience_entries_and_nonconforming_lines_dropped() {
        let entries = extract_experience(RESUME);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].company, "Globex & Co");
        assert_eq!(entries[1].position, "Senior Engineer");
        assert_eq!(entries[1].duration, "2 years");
        assert_eq!(entries[1].location, "New York");
    }

    #[test]
    fn test_education_entries() {
        let entries = extract_education(RESUME);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].degree, "Bachelor of Science");
        assert_eq!(entries[0].institution, "State University");
        assert_eq!(entries[0].year, "2018");
        assert_eq!(entries[1].degree, "Master of Science");
    }

    #[test]
    fn test_education_requires_degree_marker() {
        assert!(parse_education_line("Certificate in Cooking - Culinary School - 2019").is_none());
        assert!(parse_education_line("B.S. Computer Science - MIT - 2015").is_some());
    }

    #[test]
    fn test_section_body_bounded_by_next_header() {
        let body = experience_section(RESUME).body();
        assert!(body.starts_with("Acme Corp"));
        assert!(!body.contains("Bachelor"));
    }

    #[test]
    fn test_fallback_header_alternatives() {
        let text = "Work History:\nInitech - Analyst - 5 years - Austin\nSkills\nExcel";
        let entries = extract_experience(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company, "Initech");

        let text = "Employment\nHooli - PM - 1 year - Palo Alto";
        assert_eq!(extract_experience(text).len(), 1);
    }

    #[test]
    fn test_missing_sections_are_empty_not_errors() {
        let text = "Just a name\nand some prose without headers";
        assert_eq!(experience_section(text), Section::Missing);
        assert_eq!(education_section(text), Section::Missing);
        assert!(extract_experience(text).is_empty());
        assert!(extract_education(text).is_empty());
    }

    #[test]
    fn test_qualifications_header() {
        let text = "QUALIFICATIONS\nPhD in Physics - Caltech - 2012";
        let entries = extract_education(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "PhD in Physics");
    }

    #[test]
    fn test_extract_name_skips_blank_lines() {
        assert_eq!(extract_name("\n   \n  John Doe  \nEngineer"), "John Doe");
        assert_eq!(extract_name(""), "");
    }
}
