//! Resume extraction: document bytes → text → ExtractedProfile.
//! Only `text` touches external bytes; everything after it is infallible.

pub mod contact;
pub mod sections;
pub mod skills;
pub mod text;

pub use text::{extract_text, DocumentFormat};

use tracing::info;

use crate::errors::ExtractionError;
use crate::models::profile::ExtractedProfile;

/// Extracts text from an uploaded document and parses it into a profile.
///
/// Fails only when the document itself cannot be read; an unreadable document never
/// produces a partial profile.
pub fn parse_resume(bytes: &[u8], format: DocumentFormat) -> Result<ExtractedProfile, ExtractionError> {
    let text = extract_text(bytes, format)?;
    let profile = parse_resume_text(&text);
    info!(
        "Parsed {} resume: {} skills, {} experience entries, {} education entries",
        format,
        profile.skills.len(),
        profile.experience.len(),
        profile.education.len()
    );
    Ok(profile)
}

/// Parses pasted resume text. Missing sections and contact fields come back empty.
pub fn parse_resume_text(text: &str) -> ExtractedProfile {
    ExtractedProfile {
        name: sections::extract_name(text),
        contact_info: contact::extract_contact_info(text),
        skills: skills::resume_skills(text),
        experience: sections::extract_experience(text),
        education: sections::extract_education(text),
        raw_text: text.to_string(),
    }
}
