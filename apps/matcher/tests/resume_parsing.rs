use std::io::{Cursor, Write};

use matcher::{
    parse_resume, parse_resume_text, CandidateInput, DocumentFormat, ExtractionError, JobInput,
    MatchAggregator,
};

const RESUME_LINES: &[&str] = &[
    "Jane Doe",
    "jane.doe@example.com | linkedin.com/in/jane-doe",
    "Proficient in Python, Rust",
    "",
    "Experience",
    "Acme Corp - Engineer - 3 years - Remote",
    "",
    "Education",
    "Bachelor of Science - State University - 2018",
];

fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

#[test]
fn test_single_experience_entry() {
    let profile = parse_resume_text("Experience\nAcme Corp - Engineer - 3 years - Remote");
    assert_eq!(profile.experience.len(), 1);
    let entry = &profile.experience[0];
    assert_eq!(entry.company, "Acme Corp");
    assert_eq!(entry.position, "Engineer");
    assert_eq!(entry.duration, "3 years");
    assert_eq!(entry.location, "Remote");
}

#[test]
fn test_contact_without_phone() {
    let profile = parse_resume_text(&RESUME_LINES.join("\n"));
    assert_eq!(profile.contact_info.email.as_deref(), Some("jane.doe@example.com"));
    assert_eq!(profile.contact_info.linkedin.as_deref(), Some("linkedin.com/in/jane-doe"));
    assert!(profile.contact_info.phone.is_none());
}

#[test]
fn test_docx_resume_matches_txt_resume() {
    let from_docx = parse_resume(&build_docx(RESUME_LINES), DocumentFormat::Docx).unwrap();
    let from_txt = parse_resume(RESUME_LINES.join("\n").as_bytes(), DocumentFormat::Txt).unwrap();

    assert_eq!(from_docx.name, "Jane Doe");
    assert_eq!(from_docx.first_name(), "Jane");
    assert_eq!(from_docx.last_name(), "Doe");
    assert_eq!(from_docx.skills, from_txt.skills);
    assert_eq!(from_docx.experience, from_txt.experience);
    assert_eq!(from_docx.education, from_txt.education);
    assert_eq!(from_docx.education[0].institution, "State University");
}

#[test]
fn test_unsupported_format_payload() {
    let err = DocumentFormat::from_filename("resume.rtf").unwrap_err();
    assert!(matches!(err, ExtractionError::UnsupportedFormat(_)));

    let payload = err.to_payload();
    assert_eq!(payload["error"]["code"], "UNSUPPORTED_FORMAT");
    assert_eq!(payload["error"]["message"], "Unsupported file type: rtf");
}

#[test]
fn test_unreadable_docx_produces_no_profile() {
    let result = parse_resume(b"PK\x03\x04 truncated", DocumentFormat::Docx);
    let err = result.unwrap_err();
    assert_eq!(err.code(), "UNREADABLE_DOCUMENT");
}

#[test]
fn test_parsed_resume_feeds_matching() {
    let profile = parse_resume(&build_docx(RESUME_LINES), DocumentFormat::Docx).unwrap();
    let candidate = CandidateInput::from_profile(&profile);
    let job = JobInput::new("Python engineer, 2+ years experience, Bachelor degree required");

    let result = MatchAggregator::default().evaluate(&job, &candidate);
    assert!(result.matched_skills.iter().any(|s| s == "python"));
    assert_eq!(result.experience_match, 100.0);
    assert_eq!(result.education_match, 70.0);
    assert!(result.is_recommendable(30.0));
}
