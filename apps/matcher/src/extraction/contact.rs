use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::profile::ContactInfo;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid regex")
});

static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?1[-.\s]?)?\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})")
        .expect("valid regex")
});

static LINKEDIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)linkedin\.com/in/[\w-]+").expect("valid regex"));

/// Three independent passes; a field is set only when its pattern matches.
pub fn extract_contact_info(text: &str) -> ContactInfo {
    ContactInfo {
        email: EMAIL.find(text).map(|m| m.as_str().to_string()),
        phone: extract_phone(text),
        linkedin: LINKEDIN.find(text).map(|m| m.as_str().to_string()),
    }
}

/// Digits of the first US-style number, keeping a `+1`/`1` country prefix when written.
fn extract_phone(text: &str) -> Option<String> {
    let caps = PHONE.captures(text)?;
    let country: String = caps
        .get(1)
        .map(|m| {
            m.as_str()
                .chars()
                .filter(|c| *c == '+' || c.is_ascii_digit())
                .collect()
        })
        .unwrap_or_default();
    Some(format!("{country}{}{}{}", &caps[2], &caps[3], &caps[4]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_and_linkedin_without_phone() {
        let text = "John Doe\njohn@example.com | linkedin.com/in/johndoe\nBuilder of things";
        let contact = extract_contact_info(text);
        assert_eq!(contact.email.as_deref(), Some("john@example.com"));
        assert_eq!(contact.linkedin.as_deref(), Some("linkedin.com/in/johndoe"));
        assert!(contact.phone.is_none());
    }

    #[test]
    fn test_first_email_wins() {
        let contact = extract_contact_info("a.b+jobs@mail.co.uk, backup@example.org");
        assert_eq!(contact.email.as_deref(), Some("a.b+jobs@mail.co.uk"));
    }

    #[test]
    fn test_phone_formats() {
        assert_eq!(
            extract_contact_info("Call (555) 123-4567").phone.as_deref(),
            Some("5551234567")
        );
        assert_eq!(
            extract_contact_info("Tel: +1 555.123.4567").phone.as_deref(),
            Some("+15551234567")
        );
        assert_eq!(
            extract_contact_info("555-123-4567").phone.as_deref(),
            Some("5551234567")
        );
    }

    #[test]
    fn test_linkedin_case_insensitive() {
        let contact = extract_contact_info("https://www.LinkedIn.com/in/jane-doe-42/");
        assert_eq!(contact.linkedin.as_deref(), Some("LinkedIn.com/in/jane-doe-42"));
    }

    #[test]
    fn test_nothing_found() {
        assert_eq!(extract_contact_info("no contact here"), ContactInfo::default());
    }
}
