use regex::Regex;
use std::sync::LazyLock;

use crate::extraction::lines::{is_bullet, strip_bullet, year_pair};
use crate::extraction::machine::{set_once, EntryDraft, FieldRule};
use crate::extraction::models::ExperienceEntry;

static COMPANY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(inc|ltd|llc|corp(oration)?|company)\b").unwrap()
});
static POSITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(engineer|developer|analyst|manager|director|lead|architect)").unwrap()
});

impl ExperienceEntry {
    fn fill_position(&mut self, line: &str) -> bool {
        self.position.is_none() && POSITION.is_match(line) && set_once(&mut self.position, line)
    }

    fn fill_years(&mut self, line: &str) -> bool {
        if self.start_date.is_some() {
            return false;
        }
        match year_pair(line) {
            Some((start, end)) => {
                self.start_date = Some(start);
                self.end_date = end;
                true
            }
            None => false,
        }
    }

    fn push_description(&mut self, line: &str) -> bool {
        if !is_bullet(line) {
            return false;
        }
        self.description.push(strip_bullet(line));
        true
    }
}

impl EntryDraft for ExperienceEntry {
    const FIELDS: &'static [FieldRule<Self>] = &[
        FieldRule {
            name: "position",
            apply: ExperienceEntry::fill_position,
        },
        FieldRule {
            name: "years",
            apply: ExperienceEntry::fill_years,
        },
        FieldRule {
            name: "description",
            apply: ExperienceEntry::push_description,
        },
    ];

    fn is_entry_start(line: &str) -> bool {
        !is_bullet(line) && COMPANY.is_match(line)
    }

    fn start(line: &str) -> Self {
        ExperienceEntry {
            company: line.to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::lines::normalize_lines;
    use crate::extraction::machine::collect_entries;

    fn parse(text: &str) -> Vec<ExperienceEntry> {
        collect_entries(&normalize_lines(text))
    }

    #[test]
    fn test_single_entry() {
        let entries = parse("Acme Inc.\nSoftware Engineer\n2022 2024\n• Built APIs\n- Cut p99 latency by 40%");
        assert_eq!(
            entries,
            vec![ExperienceEntry {
                company: "Acme Inc.".to_string(),
                position: Some("Software Engineer".to_string()),
                start_date: Some("2022".to_string()),
                end_date: Some("2024".to_string()),
                description: vec![
                    "Built APIs".to_string(),
                    "Cut p99 latency by 40%".to_string()
                ],
            }]
        );
    }

    #[test]
    fn test_entries_in_source_order() {
        let entries = parse(
            "Initech LLC\nData Analyst\n2015 2017\n• Reports\nGlobex Corporation\nEngineering Manager\n2017 2023",
        );
        let companies: Vec<_> = entries.iter().map(|e| e.company.as_str()).collect();
        assert_eq!(companies, vec!["Initech LLC", "Globex Corporation"]);
        assert_eq!(entries[0].description, vec!["Reports"]);
        assert_eq!(entries[1].position.as_deref(), Some("Engineering Manager"));
    }

    #[test]
    fn test_bullet_mentioning_company_does_not_open_entry() {
        let entries = parse("Umbrella Corp\nLead Developer\n• Scaled the company platform");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description, vec!["Scaled the company platform"]);
    }

    #[test]
    fn test_principal_is_not_a_company_suffix() {
        let entries = parse("Hooli Ltd\nEngineer\nPrincipal Architect 2020");
        assert_eq!(entries.len(), 1);
        // Position is already set, so the line fills the years instead.
        assert_eq!(entries[0].start_date.as_deref(), Some("2020"));
    }

    #[test]
    fn test_present_end_date_is_absent() {
        let entries = parse("Acme Inc.\nArchitect\nJan 2021 - Present");
        assert_eq!(entries[0].start_date.as_deref(), Some("2021"));
        assert_eq!(entries[0].end_date, None);
    }

    #[test]
    fn test_no_company_lines() {
        assert!(parse("Freelance work\nStuff").is_empty());
    }
}
