use crate::extraction::lines::{is_bullet, split_list, strip_bullet};
use crate::extraction::machine::{set_once, EntryDraft, FieldRule};
use crate::extraction::models::ProjectEntry;

const TECHNOLOGY_LABELS: &[&str] = &["Technologies:", "Tech Stack:"];

fn technologies_of(line: &str) -> Option<Vec<String>> {
    if !TECHNOLOGY_LABELS.iter().any(|label| line.contains(label)) {
        return None;
    }
    let (_, list) = line.split_once(':')?;
    Some(split_list(list))
}

impl ProjectEntry {
    fn fill_description(&mut self, line: &str) -> bool {
        set_once(&mut self.description, line)
    }

    fn fill_technologies(&mut self, line: &str) -> bool {
        if self.technologies.is_some() {
            return false;
        }
        match technologies_of(line) {
            Some(technologies) => {
                self.technologies = Some(technologies);
                true
            }
            None => false,
        }
    }

    fn push_achievement(&mut self, line: &str) -> bool {
        if !is_bullet(line) {
            return false;
        }
        self.achievements
            .get_or_insert_with(Vec::new)
            .push(strip_bullet(line));
        true
    }
}

impl EntryDraft for ProjectEntry {
    const FIELDS: &'static [FieldRule<Self>] = &[
        FieldRule {
            name: "description",
            apply: ProjectEntry::fill_description,
        },
        FieldRule {
            name: "technologies",
            apply: ProjectEntry::fill_technologies,
        },
        FieldRule {
            name: "achievements",
            apply: ProjectEntry::push_achievement,
        },
    ];

    fn is_entry_start(line: &str) -> bool {
        !is_bullet(line) && technologies_of(line).is_none()
    }

    fn start(line: &str) -> Self {
        ProjectEntry {
            name: line.to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::lines::normalize_lines;
    use crate::extraction::machine::collect_entries;

    fn parse(text: &str) -> Vec<ProjectEntry> {
        collect_entries(&normalize_lines(text))
    }

    #[test]
    fn test_full_project() {
        let entries = parse(
            "Resume Parser\nExtracts structured fields from CVs\nTech Stack: Rust, Axum | Regex\n• 10k documents/day\n- Zero panics",
        );
        assert_eq!(
            entries,
            vec![ProjectEntry {
                name: "Resume Parser".to_string(),
                description: Some("Extracts structured fields from CVs".to_string()),
                technologies: Some(vec![
                    "Rust".to_string(),
                    "Axum".to_string(),
                    "Regex".to_string()
                ]),
                achievements: Some(vec![
                    "10k documents/day".to_string(),
                    "Zero panics".to_string()
                ]),
            }]
        );
    }

    #[test]
    fn test_several_projects() {
        let entries = parse(
            "Alpha\nFirst tool\nTechnologies: Go\n• Shipped\nBeta\nSecond tool\nGamma\nThird tool",
        );
        let names: Vec<_> = entries.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
        assert_eq!(entries[1].description.as_deref(), Some("Second tool"));
        assert_eq!(entries[1].technologies, None);
        assert_eq!(entries[1].achievements, None);
    }

    #[test]
    fn test_line_after_name_is_description() {
        let entries = parse("Alpha\nTechnologies: Go, Rust");
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].description.as_deref(),
            Some("Technologies: Go, Rust")
        );
        assert_eq!(entries[0].technologies, None);
    }

    #[test]
    fn test_leading_bullets_without_name() {
        let entries = parse("• orphan achievement");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "");
        assert_eq!(
            entries[0].description.as_deref(),
            Some("• orphan achievement")
        );
    }
}
