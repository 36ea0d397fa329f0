use regex::Regex;
use std::sync::LazyLock;

use crate::extraction::lines::{is_bullet, year_pair};
use crate::extraction::machine::{set_once, EntryDraft, FieldRule};
use crate::extraction::models::EducationEntry;

static INSTITUTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(university|college|institute|school)").unwrap());
// Abbreviations need word boundaries or "Acme" and "Programs" read as degrees.
static DEGREE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(bachelor|master|ph\.?d|\b[bm]\.?[se]\.?\b)").unwrap()
});
static FIELD_OF_STUDY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(computer science|engineering|mathematics|physics|chemistry|biology)")
        .unwrap()
});
static GPA_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(gpa|grade point average)").unwrap());
static GPA_VALUE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d\.\d{1,2}").unwrap());

impl EducationEntry {
    fn fill_degree(&mut self, line: &str) -> bool {
        self.degree.is_none() && DEGREE.is_match(line) && set_once(&mut self.degree, line)
    }

    fn fill_field_of_study(&mut self, line: &str) -> bool {
        self.field_of_study.is_none()
            && FIELD_OF_STUDY.is_match(line)
            && set_once(&mut self.field_of_study, line)
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

    fn fill_gpa(&mut self, line: &str) -> bool {
        if self.gpa.is_some() || !GPA_LINE.is_match(line) {
            return false;
        }
        GPA_VALUE
            .find(line)
            .is_some_and(|m| set_once(&mut self.gpa, m.as_str()))
    }
}

impl EntryDraft for EducationEntry {
    const FIELDS: &'static [FieldRule<Self>] = &[
        FieldRule {
            name: "degree",
            apply: EducationEntry::fill_degree,
        },
        FieldRule {
            name: "field_of_study",
            apply: EducationEntry::fill_field_of_study,
        },
        FieldRule {
            name: "years",
            apply: EducationEntry::fill_years,
        },
        FieldRule {
            name: "gpa",
            apply: EducationEntry::fill_gpa,
        },
    ];

    fn is_entry_start(line: &str) -> bool {
        !is_bullet(line) && INSTITUTION.is_match(line)
    }

    fn start(line: &str) -> Self {
        EducationEntry {
            institution: line.to_string(),
            ..Default::default()
        }
    }
}
