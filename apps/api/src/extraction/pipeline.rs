//! Résumé text → `ResumeRecord`.
//!
//! Name and contact run over the full line list; the five section processors
//! run over their own section bodies. Nothing here fails: a heuristic that
//! finds nothing leaves its field empty.

use tracing::debug;

use crate::extraction::contact::extract_contact;
use crate::extraction::lines::normalize_lines;
use crate::extraction::machine::collect_entries;
use crate::extraction::models::{
    CertificationEntry, EducationEntry, ExperienceEntry, ProjectEntry, ResumeRecord,
};
use crate::extraction::name::detect_name;
use crate::extraction::sections::{segment_sections, SectionKind};
use crate::extraction::skills::collect_skills;

/// One processor per section kind. Each appends what it finds to the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionProcessor {
    Education,
    Skills,
    Experience,
    Projects,
    Certifications,
}

impl From<SectionKind> for SectionProcessor {
    fn from(kind: SectionKind) -> Self {
        match kind {
            SectionKind::Education => SectionProcessor::Education,
            SectionKind::Skills => SectionProcessor::Skills,
            SectionKind::Experience => SectionProcessor::Experience,
            SectionKind::Projects => SectionProcessor::Projects,
            SectionKind::Certifications => SectionProcessor::Certifications,
        }
    }
}

impl SectionProcessor {
    pub fn process(self, lines: &[String], record: &mut ResumeRecord) {
        match self {
            SectionProcessor::Education => record
                .education
                .extend(collect_entries::<EducationEntry>(lines)),
            SectionProcessor::Skills => collect_skills(lines, &mut record.skills),
            SectionProcessor::Experience => record
                .experience
                .extend(collect_entries::<ExperienceEntry>(lines)),
            SectionProcessor::Projects => record
                .projects
                .extend(collect_entries::<ProjectEntry>(lines)),
            SectionProcessor::Certifications => record
                .certifications
                .extend(collect_entries::<CertificationEntry>(lines)),
        }
    }
}

pub fn extract_resume(text: &str) -> ResumeRecord {
    let lines = normalize_lines(text);
    let mut record = ResumeRecord {
        name: detect_name(&lines).unwrap_or_default(),
        contact: extract_contact(&lines),
        ..Default::default()
    };

    for section in segment_sections(text) {
        let section_lines = normalize_lines(section.body);
        debug!(
            section = section.kind.as_str(),
            span = ?section.consumed,
            lines = section_lines.len(),
            "processing section"
        );
        SectionProcessor::from(section.kind).process(&section_lines, &mut record);
    }

    record
}
