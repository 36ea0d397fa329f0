//! Section segmentation over the raw (not line-split) document text.
//!
//! Each header is searched independently, in a fixed order. A section body
//! runs from just after its header to the first of: another known header, the
//! start of a span already claimed by an earlier section, or end of text.
//! Claimed spans are tracked as byte ranges instead of being cut out of the
//! text, so later searches simply skip them.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::sync::LazyLock;

static EDUCATION_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)EDUCATION").unwrap());
static SKILLS_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)SKILLS").unwrap());
static EXPERIENCE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)EXPERIENCE").unwrap());
static PROJECTS_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)PROJECTS").unwrap());
static CERTIFICATIONS_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)CERTIFICATIONS(?:\s*(?:&|AND)\s*ACHIEVEMENTS)?").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Education,
    Skills,
    Experience,
    Projects,
    Certifications,
}

impl SectionKind {
    /// Search order. Says nothing about where sections sit in the document.
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Certifications,
    ];

    fn header(self) -> &'static Regex {
        match self {
            SectionKind::Education => &*EDUCATION_HEADER,
            SectionKind::Skills => &*SKILLS_HEADER,
            SectionKind::Experience => &*EXPERIENCE_HEADER,
            SectionKind::Projects => &*PROJECTS_HEADER,
            SectionKind::Certifications => &*CERTIFICATIONS_HEADER,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Experience => "experience",
            SectionKind::Projects => "projects",
            SectionKind::Certifications => "certifications",
        }
    }
}

/// A located section: its body text and the byte range it claimed (header
/// included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub kind: SectionKind,
    pub body: &'a str,
    pub consumed: Range<usize>,
}

pub fn segment_sections(text: &str) -> Vec<Section<'_>> {
    let mut claimed: Vec<Range<usize>> = Vec::new();
    let mut sections = Vec::new();

    for kind in SectionKind::ALL {
        let Some(header) = kind
            .header()
            .find_iter(text)
            .find(|m| !overlaps_any(&claimed, &m.range()))
        else {
            continue;
        };

        let after_header = &text[header.end()..];
        let body_start = header.end() + (after_header.len() - after_header.trim_start().len());
        let body_end = body_boundary(text, kind, body_start, &claimed);
        let body = &text[body_start..body_end];

        if body.trim().is_empty() {
            continue;
        }

        let consumed = header.start()..body_end;
        claimed.push(consumed.clone());
        sections.push(Section {
            kind,
            body,
            consumed,
        });
    }

    sections
}

fn body_boundary(text: &str, kind: SectionKind, from: usize, claimed: &[Range<usize>]) -> usize {
    let next_header = SectionKind::ALL
        .into_iter()
        .filter(|other| *other != kind)
        .filter_map(|other| other.header().find_at(text, from).map(|m| m.start()));

    let next_claimed = claimed
        .iter()
        .map(|range| range.start)
        .filter(|start| *start >= from);

    next_header
        .chain(next_claimed)
        .min()
        .unwrap_or(text.len())
}

fn overlaps_any(claimed: &[Range<usize>], range: &Range<usize>) -> bool {
    claimed
        .iter()
        .any(|c| c.start < range.end && range.start < c.end)
}
