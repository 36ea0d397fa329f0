use regex::Regex;
use std::sync::LazyLock;

use crate::extraction::lines::{first_year, is_bullet};
use crate::extraction::machine::{set_once, EntryDraft, FieldRule};
use crate::extraction::models::CertificationEntry;

static ISSUER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(issued by|from|by)\b").unwrap());
static CREDENTIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(credential|id|number)\b").unwrap());
static CREDENTIAL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z0-9][A-Z0-9-]{2,}\b").unwrap());
// "2023", "May 2023", "Jan. 2023"
static DATE_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:[a-z]{3,9}\.?\s+)?(?:19|20)\d{2}$").unwrap()
});

impl CertificationEntry {
    fn fill_issuer(&mut self, line: &str) -> bool {
        if self.issuer.is_some() || !ISSUER.is_match(line) {
            return false;
        }
        let issuer = ISSUER.replace(line, "");
        let issuer = issuer.trim().trim_start_matches(':').trim();
        set_once(&mut self.issuer, issuer)
    }

    fn fill_date(&mut self, line: &str) -> bool {
        if self.date.is_some() {
            return false;
        }
        first_year(line).is_some_and(|year| set_once(&mut self.date, year))
    }

    fn fill_credential_id(&mut self, line: &str) -> bool {
        if self.credential_id.is_some() {
            return false;
        }
        let Some(keyword) = CREDENTIAL.find(line) else {
            return false;
        };
        CREDENTIAL_TOKEN
            .find(&line[keyword.end()..])
            .is_some_and(|token| set_once(&mut self.credential_id, token.as_str()))
    }
}

impl EntryDraft for CertificationEntry {
    const FIELDS: &'static [FieldRule<Self>] = &[
        FieldRule {
            name: "issuer",
            apply: CertificationEntry::fill_issuer,
        },
        FieldRule {
            name: "date",
            apply: CertificationEntry::fill_date,
        },
        FieldRule {
            name: "credential_id",
            apply: CertificationEntry::fill_credential_id,
        },
    ];

    fn is_entry_start(line: &str) -> bool {
        !is_bullet(line)
            && !ISSUER.is_match(line)
            && !CREDENTIAL.is_match(line)
            && !DATE_ONLY.is_match(line)
    }

    fn start(line: &str) -> Self {
        CertificationEntry {
            name: line.to_string(),
            ..Default::default()
        }
    }
}
