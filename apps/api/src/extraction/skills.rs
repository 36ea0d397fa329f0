use regex::Regex;
use std::sync::LazyLock;

use crate::extraction::lines::split_list;
use crate::extraction::models::{SkillCategory, Skills};

static TECHNICAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(programming|development|software|technical|frameworks|languages|databases|cloud|devops|\bai\b|\bml\b|data science)",
    )
    .unwrap()
});
static SOFT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(communication|leadership|teamwork|problem-solving|management|soft skills)")
        .unwrap()
});
static TOOLS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(tools|software|platforms|environments|\bide\b|version control|\bgit\b|github)",
    )
    .unwrap()
});
static LANGUAGES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(languages|fluent|proficient|native|bilingual)").unwrap());

/// Checked in this order; a later match overrides an earlier one.
fn category_patterns() -> [(SkillCategory, &'static Regex); 4] {
    [
        (SkillCategory::Technical, &*TECHNICAL),
        (SkillCategory::Soft, &*SOFT),
        (SkillCategory::Tools, &*TOOLS),
        (SkillCategory::Languages, &*LANGUAGES),
    ]
}

pub fn classify_line(line: &str) -> Option<SkillCategory> {
    category_patterns()
        .into_iter()
        .filter(|(_, pattern)| pattern.is_match(line))
        .map(|(category, _)| category)
        .last()
}

/// Sorts each line's items into a category bucket. A line that names a
/// category switches the bucket for itself and every line after it.
pub fn collect_skills(lines: &[String], skills: &mut Skills) {
    lines
        .iter()
        .fold(SkillCategory::default(), |current, line| {
            let category = classify_line(line).unwrap_or(current);
            for item in split_list(line) {
                skills.insert(category, &item);
            }
            category
        });
}
