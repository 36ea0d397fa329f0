//! Line-level helpers shared by every stage of the extraction pipeline.

use regex::Regex;
use std::sync::LazyLock;

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:20|19)\d{2}").unwrap());
static BULLET_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[•-]\s*").unwrap());
static LIST_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,•|]").unwrap());

/// Splits raw text into trimmed, non-empty lines in source order.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

pub fn is_bullet(line: &str) -> bool {
    line.starts_with('•') || line.starts_with('-')
}

pub fn strip_bullet(line: &str) -> String {
    BULLET_PREFIX.replace(line, "").into_owned()
}

/// Splits a comma/bullet/pipe separated list, dropping empty items.
pub fn split_list(text: &str) -> Vec<String> {
    LIST_SEPARATOR
        .split(text)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// First two year-shaped tokens (19xx or 20xx) on the line.
pub fn year_pair(line: &str) -> Option<(String, Option<String>)> {
    let mut years = YEAR.find_iter(line).map(|m| m.as_str().to_string());
    let start = years.next()?;
    Some((start, years.next()))
}

pub fn first_year(line: &str) -> Option<String> {
    YEAR.find(line).map(|m| m.as_str().to_string())
}
