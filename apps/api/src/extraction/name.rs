use regex::Regex;
use std::sync::LazyLock;

static NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([A-Z][A-Z\s]+|[A-Z][a-z]+(?:\s+[A-Z][a-z]+)+)(?:\s*[-–—]\s*[A-Z][A-Za-z\s]+)?$",
    )
    .unwrap()
});

const NAME_SCAN_LINES: usize = 3;

/// Looks for a name-shaped line among the first few lines. A trailing
/// "- Title" clause is dropped.
pub fn detect_name(lines: &[String]) -> Option<String> {
    lines.iter().take(NAME_SCAN_LINES).find_map(|line| {
        NAME.captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_titlecase_name() {
        assert_eq!(
            detect_name(&lines(&["Jane Doe", "jane@x.com"])).as_deref(),
            Some("Jane Doe")
        );
    }

    #[test]
    fn test_uppercase_name() {
        assert_eq!(
            detect_name(&lines(&["JOHN SMITH"])).as_deref(),
            Some("JOHN SMITH")
        );
    }

    #[test]
    fn test_dash_suffix_is_discarded() {
        assert_eq!(
            detect_name(&lines(&["Jane Doe - Software Engineer"])).as_deref(),
            Some("Jane Doe")
        );
        assert_eq!(
            detect_name(&lines(&["Jane Mary Doe — Data Scientist"])).as_deref(),
            Some("Jane Mary Doe")
        );
    }

    #[test]
    fn test_name_on_third_line() {
        let input = lines(&["jane@x.com", "+1 555 123 4567", "Jane Doe"]);
        assert_eq!(detect_name(&input).as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_only_first_three_lines_are_scanned() {
        let input = lines(&["jane@x.com", "555-123-4567", "github.com/jd", "Jane Doe"]);
        assert_eq!(detect_name(&input), None);
    }

    #[test]
    fn test_single_titlecase_word_is_not_a_name() {
        assert_eq!(detect_name(&lines(&["Jane"])), None);
        assert_eq!(detect_name(&[]), None);
    }
}
