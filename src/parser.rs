use std::fs;
use std::path::Path;

use crate::error::{PslError, Result};
use crate::types::{Rule, RuleKind};

const COMMENT_PREFIX: &str = "//";
const WILDCARD_PREFIX: &str = "*.";
const EXCEPTION_PREFIX: char = '!';

/// Parse public suffix rules from text in the published list format.
///
/// Blank lines and `//` comments are skipped. Every other line yields one
/// rule, in file order.
pub fn parse_rules(text: &str) -> Vec<Rule> {
    let mut rules = Vec::new();

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers
        let line = line.trim();

        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let mut rule = parse_single_rule(line);
        rule.line_num = line_num;
        rules.push(rule);
    }

    rules
}

/// Parse public suffix rules from a file.
pub fn parse_rules_from_file(path: impl AsRef<Path>) -> Result<Vec<Rule>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        PslError::IoError(std::io::Error::new(
            e.kind(),
            format!("Failed to read suffix list '{}': {}", path.display(), e),
        ))
    })?;
    Ok(parse_rules(&text))
}

/// Parse a single, non-comment rule line.
///
/// An exception marker wins over a wildcard marker if a line carries both.
fn parse_single_rule(line: &str) -> Rule {
    if let Some(rest) = line.strip_prefix(EXCEPTION_PREFIX) {
        let label = rest.strip_prefix(WILDCARD_PREFIX).unwrap_or(rest);
        return Rule::new(label, RuleKind::Exception);
    }

    if let Some(rest) = line.strip_prefix(WILDCARD_PREFIX) {
        return match rest.strip_prefix(EXCEPTION_PREFIX) {
            Some(label) => Rule::new(label, RuleKind::Exception),
            None => Rule::new(rest, RuleKind::Wildcard),
        };
    }

    Rule::new(line, RuleKind::Normal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_rule() {
        let rules = parse_rules("com");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].label, "com");
        assert_eq!(rules[0].kind, RuleKind::Normal);
        assert_eq!(rules[0].line_num, 1);
    }

    #[test]
    fn test_parse_wildcard_rule() {
        let rules = parse_rules("*.ck");
        assert_eq!(rules[0].label, "ck");
        assert_eq!(rules[0].kind, RuleKind::Wildcard);
    }

    #[test]
    fn test_parse_exception_rule() {
        let rules = parse_rules("!www.ck");
        assert_eq!(rules[0].label, "www.ck");
        assert_eq!(rules[0].kind, RuleKind::Exception);
    }

    #[test]
    fn test_skip_comments_and_blank_lines() {
        let text = r#"
// ===BEGIN ICANN DOMAINS===

// ac : https://en.wikipedia.org/wiki/.ac
ac
com.ac


// ===END ICANN DOMAINS===
"#;
        let rules = parse_rules(text);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].label, "ac");
        assert_eq!(rules[0].line_num, 5);
        assert_eq!(rules[1].label, "com.ac");
    }

    #[test]
    fn test_crlf_and_surrounding_whitespace() {
        let rules = parse_rules("uk\r\n  co.uk  \r\n");
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[1].label, "co.uk");
    }

    #[test]
    fn test_exception_wins_over_wildcard() {
        let rules = parse_rules("!*.example\n*.!other");
        assert_eq!(rules[0], {
            let mut r = Rule::new("example", RuleKind::Exception);
            r.line_num = 1;
            r
        });
        assert_eq!(rules[1].label, "other");
        assert_eq!(rules[1].kind, RuleKind::Exception);
    }

    #[test]
    fn test_case_preserved() {
        let rules = parse_rules("Example.COM");
        assert_eq!(rules[0].label, "Example.COM");
    }

    #[test]
    fn test_parse_from_missing_file() {
        let err = parse_rules_from_file("/nonexistent/public_suffix_list.dat").unwrap_err();
        assert!(matches!(err, PslError::IoError(_)));
        assert!(err.to_string().contains("public_suffix_list.dat"));
    }

    #[test]
    fn test_parse_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "// comment\njp\n*.kawasaki.jp\n!city.kawasaki.jp").unwrap();

        let rules = parse_rules_from_file(file.path()).unwrap();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[2].kind, RuleKind::Exception);
        assert_eq!(rules[2].line_num, 4);
    }
}
