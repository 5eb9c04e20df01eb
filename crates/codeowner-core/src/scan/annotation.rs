//! Extraction of owner annotations from source lines.
//!
//! An annotation is the configured prefix followed by owner handles, usually
//! inside a comment: `// CodeOwner: @backend @myorg/platform`. Only the first
//! occurrence of the prefix on a line is considered, and it must
//!
//! - start the line or follow a space or tab, and
//! - be followed immediately by a space.
//!
//! The rest of the line is split on whitespace and every token that is a valid
//! handle is kept; other tokens are ignored.

use crate::owner::{OwnerSet, is_valid_owner};

/// Returns the owner handles annotated on a single line, in order.
pub fn extract_owners<'a>(line: &'a str, prefix: &str) -> Vec<&'a str> {
    let Some(start) = line.find(prefix) else {
        return Vec::new();
    };

    let preceded_by_blank = line[..start]
        .chars()
        .next_back()
        .is_none_or(|c| c == ' ' || c == '\t');
    if !preceded_by_blank {
        return Vec::new();
    }

    let rest = &line[start + prefix.len()..];
    if !rest.starts_with(' ') {
        return Vec::new();
    }

    rest.split_whitespace()
        .filter(|token| is_valid_owner(token))
        .collect()
}

/// Scans every line of `content` and accumulates annotated owners.
///
/// Duplicates across lines are dropped, keeping first-seen order.
pub fn scan_owners(content: &str, prefix: &str) -> OwnerSet {
    let mut owners = OwnerSet::new();
    for line in content.lines() {
        owners.extend(extract_owners(line, prefix));
    }
    owners
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::DEFAULT_PREFIX;
    use std::path::PathBuf;

    fn testdata(name: &str) -> String {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("testdata")
            .join(name);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("reading {}: {}", path.display(), e))
    }

    fn scan(content: &str) -> Vec<String> {
        scan_owners(content, DEFAULT_PREFIX).into_vec()
    }

    #[test]
    fn language_samples() {
        let cases = [
            ("example.rs", "@rust_owner"),
            ("example.go", "@go_owner"),
            ("example.py", "@python_owner"),
            ("example.c", "@c_owner"),
            ("example.cpp", "@cpp_owner"),
            ("Example.java", "@java_owner"),
            ("example.js", "@js_owner"),
            ("example.ts", "@ts_owner"),
            ("Example.kt", "@kotlin_owner"),
            ("example.swift", "@swift_owner"),
            ("Example.cs", "@csharp_owner"),
            ("example.php", "@php_owner"),
            ("example.sh", "@shell_owner"),
            ("example.sql", "@sql_owner"),
            ("example.html", "@html_owner"),
            ("example.css", "@css_owner"),
            ("example.yaml", "@yaml_owner"),
            ("Dockerfile", "@docker_owner"),
        ];

        for (file, owner) in cases {
            assert_eq!(scan(&testdata(file)), vec![owner], "sample {}", file);
        }
    }

    #[test]
    fn multiple_owners_one_line() {
        assert_eq!(
            scan(&testdata("multi_owners_single_line.py")),
            vec!["@team-a", "@team-b", "@person-c"]
        );
    }

    #[test]
    fn multiple_owners_multiple_lines() {
        assert_eq!(
            scan(&testdata("multi_owners_multi_line.py")),
            vec!["@team-frontend", "@team-backend"]
        );
    }

    #[test]
    fn duplicates_keep_first_position() {
        assert_eq!(
            scan("# CodeOwner: @a @a\nx = 1\n# CodeOwner: @a\n"),
            vec!["@a"]
        );
        assert_eq!(
            scan("# CodeOwner: @b @a\n# CodeOwner: @c @b\n"),
            vec!["@b", "@a", "@c"]
        );
    }

    #[test]
    fn org_team_owners() {
        assert_eq!(
            scan(&testdata("org_team_multiple_owners.js")),
            vec!["@myorg/frontend-team", "@myorg/design-team", "@individual-dev"]
        );
    }

    #[test]
    fn no_annotation() {
        assert!(scan("# just a regular comment\nx = 1\n").is_empty());
    }

    #[test]
    fn requires_space_after_prefix() {
        assert!(extract_owners("# CodeOwner:@team", DEFAULT_PREFIX).is_empty());
        assert!(extract_owners("# CodeOwner:", DEFAULT_PREFIX).is_empty());
        assert!(extract_owners("# CodeOwner:\t@team", DEFAULT_PREFIX).is_empty());
    }

    #[test]
    fn extra_spaces_after_prefix_are_allowed() {
        assert_eq!(extract_owners("# CodeOwner:  @x", DEFAULT_PREFIX), vec!["@x"]);
        assert_eq!(extract_owners("# CodeOwner: \t @x", DEFAULT_PREFIX), vec!["@x"]);
    }

    #[test]
    fn prefix_must_start_line_or_follow_blank() {
        assert_eq!(extract_owners("CodeOwner: @x", DEFAULT_PREFIX), vec!["@x"]);
        assert_eq!(extract_owners("\tCodeOwner: @x", DEFAULT_PREFIX), vec!["@x"]);
        assert!(extract_owners("MyCodeOwner: @x", DEFAULT_PREFIX).is_empty());
        assert!(extract_owners("//CodeOwner: @x", DEFAULT_PREFIX).is_empty());
        assert!(scan(&testdata("invalid_prefix_not_preceded_by_space.md")).is_empty());
    }

    #[test]
    fn only_first_prefix_occurrence_counts() {
        // The first match is glued to an identifier, so the line is ignored.
        assert!(extract_owners("xCodeOwner: @a CodeOwner: @b", DEFAULT_PREFIX).is_empty());
        assert_eq!(
            extract_owners("# CodeOwner: @a CodeOwner: @b", DEFAULT_PREFIX),
            vec!["@a", "@b"]
        );
    }

    #[test]
    fn tab_before_prefix() {
        assert_eq!(scan(&testdata("tab_before_prefix.py")), vec!["@tab-team"]);
    }

    #[test]
    fn invalid_tokens_are_dropped() {
        assert!(scan(&testdata("invalid_owner_special_chars.txt")).is_empty());
        assert_eq!(
            extract_owners("# CodeOwner: team-backend @ok @bad!owner @", DEFAULT_PREFIX),
            vec!["@ok"]
        );
    }

    #[test]
    fn bare_at_is_never_an_owner() {
        assert!(scan("# CodeOwner: @\nx = 1\n").is_empty());
    }

    #[test]
    fn custom_prefix() {
        let content = "// Owner: @team-backend\npackage main\n";
        assert_eq!(scan_owners(content, "Owner:").into_vec(), vec!["@team-backend"]);
        assert!(scan(content).is_empty());
    }

    #[test]
    fn crlf_line_endings() {
        assert_eq!(scan("# CodeOwner: @a\r\n# CodeOwner: @b\r\n"), vec!["@a", "@b"]);
    }

    #[test]
    fn very_long_lines() {
        let line = format!("{} # CodeOwner: @long-line\n", "x".repeat(200_000));
        assert_eq!(scan(&line), vec!["@long-line"]);
    }
}
