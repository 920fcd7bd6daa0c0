use crate::dependants::domain::{DependencyEdge, DOWNLOADS_SENTINEL};

/// Separator between dependency tokens in the feed's `Dependencies` property
const TOKEN_SEPARATOR: char = '|';

/// Separator between the parts of one token (`package:version[:framework]`)
const PART_SEPARATOR: char = ':';

/// DependencyEdgeParser service for the feed's dependency micro-format
///
/// `Dependencies` looks like `Foo:1.2.0:net45|Baz:[2.0,3.0):net45`. The
/// registry selects dependants with `substringof(target, Dependencies)`, so
/// the edge is located with the same substring semantics: the first token
/// whose raw text contains the target id wins. This can pick the wrong token
/// when another dependency id contains the target id as an infix.
pub struct DependencyEdgeParser;

impl DependencyEdgeParser {
    /// Extracts the dependency edge naming `target` from a dependency string
    ///
    /// # Returns
    /// The package and version of the first token containing `target`, or
    /// `None` when no token does. A token without a version part yields an
    /// empty version.
    pub fn parse_our_edge(dependencies: &str, target: &str) -> Option<DependencyEdge> {
        let token = dependencies
            .split(TOKEN_SEPARATOR)
            .find(|token| token.contains(target))?;

        let mut parts = token.split(PART_SEPARATOR);
        let package = parts.next().unwrap_or_default();
        let version = parts.next().unwrap_or_default();

        Some(DependencyEdge::new(package.to_string(), version.to_string()))
    }
}

/// Parses a download count, falling back to [`DOWNLOADS_SENTINEL`]
///
/// Surrounding whitespace is ignored. Anything that is not a base-10
/// integer (including values out of `i64` range) yields the sentinel.
pub fn parse_downloads(text: &str) -> i64 {
    text.trim().parse::<i64>().unwrap_or(DOWNLOADS_SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(dependencies: &str, target: &str) -> (String, String) {
        let edge = DependencyEdgeParser::parse_our_edge(dependencies, target).unwrap();
        (edge.package().to_string(), edge.version().to_string())
    }

    #[test]
    fn test_single_token() {
        assert_eq!(
            edge("Foo:1.0.0:net45", "Foo"),
            ("Foo".to_string(), "1.0.0".to_string())
        );
    }

    #[test]
    fn test_target_first_of_many() {
        assert_eq!(
            edge("Foo:1.2.0:net45|Baz:2.0.0:net45", "Foo"),
            ("Foo".to_string(), "1.2.0".to_string())
        );
    }

    #[test]
    fn test_target_in_middle() {
        assert_eq!(
            edge("Alpha:1.0:net45|Foo:[1.0,2.0):net45|Omega:3.0:net45", "Foo"),
            ("Foo".to_string(), "[1.0,2.0)".to_string())
        );
    }

    #[test]
    fn test_version_range_with_comma_is_kept() {
        assert_eq!(
            edge("Foo:[1.0, 2.0]:", "Foo"),
            ("Foo".to_string(), "[1.0, 2.0]".to_string())
        );
    }

    #[test]
    fn test_substring_match_selects_longer_package() {
        // Substring semantics: "Foo.Extensions" contains "Foo" and comes first
        assert_eq!(
            edge("Foo.Extensions:2.0.0:net45|Foo:1.0.0:net45", "Foo"),
            ("Foo.Extensions".to_string(), "2.0.0".to_string())
        );
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert!(DependencyEdgeParser::parse_our_edge("foo:1.0.0:net45", "Foo").is_none());
    }

    #[test]
    fn test_no_matching_token() {
        assert!(DependencyEdgeParser::parse_our_edge("Bar:1.0.0|Baz:2.0.0", "Foo").is_none());
    }

    #[test]
    fn test_empty_dependencies() {
        assert!(DependencyEdgeParser::parse_our_edge("", "Foo").is_none());
    }

    #[test]
    fn test_token_without_version() {
        assert_eq!(edge("Foo", "Foo"), ("Foo".to_string(), String::new()));
    }

    #[test]
    fn test_token_with_empty_version() {
        assert_eq!(edge("Foo::net45", "Foo"), ("Foo".to_string(), String::new()));
    }

    #[test]
    fn test_unique_match_among_generated_tokens() {
        let others = ["Alpha", "Beta", "Gamma", "Delta"];
        for position in 0..=others.len() {
            let mut tokens: Vec<String> = others.iter().map(|p| format!("{}:0.1.0", p)).collect();
            tokens.insert(position, "Target:9.9.9".to_string());
            let dependencies = tokens.join("|");

            assert_eq!(
                edge(&dependencies, "Target"),
                ("Target".to_string(), "9.9.9".to_string()),
                "position {}",
                position
            );
        }
    }

    #[test]
    fn test_parse_downloads_integer() {
        assert_eq!(parse_downloads("120"), 120);
        assert_eq!(parse_downloads("0"), 0);
        assert_eq!(parse_downloads("9876543210"), 9_876_543_210);
    }

    #[test]
    fn test_parse_downloads_whitespace() {
        assert_eq!(parse_downloads(" 42\n"), 42);
    }

    #[test]
    fn test_parse_downloads_negative() {
        assert_eq!(parse_downloads("-5"), -5);
    }

    #[test]
    fn test_parse_downloads_sentinel() {
        for text in ["abc", "", "1.5", "12abc", "1,000", "99999999999999999999"] {
            assert_eq!(parse_downloads(text), DOWNLOADS_SENTINEL, "input {:?}", text);
        }
    }
}
