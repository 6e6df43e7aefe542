//
//  matcher.rs
//  modgraph
//

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rule deciding whether an import candidate refers to a module id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// Exact id, or the id's trailing dot-segments equal the candidate's.
    ///
    /// Tolerates partially qualified imports, at the cost of spurious edges
    /// when several modules share a suffix.
    #[default]
    Suffix,
    /// Exact id only.
    Exact,
}

impl MatchStrategy {
    pub fn matches(self, candidate: &str, module: &str) -> bool {
        if candidate.is_empty() {
            return false;
        }
        match self {
            MatchStrategy::Exact => candidate == module,
            MatchStrategy::Suffix => candidate == module || is_segment_suffix(candidate, module),
        }
    }
}

/// `b.c` is a segment suffix of `a.b.c` but not of `a.xb.c`.
fn is_segment_suffix(candidate: &str, module: &str) -> bool {
    let wanted: Vec<&str> = candidate.split('.').collect();
    let have: Vec<&str> = module.split('.').collect();
    have.len() >= wanted.len() && have[have.len() - wanted.len()..] == wanted[..]
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStrategy::Suffix => f.write_str("suffix"),
            MatchStrategy::Exact => f.write_str("exact"),
        }
    }
}

impl FromStr for MatchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "suffix" => Ok(MatchStrategy::Suffix),
            "exact" => Ok(MatchStrategy::Exact),
            other => Err(format!("unknown match strategy '{other}' (expected suffix or exact)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(MatchStrategy::Suffix.matches("a.b", "a.b"));
        assert!(MatchStrategy::Exact.matches("a.b", "a.b"));
    }

    #[test]
    fn test_segment_suffix() {
        assert!(MatchStrategy::Suffix.matches("b.c", "a.b.c"));
        assert!(MatchStrategy::Suffix.matches("c", "a.b.c"));
        assert!(!MatchStrategy::Exact.matches("b.c", "a.b.c"));
    }

    #[test]
    fn test_partial_segment_is_not_suffix() {
        assert!(!MatchStrategy::Suffix.matches("b.c", "xab.c"));
        assert!(!MatchStrategy::Suffix.matches("b.c", "a.xb.c"));
        assert!(!MatchStrategy::Suffix.matches("c", "a.bc"));
    }

    #[test]
    fn test_longer_candidate_never_matches() {
        assert!(!MatchStrategy::Suffix.matches("x.a.b", "a.b"));
    }

    #[test]
    fn test_empty_candidate_never_matches() {
        assert!(!MatchStrategy::Suffix.matches("", ""));
        assert!(!MatchStrategy::Suffix.matches("", "a"));
        assert!(!MatchStrategy::Exact.matches("", ""));
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!("suffix".parse::<MatchStrategy>(), Ok(MatchStrategy::Suffix));
        assert_eq!("EXACT".parse::<MatchStrategy>(), Ok(MatchStrategy::Exact));
        assert!("fuzzy".parse::<MatchStrategy>().is_err());
        assert_eq!(MatchStrategy::Exact.to_string(), "exact");
    }
}
