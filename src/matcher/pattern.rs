//! Pattern matching implementation.

use std::str::FromStr;

use crate::crypto::{Address, PREFIX_LEN};

/// Where in the address the pattern must appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPosition {
    /// Immediately after the 2-character network prefix (t1/t3)
    #[default]
    Anchored,
    /// Anywhere in the address
    Anywhere,
}

impl FromStr for MatchPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "anchored" | "prefix" | "start" => Ok(MatchPosition::Anchored),
            "anywhere" | "contains" | "any" => Ok(MatchPosition::Anywhere),
            _ => Err(format!("Unknown match position: {}", s)),
        }
    }
}

impl std::fmt::Display for MatchPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchPosition::Anchored => write!(f, "anchored"),
            MatchPosition::Anywhere => write!(f, "anywhere"),
        }
    }
}

/// Result of a pattern match operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// Full match found
    Match,
    /// No match
    NoMatch,
}

impl MatchResult {
    #[inline]
    pub fn is_match(self) -> bool {
        matches!(self, MatchResult::Match)
    }
}

/// A compiled pattern for efficient matching.
#[derive(Debug, Clone)]
pub struct Pattern {
    /// The pattern string (normalized)
    pattern: String,
    /// Where the pattern must appear
    position: MatchPosition,
    /// Whether matching is case sensitive
    case_sensitive: bool,
}

impl Pattern {
    /// Creates a new pattern.
    pub fn new(pattern: impl Into<String>, position: MatchPosition, case_sensitive: bool) -> Self {
        let pattern = pattern.into();
        let pattern = if case_sensitive {
            pattern
        } else {
            pattern.to_lowercase()
        };

        Self {
            pattern,
            position,
            case_sensitive,
        }
    }

    /// Returns the pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the match position.
    pub fn position(&self) -> MatchPosition {
        self.position
    }

    /// Matches an address against this pattern.
    ///
    /// Base58 output is pure ASCII, so byte offsets equal character
    /// offsets; an anchored pattern longer than the remaining address
    /// body fails rather than panicking.
    #[inline]
    pub fn matches(&self, address: &Address) -> MatchResult {
        let addr = address.as_str();

        let matched = match self.position {
            MatchPosition::Anchored => {
                match addr.get(PREFIX_LEN..PREFIX_LEN + self.pattern.len()) {
                    Some(segment) if self.case_sensitive => segment == self.pattern,
                    Some(segment) => segment.eq_ignore_ascii_case(&self.pattern),
                    None => false,
                }
            }
            MatchPosition::Anywhere => {
                if self.case_sensitive {
                    addr.contains(&self.pattern)
                } else {
                    addr.to_ascii_lowercase().contains(&self.pattern)
                }
            }
        };

        if matched {
            MatchResult::Match
        } else {
            MatchResult::NoMatch
        }
    }

    /// Returns the estimated difficulty (number of attempts to find a match).
    ///
    /// Base58 has 58 characters per position, or roughly 34 once upper
    /// and lower case letters are folded together.
    pub fn estimated_difficulty(&self) -> u64 {
        let base: u64 = if self.case_sensitive { 58 } else { 34 };
        base.saturating_pow(self.pattern.len() as u32)
    }

    /// Returns a human-readable difficulty estimate.
    pub fn difficulty_description(&self) -> String {
        let diff = self.estimated_difficulty();
        match diff {
            0..=1_000 => "Very Easy (< 1 second)".into(),
            1_001..=100_000 => "Easy (seconds)".into(),
            100_001..=10_000_000 => "Medium (minutes)".into(),
            10_000_001..=1_000_000_000 => "Hard (hours)".into(),
            _ => "Very Hard (days or more)".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::NetworkProfile;

    // from_script_hash([0x11; 20], Zelcore) encodes to this exact string
    const FIXTURE: &str = "t1KRqwQhktLV4BjbNLiuH6pb3AMoszZKcQB";

    fn fixture_address() -> Address {
        let addr = Address::from_script_hash(&[0x11; 20], NetworkProfile::Zelcore);
        assert_eq!(addr.as_str(), FIXTURE);
        addr
    }

    #[test]
    fn test_anchored_match() {
        let addr = fixture_address();

        let pattern = Pattern::new("KRqw", MatchPosition::Anchored, true);
        assert!(pattern.matches(&addr).is_match());
    }

    #[test]
    fn test_anchored_rejects_shifted_occurrence() {
        let addr = fixture_address();

        // "Rqw" occurs at offset 3, not immediately after the prefix
        let anchored = Pattern::new("Rqw", MatchPosition::Anchored, true);
        let anywhere = Pattern::new("Rqw", MatchPosition::Anywhere, true);
        assert!(!anchored.matches(&addr).is_match());
        assert!(anywhere.matches(&addr).is_match());
    }

    #[test]
    fn test_anchored_case_folding() {
        let addr = fixture_address();

        let insensitive = Pattern::new("krqW", MatchPosition::Anchored, false);
        assert!(insensitive.matches(&addr).is_match());

        let sensitive = Pattern::new("krqW", MatchPosition::Anchored, true);
        assert!(!sensitive.matches(&addr).is_match());
    }

    #[test]
    fn test_anchored_pattern_longer_than_address() {
        let addr = fixture_address();
        let too_long = "1".repeat(addr.as_str().len());

        let pattern = Pattern::new(too_long, MatchPosition::Anchored, false);
        assert!(!pattern.matches(&addr).is_match());
    }

    #[test]
    fn test_anywhere_match() {
        let addr = fixture_address();

        let middle = Pattern::new("NLiu", MatchPosition::Anywhere, true);
        assert!(middle.matches(&addr).is_match());

        let folded = Pattern::new("nliU", MatchPosition::Anywhere, false);
        assert!(folded.matches(&addr).is_match());
    }

    #[test]
    fn test_anywhere_no_match() {
        let addr = fixture_address();
        // '0' never appears in base58 output
        let pattern = Pattern::new("0000", MatchPosition::Anywhere, true);
        assert!(!pattern.matches(&addr).is_match());
    }

    #[test]
    fn test_position_from_str() {
        assert_eq!("anchored".parse(), Ok(MatchPosition::Anchored));
        assert_eq!("anywhere".parse(), Ok(MatchPosition::Anywhere));
        assert_eq!("ANY".parse(), Ok(MatchPosition::Anywhere));
        assert!("middle".parse::<MatchPosition>().is_err());
    }

    #[test]
    fn test_difficulty() {
        let sensitive = Pattern::new("FLUX", MatchPosition::Anchored, true);
        assert_eq!(sensitive.estimated_difficulty(), 58u64.pow(4));

        let insensitive = Pattern::new("FLUX", MatchPosition::Anchored, false);
        assert_eq!(insensitive.estimated_difficulty(), 34u64.pow(4));
    }
}
