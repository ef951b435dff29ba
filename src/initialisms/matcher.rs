//! Matcher engines
//!
//! A [`Matcher`] is compiled into something implementing [`FindMatch`].
//! The two engines share the table data but nothing else: the regex engine
//! expresses every exclusion as lookaround in a `fancy_regex` pattern, the
//! substring engine walks `str::find` hits and checks exclusions in code.

use std::borrow::Cow;
use std::fmt;
use std::ops::Range;

use fancy_regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Exclusion, InitialismRule, Matcher, Spelling};
use crate::error::{Error, Result};

/// Locates context-sensitive initialism hits
pub trait FindMatch: Send + Sync {
    /// Byte range of the first acceptable match starting at or after `from`
    fn find_at(&self, text: &str, from: usize) -> Option<Range<usize>>;

    /// All non-overlapping acceptable matches, left to right
    fn find_all(&self, text: &str) -> Vec<Range<usize>> {
        let mut found = Vec::new();
        let mut pos = 0;
        while let Some(range) = self.find_at(text, pos) {
            pos = range.end.max(range.start + 1);
            found.push(range);
            if pos > text.len() {
                break;
            }
        }
        found
    }
}

/// Which [`FindMatch`] implementation backs a normalizer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MatchEngine {
    /// `fancy_regex` pattern with exclusions as lookaround
    #[default]
    Regex,
    /// `str::find` plus exclusion predicates
    Substring,
}

impl MatchEngine {
    /// Compile a rule's matcher for this engine
    pub fn compile(self, rule: &'static InitialismRule) -> Result<Option<Box<dyn FindMatch>>> {
        let Some(matcher) = rule.matcher else {
            return Ok(None);
        };
        let finder: Box<dyn FindMatch> = match self {
            MatchEngine::Regex => Box::new(RegexFinder::new(rule.camel, matcher)?),
            MatchEngine::Substring => Box::new(SubstringFinder::new(matcher)),
        };
        Ok(Some(finder))
    }

    /// Parse an engine name as used on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "regex" | "re" => Some(MatchEngine::Regex),
            "substring" | "plain" => Some(MatchEngine::Substring),
            _ => None,
        }
    }
}

impl fmt::Display for MatchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchEngine::Regex => write!(f, "regex"),
            MatchEngine::Substring => write!(f, "substring"),
        }
    }
}

impl Exclusion {
    /// Whether this exclusion rejects a hit spanning `start..end`
    fn rejects(&self, text: &str, start: usize, end: usize) -> bool {
        match *self {
            Exclusion::FollowedBy(suffix) => text[end..].starts_with(suffix),
            Exclusion::FollowedByThenUpper(suffix) => text[end..]
                .strip_prefix(suffix)
                .and_then(|rest| rest.chars().next())
                .is_some_and(|c| c.is_ascii_uppercase()),
            Exclusion::PrecededBy(prefix) => text[..start].ends_with(prefix),
        }
    }
}

impl Spelling {
    /// End offset if this spelling matches at `at` and nothing excludes it
    fn accept_at(&self, text: &str, at: usize) -> Option<usize> {
        let end = at + self.text.len();
        let window = text.get(at..end)?;
        let hit = if self.ignore_case {
            window.eq_ignore_ascii_case(self.text)
        } else {
            window == self.text
        };
        if !hit || self.exclusions.iter().any(|e| e.rejects(text, at, end)) {
            return None;
        }
        Some(end)
    }
}

/// Regex-backed finder
///
/// Exclusions compile to lookaround: `PrecededBy` becomes a negative
/// lookbehind, `FollowedBy` and `FollowedByThenUpper` become alternatives
/// of one negative lookahead. The pattern alone decides a hit.
pub struct RegexFinder {
    regex: Regex,
}

impl RegexFinder {
    pub fn new(rule: &'static str, matcher: Matcher) -> Result<Self> {
        let pattern = matcher
            .spellings
            .iter()
            .map(lookaround_pattern)
            .collect::<Vec<_>>()
            .join("|");

        let regex = Regex::new(&pattern).map_err(|source| Error::RuleCompile { rule, source })?;
        Ok(Self { regex })
    }

    /// The compiled pattern
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

fn lookaround_pattern(spelling: &Spelling) -> String {
    let mut pattern = String::new();

    for exclusion in spelling.exclusions {
        if let Exclusion::PrecededBy(prefix) = exclusion {
            pattern.push_str(&format!("(?<!{})", regex::escape(prefix)));
        }
    }

    let text = regex::escape(spelling.text);
    if spelling.ignore_case {
        pattern.push_str(&format!("(?i:{})", text));
    } else {
        pattern.push_str(&text);
    }

    let ahead: Vec<String> = spelling
        .exclusions
        .iter()
        .filter_map(|e| match e {
            Exclusion::FollowedBy(suffix) => Some(regex::escape(suffix)),
            Exclusion::FollowedByThenUpper(suffix) => Some(format!("{}[A-Z]", regex::escape(suffix))),
            Exclusion::PrecededBy(_) => None,
        })
        .collect();
    if !ahead.is_empty() {
        pattern.push_str(&format!("(?!{})", ahead.join("|")));
    }

    pattern
}

impl FindMatch for RegexFinder {
    fn find_at(&self, text: &str, from: usize) -> Option<Range<usize>> {
        match self.regex.find_from_pos(text, from) {
            Ok(found) => found.map(|m| m.start()..m.end()),
            Err(e) => {
                log::warn!("{} on {:?}: {}", self.regex.as_str(), text, e);
                None
            }
        }
    }
}

/// Plain substring finder
pub struct SubstringFinder {
    matcher: Matcher,
}

impl SubstringFinder {
    pub fn new(matcher: Matcher) -> Self {
        Self { matcher }
    }

    fn first_accepted(spelling: &Spelling, text: &str, from: usize) -> Option<Range<usize>> {
        // ASCII lowering keeps byte offsets intact
        let haystack = if spelling.ignore_case {
            Cow::Owned(text.to_ascii_lowercase())
        } else {
            Cow::Borrowed(text)
        };

        let mut pos = from;
        while let Some(offset) = haystack.get(pos..)?.find(spelling.text) {
            let start = pos + offset;
            if let Some(end) = spelling.accept_at(text, start) {
                return Some(start..end);
            }
            // Spellings are ASCII, so the next byte is a char boundary
            pos = start + 1;
        }
        None
    }
}

impl FindMatch for SubstringFinder {
    fn find_at(&self, text: &str, from: usize) -> Option<Range<usize>> {
        // Leftmost hit wins; on a tie the earlier spelling does
        self.matcher
            .spellings
            .iter()
            .filter_map(|s| Self::first_accepted(s, text, from))
            .min_by_key(|range| range.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initialisms::Exclusion::{FollowedBy, FollowedByThenUpper, PrecededBy};
    use crate::initialisms::INITIALISMS;

    const ID: Matcher = Matcher {
        spellings: &[Spelling::exact("Id").except(&[FollowedBy("entifier"), FollowedBy("le")])],
    };

    const HTTP: Matcher = Matcher {
        spellings: &[
            Spelling::exact("HTTP").except(&[FollowedByThenUpper("S")]),
            Spelling::exact("Http").except(&[FollowedBy("s")]),
        ],
    };

    const TTL: Matcher = Matcher {
        spellings: &[Spelling::any_case("ttl").except(&[PrecededBy("Thro"), FollowedBy("e")])],
    };

    fn finders(matcher: Matcher) -> Vec<Box<dyn FindMatch>> {
        vec![
            Box::new(RegexFinder::new("test", matcher).unwrap()),
            Box::new(SubstringFinder::new(matcher)),
        ]
    }

    #[test]
    fn test_exclusion_followed_by() {
        for finder in finders(ID) {
            assert_eq!(finder.find_at("KeyId", 0), Some(3..5));
            assert_eq!(finder.find_at("Identifier", 0), None);
            assert_eq!(finder.find_at("IdleId", 0), Some(4..6));
            assert_eq!(finder.find_at("IdId", 1), Some(2..4));
        }
    }

    #[test]
    fn test_exclusion_followed_by_then_upper() {
        for finder in finders(HTTP) {
            assert_eq!(finder.find_at("HTTPSPort", 0), None);
            assert_eq!(finder.find_at("HTTPSport", 0), Some(0..4));
            assert_eq!(finder.find_at("HTTPS", 0), Some(0..4));
            assert_eq!(finder.find_at("HttpsPort", 0), None);
            assert_eq!(finder.find_at("UseHttpProxy", 0), Some(3..7));
        }
    }

    #[test]
    fn test_exclusion_preceded_by_and_case() {
        for finder in finders(TTL) {
            assert_eq!(finder.find_at("ResultTtlIn", 0), Some(6..9));
            assert_eq!(finder.find_at("TTL", 0), Some(0..3));
            assert_eq!(finder.find_at("Throttle", 0), None);
            assert_eq!(finder.find_at("ThrottlTtl", 0), Some(7..10));
        }
    }

    #[test]
    fn test_find_all_is_non_overlapping() {
        for finder in finders(ID) {
            assert_eq!(finder.find_all("IdFirstIdentifierId"), vec![0..2, 17..19]);
            assert!(finder.find_all("").is_empty());
        }
    }

    #[test]
    fn test_non_ascii_text() {
        for finder in finders(ID) {
            assert_eq!(finder.find_at("ÄId", 0), Some(2..4));
            assert_eq!(finder.find_at("Ä", 0), None);
        }
    }

    #[test]
    fn test_engines_agree_on_table_spellings() {
        let samples = [
            "DbiResourceId",
            "HTTPSPort",
            "HttpsPort",
            "SecretEcrDecrease",
            "ThrottlingTtl",
            "UidUuidUiUIDs",
            "RepositoryUriSecurity",
            "NativeNatGateway",
            "Md5OfBodyMD5Of",
        ];
        for rule in INITIALISMS.iter().filter(|r| r.matcher.is_some()) {
            let regex = MatchEngine::Regex.compile(rule).unwrap().unwrap();
            let plain = MatchEngine::Substring.compile(rule).unwrap().unwrap();
            for sample in samples {
                assert_eq!(
                    regex.find_all(sample),
                    plain.find_all(sample),
                    "{} on {}",
                    rule.camel,
                    sample
                );
            }
        }
    }

    #[test]
    fn test_regex_pattern_encodes_exclusions_as_lookaround() {
        let finder = RegexFinder::new("test", TTL).unwrap();
        assert_eq!(finder.pattern(), "(?<!Thro)(?i:ttl)(?!e)");
        let finder = RegexFinder::new("test", HTTP).unwrap();
        assert_eq!(finder.pattern(), "HTTP(?!S[A-Z])|Http(?!s)");
        let finder = RegexFinder::new("test", ID).unwrap();
        assert_eq!(finder.pattern(), "Id(?!entifier|le)");
    }

    #[test]
    fn test_table_patterns_carry_every_exclusion() {
        let id = INITIALISMS.iter().find(|r| r.camel == "Id").unwrap();
        let Some(matcher) = id.matcher else {
            panic!("Id has a matcher");
        };
        let finder = RegexFinder::new(id.camel, matcher).unwrap();
        assert_eq!(finder.pattern(), "Id(?!entifier|le|entity|empotency)");

        for rule in INITIALISMS {
            let Some(matcher) = rule.matcher else { continue };
            let pattern = RegexFinder::new(rule.camel, matcher).unwrap().pattern().to_string();
            let exclusions: usize = matcher.spellings.iter().map(|s| s.exclusions.len()).sum();
            if exclusions > 0 {
                assert!(pattern.contains("(?!") || pattern.contains("(?<!"), "{}", rule.camel);
            }
        }
    }

    #[test]
    fn test_engine_names() {
        assert_eq!(MatchEngine::from_name("regex"), Some(MatchEngine::Regex));
        assert_eq!(MatchEngine::from_name("Substring"), Some(MatchEngine::Substring));
        assert_eq!(MatchEngine::from_name("pcre"), None);
        assert_eq!(MatchEngine::default().to_string(), "regex");
    }
}
