//! Initialism normalization
//!
//! An ordered, immutable table of acronym rewrite rules ([`INITIALISMS`])
//! and the [`Normalizer`] that applies it. Each [`InitialismRule`] knows the
//! camel-cased spelling of one acronym as it shows up inside a PascalCase
//! name (`"Id"`), its uppercase rendering (`"ID"`) and its lowercase
//! rendering (`"id"`).
//!
//! Most rules are plain substring rewrites. Rules whose camel spelling is
//! also the start of ordinary words carry a [`Matcher`] listing the spellings
//! to look for and the neighbouring text that disqualifies a hit, e.g. `"Id"`
//! must not fire inside `"Identifier"` or `"Idle"`.
//!
//! ## Ordering
//!
//! Rule order is load-bearing. `"Dbi"` has to run before `"Db"`, `"Awsvpc"`
//! before `"Aws"`, `"Ramdisk"` before `"Ram"`, `"Uids"` and `"Uid"` before
//! `"Ui"`; otherwise a shorter rule rewrites part of a longer acronym and the
//! longer rule can no longer match.
//!
//! ## Engines
//!
//! Matchers are compiled into a [`FindMatch`] implementation by one of two
//! [`MatchEngine`]s. Both honour the same exclusions and produce identical
//! output; the regex engine is the default.

use std::fmt;

mod matcher;
mod normalize;
mod table;

pub use matcher::{FindMatch, MatchEngine, RegexFinder, SubstringFinder};
pub use normalize::{Mode, Normalizer};
pub use table::INITIALISMS;

/// Text next to a spelling that disqualifies the hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// The spelling is immediately followed by this text
    FollowedBy(&'static str),
    /// The spelling is followed by this text and then an ASCII capital
    FollowedByThenUpper(&'static str),
    /// The spelling is immediately preceded by this text
    PrecededBy(&'static str),
}

/// One spelling a context-sensitive rule searches for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spelling {
    /// Literal text to find; stored lowercase when `ignore_case` is set
    pub text: &'static str,
    /// Match regardless of ASCII case
    pub ignore_case: bool,
    /// Neighbouring text that rejects an otherwise matching hit
    pub exclusions: &'static [Exclusion],
}

impl Spelling {
    /// Case-sensitive spelling with no exclusions
    pub const fn exact(text: &'static str) -> Self {
        Self {
            text,
            ignore_case: false,
            exclusions: &[],
        }
    }

    /// ASCII case-insensitive spelling with no exclusions
    pub const fn any_case(text: &'static str) -> Self {
        Self {
            text,
            ignore_case: true,
            exclusions: &[],
        }
    }

    /// Attach exclusions to this spelling
    pub const fn except(self, exclusions: &'static [Exclusion]) -> Self {
        Self { exclusions, ..self }
    }
}

/// Context-sensitive pattern for a rule
///
/// At a given position the first spelling (in order) that matches and is
/// not excluded wins, the same way an alternation picks its first viable
/// branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matcher {
    pub spellings: &'static [Spelling],
}

/// One entry in the initialism table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitialismRule {
    /// The acronym as it appears embedded in PascalCase input, e.g. `Id`
    pub camel: &'static str,
    /// Uppercase rendering, e.g. `ID`
    pub upper: &'static str,
    /// Lowercase rendering, e.g. `id`
    pub lower: &'static str,
    /// Present only when a plain search for `camel` has false positives
    pub matcher: Option<Matcher>,
}

impl InitialismRule {
    /// Rule rewritten by plain substring replacement
    pub const fn literal(camel: &'static str, upper: &'static str, lower: &'static str) -> Self {
        Self {
            camel,
            upper,
            lower,
            matcher: None,
        }
    }

    /// Rule located through a context-sensitive matcher
    pub const fn matched(
        camel: &'static str,
        upper: &'static str,
        lower: &'static str,
        spellings: &'static [Spelling],
    ) -> Self {
        Self {
            camel,
            upper,
            lower,
            matcher: Some(Matcher { spellings }),
        }
    }
}

impl InitialismRule {
    /// Sample subjects around this rule's spellings and exclusions
    ///
    /// Used to compare engines against each other: every exclusion gets one
    /// subject where it applies.
    pub fn probes(&self) -> Vec<String> {
        let mut probes = vec![
            self.camel.to_string(),
            self.upper.to_string(),
            format!("Key{}", self.camel),
            format!("{}Name", self.camel),
        ];
        let Some(matcher) = self.matcher else {
            return probes;
        };
        for spelling in matcher.spellings {
            probes.push(format!("X{}", spelling.text));
            if spelling.ignore_case {
                probes.push(spelling.text.to_ascii_uppercase());
            }
            for exclusion in spelling.exclusions {
                probes.push(match *exclusion {
                    Exclusion::FollowedBy(t) => format!("{}{}", spelling.text, t),
                    Exclusion::FollowedByThenUpper(t) => format!("{}{}Name", spelling.text, t),
                    Exclusion::PrecededBy(t) => format!("{}{}", t, spelling.text),
                });
            }
        }
        probes
    }
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exclusion::FollowedBy(t) => write!(f, "not before {:?}", t),
            Exclusion::FollowedByThenUpper(t) => write!(f, "not before {:?}+Upper", t),
            Exclusion::PrecededBy(t) => write!(f, "not after {:?}", t),
        }
    }
}

impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.text)?;
        if self.ignore_case {
            write!(f, "/i")?;
        }
        for (i, exclusion) in self.exclusions.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{}{}", sep, exclusion)?;
        }
        Ok(())
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, spelling) in self.spellings.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{}", spelling)?;
        }
        Ok(())
    }
}
