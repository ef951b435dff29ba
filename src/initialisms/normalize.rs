//! Applying the initialism table
//!
//! ```text
//!  subject      | mode       | output
//! --------------+------------+----------------
//!  Identifier   | Pascal     | Identifier
//!  Id           | Pascal     | ID
//!  Id           | LowerCamel | id
//!  KeyId        | LowerCamel | KeyID
//!  SSEKMSKeyId  | LowerCamel | sseKMSKeyID
//!  roleArn      | LowerCamel | roleARN
//!  DbInstanceId | Snake      | db_Instance_id
//! ```
//!
//! Snake mode only brackets acronyms with underscores; the generic snake
//! cast in [`crate::casing::to_snake`] finishes the job.

use std::ops::Range;
use std::sync::LazyLock;

use super::matcher::{FindMatch, MatchEngine};
use super::{InitialismRule, INITIALISMS};
use crate::error::Result;

/// Output encoding requested from a normalization pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every acronym fully uppercase
    Pascal,
    /// An acronym at position 0 lowercase, every other one uppercase
    LowerCamel,
    /// Acronyms lowercased and bracketed by `_`
    Snake,
}

impl Mode {
    fn lower_first(self) -> bool {
        self == Mode::LowerCamel
    }

    fn snake(self) -> bool {
        self == Mode::Snake
    }
}

struct CompiledRule {
    rule: &'static InitialismRule,
    finder: Option<Box<dyn FindMatch>>,
}

/// The initialism table compiled for one [`MatchEngine`]
///
/// Immutable once built and safe to share between threads.
pub struct Normalizer {
    engine: MatchEngine,
    rules: Vec<CompiledRule>,
}

static DEFAULT: LazyLock<Normalizer> = LazyLock::new(|| {
    Normalizer::new(MatchEngine::default()).expect("built-in initialism table failed to compile")
});

impl Normalizer {
    /// Compile the built-in table for `engine`
    pub fn new(engine: MatchEngine) -> Result<Self> {
        Self::with_rules(engine, INITIALISMS)
    }

    pub(crate) fn with_rules(engine: MatchEngine, table: &'static [InitialismRule]) -> Result<Self> {
        let rules = table
            .iter()
            .map(|rule| {
                Ok(CompiledRule {
                    rule,
                    finder: engine.compile(rule)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        log::debug!("compiled {} initialism rules with the {} engine", rules.len(), engine);
        Ok(Self { engine, rules })
    }

    /// Process-wide normalizer over the built-in table and default engine
    pub fn global() -> &'static Normalizer {
        &DEFAULT
    }

    pub fn engine(&self) -> MatchEngine {
        self.engine
    }

    /// Rules in application order
    pub fn rules(&self) -> impl Iterator<Item = &'static InitialismRule> + '_ {
        self.rules.iter().map(|c| c.rule)
    }

    /// Rewrite every initialism in `subject` for `mode`
    pub fn normalize(&self, subject: &str, mode: Mode) -> String {
        let mut result = subject.to_string();

        for compiled in &self.rules {
            let rewritten = match &compiled.finder {
                None => apply_literal(compiled.rule, &result, mode),
                Some(finder) => match apply_matched(compiled.rule, finder.as_ref(), &result, mode) {
                    Some(rewritten) => rewritten,
                    None => continue,
                },
            };
            if rewritten != result {
                log::trace!("{}: {} -> {}", compiled.rule.camel, result, rewritten);
                result = rewritten;
            }
        }

        if mode.snake() {
            result = collapse_underscores(&result);
        }
        result
    }
}

fn bracketed(lower: &str) -> String {
    format!("_{}_", lower)
}

fn apply_literal(rule: &InitialismRule, subject: &str, mode: Mode) -> String {
    if mode.snake() {
        // Either rendering may already be present; both get bracketed
        let delimited = bracketed(rule.lower);
        return subject
            .replace(rule.lower, &delimited)
            .replace(rule.upper, &delimited);
    }

    let mut result = subject.to_string();
    if mode.lower_first() && result.starts_with(rule.upper) {
        result = result.replacen(rule.upper, rule.lower, 1);
    }

    let Some(pos) = result.find(rule.camel) else {
        return result;
    };
    if pos == 0 && mode.lower_first() {
        result = result.replacen(rule.camel, rule.lower, 1);
    }
    result.replace(rule.camel, rule.upper)
}

fn apply_matched(
    rule: &InitialismRule,
    finder: &dyn FindMatch,
    subject: &str,
    mode: Mode,
) -> Option<String> {
    let hits = finder.find_all(subject);
    let first = hits.first()?;

    let rest = if mode.snake() {
        bracketed(rule.lower)
    } else {
        rule.upper.to_string()
    };
    let leading_lower = mode.lower_first() && first.start == 0;

    Some(splice(subject, &hits, |i| {
        if i == 0 && leading_lower {
            rule.lower
        } else {
            rest.as_str()
        }
    }))
}

/// Replace each hit in `subject` with the text chosen for its index
fn splice<'a>(subject: &str, hits: &[Range<usize>], replacement: impl Fn(usize) -> &'a str) -> String {
    let mut out = String::with_capacity(subject.len() + hits.len() * 2);
    let mut pos = 0;
    for (i, hit) in hits.iter().enumerate() {
        out.push_str(&subject[pos..hit.start]);
        out.push_str(replacement(i));
        pos = hit.end;
    }
    out.push_str(&subject[pos..]);
    out
}

/// Collapse runs of `_` into one and trim them from both ends
fn collapse_underscores(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }
    out.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn both() -> [Normalizer; 2] {
        [
            Normalizer::new(MatchEngine::Regex).unwrap(),
            Normalizer::new(MatchEngine::Substring).unwrap(),
        ]
    }

    #[test]
    fn test_pascal_mode() {
        for n in both() {
            assert_eq!(n.normalize("Id", Mode::Pascal), "ID");
            assert_eq!(n.normalize("KeyId", Mode::Pascal), "KeyID");
            assert_eq!(n.normalize("Identifier", Mode::Pascal), "Identifier");
            assert_eq!(n.normalize("RoleArn", Mode::Pascal), "RoleARN");
            assert_eq!(n.normalize("DbiResourceId", Mode::Pascal), "DBIResourceID");
            assert_eq!(n.normalize("Family", Mode::Pascal), "Family");
        }
    }

    #[test]
    fn test_lower_camel_mode_leading_word() {
        for n in both() {
            assert_eq!(n.normalize("Id", Mode::LowerCamel), "id");
            assert_eq!(n.normalize("IdFirstElementId", Mode::LowerCamel), "idFirstElementID");
            assert_eq!(n.normalize("keyId", Mode::LowerCamel), "keyID");
            assert_eq!(n.normalize("RoleArn", Mode::LowerCamel), "RoleARN");
            assert_eq!(n.normalize("ArnRoleArn", Mode::LowerCamel), "arnRoleARN");
            assert_eq!(n.normalize("SSEKMSKeyID", Mode::LowerCamel), "sseKMSKeyID");
        }
    }

    #[test]
    fn test_snake_mode_brackets_and_collapses() {
        for n in both() {
            assert_eq!(n.normalize("RoleArn", Mode::Snake), "RoleArn");
            assert_eq!(n.normalize("RoleARN", Mode::Snake), "Role_arn");
            assert_eq!(n.normalize("DbInstanceId", Mode::Snake), "db_Instance_id");
            assert_eq!(
                n.normalize("AuthorizerResultTtlInSeconds", Mode::Snake),
                "AuthorizerResult_ttl_InSeconds"
            );
        }
    }

    #[test]
    fn test_rule_order_matters() {
        static DB_FIRST: &[InitialismRule] = &[
            InitialismRule::literal("Db", "DB", "db"),
            InitialismRule::literal("Dbi", "DBI", "dbi"),
        ];
        static DBI_FIRST: &[InitialismRule] = &[
            InitialismRule::literal("Dbi", "DBI", "dbi"),
            InitialismRule::literal("Db", "DB", "db"),
        ];

        let wrong = Normalizer::with_rules(MatchEngine::Regex, DB_FIRST).unwrap();
        let right = Normalizer::with_rules(MatchEngine::Regex, DBI_FIRST).unwrap();

        assert_eq!(wrong.normalize("DbiResource", Mode::Pascal), "DBiResource");
        assert_eq!(right.normalize("DbiResource", Mode::Pascal), "DBIResource");
    }

    #[test]
    fn test_literal_rule_without_camel_hit() {
        const ARN: InitialismRule = InitialismRule::literal("Arn", "ARN", "arn");
        assert_eq!(apply_literal(&ARN, "Family", Mode::Pascal), "Family");
        assert_eq!(apply_literal(&ARN, "Family", Mode::LowerCamel), "Family");
        // A leading upper form is still lowered when the camel form is absent
        assert_eq!(apply_literal(&ARN, "ARNRole", Mode::LowerCamel), "arnRole");
        assert_eq!(apply_literal(&ARN, "ARNRole", Mode::Pascal), "ARNRole");
        assert_eq!(apply_literal(&ARN, "ArnRoleArn", Mode::LowerCamel), "arnRoleARN");
    }

    #[test]
    fn test_collapse_underscores() {
        assert_eq!(collapse_underscores("__a___b__"), "a_b");
        assert_eq!(collapse_underscores("a_b"), "a_b");
        assert_eq!(collapse_underscores("___"), "");
        assert_eq!(collapse_underscores(""), "");
    }

    #[test]
    fn test_global_is_shared() {
        let a = Normalizer::global() as *const Normalizer;
        let b = Normalizer::global() as *const Normalizer;
        assert_eq!(a, b);
        assert_eq!(Normalizer::global().engine(), MatchEngine::Regex);
        assert_eq!(Normalizer::global().rules().count(), INITIALISMS.len());
    }
}
