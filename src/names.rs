//! Name variants
//!
//! [`Names`] holds every rendering of one raw API field or shape name that
//! generated code needs:
//!
//! ```text
//! raw ──► to_pascal ──► normalize(Pascal) ──────────────────────────────► guard ─► pascal
//!             │
//!             ├────────► normalize(LowerCamel) ─► to_lower_camel
//!             │                  ─► normalize(LowerCamel) ──────────────► guard ─► lower_camel
//!             │
//!             └────────► normalize(Snake) ─► to_snake ──────────────────► guard ─► snake
//!                                                                   strip non-alnum ─► snake_stripped
//! ```
//!
//! The generic lowerCamel re-cast only lowers the first character, so a
//! leading acronym that pass one left uppercase would come out as `aMI`.
//! The second normalization pass runs over the re-cast text to put acronym
//! casing back; only the rule-aware normalizer can be trusted with that.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::casing::{to_lower_camel, to_pascal, to_snake};
use crate::initialisms::{Mode, Normalizer};
use crate::reserved::guard;

/// Variations of a single name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Names {
    /// The name exactly as supplied
    pub original: String,
    /// PascalCase with uppercase initialisms, e.g. `DBInstanceID`
    pub pascal: String,
    /// lowerCamelCase with a lowercase leading initialism, e.g. `dbInstanceID`
    pub lower_camel: String,
    /// Plain lowercase of the original, no word splitting
    pub lower: String,
    /// snake_case, e.g. `db_instance_id`
    pub snake: String,
    /// `snake` with every non-alphanumeric character removed
    pub snake_stripped: String,
}

impl Names {
    /// Build all variants using the process-wide normalizer
    ///
    /// # Examples
    /// ```
    /// use initialisms::Names;
    /// let names = Names::new("DbInstanceId");
    /// assert_eq!(names.pascal, "DBInstanceID");
    /// assert_eq!(names.lower_camel, "dbInstanceID");
    /// assert_eq!(names.snake, "db_instance_id");
    /// assert_eq!(names.snake_stripped, "dbinstanceid");
    /// ```
    pub fn new(original: &str) -> Self {
        Self::with_normalizer(original, Normalizer::global())
    }

    /// Build all variants with a specific normalizer
    pub fn with_normalizer(original: &str, normalizer: &Normalizer) -> Self {
        let pascal_cased = to_pascal(original);

        let pascal = guard(normalizer.normalize(&pascal_cased, Mode::Pascal));

        let first_pass = normalizer.normalize(&pascal_cased, Mode::LowerCamel);
        let lower_camel = guard(normalizer.normalize(&to_lower_camel(&first_pass), Mode::LowerCamel));

        let snake = guard(to_snake(&normalizer.normalize(&pascal_cased, Mode::Snake)));
        let snake_stripped = strip_non_alphanumeric(&snake);

        Self {
            original: original.to_string(),
            pascal,
            lower_camel,
            lower: original.to_lowercase(),
            snake,
            snake_stripped,
        }
    }

    /// The rendering for one [`Variant`]
    pub fn get(&self, variant: Variant) -> &str {
        match variant {
            Variant::Original => &self.original,
            Variant::Pascal => &self.pascal,
            Variant::LowerCamel => &self.lower_camel,
            Variant::Lower => &self.lower,
            Variant::Snake => &self.snake,
            Variant::SnakeStripped => &self.snake_stripped,
        }
    }
}

impl fmt::Display for Names {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (pascal: {}, lower_camel: {}, snake: {})",
            self.original, self.pascal, self.lower_camel, self.snake
        )
    }
}

/// Selects one field of [`Names`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Original,
    Pascal,
    LowerCamel,
    Lower,
    Snake,
    SnakeStripped,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Original,
        Variant::Pascal,
        Variant::LowerCamel,
        Variant::Lower,
        Variant::Snake,
        Variant::SnakeStripped,
    ];

    /// Column heading / config key
    pub fn name(self) -> &'static str {
        match self {
            Variant::Original => "original",
            Variant::Pascal => "pascal",
            Variant::LowerCamel => "lower_camel",
            Variant::Lower => "lower",
            Variant::Snake => "snake",
            Variant::SnakeStripped => "snake_stripped",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name.replace('-', "_"))
    }
}

fn strip_non_alphanumeric(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}
