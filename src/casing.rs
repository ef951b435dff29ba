//! Word boundary casing
//!
//! Generic PascalCase, lowerCamelCase and snake_case casts. Nothing in here
//! knows about initialisms: `"Id"` stays `"Id"` and existing uppercase runs
//! are copied verbatim. [`crate::initialisms`] repairs acronym casing
//! afterwards.
//!
//! All boundary decisions are ASCII-only. Any other character is treated as
//! punctuation and dropped by the camel casts.

/// Whole-string acronyms substituted before a camel cast.
const WHOLE_WORD_ACRONYMS: &[(&str, &str)] = &[("ID", "id")];

fn is_word_delimiter(c: char) -> bool {
    matches!(c, '_' | ' ' | '-' | '.')
}

fn camel_init_case(s: &str, capitalize_first: bool) -> String {
    let trimmed = s.trim();
    let s = WHOLE_WORD_ACRONYMS
        .iter()
        .find(|(from, _)| *from == trimmed)
        .map_or(trimmed, |(_, to)| to);

    let mut out = String::with_capacity(s.len());
    let mut capitalize_next = capitalize_first;

    for (i, c) in s.chars().enumerate() {
        let c = if capitalize_next {
            c.to_ascii_uppercase()
        } else if i == 0 {
            c.to_ascii_lowercase()
        } else {
            c
        };

        if c.is_ascii_alphabetic() {
            out.push(c);
            capitalize_next = false;
        } else if c.is_ascii_digit() {
            // The word following a digit run starts a new word
            out.push(c);
            capitalize_next = true;
        } else {
            capitalize_next = is_word_delimiter(c);
        }
    }

    out
}

/// Convert an identifier to PascalCase
///
/// Words are split at `_`, `-`, `.`, spaces and after digit runs. Existing
/// capitals are preserved.
///
/// # Examples
/// ```
/// use initialisms::casing::to_pascal;
/// assert_eq!(to_pascal("db_instance_id"), "DbInstanceId");
/// assert_eq!(to_pascal("SSEKMSKeyID"), "SSEKMSKeyID");
/// assert_eq!(to_pascal("scram512auth"), "Scram512Auth");
/// ```
pub fn to_pascal(s: &str) -> String {
    camel_init_case(s, true)
}

/// Convert an identifier to lowerCamelCase
///
/// Only the very first character is lowered; later capitals, including the
/// tail of an uppercase run, are kept as they are.
///
/// # Examples
/// ```
/// use initialisms::casing::to_lower_camel;
/// assert_eq!(to_lower_camel("DbInstanceId"), "dbInstanceId");
/// assert_eq!(to_lower_camel("AMIType"), "aMIType");
/// assert_eq!(to_lower_camel("ID"), "id");
/// ```
pub fn to_lower_camel(s: &str) -> String {
    camel_init_case(s, false)
}

/// Convert an identifier to snake_case
///
/// Underscores go in at lower/upper and letter/digit transitions, and before
/// the last capital of an uppercase run that opens a lowercase word, so
/// `JSONData` becomes `json_data`. Digit runs become words of their own.
///
/// # Examples
/// ```
/// use initialisms::casing::to_snake;
/// assert_eq!(to_snake("DbInstanceId"), "db_instance_id");
/// assert_eq!(to_snake("JSONData"), "json_data");
/// assert_eq!(to_snake("Ja3"), "ja_3");
/// ```
pub fn to_snake(s: &str) -> String {
    let chars: Vec<char> = s.trim().chars().collect();
    let mut out = String::with_capacity(chars.len() + 2);

    for (i, &c) in chars.iter().enumerate() {
        let is_upper = c.is_ascii_uppercase();
        let is_lower = c.is_ascii_lowercase();
        let is_digit = c.is_ascii_digit();
        let lowered = c.to_ascii_lowercase();

        if let Some(&next) = chars.get(i + 1) {
            let next_upper = next.is_ascii_uppercase();
            let next_lower = next.is_ascii_lowercase();
            let next_digit = next.is_ascii_digit();

            let boundary = (is_upper && (next_lower || next_digit))
                || (is_lower && (next_upper || next_digit))
                || (is_digit && (next_upper || next_lower));

            if boundary {
                if is_upper && next_lower && i > 0 && chars[i - 1].is_ascii_uppercase() {
                    out.push('_');
                }
                out.push(lowered);
                if is_lower || is_digit || next_digit {
                    out.push('_');
                }
                continue;
            }
        }

        if is_word_delimiter(c) {
            out.push('_');
        } else {
            out.push(lowered);
        }
    }

    out
}
