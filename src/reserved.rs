//! Reserved-word guard
//!
//! Generated identifiers that collide with a Go keyword get a trailing
//! underscore. The check is exact and case-sensitive: `package` collides,
//! `Package` does not.

/// Go keywords, in the order the Go reference lists them
pub const RESERVED_WORDS: [&str; 25] = [
    "break",
    "default",
    "func",
    "interface",
    "select",
    "case",
    "defer",
    "go",
    "map",
    "struct",
    "chan",
    "else",
    "goto",
    "package",
    "switch",
    "const",
    "fallthrough",
    "if",
    "range",
    "type",
    "continue",
    "for",
    "import",
    "return",
    "var",
];

/// Suffix appended to an identifier that collides with a reserved word
pub const DISAMBIGUATOR: char = '_';

/// Whether `word` is a reserved word
pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}

/// Append [`DISAMBIGUATOR`] when `ident` is reserved
///
/// # Examples
/// ```
/// use initialisms::reserved::guard;
/// assert_eq!(guard("package".to_string()), "package_");
/// assert_eq!(guard("Package".to_string()), "Package");
/// ```
pub fn guard(mut ident: String) -> String {
    if is_reserved(&ident) {
        ident.push(DISAMBIGUATOR);
    }
    ident
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_word_is_reserved() {
        for word in RESERVED_WORDS {
            assert!(is_reserved(word), "{word}");
            assert_eq!(guard(word.to_string()), format!("{word}_"));
        }
    }

    #[test]
    fn test_only_listed_words_are_reserved() {
        // Predeclared identifiers are not keywords
        for word in ["true", "nil", "int", "string", "error", "len", "make", "iota"] {
            assert!(!is_reserved(word), "{word}");
        }
        let mut sorted = RESERVED_WORDS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), RESERVED_WORDS.len());
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!is_reserved("Package"));
        assert!(!is_reserved("TYPE"));
        assert_eq!(guard("Type".to_string()), "Type");
    }

    #[test]
    fn test_non_keywords_untouched() {
        assert_eq!(guard("family".to_string()), "family");
        assert_eq!(guard("package_".to_string()), "package_");
        assert_eq!(guard(String::new()), "");
    }
}
