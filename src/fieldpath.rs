//! Dotted field paths
//!
//! A [`Path`] addresses a nested field by its name segments, e.g.
//! `Author.Address.State`. Accessors return an empty string rather than
//! failing when a segment does not exist.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Field path made of name segments
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Path {
    #[serde(rename = "Parts")]
    parts: Vec<String>,
}

impl Path {
    /// Split a dotted string into a path
    ///
    /// # Examples
    /// ```
    /// use initialisms::fieldpath::Path;
    /// let path = Path::from_dotted("Author.Name");
    /// assert_eq!(path.len(), 2);
    /// assert_eq!(path.to_string(), "Author.Name");
    /// ```
    pub fn from_dotted(dotted: &str) -> Self {
        Self {
            parts: dotted.split('.').map(str::to_string).collect(),
        }
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Remove and return the last segment
    pub fn pop(&mut self) -> Option<String> {
        self.parts.pop()
    }

    /// Remove and return the first segment
    pub fn pop_front(&mut self) -> Option<String> {
        if self.parts.is_empty() {
            None
        } else {
            Some(self.parts.remove(0))
        }
    }

    pub fn push_back(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    /// Segment at `index`, or `""` when out of range
    pub fn at(&self, index: usize) -> &str {
        self.parts.get(index).map_or("", String::as_str)
    }

    pub fn front(&self) -> &str {
        self.parts.first().map_or("", String::as_str)
    }

    pub fn back(&self) -> &str {
        self.parts.last().map_or("", String::as_str)
    }

    /// New path holding the segments up to and including `index`
    pub fn copy_at(&self, index: usize) -> Option<Path> {
        (index < self.parts.len()).then(|| Path {
            parts: self.parts[..=index].to_vec(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the dotted `subject` is a segment-wise prefix of this path
    pub fn has_prefix(&self, subject: &str) -> bool {
        self.prefix_matches(subject, |a, b| a == b)
    }

    /// [`Path::has_prefix`] ignoring case, Unicode-aware
    pub fn has_prefix_fold(&self, subject: &str) -> bool {
        self.prefix_matches(subject, |a, b| a.to_lowercase() == b.to_lowercase())
    }

    fn prefix_matches(&self, subject: &str, eq: impl Fn(&str, &str) -> bool) -> bool {
        let segments: Vec<&str> = subject.split('.').collect();
        segments.len() <= self.parts.len()
            && segments.iter().zip(&self.parts).all(|(s, p)| eq(p, s))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parts.join("."))
    }
}

impl From<&str> for Path {
    fn from(dotted: &str) -> Self {
        Self::from_dotted(dotted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basics() {
        let name = Path::from_dotted("Author.Name");
        assert_eq!(name.to_string(), "Author.Name");

        let mut state = Path::from_dotted("Author.Address.State");
        assert_eq!(state.to_string(), "Author.Address.State");
        assert_eq!(state.front(), "Author");
        assert_eq!(state.back(), "State");
        assert_eq!(state.at(0), "Author");
        assert_eq!(state.at(1), "Address");
        assert_eq!(state.at(2), "State");
        assert_eq!(state.at(3), "");

        let author = state.copy_at(0).unwrap();
        assert_eq!(author.to_string(), "Author");
        assert!(state.copy_at(3).is_none());

        assert_eq!(state.pop().as_deref(), Some("State"));
        assert_eq!(state.back(), "Address");

        state.push_back("Country");
        assert_eq!(state.back(), "Country");

        assert_eq!(state.pop_front().as_deref(), Some("Author"));
        assert_eq!(state.front(), "Address");
        assert!(!state.is_empty());
        state.pop();
        assert!(!state.is_empty());
        state.pop();
        assert!(state.is_empty());
        assert_eq!(state.pop(), None);
        assert_eq!(state.pop_front(), None);
        assert_eq!(state.front(), "");
        assert_eq!(state.back(), "");
    }

    #[test]
    fn test_has_prefix() {
        let path = Path::from_dotted("Author.Name");
        assert!(path.has_prefix("Author.Name"));
        assert!(path.has_prefix("Author"));
        assert!(!path.has_prefix("Name"));
        assert!(!path.has_prefix("Author.Address"));
        assert!(!path.has_prefix("Author.Name.First"));
        assert!(!path.has_prefix("author"));
        assert!(path.has_prefix_fold("author"));
        assert!(path.has_prefix_fold("AUTHOR.name"));
    }

    #[test]
    fn test_has_prefix_fold_non_ascii() {
        let path = Path::from_dotted("Ärger.Straße");
        assert!(path.has_prefix_fold("ärger"));
        assert!(path.has_prefix_fold("ÄRGER.straße"));
        assert!(!path.has_prefix("ärger"));
        assert!(!path.has_prefix_fold("arger"));
    }

    #[test]
    fn test_copy_is_independent() {
        let original = Path::from_dotted("A.B");
        let mut copy = original.clone();
        copy.push_back("C");
        assert_eq!(original.len(), 2);
        assert_eq!(copy.len(), 3);
    }

    #[test]
    fn test_serializes_parts() {
        let json = serde_json::to_string(&Path::from_dotted("A.B")).unwrap();
        assert_eq!(json, r#"{"Parts":["A","B"]}"#);
    }
}
