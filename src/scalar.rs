//! Equality over optional scalars
//!
//! Generated code compares optional fields where an absent value may or
//! may not be considered equal to a present zero value.

/// Both absent, or both present and equal
///
/// # Examples
/// ```
/// use initialisms::scalar::eq_strict;
/// assert!(eq_strict::<i64>(None, None));
/// assert!(!eq_strict(Some(&0), None));
/// ```
pub fn eq_strict<T: PartialEq + ?Sized>(x: Option<&T>, y: Option<&T>) -> bool {
    match (x, y) {
        (None, None) => true,
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Like [`eq_strict`], but an absent value equals a present zero value
///
/// # Examples
/// ```
/// use initialisms::scalar::eq_or_zero;
/// assert!(eq_or_zero(Some(&0), None));
/// assert!(eq_or_zero(None, Some(&String::new())));
/// assert!(!eq_or_zero(Some(&1.5), None));
/// ```
pub fn eq_or_zero<T: PartialEq + Default>(x: Option<&T>, y: Option<&T>) -> bool {
    let zero = T::default();
    match (x, y) {
        (None, None) => true,
        (None, Some(v)) | (Some(v), None) => *v == zero,
        (Some(x), Some(y)) => x == y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_strict() {
        assert!(eq_strict::<i32>(None, None));
        assert!(eq_strict(Some(&1), Some(&1)));
        assert!(!eq_strict(Some(&1), Some(&2)));
        assert!(!eq_strict(Some(&0), None));
        assert!(!eq_strict(None, Some(&false)));
        assert!(eq_strict(Some("a"), Some("a")));
        assert!(eq_strict(Some(&0.5f64), Some(&0.5f64)));
    }

    #[test]
    fn test_eq_or_zero() {
        assert!(eq_or_zero::<i64>(None, None));
        assert!(eq_or_zero(Some(&0i32), None));
        assert!(eq_or_zero(None, Some(&false)));
        assert!(eq_or_zero(None, Some(&String::new())));
        assert!(eq_or_zero(Some(&0.0f32), None));
        assert!(!eq_or_zero(Some(&1i64), None));
        assert!(!eq_or_zero(None, Some(&true)));
        assert!(!eq_or_zero(None, Some(&"x".to_string())));
        assert!(eq_or_zero(Some(&3u8), Some(&3u8)));
        assert!(!eq_or_zero(Some(&3u8), Some(&4u8)));
    }
}
