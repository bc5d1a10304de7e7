//! Splitting of separator-delimited paths into segments.
//!
//! A path such as `"a.b.c"` addresses a value or subtree by descending
//! through one segment per level. A path is *degenerate* when it is empty
//! or when any of its segments is empty, which happens for leading,
//! trailing and doubled separators (`".a"`, `"a."`, `"a..b"`).
//!
//! Splitting is total: malformed input yields `None` rather than an error
//! so callers can decide whether absence means "fail" (reads) or
//! "do nothing" (writes).
//!
//! # Examples
//!
//! ```rust
//! use treestate::path;
//!
//! assert_eq!(path::split_first("a.b.c", '.'), Some(("a", Some("b.c"))));
//! assert_eq!(path::split_first(".a", '.'), None);
//!
//! let segments = path::segments("a.b.c", '.').unwrap();
//! assert_eq!(segments.as_slice(), &["a", "b", "c"]);
//! assert!(path::segments("a..c", '.').is_none());
//! ```

use smallvec::SmallVec;

/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: char = '.';

/// Number of segments kept inline before [`Segments`] spills to the heap.
const INLINE_SEGMENTS: usize = 8;

/// The segments of a non-degenerate path, borrowed from the path string.
pub type Segments<'a> = SmallVec<[&'a str; INLINE_SEGMENTS]>;

/// Splits off the first segment of `path`.
///
/// Returns the first segment and, if the path has more than one segment,
/// the remainder after the first separator. Returns `None` when the first
/// segment is empty, which covers the empty path and a leading separator.
///
/// The remainder is returned as-is and may itself be degenerate.
///
/// # Examples
///
/// ```rust
/// use treestate::path::split_first;
///
/// assert_eq!(split_first("a", '.'), Some(("a", None)));
/// assert_eq!(split_first("a/b/c", '/'), Some(("a", Some("b/c"))));
/// assert_eq!(split_first("a.", '.'), Some(("a", Some(""))));
/// assert_eq!(split_first("", '.'), None);
/// ```
#[must_use]
pub fn split_first(path: &str, separator: char) -> Option<(&str, Option<&str>)> {
    let (head, tail) = match path.split_once(separator) {
        Some((head, tail)) => (head, Some(tail)),
        None => (path, None),
    };
    (!head.is_empty()).then_some((head, tail))
}

/// Splits a whole path into its segments.
///
/// Returns `None` if the path is degenerate. A successful result always
/// holds at least one segment and none of them are empty.
#[must_use]
pub fn segments(path: &str, separator: char) -> Option<Segments<'_>> {
    let mut segments = Segments::new();
    let mut remainder = Some(path);
    while let Some(current) = remainder {
        let (head, tail) = split_first(current, separator)?;
        segments.push(head);
        remainder = tail;
    }
    Some(segments)
}

/// Returns `true` if `path` is empty or has an empty segment.
#[must_use]
pub fn is_degenerate(path: &str, separator: char) -> bool {
    segments(path, separator).is_none()
}

/// Appends `segment` to `prefix`, inserting `separator` unless the prefix is empty.
#[must_use]
pub fn join(prefix: &str, segment: &str, separator: char) -> String {
    if prefix.is_empty() {
        return segment.to_string();
    }
    let mut joined = String::with_capacity(prefix.len() + separator.len_utf8() + segment.len());
    joined.push_str(prefix);
    joined.push(separator);
    joined.push_str(segment);
    joined
}
