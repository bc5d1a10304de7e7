//! Error types for path lookups.
//!
//! Lookups on a [`TreeState`](crate::persistent::TreeState) never panic
//! for missing entries. Absence is reported through [`TreeResult`], whose
//! error side is a [`TreeError`] naming the path that was requested and
//! the segment at which resolution stopped.
//!
//! # Examples
//!
//! ```rust
//! use treestate::TreeError;
//! use treestate::persistent::{PathAccess, TreeState};
//!
//! let state: TreeState<i32> = TreeState::new();
//! let error = state.value_at("a.b").unwrap_err();
//! assert_eq!(
//!     error,
//!     TreeError::ChildNotFound {
//!         path: "a.b".to_string(),
//!         segment: "a".to_string(),
//!     }
//! );
//! ```

/// Result type returned by path lookups.
pub type TreeResult<T> = Result<T, TreeError>;

/// Represents the ways a path lookup can fail.
///
/// Every variant is ordinary data: none of them indicate a broken tree.
/// Writes never produce a `TreeError`; a write to a degenerate path is a
/// silent no-op instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The path is empty or contains an empty segment
    /// (leading, trailing or doubled separator).
    DegeneratePath {
        /// The path as supplied by the caller.
        path: String,
    },
    /// The path resolved to a node that holds no value under its last segment.
    ValueNotFound {
        /// The full path that was requested.
        path: String,
        /// The segment whose value slot was empty.
        segment: String,
    },
    /// A segment along the path named a child that does not exist.
    ChildNotFound {
        /// The full path that was requested.
        path: String,
        /// The segment whose child was missing.
        segment: String,
    },
}

impl TreeError {
    /// Creates a [`TreeError::DegeneratePath`].
    #[inline]
    pub fn degenerate_path(path: impl Into<String>) -> Self {
        Self::DegeneratePath { path: path.into() }
    }

    /// Creates a [`TreeError::ValueNotFound`].
    #[inline]
    pub fn value_not_found(path: impl Into<String>, segment: impl Into<String>) -> Self {
        Self::ValueNotFound {
            path: path.into(),
            segment: segment.into(),
        }
    }

    /// Creates a [`TreeError::ChildNotFound`].
    #[inline]
    pub fn child_not_found(path: impl Into<String>, segment: impl Into<String>) -> Self {
        Self::ChildNotFound {
            path: path.into(),
            segment: segment.into(),
        }
    }

    /// Returns the path the failed lookup was asked to resolve.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::DegeneratePath { path }
            | Self::ValueNotFound { path, .. }
            | Self::ChildNotFound { path, .. } => path,
        }
    }

    /// Returns `true` for lookups that failed because an entry was absent,
    /// as opposed to a malformed path.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ValueNotFound { .. } | Self::ChildNotFound { .. }
        )
    }
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DegeneratePath { path } => {
                write!(formatter, "degenerate path {path:?}: empty path or empty segment")
            }
            Self::ValueNotFound { path, segment } => {
                write!(formatter, "no value at {path:?}: missing value for segment {segment:?}")
            }
            Self::ChildNotFound { path, segment } => {
                write!(formatter, "no child at {path:?}: missing child for segment {segment:?}")
            }
        }
    }
}

impl std::error::Error for TreeError {}
