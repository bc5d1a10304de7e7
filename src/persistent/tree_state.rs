//! Persistent (immutable) nested key-value tree addressed by path.
//!
//! This module provides [`TreeState`], a recursive structure of named
//! value slots and named child subtrees where every subtree is itself a
//! `TreeState`. Entries are addressed with separator-delimited paths such
//! as `"a.b.c"`.
//!
//! # Overview
//!
//! - Reads borrow from the tree and never clone
//! - Writes return a new tree; the receiver is never modified
//! - Subtrees untouched by a write are shared by reference between the
//!   old and the new version
//! - Missing intermediate children are created on write, never on read
//! - Children that become empty are pruned
//!
//! # Examples
//!
//! ```rust
//! use treestate::persistent::{PathAccess, TreeState};
//!
//! let state = TreeState::new()
//!     .update_value("a.b.c", 1)
//!     .update_value("a.b.c.d", 2);
//!
//! assert_eq!(state.value_at("a.b.c"), Ok(&1));
//! assert_eq!(state.value_at("a.b.c.d"), Ok(&2));
//! assert_eq!(state.nesting_level(), 4);
//!
//! // Structural sharing: the original tree is preserved
//! let updated = state.update_value("a.b.c", 100);
//! assert_eq!(state.value_at("a.b.c"), Ok(&1));
//! assert_eq!(updated.value_at("a.b.c"), Ok(&100));
//! ```

use std::collections::HashMap;
use std::fmt;

use super::builder::TreeStateBuilder;
use super::{PathAccess, ReferenceCounter, SegmentMap};
use crate::error::{TreeError, TreeResult};
use crate::path::{self, DEFAULT_SEPARATOR};

// =============================================================================
// TreeState Definition
// =============================================================================

/// A persistent tree of values addressed by path.
///
/// Each node holds its own values keyed by segment, its children keyed by
/// segment, and the separator used to split paths handed to it. A segment
/// may name a value and a child at the same time, so `"a.b"` and
/// `"a.b.c"` can both hold values.
///
/// Cloning is O(1): a `TreeState` is a pair of reference-counted handles.
///
/// # Time Complexity
///
/// | Operation       | Complexity                              |
/// |-----------------|-----------------------------------------|
/// | `new`           | O(1)                                    |
/// | `value_at`      | O(d)                                    |
/// | `child_at`      | O(d)                                    |
/// | `map_value`     | O(d * w)                                |
/// | `update_child`  | O(d * w)                                |
/// | `is_empty`      | O(n)                                    |
/// | `nesting_level` | O(n)                                    |
/// | `flatten`       | O(n)                                    |
///
/// where `d` is the number of path segments, `w` the number of entries in
/// each node along the path, and `n` the size of the whole tree.
///
/// # Examples
///
/// ```rust
/// use treestate::persistent::{PathAccess, TreeState};
///
/// let first: TreeState<i32> = TreeState::new();
/// let second = TreeState::new().update_value("c.d", 1);
/// let third = first.update_child("a.b", second);
///
/// assert_eq!(third.value_at("a.b.c.d"), Ok(&1));
/// ```
pub struct TreeState<T> {
    pub(super) values: ReferenceCounter<SegmentMap<T>>,
    pub(super) children: ReferenceCounter<SegmentMap<TreeState<T>>>,
    pub(super) separator: char,
}

impl<T> TreeState<T> {
    /// Creates an empty tree that splits paths on `.`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treestate::persistent::TreeState;
    ///
    /// let state: TreeState<i32> = TreeState::new();
    /// assert!(state.is_empty());
    /// assert_eq!(state.separator(), '.');
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_separator(DEFAULT_SEPARATOR)
    }

    /// Creates an empty tree that splits paths on `separator`.
    ///
    /// Children created implicitly by writes inherit the separator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treestate::persistent::{PathAccess, TreeState};
    ///
    /// let state = TreeState::with_separator('/').update_value("a/b", 1);
    /// assert_eq!(state.value_at("a/b"), Ok(&1));
    /// assert!(state.value_at("a.b").is_err());
    /// ```
    #[must_use]
    pub fn with_separator(separator: char) -> Self {
        Self::from_parts(SegmentMap::default(), SegmentMap::default(), separator)
    }

    pub(super) fn from_parts(
        values: SegmentMap<T>,
        children: SegmentMap<Self>,
        separator: char,
    ) -> Self {
        Self {
            values: ReferenceCounter::new(values),
            children: ReferenceCounter::new(children),
            separator,
        }
    }

    /// Returns the separator this tree splits paths on.
    #[inline]
    pub const fn separator(&self) -> char {
        self.separator
    }

    /// Returns `true` if neither this node nor any descendant holds a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treestate::persistent::{PathAccess, TreeState};
    ///
    /// let state = TreeState::new().update_value("a.b", 1);
    /// assert!(!state.is_empty());
    /// assert!(state.remove_value("a.b").is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.children.values().all(Self::is_empty)
    }

    /// Returns the number of segments needed to reach the deepest level.
    ///
    /// A node without children is at level 1, including the empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treestate::persistent::{PathAccess, TreeState};
    ///
    /// let empty: TreeState<i32> = TreeState::new();
    /// assert_eq!(empty.nesting_level(), 1);
    /// assert_eq!(empty.update_value("a.b.c", 1).nesting_level(), 3);
    /// ```
    pub fn nesting_level(&self) -> usize {
        1 + self
            .children
            .values()
            .map(Self::nesting_level)
            .max()
            .unwrap_or(0)
    }

    /// Iterates over the values held directly by this node.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &T)> {
        self.values.iter().map(|(segment, value)| (segment.as_str(), value))
    }

    /// Iterates over the direct children of this node.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Self)> {
        self.children
            .iter()
            .map(|(segment, child)| (segment.as_str(), child))
    }

    /// Returns the full path of every stored value, in no particular order.
    ///
    /// Paths are joined with this tree's separator.
    pub fn value_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.walk("", self.separator, &mut |path, _| paths.push(path));
        paths
    }

    /// Returns `true` if both trees share the same backing storage.
    ///
    /// This is an identity check, not an equality check. It observes the
    /// structural sharing between versions of a tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treestate::persistent::{PathAccess, TreeState};
    ///
    /// let state = TreeState::new()
    ///     .update_value("left.x", 1)
    ///     .update_value("right.y", 2);
    /// let updated = state.update_value("left.x", 10);
    ///
    /// let before = state.child_at("right").unwrap();
    /// let after = updated.child_at("right").unwrap();
    /// assert!(TreeState::ptr_eq(before, after));
    /// ```
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&this.values, &other.values)
            && ReferenceCounter::ptr_eq(&this.children, &other.children)
    }

    /// Applies `function` to every value, keeping shape and separator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treestate::persistent::{PathAccess, TreeState};
    ///
    /// let state = TreeState::new().update_value("a.b", 2);
    /// let labels = state.map_values(|value| format!("#{value}"));
    /// assert_eq!(labels.value_at("a.b").unwrap(), "#2");
    /// ```
    #[must_use]
    pub fn map_values<U, F>(&self, function: F) -> TreeState<U>
    where
        F: Fn(&T) -> U,
    {
        self.map_values_with(&function)
    }

    fn map_values_with<U, F>(&self, function: &F) -> TreeState<U>
    where
        F: Fn(&T) -> U,
    {
        let values = self
            .values
            .iter()
            .map(|(segment, value)| (segment.clone(), function(value)))
            .collect();
        let children = self
            .children
            .iter()
            .map(|(segment, child)| (segment.clone(), child.map_values_with(function)))
            .collect();
        TreeState::from_parts(values, children, self.separator)
    }

    /// Visits every stored value with its full path.
    fn walk<'a, F>(&'a self, prefix: &str, separator: char, visit: &mut F)
    where
        F: FnMut(String, &'a T),
    {
        for (segment, value) in self.values.iter() {
            visit(path::join(prefix, segment, separator), value);
        }
        for (segment, child) in self.children.iter() {
            child.walk(&path::join(prefix, segment, separator), separator, visit);
        }
    }

    /// Follows `segments` through the children of this node.
    fn descend(&self, path: &str, segments: &[&str]) -> TreeResult<&Self> {
        segments.iter().try_fold(self, |node, segment| {
            node.children
                .get(*segment)
                .ok_or_else(|| TreeError::child_not_found(path, *segment))
        })
    }
}

impl<T: Clone> TreeState<T> {
    /// Returns every stored value keyed by its full path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treestate::persistent::{PathAccess, TreeState};
    ///
    /// let state = TreeState::new()
    ///     .update_value("a", 1)
    ///     .update_value("b.c", 2);
    /// let flattened = state.flatten();
    ///
    /// assert_eq!(flattened.len(), 2);
    /// assert_eq!(flattened.get("b.c"), Some(&2));
    /// ```
    pub fn flatten(&self) -> HashMap<String, T> {
        let mut flattened = HashMap::new();
        self.walk("", self.separator, &mut |path, value: &T| {
            flattened.insert(path, value.clone());
        });
        flattened
    }

    /// Returns the child under `segment`, or a new empty one sharing this
    /// node's separator.
    fn child_or_empty(&self, segment: &str) -> Self {
        self.children.get(segment).cloned().unwrap_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::trace!(segment, "creating intermediate tree state child");
            Self::with_separator(self.separator)
        })
    }

    /// Parses `path` and applies `edit` to the node owning its last segment.
    ///
    /// A degenerate path leaves the tree untouched.
    fn edit<F>(&self, path: &str, edit: F) -> Self
    where
        F: FnOnce(&Self, &str) -> Self,
    {
        match path::segments(path, self.separator) {
            Some(segments) => self.edit_at(&segments, edit),
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(path, "ignoring write to degenerate path");
                self.clone()
            }
        }
    }

    /// Routes `edit` down `segments`, rebuilding only the nodes on the way.
    ///
    /// If the edited child comes back identical to the one we started
    /// from, this node is returned as is.
    fn edit_at<F>(&self, segments: &[&str], edit: F) -> Self
    where
        F: FnOnce(&Self, &str) -> Self,
    {
        match segments {
            [] => self.clone(),
            [segment] => edit(self, *segment),
            [segment, rest @ ..] => {
                let current = self.child_or_empty(*segment);
                let updated = current.edit_at(rest, edit);
                if Self::ptr_eq(&current, &updated) {
                    return self.clone();
                }
                let mut builder = TreeStateBuilder::from_state(self);
                builder.update_child(*segment, Some(updated));
                builder.build()
            }
        }
    }
}

// =============================================================================
// PathAccess Implementation
// =============================================================================

impl<T: Clone> PathAccess<T> for TreeState<T> {
    fn value_at(&self, path: &str) -> TreeResult<&T> {
        let segments = path::segments(path, self.separator).unwrap_or_default();
        let Some((last, parents)) = segments.split_last() else {
            return Err(TreeError::degenerate_path(path));
        };
        self.descend(path, parents)?
            .values
            .get(*last)
            .ok_or_else(|| TreeError::value_not_found(path, *last))
    }

    fn child_at(&self, path: &str) -> TreeResult<&Self> {
        let segments = path::segments(path, self.separator)
            .ok_or_else(|| TreeError::degenerate_path(path))?;
        self.descend(path, &segments)
    }

    fn update_child<C>(&self, path: &str, child: C) -> Self
    where
        C: Into<Option<Self>>,
    {
        let child = child.into();
        self.edit(path, move |node, segment| {
            if child.is_none() && !node.children.contains_key(segment) {
                return node.clone();
            }
            let mut builder = TreeStateBuilder::from_state(node);
            builder.update_child(segment, child);
            builder.build()
        })
    }

    fn map_value<F>(&self, path: &str, function: F) -> Self
    where
        F: FnOnce(TreeResult<&T>) -> Option<T>,
    {
        self.edit(path, move |node, segment| {
            let current = node.values.get(segment);
            let updated =
                function(current.ok_or_else(|| TreeError::value_not_found(path, segment)));
            if updated.is_none() && current.is_none() {
                return node.clone();
            }
            let mut builder = TreeStateBuilder::from_state(node);
            builder.update_value(segment, updated);
            builder.build()
        })
    }

    fn clear(&self) -> Self {
        Self::with_separator(self.separator)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for TreeState<T> {
    fn clone(&self) -> Self {
        Self {
            values: ReferenceCounter::clone(&self.values),
            children: ReferenceCounter::clone(&self.children),
            separator: self.separator,
        }
    }
}

impl<T> Default for TreeState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for TreeState<T> {
    fn eq(&self, other: &Self) -> bool {
        self.separator == other.separator
            && *self.values == *other.values
            && *self.children == *other.children
    }
}

impl<T: Eq> Eq for TreeState<T> {}

impl<T: fmt::Debug> fmt::Debug for TreeState<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TreeState")
            .field("values", &*self.values)
            .field("children", &*self.children)
            .field("separator", &self.separator)
            .finish()
    }
}

impl<P: AsRef<str>, T: Clone> FromIterator<(P, T)> for TreeState<T> {
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        Self::new().update_values(iter)
    }
}

// =============================================================================
// Tests
// =============================================================================
