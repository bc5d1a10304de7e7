//! The path-addressed operation set shared by tree states.
//!
//! [`PathAccess`] describes reads and writes purely in terms of
//! separator-delimited paths. Implementors provide the lookups, the
//! subtree replacement and a single value-update primitive,
//! [`map_value`](PathAccess::map_value); every other value mutator is
//! derived from it.
//!
//! # Examples
//!
//! ```rust
//! use treestate::persistent::{PathAccess, TreeState};
//!
//! let state = TreeState::new()
//!     .update_value("user.name", "ada".to_string())
//!     .update_value("user.role", "admin".to_string());
//!
//! let renamed = state.map_value("user.name", |current| {
//!     current.ok().map(|name| name.to_uppercase())
//! });
//!
//! assert_eq!(renamed.value_at("user.name").unwrap(), "ADA");
//! // The receiver is never modified
//! assert_eq!(state.value_at("user.name").unwrap(), "ada");
//! ```

use crate::error::TreeResult;

/// Reads and copy-on-write updates addressed by path.
///
/// Reads borrow from the receiver and report absence through
/// [`TreeResult`]. Writes never modify the receiver; they return a new
/// value that shares every untouched subtree with it. A write to a
/// degenerate path (empty, or with an empty segment) returns the receiver
/// unchanged.
///
/// # Laws
///
/// For every non-degenerate `path` and value `v`:
///
/// - `s.update_value(path, v).value_at(path) == Ok(&v)`
/// - `s.update_value(path, v).remove_value(path).value_at(path).is_err()`
/// - `s.update_value(path, None) == s.remove_value(path)`
pub trait PathAccess<T>: Clone {
    /// Returns the value stored at `path`.
    ///
    /// # Errors
    ///
    /// Fails if the path is degenerate, if an intermediate child is
    /// missing, or if the final node holds no value under the last segment.
    fn value_at(&self, path: &str) -> TreeResult<&T>;

    /// Returns the subtree stored at `path`.
    ///
    /// # Errors
    ///
    /// Fails if the path is degenerate or any segment names a missing child.
    fn child_at(&self, path: &str) -> TreeResult<&Self>;

    /// Replaces the subtree at `path`, or removes it when `child` is `None`.
    ///
    /// Missing intermediate children are created.
    #[must_use]
    fn update_child<C>(&self, path: &str, child: C) -> Self
    where
        C: Into<Option<Self>>;

    /// Recomputes the value at `path`.
    ///
    /// `function` receives the current value, or the lookup failure if
    /// there is none. Returning `Some` stores the new value, returning
    /// `None` deletes the slot. `function` is not called for a degenerate
    /// path.
    #[must_use]
    fn map_value<F>(&self, path: &str, function: F) -> Self
    where
        F: FnOnce(TreeResult<&T>) -> Option<T>;

    /// Returns an empty tree with the receiver's configuration.
    #[must_use]
    fn clear(&self) -> Self;

    /// Stores `value` at `path`, or deletes the slot when it is `None`.
    #[must_use]
    fn update_value<V>(&self, path: &str, value: V) -> Self
    where
        V: Into<Option<T>>,
    {
        let value = value.into();
        self.map_value(path, move |_| value)
    }

    /// Deletes the value at `path`.
    #[must_use]
    fn remove_value(&self, path: &str) -> Self {
        self.map_value(path, |_| None)
    }

    /// Removes the subtree at `path`.
    #[must_use]
    fn remove_child(&self, path: &str) -> Self {
        self.update_child(path, None::<Self>)
    }

    /// Applies [`update_value`](PathAccess::update_value) for each entry in
    /// iteration order. When a path repeats, the last entry wins.
    #[must_use]
    fn update_values<I, P, V>(&self, entries: I) -> Self
    where
        I: IntoIterator<Item = (P, V)>,
        P: AsRef<str>,
        V: Into<Option<T>>,
    {
        entries
            .into_iter()
            .fold(self.clone(), |state, (path, value)| {
                state.update_value(path.as_ref(), value)
            })
    }

    /// Applies [`remove_value`](PathAccess::remove_value) for each path in
    /// iteration order.
    #[must_use]
    fn remove_values<I, P>(&self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        paths
            .into_iter()
            .fold(self.clone(), |state, path| state.remove_value(path.as_ref()))
    }

    /// Returns `true` if a value is stored at `path`.
    fn contains_value(&self, path: &str) -> bool {
        self.value_at(path).is_ok()
    }

    /// Returns `true` if a subtree is stored at `path`.
    fn contains_child(&self, path: &str) -> bool {
        self.child_at(path).is_ok()
    }
}
