//! Persistent (immutable) path-addressed trees.
//!
//! This module provides [`TreeState`], a nested key-value tree whose
//! entries are addressed by separator-delimited paths, and the
//! [`PathAccess`] trait describing its operations.
//!
//! # Structural Sharing
//!
//! Every write returns a new tree. Only the nodes along the edited path
//! are rebuilt; every other subtree is shared by reference between the
//! old and the new version, and the old version stays fully usable.
//!
//! # Examples
//!
//! ```rust
//! use treestate::persistent::{PathAccess, TreeState};
//!
//! let state = TreeState::new()
//!     .update_value("config.retries", 3)
//!     .update_value("config.timeout", 30);
//! assert_eq!(state.value_at("config.retries"), Ok(&3));
//!
//! // Structural sharing: the original tree is preserved
//! let updated = state.remove_value("config.retries");
//! assert_eq!(state.value_at("config.retries"), Ok(&3)); // Original unchanged
//! assert!(updated.value_at("config.retries").is_err()); // New version
//! ```

use std::collections::HashMap;

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

// =============================================================================
// Backing Map Type Alias
// =============================================================================

/// Hasher for the per-node backing maps.
///
/// `fxhash` selects `rustc-hash`, `ahash` selects `ahash`; with neither,
/// the standard library's SipHash is used. `fxhash` takes precedence when
/// both features are enabled.
#[cfg(feature = "fxhash")]
pub(crate) type MapHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type MapHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type MapHasher = std::collections::hash_map::RandomState;

/// Segment-keyed map backing one level of a tree.
pub(crate) type SegmentMap<V> = HashMap<String, V, MapHasher>;

mod access;
mod builder;
mod tree_state;

pub use access::PathAccess;
pub use tree_state::TreeState;

// =============================================================================
// Tests
// =============================================================================
