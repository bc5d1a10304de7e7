//! # treestate
//!
//! An immutable, path-addressed nested key-value tree for Rust.
//!
//! ## Overview
//!
//! A [`TreeState`](persistent::TreeState) is a recursive structure of named
//! value slots and named child subtrees, where every subtree is itself a
//! `TreeState`. Entries are addressed with separator-delimited paths such
//! as `"a.b.c"`, and every write returns a new tree that shares all
//! untouched subtrees with the previous one.
//!
//! - **Paths**: splitting and validation of separator-delimited paths
//! - **Persistent trees**: [`TreeState`](persistent::TreeState) and the
//!   [`PathAccess`](persistent::PathAccess) operation set
//! - **Errors**: [`TreeError`] for lookups that find nothing
//!
//! ## Feature Flags
//!
//! - `arc`: Use `Arc` instead of `Rc` so trees can be shared across threads
//! - `fxhash`: Use `rustc-hash` for the backing maps
//! - `ahash`: Use `ahash` for the backing maps
//! - `tracing`: Emit `trace`-level events (enabled by default)
//!
//! ## Example
//!
//! ```rust
//! use treestate::prelude::*;
//!
//! let state = TreeState::new()
//!     .update_value("a.b.c", 1)
//!     .update_value("a.b.c.d", 2);
//!
//! assert_eq!(state.value_at("a.b.c"), Ok(&1));
//! assert_eq!(state.value_at("a.b.c.d"), Ok(&2));
//! assert!(state.value_at("a.x").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use treestate::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{TreeError, TreeResult};
    pub use crate::persistent::{PathAccess, TreeState};
}

pub mod error;
pub mod path;
pub mod persistent;

pub use error::{TreeError, TreeResult};
