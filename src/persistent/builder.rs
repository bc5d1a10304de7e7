//! Mutable staging area for a single tree state edit.

use std::marker::PhantomData;
use std::rc::Rc;

use super::{SegmentMap, TreeState};

/// A short-lived, mutable copy of one level of a [`TreeState`].
///
/// The builder takes shallow copies of a node's backing maps: new maps,
/// but every child handle still points at the same shared subtree. Edits
/// then mutate those copies in place, so the source node is never touched
/// and untouched children keep their identity in the result of
/// [`build`](Self::build).
///
/// A builder is created and consumed within one edit and is never handed
/// out of the crate.
///
/// # Thread Safety
///
/// `TreeStateBuilder` is `!Send` and `!Sync`, including with the `arc`
/// feature enabled.
pub(crate) struct TreeStateBuilder<T> {
    values: SegmentMap<T>,
    children: SegmentMap<TreeState<T>>,
    separator: char,
    /// Marker to ensure `!Send` and `!Sync`.
    _marker: PhantomData<Rc<()>>,
}

static_assertions::assert_not_impl_any!(TreeStateBuilder<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(TreeStateBuilder<String>: Send, Sync);

#[cfg(feature = "arc")]
mod arc_send_sync_verification_builder {
    use super::TreeStateBuilder;
    use std::sync::Arc;

    static_assertions::assert_not_impl_any!(TreeStateBuilder<Arc<i32>>: Send, Sync);
    static_assertions::assert_not_impl_any!(TreeStateBuilder<Arc<String>>: Send, Sync);
}

impl<T: Clone> TreeStateBuilder<T> {
    /// Starts an edit of `state`.
    pub(crate) fn from_state(state: &TreeState<T>) -> Self {
        Self {
            values: (*state.values).clone(),
            children: (*state.children).clone(),
            separator: state.separator,
            _marker: PhantomData,
        }
    }

    /// Stores or, for `None`, deletes the value under `segment`.
    pub(crate) fn update_value(&mut self, segment: &str, value: Option<T>) -> &mut Self {
        match value {
            Some(value) => {
                self.values.insert(segment.to_string(), value);
            }
            None => {
                self.values.remove(segment);
            }
        }
        self
    }

    /// Stores or, for `None`, deletes the child under `segment`.
    ///
    /// A child that is empty is deleted instead of stored.
    pub(crate) fn update_child(
        &mut self,
        segment: &str,
        child: Option<TreeState<T>>,
    ) -> &mut Self {
        match child.filter(|child| !child.is_empty()) {
            Some(child) => {
                self.children.insert(segment.to_string(), child);
            }
            None => {
                if self.children.remove(segment).is_some() {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(segment, "pruned tree state child");
                }
            }
        }
        self
    }

    /// Freezes the staged maps into a new tree state.
    pub(crate) fn build(self) -> TreeState<T> {
        TreeState::from_parts(self.values, self.children, self.separator)
    }
}
