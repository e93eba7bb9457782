// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The content contract consumed by the auto-color maintainer.

use alloc::vec::Vec;

use super::attr::{AttrMap, AttrValue};
use super::id::{IdeaId, ParentRef};
use super::store::IdeaStore;
use crate::error::ContentError;

/// Generic idea-forest operations the auto-color maintainer builds on.
///
/// [`IdeaStore`] is the in-memory implementation; other stores (a document
/// model backed by a database, an undo-recording wrapper, a test double)
/// implement this trait to get auto-coloring for free. Failures are reported
/// as [`ContentError`] and passed through by the maintainer unchanged.
pub trait IdeaContent {
    /// Whether `id` refers to a live idea.
    fn contains(&self, id: IdeaId) -> bool;

    /// The idea's parent, or `None` for a root.
    fn parent_of(&self, id: IdeaId) -> Result<Option<IdeaId>, ContentError>;

    /// The idea's children in child order.
    fn child_ids(&self, id: IdeaId) -> Result<Vec<IdeaId>, ContentError>;

    /// Every root in the forest.
    fn root_ids(&self) -> Vec<IdeaId>;

    /// Creates an idea as the last child of `parent`, or as a new root.
    fn create_idea(&mut self, parent: ParentRef, title: &str) -> Result<IdeaId, ContentError>;

    /// Creates an idea that takes over `sibling`'s position under the same
    /// parent (or a new root if `sibling` is a root).
    fn create_idea_before(&mut self, sibling: IdeaId, title: &str)
    -> Result<IdeaId, ContentError>;

    /// Detaches `id` and appends it under `new_parent`, or makes it a root.
    fn reparent(&mut self, id: IdeaId, new_parent: ParentRef) -> Result<(), ContentError>;

    /// The idea's attribute container, if it has one.
    fn attributes(&self, id: IdeaId) -> Result<Option<&AttrMap>, ContentError>;

    /// Writes one attribute entry, preserving all others.
    fn set_attribute(&mut self, id: IdeaId, key: &str, value: AttrValue)
    -> Result<(), ContentError>;

    /// Removes one attribute entry, preserving all others.
    fn remove_attribute(&mut self, id: IdeaId, key: &str)
    -> Result<Option<AttrValue>, ContentError>;

    /// The idea's 0-based position among its parent's children, or `None`
    /// for a root.
    fn position_of(&self, id: IdeaId) -> Result<Option<usize>, ContentError> {
        let Some(parent) = self.parent_of(id)? else {
            return Ok(None);
        };
        Ok(self.child_ids(parent)?.iter().position(|&c| c == id))
    }
}

impl IdeaContent for IdeaStore {
    fn contains(&self, id: IdeaId) -> bool {
        self.is_alive(id)
    }

    fn parent_of(&self, id: IdeaId) -> Result<Option<IdeaId>, ContentError> {
        self.parent(id)
    }

    fn child_ids(&self, id: IdeaId) -> Result<Vec<IdeaId>, ContentError> {
        Ok(self.children(id)?.collect())
    }

    fn root_ids(&self) -> Vec<IdeaId> {
        self.roots()
    }

    fn create_idea(&mut self, parent: ParentRef, title: &str) -> Result<IdeaId, ContentError> {
        Self::create_idea(self, parent, title)
    }

    fn create_idea_before(
        &mut self,
        sibling: IdeaId,
        title: &str,
    ) -> Result<IdeaId, ContentError> {
        Self::create_idea_before(self, sibling, title)
    }

    fn reparent(&mut self, id: IdeaId, new_parent: ParentRef) -> Result<(), ContentError> {
        Self::reparent(self, id, new_parent)
    }

    fn attributes(&self, id: IdeaId) -> Result<Option<&AttrMap>, ContentError> {
        Self::attributes(self, id)
    }

    fn set_attribute(
        &mut self,
        id: IdeaId,
        key: &str,
        value: AttrValue,
    ) -> Result<(), ContentError> {
        Self::set_attribute(self, id, key, value)
    }

    fn remove_attribute(
        &mut self,
        id: IdeaId,
        key: &str,
    ) -> Result<Option<AttrValue>, ContentError> {
        Self::remove_attribute(self, id, key)
    }

    fn position_of(&self, id: IdeaId) -> Result<Option<usize>, ContentError> {
        self.child_index(id)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn trait_view_matches_store() {
        let mut store = IdeaStore::new();
        let root = store.create_idea(ParentRef::Root, "root").unwrap();
        let a = store.create_idea(root.into(), "a").unwrap();
        let b = store.create_idea(root.into(), "b").unwrap();

        let content: &dyn IdeaContent = &store;
        assert!(content.contains(a));
        assert_eq!(content.parent_of(a), Ok(Some(root)));
        assert_eq!(content.position_of(b), Ok(Some(1)));
        assert_eq!(content.position_of(root), Ok(None));
        assert_eq!(content.child_ids(root), Ok(vec![a, b]));
        assert_eq!(content.root_ids(), vec![root]);
    }
}
