// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays idea storage with allocation, topology, and attribute
//! management.

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

use understory_dirty::{CycleHandling, DirtyTracker};

use super::attr::{AttrMap, AttrValue};
use super::id::{INVALID, IdeaId, ParentRef};
use super::traverse::Children;
use crate::dirty;
use crate::error::ContentError;

/// Struct-of-arrays storage for an idea forest.
///
/// Ideas are addressed by [`IdeaId`] handles. Internally, each idea occupies
/// a slot in parallel arrays. Removed ideas are recycled via a free list,
/// and generation counters prevent stale handle access.
///
/// An idea without a parent is a root; the store may hold any number of
/// independent trees.
#[derive(Debug)]
pub struct IdeaStore {
    // -- Topology --
    pub(crate) parent: Vec<u32>,
    pub(crate) first_child: Vec<u32>,
    pub(crate) next_sibling: Vec<u32>,
    pub(crate) prev_sibling: Vec<u32>,

    // -- Content --
    pub(crate) title: Vec<String>,
    pub(crate) attrs: Vec<Option<AttrMap>>,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) len: u32,

    // -- Dirty tracking --
    pub(crate) dirty: DirtyTracker<u32>,

    // -- Lifecycle tracking --
    pub(crate) pending_added: Vec<u32>,
    pub(crate) pending_removed: Vec<u32>,
}

impl Default for IdeaStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IdeaStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parent: Vec::new(),
            first_child: Vec::new(),
            next_sibling: Vec::new(),
            prev_sibling: Vec::new(),
            title: Vec::new(),
            attrs: Vec::new(),
            generation: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            pending_added: Vec::new(),
            pending_removed: Vec::new(),
        }
    }

    // -- Allocation API --

    /// Creates a new idea and attaches it under `parent`.
    ///
    /// With [`ParentRef::Idea`] the idea is appended as the last child; with
    /// [`ParentRef::Root`] it becomes the root of a new tree. The idea starts
    /// with no attribute container.
    pub fn create_idea(&mut self, parent: ParentRef, title: &str) -> Result<IdeaId, ContentError> {
        let parent = match parent {
            ParentRef::Root => None,
            ParentRef::Idea(p) => Some(self.check(p)?),
        };
        let idx = self.alloc_slot(title);
        if let Some(p) = parent {
            self.link_last(p, idx);
        }
        Ok(self.handle(idx))
    }

    /// Creates a new idea in `sibling`'s position.
    ///
    /// The new idea shares `sibling`'s parent and takes its index in the
    /// child sequence; `sibling` and everything after it shift one place.
    /// If `sibling` is a root, the new idea is a new root.
    pub fn create_idea_before(
        &mut self,
        sibling: IdeaId,
        title: &str,
    ) -> Result<IdeaId, ContentError> {
        let s = self.check(sibling)?;
        let idx = self.alloc_slot(title);
        if self.parent[s as usize] != INVALID {
            self.link_before(idx, s);
        }
        Ok(self.handle(idx))
    }

    /// Removes a leaf idea, freeing its slot for reuse.
    ///
    /// Fails with [`ContentError::HasChildren`] if the idea still has
    /// children (move or remove them first).
    pub fn remove_idea(&mut self, id: IdeaId) -> Result<(), ContentError> {
        let idx = self.check(id)?;
        if self.first_child[idx as usize] != INVALID {
            return Err(ContentError::HasChildren(id));
        }

        // Remove from parent's child list if attached.
        if self.parent[idx as usize] != INVALID {
            self.unlink_from_parent(idx);
        }

        self.dirty.remove_key(idx);

        // Bump generation so old handles immediately fail validation.
        self.generation[idx as usize] += 1;
        self.title[idx as usize] = String::new();
        self.attrs[idx as usize] = None;

        self.free_list.push(idx);
        self.pending_removed.push(idx);
        self.dirty.mark(idx, dirty::TOPOLOGY);
        Ok(())
    }

    /// Returns whether the given handle refers to a live idea.
    #[must_use]
    pub fn is_alive(&self, id: IdeaId) -> bool {
        (id.idx < self.len)
            && self.generation[id.idx as usize] == id.generation
            && !self.free_list.contains(&id.idx)
    }

    /// Returns the number of live ideas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len as usize - self.free_list.len()
    }

    /// Returns whether the store holds no live ideas.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // -- Topology API --

    /// Moves `id` under `new_parent`.
    ///
    /// The idea is detached from its current parent (if any) and appended as
    /// the last child of `new_parent`, or becomes a root for
    /// [`ParentRef::Root`]. Its own children move with it.
    ///
    /// Fails with [`ContentError::Cycle`] if `new_parent` is `id` itself or
    /// one of its descendants.
    pub fn reparent(&mut self, id: IdeaId, new_parent: ParentRef) -> Result<(), ContentError> {
        let c = self.check(id)?;
        let p = match new_parent {
            ParentRef::Root => None,
            ParentRef::Idea(p) => {
                let p_idx = self.check(p)?;
                if self.is_ancestor_or_self(c, p_idx) {
                    return Err(ContentError::Cycle {
                        idea: id,
                        parent: p,
                    });
                }
                Some(p_idx)
            }
        };

        if self.parent[c as usize] != INVALID {
            self.unlink_from_parent(c);
        }
        if let Some(p) = p {
            self.link_last(p, c);
        }
        Ok(())
    }

    /// Returns the parent of an idea, or `None` for a root.
    pub fn parent(&self, id: IdeaId) -> Result<Option<IdeaId>, ContentError> {
        let idx = self.check(id)?;
        let p = self.parent[idx as usize];
        Ok((p != INVALID).then(|| self.handle(p)))
    }

    /// Returns an iterator over the direct children of an idea.
    pub fn children(&self, id: IdeaId) -> Result<Children<'_>, ContentError> {
        let idx = self.check(id)?;
        Ok(Children::new(self, self.first_child[idx as usize]))
    }

    /// Returns the handles of root ideas (those with no parent), in slot
    /// order.
    #[must_use]
    pub fn roots(&self) -> Vec<IdeaId> {
        let mut roots = Vec::new();
        for idx in 0..self.len {
            if self.parent[idx as usize] == INVALID && !self.free_list.contains(&idx) {
                roots.push(self.handle(idx));
            }
        }
        roots
    }

    /// Returns whether the idea has no parent.
    pub fn is_root(&self, id: IdeaId) -> Result<bool, ContentError> {
        Ok(self.parent(id)?.is_none())
    }

    /// Returns whether the idea's parent is a root.
    pub fn is_root_adjacent(&self, id: IdeaId) -> Result<bool, ContentError> {
        let idx = self.check(id)?;
        let p = self.parent[idx as usize];
        Ok(p != INVALID && self.parent[p as usize] == INVALID)
    }

    /// Returns the 0-based position of the idea among its parent's
    /// children, or `None` for a root.
    pub fn child_index(&self, id: IdeaId) -> Result<Option<usize>, ContentError> {
        let idx = self.check(id)?;
        if self.parent[idx as usize] == INVALID {
            return Ok(None);
        }
        let mut position = 0;
        let mut prev = self.prev_sibling[idx as usize];
        while prev != INVALID {
            position += 1;
            prev = self.prev_sibling[prev as usize];
        }
        Ok(Some(position))
    }

    // -- Content API --

    /// Returns the title of an idea.
    pub fn title(&self, id: IdeaId) -> Result<&str, ContentError> {
        let idx = self.check(id)?;
        Ok(&self.title[idx as usize])
    }

    /// Replaces the title of an idea.
    pub fn set_title(&mut self, id: IdeaId, title: &str) -> Result<(), ContentError> {
        let idx = self.check(id)?;
        title.clone_into(&mut self.title[idx as usize]);
        self.dirty.mark(idx, dirty::TITLE);
        Ok(())
    }

    /// Returns the attribute container of an idea, or `None` if the idea has
    /// never had an attribute written (or has had all of them removed).
    pub fn attributes(&self, id: IdeaId) -> Result<Option<&AttrMap>, ContentError> {
        let idx = self.check(id)?;
        Ok(self.attrs[idx as usize].as_ref())
    }

    /// Returns a single attribute entry.
    pub fn attribute(&self, id: IdeaId, key: &str) -> Result<Option<&AttrValue>, ContentError> {
        Ok(self.attributes(id)?.and_then(|attrs| attrs.get(key)))
    }

    /// Writes a single attribute entry, creating the container if needed.
    ///
    /// Other entries are left untouched.
    pub fn set_attribute(
        &mut self,
        id: IdeaId,
        key: &str,
        value: AttrValue,
    ) -> Result<(), ContentError> {
        let idx = self.check(id)?;
        self.attrs[idx as usize]
            .get_or_insert_with(AttrMap::new)
            .insert(key.into(), value);
        self.dirty.mark(idx, dirty::ATTRIBUTES);
        Ok(())
    }

    /// Removes a single attribute entry and returns its old value.
    ///
    /// The container is dropped once its last entry is gone, so an idea
    /// either has a non-empty container or none at all. Removing an absent
    /// key is a no-op and does not mark the idea dirty.
    pub fn remove_attribute(
        &mut self,
        id: IdeaId,
        key: &str,
    ) -> Result<Option<AttrValue>, ContentError> {
        let idx = self.check(id)?;
        let slot = &mut self.attrs[idx as usize];
        let Some(attrs) = slot.as_mut() else {
            return Ok(None);
        };
        let removed = attrs.remove(key);
        if attrs.is_empty() {
            *slot = None;
        }
        if removed.is_some() {
            self.dirty.mark(idx, dirty::ATTRIBUTES);
        }
        Ok(removed)
    }

    // -- Raw-index accessors --
    //
    // These accept raw slot indices (as found in `ContentChanges`) rather than
    // `IdeaId` handles, skipping generation validation.

    /// Returns the current handle for raw slot `idx`, or `None` if the slot
    /// is out of range or free.
    #[must_use]
    pub fn handle_at(&self, idx: u32) -> Option<IdeaId> {
        (idx < self.len && !self.free_list.contains(&idx)).then(|| self.handle(idx))
    }

    /// Returns the title at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn title_at(&self, idx: u32) -> &str {
        assert!(
            idx < self.len,
            "slot index {idx} out of range (len {})",
            self.len
        );
        &self.title[idx as usize]
    }

    /// Returns the attribute container at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn attributes_at(&self, idx: u32) -> Option<&AttrMap> {
        assert!(
            idx < self.len,
            "slot index {idx} out of range (len {})",
            self.len
        );
        self.attrs[idx as usize].as_ref()
    }

    // -- Internal helpers --

    /// Resolves a handle to its slot, failing if the handle is stale.
    fn check(&self, id: IdeaId) -> Result<u32, ContentError> {
        if self.is_alive(id) {
            Ok(id.idx)
        } else {
            Err(ContentError::UnknownIdea(id))
        }
    }

    /// Builds a handle for a live slot.
    pub(crate) fn handle(&self, idx: u32) -> IdeaId {
        IdeaId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Takes a slot from the free list or grows the arrays.
    fn alloc_slot(&mut self, title: &str) -> u32 {
        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot.
            self.generation[idx as usize] += 1;
            self.parent[idx as usize] = INVALID;
            self.first_child[idx as usize] = INVALID;
            self.next_sibling[idx as usize] = INVALID;
            self.prev_sibling[idx as usize] = INVALID;
            title.clone_into(&mut self.title[idx as usize]);
            self.attrs[idx as usize] = None;
            idx
        } else {
            let idx = self.len;
            self.len += 1;
            self.parent.push(INVALID);
            self.first_child.push(INVALID);
            self.next_sibling.push(INVALID);
            self.prev_sibling.push(INVALID);
            self.title.push(title.into());
            self.attrs.push(None);
            self.generation.push(0);
            idx
        };

        self.pending_added.push(idx);
        self.dirty.mark(idx, dirty::TOPOLOGY);
        idx
    }

    /// Appends detached slot `c` as the last child of `p`.
    fn link_last(&mut self, p: u32, c: u32) {
        self.parent[c as usize] = p;
        self.prev_sibling[c as usize] = INVALID;
        self.next_sibling[c as usize] = INVALID;

        if self.first_child[p as usize] == INVALID {
            self.first_child[p as usize] = c;
        } else {
            // Walk to last child.
            let mut last = self.first_child[p as usize];
            while self.next_sibling[last as usize] != INVALID {
                last = self.next_sibling[last as usize];
            }
            self.next_sibling[last as usize] = c;
            self.prev_sibling[c as usize] = last;
        }

        self.dirty.mark(p, dirty::TOPOLOGY);
    }

    /// Links detached slot `c` directly before attached slot `s`.
    fn link_before(&mut self, c: u32, s: u32) {
        let p = self.parent[s as usize];
        self.parent[c as usize] = p;
        self.next_sibling[c as usize] = s;
        self.prev_sibling[c as usize] = self.prev_sibling[s as usize];

        if self.prev_sibling[s as usize] != INVALID {
            self.next_sibling[self.prev_sibling[s as usize] as usize] = c;
        } else {
            // `s` was the first child.
            self.first_child[p as usize] = c;
        }
        self.prev_sibling[s as usize] = c;

        self.dirty.mark(p, dirty::TOPOLOGY);
    }

    /// Removes `idx` from its parent's child list.
    fn unlink_from_parent(&mut self, idx: u32) {
        let p = self.parent[idx as usize];
        let prev = self.prev_sibling[idx as usize];
        let next = self.next_sibling[idx as usize];

        if prev != INVALID {
            self.next_sibling[prev as usize] = next;
        } else {
            // Was first child.
            self.first_child[p as usize] = next;
        }

        if next != INVALID {
            self.prev_sibling[next as usize] = prev;
        }

        self.parent[idx as usize] = INVALID;
        self.prev_sibling[idx as usize] = INVALID;
        self.next_sibling[idx as usize] = INVALID;

        self.dirty.mark(p, dirty::TOPOLOGY);
    }

    /// Returns whether `ancestor` is `idx` or one of its ancestors.
    fn is_ancestor_or_self(&self, ancestor: u32, mut idx: u32) -> bool {
        while idx != INVALID {
            if idx == ancestor {
                return true;
            }
            idx = self.parent[idx as usize];
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn child_titles(store: &IdeaStore, id: IdeaId) -> Vec<&str> {
        store
            .children(id)
            .unwrap()
            .map(|c| store.title(c).unwrap())
            .collect()
    }

    #[test]
    fn create_and_remove() {
        let mut store = IdeaStore::new();
        let id = store.create_idea(ParentRef::Root, "root").unwrap();
        assert!(store.is_alive(id));
        assert_eq!(store.len(), 1);
        store.remove_idea(id).unwrap();
        assert!(!store.is_alive(id));
        assert!(store.is_empty());
    }

    #[test]
    fn generation_prevents_stale_access() {
        let mut store = IdeaStore::new();
        let id1 = store.create_idea(ParentRef::Root, "a").unwrap();
        store.remove_idea(id1).unwrap();
        let id2 = store.create_idea(ParentRef::Root, "b").unwrap();
        // id2 reuses the same slot but has a different generation.
        assert!(!store.is_alive(id1));
        assert!(store.is_alive(id2));
        assert_eq!(id1.idx, id2.idx);
        assert_ne!(id1.generation, id2.generation);
        assert_eq!(store.title(id1), Err(ContentError::UnknownIdea(id1)));
        assert_eq!(store.title(id2), Ok("b"));
    }

    #[test]
    fn children_keep_insertion_order() {
        let mut store = IdeaStore::new();
        let root = store.create_idea(ParentRef::Root, "root").unwrap();
        let a = store.create_idea(root.into(), "a").unwrap();
        let b = store.create_idea(root.into(), "b").unwrap();

        assert_eq!(store.parent(a), Ok(Some(root)));
        assert_eq!(store.parent(b), Ok(Some(root)));
        assert_eq!(store.parent(root), Ok(None));

        let kids: Vec<_> = store.children(root).unwrap().collect();
        assert_eq!(kids, vec![a, b]);
        assert_eq!(store.child_index(a), Ok(Some(0)));
        assert_eq!(store.child_index(b), Ok(Some(1)));
        assert_eq!(store.child_index(root), Ok(None));
    }

    #[test]
    fn create_before_takes_the_sibling_slot() {
        let mut store = IdeaStore::new();
        let root = store.create_idea(ParentRef::Root, "root").unwrap();
        let a = store.create_idea(root.into(), "a").unwrap();
        let c = store.create_idea(root.into(), "c").unwrap();
        let b = store.create_idea_before(c, "b").unwrap();
        let first = store.create_idea_before(a, "first").unwrap();

        assert_eq!(child_titles(&store, root), vec!["first", "a", "b", "c"]);
        assert_eq!(store.child_index(b), Ok(Some(2)));
        assert_eq!(store.child_index(first), Ok(Some(0)));
    }

    #[test]
    fn create_before_a_root_makes_a_root() {
        let mut store = IdeaStore::new();
        let root = store.create_idea(ParentRef::Root, "root").unwrap();
        let other = store.create_idea_before(root, "other").unwrap();
        assert_eq!(store.parent(other), Ok(None));
        assert_eq!(store.roots(), vec![root, other]);
    }

    #[test]
    fn reparent_moves_subtree() {
        let mut store = IdeaStore::new();
        let p1 = store.create_idea(ParentRef::Root, "p1").unwrap();
        let p2 = store.create_idea(ParentRef::Root, "p2").unwrap();
        let child = store.create_idea(p1.into(), "child").unwrap();
        let grandchild = store.create_idea(child.into(), "grandchild").unwrap();

        store.reparent(child, p2.into()).unwrap();
        assert_eq!(store.parent(child), Ok(Some(p2)));
        assert_eq!(store.parent(grandchild), Ok(Some(child)));
        assert!(store.children(p1).unwrap().next().is_none());
    }

    #[test]
    fn reparent_to_root_detaches() {
        let mut store = IdeaStore::new();
        let root = store.create_idea(ParentRef::Root, "root").unwrap();
        let a = store.create_idea(root.into(), "a").unwrap();
        let b = store.create_idea(root.into(), "b").unwrap();

        store.reparent(a, ParentRef::Root).unwrap();
        assert_eq!(store.is_root(a), Ok(true));
        assert_eq!(child_titles(&store, root), vec!["b"]);
        assert_eq!(store.child_index(b), Ok(Some(0)));
        assert_eq!(store.roots(), vec![root, a]);
    }

    #[test]
    fn reparent_under_descendant_is_rejected() {
        let mut store = IdeaStore::new();
        let root = store.create_idea(ParentRef::Root, "root").unwrap();
        let a = store.create_idea(root.into(), "a").unwrap();
        let b = store.create_idea(a.into(), "b").unwrap();

        assert_eq!(
            store.reparent(a, b.into()),
            Err(ContentError::Cycle { idea: a, parent: b })
        );
        assert_eq!(
            store.reparent(a, a.into()),
            Err(ContentError::Cycle { idea: a, parent: a })
        );
        // Nothing moved.
        assert_eq!(store.parent(a), Ok(Some(root)));
    }

    #[test]
    fn root_adjacency() {
        let mut store = IdeaStore::new();
        let root = store.create_idea(ParentRef::Root, "root").unwrap();
        let a = store.create_idea(root.into(), "a").unwrap();
        let b = store.create_idea(a.into(), "b").unwrap();
        assert_eq!(store.is_root_adjacent(root), Ok(false));
        assert_eq!(store.is_root_adjacent(a), Ok(true));
        assert_eq!(store.is_root_adjacent(b), Ok(false));
    }

    #[test]
    fn roots_returns_parentless_ideas() {
        let mut store = IdeaStore::new();
        let a = store.create_idea(ParentRef::Root, "a").unwrap();
        let b = store.create_idea(ParentRef::Root, "b").unwrap();
        let c = store.create_idea(a.into(), "c").unwrap();

        let roots = store.roots();
        assert!(roots.contains(&a));
        assert!(roots.contains(&b));
        assert!(!roots.contains(&c));
    }

    #[test]
    fn remove_with_children_is_rejected() {
        let mut store = IdeaStore::new();
        let parent = store.create_idea(ParentRef::Root, "parent").unwrap();
        let _child = store.create_idea(parent.into(), "child").unwrap();
        assert_eq!(
            store.remove_idea(parent),
            Err(ContentError::HasChildren(parent))
        );
        assert!(store.is_alive(parent));
    }

    #[test]
    fn stale_handle_is_unknown() {
        let mut store = IdeaStore::new();
        let root = store.create_idea(ParentRef::Root, "root").unwrap();
        let id = store.create_idea(root.into(), "gone").unwrap();
        store.remove_idea(id).unwrap();
        assert_eq!(
            store.create_idea(id.into(), "x"),
            Err(ContentError::UnknownIdea(id))
        );
        assert_eq!(
            store.reparent(id, root.into()),
            Err(ContentError::UnknownIdea(id))
        );
        assert_eq!(store.parent(id), Err(ContentError::UnknownIdea(id)));
    }

    #[test]
    fn attributes_are_lazy_and_isolated() {
        let mut store = IdeaStore::new();
        let id = store.create_idea(ParentRef::Root, "root").unwrap();
        assert_eq!(store.attributes(id), Ok(None));

        store.set_attribute(id, "foo", "bar".into()).unwrap();
        store.set_attribute(id, "size", AttrValue::Number(2.0)).unwrap();
        assert_eq!(store.remove_attribute(id, "size"), Ok(Some(AttrValue::Number(2.0))));
        assert_eq!(
            store.attribute(id, "foo"),
            Ok(Some(&AttrValue::Text("bar".into())))
        );
    }

    #[test]
    fn removing_last_attribute_drops_container() {
        let mut store = IdeaStore::new();
        let id = store.create_idea(ParentRef::Root, "root").unwrap();
        store.set_attribute(id, "collapsed", true.into()).unwrap();
        assert_eq!(store.remove_attribute(id, "collapsed"), Ok(Some(AttrValue::Flag(true))));
        assert_eq!(store.attributes(id), Ok(None));
        // Removing from an absent container stays a no-op.
        assert_eq!(store.remove_attribute(id, "collapsed"), Ok(None));
        assert_eq!(store.attributes(id), Ok(None));
    }

    #[test]
    fn set_title_replaces() {
        let mut store = IdeaStore::new();
        let id = store.create_idea(ParentRef::Root, "old").unwrap();
        store.set_title(id, "new").unwrap();
        assert_eq!(store.title(id), Ok("new"));
        assert_eq!(store.title_at(id.index()), "new");
    }

    #[test]
    fn handle_at_skips_free_slots() {
        let mut store = IdeaStore::new();
        let a = store.create_idea(ParentRef::Root, "a").unwrap();
        let b = store.create_idea(ParentRef::Root, "b").unwrap();
        store.remove_idea(a).unwrap();
        assert_eq!(store.handle_at(a.index()), None);
        assert_eq!(store.handle_at(b.index()), Some(b));
        assert_eq!(store.handle_at(99), None);
    }

    #[test]
    fn parent_lookup_converts_to_parent_ref() {
        let mut store = IdeaStore::new();
        let root = store.create_idea(ParentRef::Root, "root").unwrap();
        let a = store.create_idea(root.into(), "a").unwrap();

        let parent = store.parent(a).unwrap();
        let sibling = store.create_idea(parent.into(), "sibling").unwrap();
        assert_eq!(store.parent(sibling), Ok(Some(root)));
        assert_eq!(child_titles(&store, root), ["a", "sibling"]);

        let parent = store.parent(root).unwrap();
        let peer = store.create_idea(parent.into(), "peer").unwrap();
        assert_eq!(store.is_root(peer), Ok(true));
        assert_eq!(store.roots(), vec![root, peer]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn title_at_out_of_range_panics() {
        let store = IdeaStore::new();
        let _ = store.title_at(0);
    }
}
