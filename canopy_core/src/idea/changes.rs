// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change reporting.
//!
//! Every store mutation marks a dirty channel (see [`dirty`](crate::dirty)).
//! [`IdeaStore::take_changes`] drains all channels at once, so a renderer
//! can redraw only the ideas whose connectors, titles, or child sequences
//! changed since it last looked.
//!
//! [`ContentChanges`] uses raw slot indices (`u32`) rather than [`IdeaId`]
//! handles; resolve them with
//! [`handle_at`](super::IdeaStore::handle_at) or read directly through the
//! `*_at()` accessors.
//!
//! [`IdeaId`]: super::IdeaId

use alloc::vec::Vec;

use super::store::IdeaStore;
use crate::dirty;

/// The set of changes produced by a single [`IdeaStore::take_changes`] call.
#[derive(Clone, Debug, Default)]
pub struct ContentChanges {
    /// Ideas that had an attribute entry written or removed.
    pub attributes: Vec<u32>,
    /// Ideas whose title changed.
    pub titles: Vec<u32>,
    /// Ideas whose child sequence changed, plus created and removed ideas.
    pub topology: Vec<u32>,
    /// Ideas created since the last drain.
    pub added: Vec<u32>,
    /// Ideas removed since the last drain.
    pub removed: Vec<u32>,
}

impl ContentChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.attributes.clear();
        self.titles.clear();
        self.topology.clear();
        self.added.clear();
        self.removed.clear();
    }

    /// Returns whether nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
            && self.titles.is_empty()
            && self.topology.is_empty()
            && self.added.is_empty()
            && self.removed.is_empty()
    }
}

impl IdeaStore {
    /// Drains all dirty channels and returns what changed since the last
    /// call.
    pub fn take_changes(&mut self) -> ContentChanges {
        let mut changes = ContentChanges::default();
        self.take_changes_into(&mut changes);
        changes
    }

    /// Like [`take_changes`](Self::take_changes), but fills a
    /// caller-provided buffer. Previous contents are cleared and the
    /// buffer's allocations are kept.
    pub fn take_changes_into(&mut self, changes: &mut ContentChanges) {
        changes.clear();

        changes
            .attributes
            .extend(self.dirty.drain(dirty::ATTRIBUTES).deterministic().run());
        changes
            .titles
            .extend(self.dirty.drain(dirty::TITLE).deterministic().run());
        changes
            .topology
            .extend(self.dirty.drain(dirty::TOPOLOGY).deterministic().run());

        changes.added.append(&mut self.pending_added);
        changes.removed.append(&mut self.pending_removed);
    }
}
