// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree traversal utilities.

use super::id::{INVALID, IdeaId};
use super::store::IdeaStore;

/// An iterator over the direct children of an idea, in child order.
///
/// Created by [`IdeaStore::children`].
#[derive(Debug)]
pub struct Children<'a> {
    store: &'a IdeaStore,
    current: u32,
}

impl<'a> Children<'a> {
    pub(crate) fn new(store: &'a IdeaStore, first: u32) -> Self {
        Self {
            store,
            current: first,
        }
    }
}

impl Iterator for Children<'_> {
    type Item = IdeaId;

    fn next(&mut self) -> Option<IdeaId> {
        if self.current == INVALID {
            return None;
        }
        let idx = self.current;
        self.current = self.store.next_sibling[idx as usize];
        Some(self.store.handle(idx))
    }
}
