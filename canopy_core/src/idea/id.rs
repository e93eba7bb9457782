// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Idea identity types.

use core::fmt;

/// Sentinel value indicating "no idea" in index fields.
pub const INVALID: u32 = u32::MAX;

/// A handle to an idea in an [`IdeaStore`](super::IdeaStore).
///
/// Contains both a slot index and a generation counter so that stale handles
/// can be detected after an idea is removed and the slot is reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdeaId {
    /// Slot index into the store's arrays.
    pub(crate) idx: u32,
    /// Generation counter; must match the store's generation for this slot.
    pub(crate) generation: u32,
}

impl IdeaId {
    /// Reassembles a handle from its raw parts, as read back from a trace
    /// recording. The result is only meaningful against the store that
    /// issued the original handle.
    #[inline]
    #[must_use]
    pub const fn from_raw_parts(index: u32, generation: u32) -> Self {
        Self {
            idx: index,
            generation,
        }
    }

    /// Returns the raw slot index (for diagnostics only).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Returns the generation counter.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdeaId({}@gen{})", self.idx, self.generation)
    }
}

impl fmt::Display for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.idx)
    }
}

/// Where a new or moved idea should be attached.
///
/// [`Root`](Self::Root) is the "no parent" marker: the idea becomes the top
/// of a new tree in the forest. It is a distinct variant rather than a
/// reserved identifier, so it can never collide with a real idea.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParentRef {
    /// Attach as a new top-level tree.
    Root,
    /// Attach as the last child of an existing idea.
    Idea(IdeaId),
}

impl From<IdeaId> for ParentRef {
    fn from(id: IdeaId) -> Self {
        Self::Idea(id)
    }
}

impl From<Option<IdeaId>> for ParentRef {
    fn from(parent: Option<IdeaId>) -> Self {
        parent.map_or(Self::Root, Self::Idea)
    }
}
