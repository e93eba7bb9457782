// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors signalled by the idea content collaborator.

use core::fmt;

use crate::idea::IdeaId;

/// Errors from [`IdeaContent`](crate::idea::IdeaContent) operations.
///
/// The auto-color maintainer never produces its own failures beyond
/// [`EmptySelection`](Self::EmptySelection) and
/// [`Cycle`](Self::Cycle) pre-checks; everything else is passed through
/// unchanged from the content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentError {
    /// The handle does not refer to a live idea.
    UnknownIdea(IdeaId),
    /// The idea still has children and cannot be removed.
    HasChildren(IdeaId),
    /// Attaching `idea` under `parent` would make it its own ancestor.
    Cycle {
        /// The idea being moved.
        idea: IdeaId,
        /// The requested new parent.
        parent: IdeaId,
    },
    /// A grouping operation was given no ideas.
    EmptySelection,
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownIdea(id) => write!(f, "unknown idea {id:?}"),
            Self::HasChildren(id) => write!(f, "idea {id:?} still has children"),
            Self::Cycle { idea, parent } => {
                write!(f, "cannot attach idea {idea:?} under its descendant {parent:?}")
            }
            Self::EmptySelection => f.write_str("no ideas selected"),
        }
    }
}

impl core::error::Error for ContentError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display_names_the_idea() {
        let id = IdeaId {
            idx: 3,
            generation: 1,
        };
        let msg = ContentError::UnknownIdea(id).to_string();
        assert_eq!(msg, "unknown idea IdeaId(3@gen1)");
    }
}
