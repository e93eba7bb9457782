// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme-driven connector auto-coloring.
//!
//! Ideas whose parent is a root get their connector colored from the active
//! theme's palette, by position: the first child of a root takes
//! `palette[0]`, the second `palette[1]`, wrapping around when the palette
//! runs out. The color lives in a single reserved attribute,
//! [`PARENT_CONNECTOR`]; no other attribute is ever read or written here.
//!
//! An idea carries that attribute exactly when
//!
//! 1. its parent is a root,
//! 2. a theme is active and enables auto-coloring for
//!    [`ConnectorDepth::RootAdjacent`], and
//! 3. the theme's palette is non-empty.
//!
//! # Maintenance
//!
//! [`AutoColorMaintainer`] wraps the structural edits that can change whether
//! (1) holds. Each entry point delegates the edit to the [`IdeaContent`] and
//! then reruns the recolor routine over the bounded set of ideas whose root
//! adjacency may have changed:
//!
//! | Entry point                     | Ideas recolored                                        |
//! |---------------------------------|--------------------------------------------------------|
//! | [`add_sub_idea`]                | the new idea                                           |
//! | [`insert_intermediate_multiple`]| the grouping idea, the listed ideas and their children |
//! | [`change_parent`]               | the moved idea and its direct children                 |
//! | [`theme_changed`]               | every direct child of every root                       |
//!
//! Only [`theme_changed`] walks the whole forest, and even then it stops at
//! depth one.
//!
//! Siblings that shift position because an idea left their parent keep their
//! old color until the next [`theme_changed`] sweep.
//!
//! [`add_sub_idea`]: AutoColorMaintainer::add_sub_idea
//! [`insert_intermediate_multiple`]: AutoColorMaintainer::insert_intermediate_multiple
//! [`change_parent`]: AutoColorMaintainer::change_parent
//! [`theme_changed`]: AutoColorMaintainer::theme_changed

use alloc::string::String;

use crate::error::ContentError;
use crate::idea::{AttrMap, AttrValue, ConnectorColor, IdeaContent, IdeaId, PARENT_CONNECTOR, ParentRef};
use crate::theme::{ColorToken, ConnectorDepth, Theme};
use crate::trace::{
    OperationBeginEvent, OperationEndEvent, OperationKind, RecolorEvent, RecolorOutcome,
    SweepSummary, TraceSink, Tracer,
};

/// The attribute change the recolor routine applies to one idea.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectorDelta {
    /// Write [`PARENT_CONNECTOR`] with this color.
    Paint {
        /// Position of the color in the theme palette.
        palette_index: usize,
        /// The value to store.
        connector: ConnectorColor,
    },
    /// Remove [`PARENT_CONNECTOR`] if present.
    Clear,
}

impl ConnectorDelta {
    fn outcome(&self) -> RecolorOutcome {
        match self {
            Self::Paint { palette_index, .. } => RecolorOutcome::Painted {
                palette_index: u32::try_from(*palette_index).unwrap_or(u32::MAX),
            },
            Self::Clear => RecolorOutcome::Cleared,
        }
    }
}

/// Returns the palette entry for a root-adjacent idea at `index`.
///
/// `None` when there is no theme, the theme does not auto-color root-adjacent
/// connectors, or its palette is empty.
#[must_use]
pub fn palette_color(theme: Option<&dyn Theme>, index: usize) -> Option<(usize, &ColorToken)> {
    let theme = theme?;
    if !theme.auto_color_enabled(ConnectorDepth::RootAdjacent) {
        return None;
    }
    let palette = theme.palette();
    if palette.is_empty() {
        return None;
    }
    let palette_index = index % palette.len();
    Some((palette_index, &palette[palette_index]))
}

/// Computes the connector change for `idea` without touching the content.
pub fn derive_delta<C: IdeaContent + ?Sized>(
    content: &C,
    theme: Option<&dyn Theme>,
    idea: IdeaId,
) -> Result<ConnectorDelta, ContentError> {
    let Some(parent) = content.parent_of(idea)? else {
        return Ok(ConnectorDelta::Clear);
    };
    if content.parent_of(parent)?.is_some() {
        return Ok(ConnectorDelta::Clear);
    }
    let Some(index) = content.position_of(idea)? else {
        return Ok(ConnectorDelta::Clear);
    };
    Ok(match palette_color(theme, index) {
        Some((palette_index, color)) => ConnectorDelta::Paint {
            palette_index,
            connector: ConnectorColor::auto(color.clone()),
        },
        None => ConnectorDelta::Clear,
    })
}

/// Title and attributes for the grouping idea created by
/// [`AutoColorMaintainer::insert_intermediate_multiple`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntermediateIdea {
    /// Title of the grouping idea (empty by default).
    pub title: String,
    /// Attributes written to the grouping idea before it is recolored.
    pub attributes: AttrMap,
}

impl IntermediateIdea {
    /// A grouping idea with the given title and no attributes.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            attributes: AttrMap::new(),
        }
    }

    /// Adds one attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: AttrValue) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}

/// Keeps [`PARENT_CONNECTOR`] consistent across structural edits and theme
/// swaps.
///
/// All entry points are synchronous and single-pass: the structural edit and
/// every recolor complete before the call returns. A content error aborts the
/// call and is returned unchanged.
#[derive(Debug)]
pub struct AutoColorMaintainer<'a> {
    tracer: Tracer<'a>,
    seq: u64,
}

impl Default for AutoColorMaintainer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> AutoColorMaintainer<'a> {
    /// Creates a maintainer that traces nothing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tracer: Tracer::none(),
            seq: 0,
        }
    }

    /// Creates a maintainer that reports to `sink` (requires the `trace`
    /// feature to have any effect).
    #[must_use]
    pub fn with_sink(sink: &'a mut dyn TraceSink) -> Self {
        Self {
            tracer: Tracer::new(sink),
            seq: 0,
        }
    }

    /// Recomputes the connector color of one idea.
    ///
    /// Performs exactly one attribute write or removal. A missing theme means
    /// "no automatic coloring".
    pub fn recolor<C: IdeaContent + ?Sized>(
        &mut self,
        content: &mut C,
        theme: Option<&dyn Theme>,
        idea: IdeaId,
    ) -> Result<ConnectorDelta, ContentError> {
        let delta = derive_delta(content, theme, idea)?;
        match &delta {
            ConnectorDelta::Paint { connector, .. } => {
                content.set_attribute(idea, PARENT_CONNECTOR, connector.clone().into())?;
            }
            ConnectorDelta::Clear => {
                content.remove_attribute(idea, PARENT_CONNECTOR)?;
            }
        }
        self.tracer.recolor(&RecolorEvent {
            seq: self.seq,
            idea,
            outcome: delta.outcome(),
        });
        Ok(delta)
    }

    /// Adds a new idea under `parent` and colors it.
    ///
    /// New children are appended, so no sibling changes position and only the
    /// new idea is recolored. A new root ([`ParentRef::Root`]) is never
    /// colored.
    pub fn add_sub_idea<C: IdeaContent + ?Sized>(
        &mut self,
        content: &mut C,
        theme: Option<&dyn Theme>,
        parent: ParentRef,
        title: Option<&str>,
    ) -> Result<IdeaId, ContentError> {
        let op = OperationKind::AddSubIdea;
        self.begin(op);
        let id = content.create_idea(parent, title.unwrap_or_default())?;
        self.recolor(content, theme, id)?;
        self.end(op, 1);
        Ok(id)
    }

    /// Inserts a new grouping idea above `ideas` and recolors everything that
    /// moved.
    ///
    /// The grouping idea takes the slot of the first listed idea under that
    /// idea's parent (and therefore its palette position). Each listed idea is
    /// then moved, in order, to the end of the grouping idea's children. The
    /// listed ideas need not be siblings.
    ///
    /// The grouping idea, every listed idea and the direct children of every
    /// listed idea are recolored: a listed root moves under the grouping idea,
    /// so its children stop being root-adjacent.
    ///
    /// Fails before changing anything if `ideas` is empty, names an unknown
    /// idea, or contains an ancestor of the first listed idea.
    pub fn insert_intermediate_multiple<C: IdeaContent + ?Sized>(
        &mut self,
        content: &mut C,
        theme: Option<&dyn Theme>,
        ideas: &[IdeaId],
        seed: IntermediateIdea,
    ) -> Result<IdeaId, ContentError> {
        let Some(&first) = ideas.first() else {
            return Err(ContentError::EmptySelection);
        };
        if let Some(&unknown) = ideas.iter().find(|&&id| !content.contains(id)) {
            return Err(ContentError::UnknownIdea(unknown));
        }
        let mut ancestor = content.parent_of(first)?;
        while let Some(a) = ancestor {
            if ideas.contains(&a) {
                return Err(ContentError::Cycle {
                    idea: a,
                    parent: first,
                });
            }
            ancestor = content.parent_of(a)?;
        }

        let op = OperationKind::InsertIntermediate;
        self.begin(op);
        let group = content.create_idea_before(first, &seed.title)?;
        for (key, value) in seed.attributes {
            content.set_attribute(group, &key, value)?;
        }
        for &id in ideas {
            content.reparent(id, ParentRef::Idea(group))?;
        }

        self.recolor(content, theme, group)?;
        for &id in ideas {
            self.recolor(content, theme, id)?;
        }
        let mut touched = ideas.len() + 1;
        for &id in ideas {
            let children = content.child_ids(id)?;
            for &child in &children {
                self.recolor(content, theme, child)?;
            }
            touched += children.len();
        }
        self.end(op, touched);
        Ok(group)
    }

    /// Moves `idea` under `new_parent` and recolors it and its direct
    /// children.
    ///
    /// The children matter because moving an idea to or from the top of a
    /// tree changes whether they are root-adjacent.
    pub fn change_parent<C: IdeaContent + ?Sized>(
        &mut self,
        content: &mut C,
        theme: Option<&dyn Theme>,
        idea: IdeaId,
        new_parent: ParentRef,
    ) -> Result<(), ContentError> {
        let op = OperationKind::ChangeParent;
        self.begin(op);
        content.reparent(idea, new_parent)?;
        self.recolor(content, theme, idea)?;
        let children = content.child_ids(idea)?;
        for &child in &children {
            self.recolor(content, theme, child)?;
        }
        self.end(op, children.len() + 1);
        Ok(())
    }

    /// Recolors every root-adjacent idea in the forest for a new theme.
    ///
    /// `None` or a theme without a palette clears every auto color. Running
    /// the sweep twice with the same theme leaves the same state as running
    /// it once.
    pub fn theme_changed<C: IdeaContent + ?Sized>(
        &mut self,
        content: &mut C,
        theme: Option<&dyn Theme>,
    ) -> Result<SweepSummary, ContentError> {
        let op = OperationKind::ThemeChanged;
        self.begin(op);
        let mut summary = SweepSummary {
            seq: self.seq,
            ..SweepSummary::default()
        };
        for root in content.root_ids() {
            summary.roots += 1;
            for child in content.child_ids(root)? {
                let delta = self.recolor(content, theme, child)?;
                summary.record(delta.outcome());
            }
        }
        self.tracer.sweep_summary(&summary);
        self.end(op, summary.touched() as usize);
        Ok(summary)
    }

    fn begin(&mut self, op: OperationKind) {
        self.seq += 1;
        self.tracer
            .operation_begin(&OperationBeginEvent { seq: self.seq, op });
    }

    fn end(&mut self, op: OperationKind, touched: usize) {
        self.tracer.operation_end(&OperationEndEvent {
            seq: self.seq,
            op,
            touched: u32::try_from(touched).unwrap_or(u32::MAX),
        });
    }
}
