// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for auto-color maintenance.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! [`AutoColorMaintainer`](crate::auto_color::AutoColorMaintainer) calls as it
//! works. All method bodies default to no-ops, so implementing only the events
//! you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` enables the `Tracer` method bodies (one branch per call).

use crate::idea::IdeaId;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which maintainer entry point is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// A child idea is being added.
    AddSubIdea,
    /// A grouping idea is being inserted above existing ideas.
    InsertIntermediate,
    /// An idea is being moved to a new parent.
    ChangeParent,
    /// The whole forest is being recolored for a new theme.
    ThemeChanged,
}

/// What the recolor routine did to one idea.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecolorOutcome {
    /// The connector color was written from the palette entry at
    /// `palette_index`.
    Painted {
        /// Index into the theme palette.
        palette_index: u32,
    },
    /// The connector color entry was removed (or was already absent).
    Cleared,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when an entry point starts.
#[derive(Clone, Copy, Debug)]
pub struct OperationBeginEvent {
    /// Monotonic operation counter.
    pub seq: u64,
    /// Which entry point.
    pub op: OperationKind,
}

/// Emitted when an entry point finishes successfully.
#[derive(Clone, Copy, Debug)]
pub struct OperationEndEvent {
    /// Operation counter, matching the begin event.
    pub seq: u64,
    /// Which entry point.
    pub op: OperationKind,
    /// Number of ideas the recolor routine visited.
    pub touched: u32,
}

/// Emitted once per recolor routine invocation.
#[derive(Clone, Copy, Debug)]
pub struct RecolorEvent {
    /// Operation counter of the enclosing entry point.
    pub seq: u64,
    /// The recolored idea.
    pub idea: IdeaId,
    /// What happened.
    pub outcome: RecolorOutcome,
}

/// Totals for one forest-wide theme sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Operation counter of the sweep.
    pub seq: u64,
    /// Number of roots walked.
    pub roots: u32,
    /// Root-adjacent ideas that received a color.
    pub painted: u32,
    /// Root-adjacent ideas left without a color.
    pub cleared: u32,
}

impl SweepSummary {
    /// Total number of ideas the sweep visited.
    #[must_use]
    pub const fn touched(&self) -> u32 {
        self.painted + self.cleared
    }

    /// Adds one recolor outcome to the totals.
    pub fn record(&mut self, outcome: RecolorOutcome) {
        match outcome {
            RecolorOutcome::Painted { .. } => self.painted += 1,
            RecolorOutcome::Cleared => self.cleared += 1,
        }
    }
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the auto-color maintainer.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when an entry point starts.
    fn on_operation_begin(&mut self, e: &OperationBeginEvent) {
        _ = e;
    }

    /// Called when an entry point finishes successfully.
    fn on_operation_end(&mut self, e: &OperationEndEvent) {
        _ = e;
    }

    /// Called after each recolor.
    fn on_recolor(&mut self, e: &RecolorEvent) {
        _ = e;
    }

    /// Called with the totals of a theme sweep.
    fn on_sweep_summary(&mut self, s: &SweepSummary) {
        _ = s;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits an [`OperationBeginEvent`].
    #[inline]
    pub fn operation_begin(&mut self, e: &OperationBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_operation_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`OperationEndEvent`].
    #[inline]
    pub fn operation_end(&mut self, e: &OperationEndEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_operation_end(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RecolorEvent`].
    #[inline]
    pub fn recolor(&mut self, e: &RecolorEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_recolor(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SweepSummary`].
    #[inline]
    pub fn sweep_summary(&mut self, s: &SweepSummary) {
        #[cfg(feature = "trace")]
        if let Some(sink) = &mut self.sink {
            sink.on_sweep_summary(s);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = s;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
