// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use canopy_core::trace::{
    OperationBeginEvent, OperationEndEvent, OperationKind, RecolorEvent, RecolorOutcome,
    SweepSummary, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the destination.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

pub(crate) fn op_name(op: OperationKind) -> &'static str {
    match op {
        OperationKind::AddSubIdea => "add_sub_idea",
        OperationKind::InsertIntermediate => "insert_intermediate",
        OperationKind::ChangeParent => "change_parent",
        OperationKind::ThemeChanged => "theme_changed",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_operation_begin(&mut self, e: &OperationBeginEvent) {
        let _ = writeln!(self.writer, "[op:begin] seq={} {}", e.seq, op_name(e.op));
    }

    fn on_operation_end(&mut self, e: &OperationEndEvent) {
        let _ = writeln!(
            self.writer,
            "[op:end] seq={} {} touched={}",
            e.seq,
            op_name(e.op),
            e.touched,
        );
    }

    fn on_recolor(&mut self, e: &RecolorEvent) {
        let _ = match e.outcome {
            RecolorOutcome::Painted { palette_index } => writeln!(
                self.writer,
                "[recolor] seq={} idea={:?} painted={palette_index}",
                e.seq, e.idea,
            ),
            RecolorOutcome::Cleared => writeln!(
                self.writer,
                "[recolor] seq={} idea={:?} cleared",
                e.seq, e.idea,
            ),
        };
    }

    fn on_sweep_summary(&mut self, s: &SweepSummary) {
        let _ = writeln!(
            self.writer,
            "[sweep] seq={} roots={} painted={} cleared={}",
            s.seq, s.roots, s.painted, s.cleared,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_core::auto_color::AutoColorMaintainer;
    use canopy_core::idea::{IdeaStore, ParentRef};
    use canopy_core::theme::PaletteTheme;

    #[test]
    fn pretty_print_recolor() {
        let mut store = IdeaStore::new();
        let root = store.create_idea(ParentRef::Root, "root").unwrap();
        let theme = PaletteTheme::new(["red"]);

        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        let mut maintainer = AutoColorMaintainer::with_sink(&mut sink);
        maintainer
            .add_sub_idea(&mut store, Some(&theme), root.into(), None)
            .unwrap();
        drop(maintainer);

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(
            lines,
            [
                "[op:begin] seq=1 add_sub_idea",
                "[recolor] seq=1 idea=IdeaId(1@gen0) painted=0",
                "[op:end] seq=1 add_sub_idea touched=1",
            ]
        );
    }

    #[test]
    fn pretty_print_sweep() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_sweep_summary(&SweepSummary {
            seq: 4,
            roots: 2,
            painted: 3,
            cleared: 1,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "[sweep] seq=4 roots=2 painted=3 cleared=1\n");
    }
}
