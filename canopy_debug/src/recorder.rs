// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`].
//!
//! Idea handles are stored as their raw index and generation; they can be
//! resolved only against the store that was being maintained.

use canopy_core::idea::IdeaId;
use canopy_core::trace::{
    OperationBeginEvent, OperationEndEvent, OperationKind, RecolorEvent, RecolorOutcome,
    SweepSummary, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_OPERATION_BEGIN: u8 = 1;
const TAG_OPERATION_END: u8 = 2;
const TAG_RECOLOR: u8 = 3;
const TAG_SWEEP_SUMMARY: u8 = 4;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_op(&mut self, op: OperationKind) {
        self.write_u8(match op {
            OperationKind::AddSubIdea => 0,
            OperationKind::InsertIntermediate => 1,
            OperationKind::ChangeParent => 2,
            OperationKind::ThemeChanged => 3,
        });
    }

    fn write_idea(&mut self, id: IdeaId) {
        self.write_u32(id.index());
        self.write_u32(id.generation());
    }

    fn write_outcome(&mut self, outcome: RecolorOutcome) {
        match outcome {
            RecolorOutcome::Painted { palette_index } => {
                self.write_u8(1);
                self.write_u32(palette_index);
            }
            RecolorOutcome::Cleared => {
                self.write_u8(0);
                self.write_u32(0);
            }
        }
    }
}

impl TraceSink for RecorderSink {
    fn on_operation_begin(&mut self, e: &OperationBeginEvent) {
        self.write_u8(TAG_OPERATION_BEGIN);
        self.write_u64(e.seq);
        self.write_op(e.op);
    }

    fn on_operation_end(&mut self, e: &OperationEndEvent) {
        self.write_u8(TAG_OPERATION_END);
        self.write_u64(e.seq);
        self.write_op(e.op);
        self.write_u32(e.touched);
    }

    fn on_recolor(&mut self, e: &RecolorEvent) {
        self.write_u8(TAG_RECOLOR);
        self.write_u64(e.seq);
        self.write_idea(e.idea);
        self.write_outcome(e.outcome);
    }

    fn on_sweep_summary(&mut self, s: &SweepSummary) {
        self.write_u8(TAG_SWEEP_SUMMARY);
        self.write_u64(s.seq);
        self.write_u32(s.roots);
        self.write_u32(s.painted);
        self.write_u32(s.cleared);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug)]
pub enum RecordedEvent {
    /// An [`OperationBeginEvent`].
    OperationBegin(OperationBeginEvent),
    /// An [`OperationEndEvent`].
    OperationEnd(OperationEndEvent),
    /// A [`RecolorEvent`].
    Recolor(RecolorEvent),
    /// A [`SweepSummary`].
    SweepSummary(SweepSummary),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
///
/// Iteration stops at the first unknown tag or truncated record.
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        let bytes = self.data.get(self.pos..self.pos + N)?.try_into().ok()?;
        self.pos += N;
        Some(bytes)
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.take::<1>().map(|[v]| v)
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.take().map(u32::from_le_bytes)
    }

    fn read_u64(&mut self) -> Option<u64> {
        self.take().map(u64::from_le_bytes)
    }

    fn read_op(&mut self) -> Option<OperationKind> {
        Some(match self.read_u8()? {
            0 => OperationKind::AddSubIdea,
            1 => OperationKind::InsertIntermediate,
            2 => OperationKind::ChangeParent,
            3 => OperationKind::ThemeChanged,
            _ => return None,
        })
    }

    fn read_idea(&mut self) -> Option<IdeaId> {
        let index = self.read_u32()?;
        let generation = self.read_u32()?;
        Some(IdeaId::from_raw_parts(index, generation))
    }

    fn read_outcome(&mut self) -> Option<RecolorOutcome> {
        let painted = self.read_u8()?;
        let palette_index = self.read_u32()?;
        Some(if painted != 0 {
            RecolorOutcome::Painted { palette_index }
        } else {
            RecolorOutcome::Cleared
        })
    }

    fn decode_operation_begin(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::OperationBegin(OperationBeginEvent {
            seq: self.read_u64()?,
            op: self.read_op()?,
        }))
    }

    fn decode_operation_end(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::OperationEnd(OperationEndEvent {
            seq: self.read_u64()?,
            op: self.read_op()?,
            touched: self.read_u32()?,
        }))
    }

    fn decode_recolor(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Recolor(RecolorEvent {
            seq: self.read_u64()?,
            idea: self.read_idea()?,
            outcome: self.read_outcome()?,
        }))
    }

    fn decode_sweep_summary(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::SweepSummary(SweepSummary {
            seq: self.read_u64()?,
            roots: self.read_u32()?,
            painted: self.read_u32()?,
            cleared: self.read_u32()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_OPERATION_BEGIN => self.decode_operation_begin(),
            TAG_OPERATION_END => self.decode_operation_end(),
            TAG_RECOLOR => self.decode_recolor(),
            TAG_SWEEP_SUMMARY => self.decode_sweep_summary(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
