// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON export for canopy diagnostics.
//!
//! This crate provides [`TraceSink`](canopy_core::trace::TraceSink)
//! implementations for development and post-mortem analysis, plus a forest
//! dump:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: compact binary recording with
//!   [`recorder::decode`] for playback.
//! - [`chrome::export`]: writes Chrome Trace Event Format JSON from recorded
//!   bytes.
//! - [`snapshot::forest_json`]: the nested idea forest as a JSON value.

pub mod chrome;
pub mod pretty;
pub mod recorder;
pub mod snapshot;
