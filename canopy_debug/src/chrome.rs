// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][spec] JSON to the given writer.
//!
//! Recordings carry no wall-clock time. Each event is placed one microsecond
//! after the previous one, so the viewer shows maintainer operations as
//! nested spans in the order they ran.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use canopy_core::trace::RecolorOutcome;

use crate::pretty::op_name;
use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for (ts, recorded) in decode(bytes).enumerate() {
        match recorded {
            RecordedEvent::OperationBegin(e) => {
                events.push(json!({
                    "ph": "B",
                    "name": op_name(e.op),
                    "cat": "Operation",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "args": {
                        "seq": e.seq,
                    }
                }));
            }
            RecordedEvent::OperationEnd(e) => {
                events.push(json!({
                    "ph": "E",
                    "name": op_name(e.op),
                    "cat": "Operation",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "args": {
                        "seq": e.seq,
                        "touched": e.touched,
                    }
                }));
            }
            RecordedEvent::Recolor(e) => {
                let (name, palette_index) = match e.outcome {
                    RecolorOutcome::Painted { palette_index } => ("Paint", Some(palette_index)),
                    RecolorOutcome::Cleared => ("Clear", None),
                };
                events.push(json!({
                    "ph": "i",
                    "name": name,
                    "cat": "Recolor",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "seq": e.seq,
                        "idea": e.idea.index(),
                        "generation": e.idea.generation(),
                        "palette_index": palette_index,
                    }
                }));
            }
            RecordedEvent::SweepSummary(s) => {
                events.push(json!({
                    "ph": "i",
                    "name": "SweepSummary",
                    "cat": "Summary",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "seq": s.seq,
                        "roots": s.roots,
                        "painted": s.painted,
                        "cleared": s.cleared,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use canopy_core::auto_color::AutoColorMaintainer;
    use canopy_core::idea::{IdeaStore, ParentRef};
    use canopy_core::theme::PaletteTheme;

    #[test]
    fn export_produces_valid_json() {
        let mut store = IdeaStore::new();
        let root = store.create_idea(ParentRef::Root, "root").unwrap();
        let theme = PaletteTheme::new(["red", "green"]);

        let mut rec = RecorderSink::new();
        let mut maintainer = AutoColorMaintainer::with_sink(&mut rec);
        maintainer
            .add_sub_idea(&mut store, Some(&theme), root.into(), None)
            .unwrap();
        drop(maintainer);

        let mut out = Vec::new();
        export(rec.as_bytes(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        // Should parse as a JSON array.
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 3);

        assert_eq!(parsed[0]["ph"], "B");
        assert_eq!(parsed[0]["name"], "add_sub_idea");

        assert_eq!(parsed[1]["ph"], "i");
        assert_eq!(parsed[1]["name"], "Paint");
        assert_eq!(parsed[1]["args"]["palette_index"], 0);
        assert_eq!(parsed[1]["ts"], 1);

        assert_eq!(parsed[2]["ph"], "E");
        assert_eq!(parsed[2]["args"]["touched"], 1);
    }

    #[test]
    fn cleared_recolor_has_null_palette_index() {
        let mut store = IdeaStore::new();
        let root = store.create_idea(ParentRef::Root, "root").unwrap();
        store.create_idea(root.into(), "child").unwrap();

        let mut rec = RecorderSink::new();
        AutoColorMaintainer::with_sink(&mut rec)
            .theme_changed(&mut store, None)
            .unwrap();

        let mut out = Vec::new();
        export(rec.as_bytes(), &mut out).unwrap();
        let parsed: Vec<Value> = serde_json::from_slice(&out).unwrap();
        let clear = parsed
            .iter()
            .find(|e| e["name"] == "Clear")
            .expect("a Clear event");
        assert_eq!(clear["args"]["palette_index"], Value::Null);
        assert!(parsed.iter().any(|e| e["name"] == "SweepSummary"));
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty());
    }
}
