// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Idea forest and theme-driven connector auto-coloring.
//!
//! `canopy_core` keeps the connector color of mind-map ideas in step with the
//! active theme. Ideas directly under a root take successive colors from the
//! theme palette; every other idea stays uncolored. It is `no_std` compatible
//! (with `alloc`) and stores the forest in struct-of-arrays layout with
//! generational index handles.
//!
//! # Architecture
//!
//! Each structural edit goes through the maintainer, which delegates it to the
//! content and then recolors the ideas whose parent may have changed:
//!
//! ```text
//!   caller ──► AutoColorMaintainer::{add_sub_idea, insert_intermediate_multiple,
//!                  │                 change_parent, theme_changed}
//!                  │
//!                  ├──► IdeaContent (create / reparent)
//!                  │
//!                  ▼
//!              recolor ──► Theme::palette() ──► set/remove PARENT_CONNECTOR
//!                                                      │
//!                 ┌────────────────────────────────────┘
//!                 ▼
//!   IdeaStore::take_changes() ──► ContentChanges ──► renderer
//! ```
//!
//! **[`idea`]**: Struct-of-arrays idea forest with generational handles,
//! ordered children and lazily created attribute containers. The
//! [`IdeaContent`](idea::IdeaContent) trait is the seam other document models
//! implement.
//!
//! **[`theme`]**: The [`Theme`](theme::Theme) trait and the
//! [`PaletteTheme`](theme::PaletteTheme) value type.
//!
//! **[`auto_color`]**: [`AutoColorMaintainer`](auto_color::AutoColorMaintainer)
//! and the pure color derivation it is built on.
//!
//! **[`dirty`]**: Change channels via `understory_dirty`. Store mutations mark
//! them automatically.
//!
//! **[`error`]**: [`ContentError`](error::ContentError), returned by content
//! operations and passed through by the maintainer.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! maintainer instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Example
//!
//! ```
//! use canopy_core::auto_color::AutoColorMaintainer;
//! use canopy_core::idea::{IdeaStore, ParentRef};
//! use canopy_core::theme::PaletteTheme;
//!
//! let theme = PaletteTheme::new(["red", "green", "blue"]);
//! let mut store = IdeaStore::new();
//! let mut maintainer = AutoColorMaintainer::new();
//!
//! let root = store.create_idea(ParentRef::Root, "plan").unwrap();
//! let first = maintainer
//!     .add_sub_idea(&mut store, Some(&theme), root.into(), Some("design"))
//!     .unwrap();
//! let second = maintainer
//!     .add_sub_idea(&mut store, Some(&theme), root.into(), Some("build"))
//!     .unwrap();
//!
//! let color = |id| match store.attribute(id, canopy_core::idea::PARENT_CONNECTOR) {
//!     Ok(Some(canopy_core::idea::AttrValue::Connector(c))) => Some(c.color.as_str()),
//!     _ => None,
//! };
//! assert_eq!(color(first), Some("red"));
//! assert_eq!(color(second), Some("green"));
//! ```
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod auto_color;
pub mod dirty;
pub mod error;
pub mod idea;
pub mod theme;
pub mod trace;
