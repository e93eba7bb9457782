// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Idea forest data model.
//!
//! An *idea* is a node in an outline tree. Each idea has:
//!
//! - An identity ([`IdeaId`]), a generational handle that becomes stale when
//!   the idea is removed, so a dangling handle fails cleanly instead of
//!   silently addressing a recycled slot.
//! - Topology: parent, first-child, and sibling links forming an ordered
//!   tree. An idea without a parent is a *root*; the store holds a forest of
//!   independent roots.
//! - A title.
//! - An attribute container ([`AttrMap`]) created lazily on first write and
//!   dropped again when its last entry is removed.
//!
//! Ideas are stored in struct-of-arrays layout with index-based handles.
//!
//! [`IdeaContent`] is the narrow contract the
//! [auto-color maintainer](crate::auto_color) needs; [`IdeaStore`]
//! implements it.
//!
//! # Dirty tracking
//!
//! Mutations automatically mark a dirty channel (see [`dirty`](crate::dirty)):
//! attribute writes mark **ATTRIBUTES**, title edits mark **TITLE**, and
//! structural edits mark **TOPOLOGY** on the parent whose child sequence
//! changed. [`IdeaStore::take_changes`] drains them into a
//! [`ContentChanges`] report.

mod attr;
mod changes;
mod content;
mod id;
mod store;
mod traverse;

pub use attr::{AttrMap, AttrValue, ConnectorColor, PARENT_CONNECTOR};
pub use changes::ContentChanges;
pub use content::IdeaContent;
pub use id::{INVALID, IdeaId, ParentRef};
pub use store::IdeaStore;
pub use traverse::Children;
