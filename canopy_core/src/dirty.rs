// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! The idea store uses multi-channel dirty tracking (via [`understory_dirty`])
//! to record which ideas changed since the last drain. Each channel
//! represents an independent category of change.
//!
//! All channels are local-only: marking an idea never marks its descendants,
//! since attributes and titles are per-idea properties and a topology change
//! is reported against the parent whose child sequence changed.
//!
//! # Consumption
//!
//! Callers never need to query dirty state directly. Each
//! [`IdeaStore::take_changes`](crate::idea::IdeaStore::take_changes) call
//! drains all channels and surfaces the results as
//! [`ContentChanges`](crate::idea::ContentChanges).

use understory_dirty::Channel;

/// An attribute entry was written or removed.
pub const ATTRIBUTES: Channel = Channel::new(0);

/// The idea's title changed.
pub const TITLE: Channel = Channel::new(1);

/// The child sequence changed, or the idea was created or removed.
pub const TOPOLOGY: Channel = Channel::new(2);
