// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Idea attribute values.

use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::theme::ColorToken;

/// Attribute key reserved for the theme-derived connector color.
///
/// Its presence on an idea is the only evidence that the idea is currently
/// auto-colored.
pub const PARENT_CONNECTOR: &str = "parentConnector";

/// An idea's attribute container, keyed by attribute name.
pub type AttrMap = BTreeMap<String, AttrValue>;

/// A single attribute value.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// Free text.
    Text(String),
    /// A numeric value.
    Number(f64),
    /// A boolean flag.
    Flag(bool),
    /// A connector color record.
    Connector(ConnectorColor),
}

impl From<&str> for AttrValue {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<String> for AttrValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl From<ConnectorColor> for AttrValue {
    fn from(c: ConnectorColor) -> Self {
        Self::Connector(c)
    }
}

/// The color of the connector between an idea and its parent.
///
/// `theme_auto_color` records which palette entry produced `color`; for an
/// automatically colored connector both fields carry the same token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConnectorColor {
    /// Color used to draw the connector.
    pub color: ColorToken,
    /// Palette color the theme assigned.
    pub theme_auto_color: ColorToken,
}

impl ConnectorColor {
    /// A connector colored automatically from a theme palette.
    #[must_use]
    pub fn auto(color: ColorToken) -> Self {
        Self {
            theme_auto_color: color.clone(),
            color,
        }
    }
}
