// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme contract consumed by the auto-color maintainer.
//!
//! A theme answers two questions: whether connectors at a given depth are
//! colored automatically, and which colors are available for that purpose.
//! How a theme arrives at the first answer (node styles, connector styles,
//! inheritance) is the theme's own business and is not modelled here.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// An opaque color token taken from a theme palette (e.g. `"red"` or
/// `"#22AAE0"`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorToken(String);

impl ColorToken {
    /// Creates a token from any string-like value.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColorToken({:?})", self.0)
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for ColorToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// How far a connector sits from the top of its tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConnectorDepth {
    /// The connector between a root and one of its direct children.
    RootAdjacent,
    /// Any connector further down the tree.
    Nested,
}

/// The theme collaborator.
pub trait Theme {
    /// Whether connectors at `depth` take their color from the palette.
    fn auto_color_enabled(&self, depth: ConnectorDepth) -> bool;

    /// The ordered colors available for automatic assignment (may be empty).
    fn palette(&self) -> &[ColorToken];
}

/// A theme defined directly by its palette.
///
/// [`PaletteTheme::new`] enables auto-coloring for root-adjacent connectors;
/// [`PaletteTheme::plain`] has no palette and colors nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaletteTheme {
    palette: Vec<ColorToken>,
    root_adjacent: bool,
    nested: bool,
}

impl PaletteTheme {
    /// Creates a theme that auto-colors root-adjacent connectors from
    /// `palette`.
    #[must_use]
    pub fn new<I, T>(palette: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ColorToken>,
    {
        Self {
            palette: palette.into_iter().map(Into::into).collect(),
            root_adjacent: true,
            nested: false,
        }
    }

    /// Creates a theme with no auto colors.
    #[must_use]
    pub fn plain() -> Self {
        Self::default()
    }

    /// Enables or disables auto-coloring at `depth`.
    #[must_use]
    pub fn with_depth(mut self, depth: ConnectorDepth, enabled: bool) -> Self {
        match depth {
            ConnectorDepth::RootAdjacent => self.root_adjacent = enabled,
            ConnectorDepth::Nested => self.nested = enabled,
        }
        self
    }
}

impl Theme for PaletteTheme {
    fn auto_color_enabled(&self, depth: ConnectorDepth) -> bool {
        match depth {
            ConnectorDepth::RootAdjacent => self.root_adjacent,
            ConnectorDepth::Nested => self.nested,
        }
    }

    fn palette(&self) -> &[ColorToken] {
        &self.palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_enables_root_adjacent_only() {
        let theme = PaletteTheme::new(["red", "green"]);
        assert!(theme.auto_color_enabled(ConnectorDepth::RootAdjacent));
        assert!(!theme.auto_color_enabled(ConnectorDepth::Nested));
        assert_eq!(theme.palette().len(), 2);
        assert_eq!(theme.palette()[1].as_str(), "green");
    }

    #[test]
    fn plain_has_nothing() {
        let theme = PaletteTheme::plain();
        assert!(!theme.auto_color_enabled(ConnectorDepth::RootAdjacent));
        assert!(theme.palette().is_empty());
    }

    #[test]
    fn with_depth_toggles() {
        let theme = PaletteTheme::new(["red"])
            .with_depth(ConnectorDepth::RootAdjacent, false)
            .with_depth(ConnectorDepth::Nested, true);
        assert!(!theme.auto_color_enabled(ConnectorDepth::RootAdjacent));
        assert!(theme.auto_color_enabled(ConnectorDepth::Nested));
    }
}
