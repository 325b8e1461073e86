//! # Showcase Screens
//!
//! The destination set used by the showcase app and the `navstack` CLI.

use std::fmt;
use std::str::FromStr;

use crate::errors::NavError;
use crate::identity::{Destination, DestinationKind};

/// Screen kinds, one per [`Screen`] variant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    /// Bottom of the stack
    Root,
    /// Plain demo screen A
    A,
    /// Plain demo screen B
    B,
    /// Plain demo screen C
    C,
    /// Landing screen
    Home,
    /// Product catalogue
    ProductList,
    /// A single product
    ProductDetail,
    /// Settings, optionally opened on a section
    Settings,
}

impl ScreenKind {
    /// All kinds in declaration order
    pub const ALL: [ScreenKind; 8] = [
        ScreenKind::Root,
        ScreenKind::A,
        ScreenKind::B,
        ScreenKind::C,
        ScreenKind::Home,
        ScreenKind::ProductList,
        ScreenKind::ProductDetail,
        ScreenKind::Settings,
    ];

    /// Get the display name for the kind
    pub fn name(&self) -> &'static str {
        match self {
            ScreenKind::Root => "Root",
            ScreenKind::A => "A",
            ScreenKind::B => "B",
            ScreenKind::C => "C",
            ScreenKind::Home => "Home",
            ScreenKind::ProductList => "ProductList",
            ScreenKind::ProductDetail => "ProductDetail",
            ScreenKind::Settings => "Settings",
        }
    }
}

impl DestinationKind for ScreenKind {
    const ROOT: Self = ScreenKind::Root;
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScreenKind {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| NavError::unknown_kind(wanted))
    }
}

/// Showcase destination
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Bottom of the stack
    Root,
    /// Demo screen A
    A,
    /// Demo screen B
    B,
    /// Demo screen C
    C,
    /// Landing screen
    Home,
    /// Product catalogue
    ProductList,
    /// A single product
    ProductDetail {
        /// Product being shown
        product_id: u64,
    },
    /// Settings
    Settings {
        /// Section to open, if any
        section: Option<String>,
    },
}

impl Screen {
    /// Build a screen of the given kind with default payload.
    pub fn from_kind(kind: ScreenKind) -> Self {
        match kind {
            ScreenKind::Root => Screen::Root,
            ScreenKind::A => Screen::A,
            ScreenKind::B => Screen::B,
            ScreenKind::C => Screen::C,
            ScreenKind::Home => Screen::Home,
            ScreenKind::ProductList => Screen::ProductList,
            ScreenKind::ProductDetail => Screen::ProductDetail { product_id: 0 },
            ScreenKind::Settings => Screen::Settings { section: None },
        }
    }

    /// Shorthand for a product detail screen
    pub fn product(product_id: u64) -> Self {
        Screen::ProductDetail { product_id }
    }
}

impl Destination for Screen {
    type Kind = ScreenKind;

    fn kind(&self) -> ScreenKind {
        match self {
            Screen::Root => ScreenKind::Root,
            Screen::A => ScreenKind::A,
            Screen::B => ScreenKind::B,
            Screen::C => ScreenKind::C,
            Screen::Home => ScreenKind::Home,
            Screen::ProductList => ScreenKind::ProductList,
            Screen::ProductDetail { .. } => ScreenKind::ProductDetail,
            Screen::Settings { .. } => ScreenKind::Settings,
        }
    }

    fn root() -> Self {
        Screen::Root
    }
}

impl From<ScreenKind> for Screen {
    fn from(kind: ScreenKind) -> Self {
        Screen::from_kind(kind)
    }
}
