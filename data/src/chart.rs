use enum_map::Enum;
use serde::{Deserialize, Serialize};

/// The closed set of aggregate-glyph families. Highlight geometry is
/// dispatched over this tag, not by subclassing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum, Serialize, Deserialize)]
pub enum GlyphKind {
    Bar,
    StackedBar,
    Arc,
    Area,
    Line,
    Box,
}

/// How a circular glyph represents the selected proportion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ArcMode {
    /// Outer radius grows from a configurable inner radius so that
    /// highlighted *area* is proportional to the selected fraction.
    /// `inner_ratio` is 0 for pies, greater for doughnuts.
    RadiusOrigin { inner_ratio: f32 },
    /// Each slice is split into a selected sub-sector starting at the
    /// slice's leading edge, followed by the unselected remainder.
    AngleOrigin,
}

/// The three line-plot highlighting styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    /// Selected sub-line plotted at its own values.
    Separate,
    /// Contiguous runs of selected vertices become thick overlay
    /// segments on the total line.
    Discrete,
    /// Every vertex contributes a sub-segment shrunk toward it by its
    /// selected fraction.
    Continuous,
}

/// Response-axis orientation of a rectangular glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Per-glyph display settings, kept in an `EnumMap<GlyphKind, _>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphStyle {
    pub visible: bool,
    pub highlight_opacity: f32,
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self {
            visible: true,
            highlight_opacity: 1.0,
        }
    }
}
