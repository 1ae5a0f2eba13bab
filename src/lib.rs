//! Proportional highlighting engine for linked chart glyphs.
//!
//! Given a row set, a selection and a glyph family, the engine computes
//! the sub-region of each glyph that represents the selected rows: a
//! partial bar, a shortened arc, a sub-polyline, a box-plot segment.
//! Scatter cells get brush selection over cached pixel coordinates and
//! a compositing cache for dense point rasters.
//!
//! All state lives in a [`MatrixSession`]; the geometry calculators
//! themselves are pure functions under [`glyph`].

pub mod brush;
pub mod coords;
pub mod glyph;
pub mod interaction;
pub mod raster;
pub mod scale;
pub mod session;

pub use coords::ScaledCoordinateCache;
pub use glyph::{GlyphHighlight, GlyphInput, GlyphSpec};
pub use interaction::{PointerCoalescer, ScrollbarState};
pub use raster::{CompositingCache, Raster};
pub use scale::Scale;
pub use session::MatrixSession;
