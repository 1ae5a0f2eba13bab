pub mod arc;
pub mod area;
pub mod bar;
pub mod box_plot;
pub mod line;

pub use arc::ArcHighlight;
pub use area::{PositionalHighlight, Vertex};
pub use bar::{RectHighlight, StackedRectHighlight};
pub use box_plot::{BoxHighlight, BoxSelection, Outlier, Span};
pub use line::SegmentHighlight;

use data::CategoryAggregate;
use data::chart::{ArcMode, Axis, GlyphKind, LineStyle};

/// Shape-tagged highlight geometry, one variant per glyph family.
#[derive(Debug, Clone, PartialEq)]
pub enum GlyphHighlight {
    Rect(RectHighlight),
    StackedRect(StackedRectHighlight),
    Arc(ArcHighlight),
    Positional(PositionalHighlight),
    Segments(SegmentHighlight),
    Box(BoxHighlight),
}

/// A fully specified glyph: the family tag plus its per-family style.
///
/// This is the closed dispatch point for highlight geometry; adding a
/// shape means adding a variant here and a calculator module, nothing
/// else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlyphSpec {
    Bar { axis: Axis },
    StackedBar { axis: Axis },
    Arc { mode: ArcMode, outer_radius: f32 },
    Area,
    Line(LineStyle),
    Box,
}

/// Everything a calculator may need: per-category aggregates for the
/// aggregate glyphs, raw values plus a selection for the box glyph.
#[derive(Debug, Clone, Copy)]
pub struct GlyphInput<'a> {
    pub aggregates: &'a [CategoryAggregate],
    pub values: &'a [f32],
    pub selection: BoxSelection<'a>,
}

impl GlyphSpec {
    pub fn kind(&self) -> GlyphKind {
        match self {
            GlyphSpec::Bar { .. } => GlyphKind::Bar,
            GlyphSpec::StackedBar { .. } => GlyphKind::StackedBar,
            GlyphSpec::Arc { .. } => GlyphKind::Arc,
            GlyphSpec::Area => GlyphKind::Area,
            GlyphSpec::Line(_) => GlyphKind::Line,
            GlyphSpec::Box => GlyphKind::Box,
        }
    }

    /// Computes the highlight geometry for this glyph.
    ///
    /// Degenerate inputs (zero sums, empty aggregates, single-point
    /// distributions) produce zero-extent or empty geometry, never an
    /// error.
    pub fn highlight(&self, input: &GlyphInput<'_>) -> Vec<GlyphHighlight> {
        match *self {
            GlyphSpec::Bar { axis } => bar::simple(input.aggregates, axis)
                .into_iter()
                .map(GlyphHighlight::Rect)
                .collect(),
            GlyphSpec::StackedBar { .. } => bar::stacked(input.aggregates)
                .into_iter()
                .map(GlyphHighlight::StackedRect)
                .collect(),
            GlyphSpec::Arc { mode, outer_radius } => match mode {
                ArcMode::RadiusOrigin { inner_ratio } => {
                    arc::radius_origin(input.aggregates, outer_radius, inner_ratio)
                }
                ArcMode::AngleOrigin => arc::angle_origin(input.aggregates, outer_radius),
            }
            .into_iter()
            .map(GlyphHighlight::Arc)
            .collect(),
            GlyphSpec::Area => vec![GlyphHighlight::Positional(area::highlight(
                input.aggregates,
            ))],
            GlyphSpec::Line(style) => {
                vec![GlyphHighlight::Segments(line::highlight(
                    input.aggregates,
                    style,
                ))]
            }
            GlyphSpec::Box => box_plot::highlight(input.values, input.selection)
                .map(GlyphHighlight::Box)
                .into_iter()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregates() -> Vec<CategoryAggregate> {
        vec![
            CategoryAggregate {
                category: "A".into(),
                sum: 10.0,
                selected_sum: 3.0,
            },
            CategoryAggregate {
                category: "B".into(),
                sum: 5.0,
                selected_sum: 0.0,
            },
        ]
    }

    #[test]
    fn every_spec_maps_to_its_kind() {
        let specs = [
            GlyphSpec::Bar {
                axis: Axis::Vertical,
            },
            GlyphSpec::StackedBar {
                axis: Axis::Vertical,
            },
            GlyphSpec::Arc {
                mode: ArcMode::AngleOrigin,
                outer_radius: 80.0,
            },
            GlyphSpec::Area,
            GlyphSpec::Line(LineStyle::Discrete),
            GlyphSpec::Box,
        ];
        let kinds: Vec<GlyphKind> = specs.iter().map(GlyphSpec::kind).collect();
        assert_eq!(
            kinds,
            [
                GlyphKind::Bar,
                GlyphKind::StackedBar,
                GlyphKind::Arc,
                GlyphKind::Area,
                GlyphKind::Line,
                GlyphKind::Box,
            ]
        );
    }

    #[test]
    fn dispatch_produces_matching_variants() {
        let aggregates = aggregates();
        let values = [1.0, 2.0, 3.0, 4.0];
        let input = GlyphInput {
            aggregates: &aggregates,
            values: &values,
            selection: BoxSelection::Percentage(0.5),
        };

        let bars = GlyphSpec::Bar {
            axis: Axis::Vertical,
        }
        .highlight(&input);
        assert!(matches!(bars[0], GlyphHighlight::Rect(_)));

        let boxes = GlyphSpec::Box.highlight(&input);
        assert!(matches!(boxes[0], GlyphHighlight::Box(_)));
    }

    #[test]
    fn empty_input_yields_empty_geometry() {
        let input = GlyphInput {
            aggregates: &[],
            values: &[],
            selection: BoxSelection::Percentage(0.5),
        };
        assert!(
            GlyphSpec::Bar {
                axis: Axis::Vertical
            }
            .highlight(&input)
            .is_empty()
        );
        assert!(GlyphSpec::Box.highlight(&input).is_empty());
    }
}
