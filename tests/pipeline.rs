use std::time::Instant;

use iced_core::{Point, Rectangle};

use data::chart::{ArcMode, Axis, LineStyle};
use data::{GraphConfig, Row};
use prism_chart::glyph::GlyphHighlight;
use prism_chart::{GlyphSpec, MatrixSession};

fn rect(x: f32, y: f32, width: f32, height: f32) -> Rectangle {
    Rectangle {
        x,
        y,
        width,
        height,
    }
}

/// Two categories with extents that make the cell scales identity
/// maps over a 200 px cell.
fn rows() -> Vec<Row> {
    vec![
        Row::with_dimensions("A", vec![0.0, 0.0]),
        Row::with_dimensions("A", vec![50.0, 50.0]),
        Row::with_dimensions("A", vec![90.0, 90.0]),
        Row::with_dimensions("B", vec![150.0, 150.0]),
        Row::with_dimensions("B", vec![200.0, 200.0]),
    ]
}

fn config() -> GraphConfig {
    let json = serde_json::json!({
        "margin": 0.1,
        "overlay_opacity": 0.4,
        "coalesce_interval_ms": 4,
    });
    GraphConfig::from_json(&json.to_string()).expect("config parses")
}

#[test]
fn brush_to_bar_highlight() {
    let mut session = MatrixSession::with_rows(config(), 200.0, rows());
    let cell = rect(0.0, 0.0, 200.0, 200.0);

    // Brush the (1, 2) cell over the two leading A points.
    session.brush_started(1, 2, cell, Point::new(-1.0, -1.0));
    session.brush_moved(Point::new(60.0, 60.0), Instant::now());
    session.brush_ended();
    assert_eq!(session.selected_indices(), vec![0, 1]);

    let aggregates = session.aggregates();
    assert_eq!(aggregates.len(), 2);
    assert_eq!(aggregates[0].category, "A");
    assert_eq!(aggregates[0].sum, 140.0);
    assert_eq!(aggregates[0].selected_sum, 50.0);
    assert_eq!(aggregates[1].selected_sum, 0.0);

    let bars = session.highlights(GlyphSpec::Bar {
        axis: Axis::Vertical,
    });
    let GlyphHighlight::Rect(bar) = &bars[0] else {
        panic!("expected a rect highlight");
    };
    assert_eq!(bar.origin, 0.0);
    assert_eq!(bar.extent, 50.0);
}

#[test]
fn brush_excludes_the_max_edge() {
    let mut session = MatrixSession::with_rows(config(), 200.0, rows());
    let cell = rect(0.0, 0.0, 200.0, 200.0);

    // A 40..90 brush: the point at (50, 50) is inside, the one at
    // (90, 90) sits on the max edge and is excluded.
    session.brush_started(1, 2, cell, Point::new(40.0, 40.0));
    session.brush_moved(Point::new(90.0, 90.0), Instant::now());
    session.brush_ended();
    assert_eq!(session.selected_indices(), vec![1]);
}

#[test]
fn every_glyph_family_produces_geometry() {
    let mut session = MatrixSession::with_rows(config(), 200.0, rows());
    session.select_percentage(0.5);

    let specs = [
        GlyphSpec::Bar {
            axis: Axis::Horizontal,
        },
        GlyphSpec::StackedBar {
            axis: Axis::Vertical,
        },
        GlyphSpec::Arc {
            mode: ArcMode::RadiusOrigin { inner_ratio: 0.5 },
            outer_radius: 80.0,
        },
        GlyphSpec::Arc {
            mode: ArcMode::AngleOrigin,
            outer_radius: 80.0,
        },
        GlyphSpec::Area,
        GlyphSpec::Line(LineStyle::Continuous),
        GlyphSpec::Box,
    ];
    for spec in specs {
        assert!(
            !session.highlights(spec).is_empty(),
            "no geometry for {spec:?}"
        );
    }
}

#[test]
fn percentage_and_brush_agree_on_full_selection() {
    let mut session = MatrixSession::with_rows(config(), 200.0, rows());

    session.select_percentage(1.0);
    let by_percentage = session.aggregates();

    session.brush_started(1, 2, rect(0.0, 0.0, 200.0, 200.0), Point::new(-1.0, -1.0));
    session.brush_moved(Point::new(201.0, 201.0), Instant::now());
    session.brush_ended();
    let by_brush = session.aggregates();

    assert_eq!(by_percentage, by_brush);
    for aggr in by_brush {
        assert_eq!(aggr.selected_sum, aggr.sum);
    }
}

#[test]
fn composite_base_is_reused_across_selection_changes() {
    let mut session = MatrixSession::with_rows(config(), 200.0, rows());

    let deselected = session.composite_cell(1, 2);
    session.select_percentage(1.0);
    let selected = session.composite_cell(1, 2);

    // The highlighted raster differs, but unhit pixels come from the
    // same cached base.
    assert_ne!(deselected, selected);
    assert_eq!(deselected.get(10, 190), selected.get(10, 190));
}

#[test]
fn replacing_rows_resets_the_whole_session() {
    let mut session = MatrixSession::with_rows(config(), 200.0, rows());
    session.select_percentage(1.0);

    session.set_rows(vec![Row::new("C", 1.0), Row::new("D", 2.0)]);
    assert!(session.selected_indices().is_empty());

    let aggregates = session.aggregates();
    assert_eq!(aggregates.len(), 2);
    assert!(aggregates.iter().all(|a| a.selected_sum == 0.0));
}
