use crate::glyph::area::Vertex;

use data::CategoryAggregate;
use data::chart::LineStyle;

/// Highlighted line geometry: one or more disjoint polyline runs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SegmentHighlight {
    pub segments: Vec<Vec<Vertex>>,
}

pub fn highlight(aggregates: &[CategoryAggregate], style: LineStyle) -> SegmentHighlight {
    match style {
        LineStyle::Separate => separate(aggregates),
        LineStyle::Discrete => discrete(aggregates),
        LineStyle::Continuous => continuous(aggregates),
    }
}

/// The selected sub-line as an independent polyline at its own values.
fn separate(aggregates: &[CategoryAggregate]) -> SegmentHighlight {
    let polyline: Vec<Vertex> = aggregates
        .iter()
        .enumerate()
        .map(|(i, aggr)| {
            let value = if aggr.sum == 0.0 { 0.0 } else { aggr.selected_sum };
            Vertex::new(i as f32, value)
        })
        .collect();

    SegmentHighlight {
        segments: if polyline.is_empty() {
            Vec::new()
        } else {
            vec![polyline]
        },
    }
}

/// Overlay segments on the total line covering contiguous runs of
/// vertices with a positive selected fraction. Each open end of a run
/// extends a half step into the unselected neighbor, so an isolated
/// selected vertex still produces a visible segment.
fn discrete(aggregates: &[CategoryAggregate]) -> SegmentHighlight {
    let n = aggregates.len();
    let picked: Vec<bool> = aggregates.iter().map(|a| a.fraction() > 0.0).collect();

    let mut segments = Vec::new();
    let mut i = 0;
    while i < n {
        if !picked[i] {
            i += 1;
            continue;
        }
        let start = i;
        while i + 1 < n && picked[i + 1] {
            i += 1;
        }
        let end = i;

        let mut segment = Vec::new();
        if start > 0 {
            segment.push(midpoint(aggregates, start - 1, start));
        }
        for v in start..=end {
            segment.push(Vertex::new(v as f32, aggregates[v].sum));
        }
        if end + 1 < n {
            segment.push(midpoint(aggregates, end, end + 1));
        }
        segments.push(segment);

        i += 1;
    }

    SegmentHighlight { segments }
}

/// Per-vertex sub-segments on the total line. Each vertex's span
/// toward its neighbor midpoints is shrunk toward the vertex by its
/// selected fraction, so the overlay tracks local proportion instead
/// of binary inclusion.
fn continuous(aggregates: &[CategoryAggregate]) -> SegmentHighlight {
    let n = aggregates.len();
    let mut segments = Vec::new();

    for i in 0..n {
        let f = aggregates[i].fraction().clamp(0.0, 1.0);
        if f <= 0.0 {
            continue;
        }

        let vertex = Vertex::new(i as f32, aggregates[i].sum);
        let left = if i > 0 {
            lerp(vertex, midpoint(aggregates, i - 1, i), f)
        } else {
            vertex
        };
        let right = if i + 1 < n {
            lerp(vertex, midpoint(aggregates, i, i + 1), f)
        } else {
            vertex
        };

        segments.push(vec![left, vertex, right]);
    }

    SegmentHighlight { segments }
}

fn midpoint(aggregates: &[CategoryAggregate], a: usize, b: usize) -> Vertex {
    Vertex::new(
        (a as f32 + b as f32) / 2.0,
        (aggregates[a].sum + aggregates[b].sum) / 2.0,
    )
}

fn lerp(from: Vertex, to: Vertex, t: f32) -> Vertex {
    Vertex::new(
        from.position + (to.position - from.position) * t,
        from.value + (to.value - from.value) * t,
    )
}
