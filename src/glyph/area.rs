use data::CategoryAggregate;

/// A vertex of a position-interpolated highlight path. `position` is a
/// fractional category index; the renderer maps it through the same
/// band scale as the full series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: f32,
    pub value: f32,
}

impl Vertex {
    pub fn new(position: f32, value: f32) -> Self {
        Self { position, value }
    }
}

/// Highlight path for area glyphs: selected sums by position, with
/// origin at zero like rectangular glyphs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PositionalHighlight {
    pub polyline: Vec<Vertex>,
}

/// Builds the highlight path. Wherever the total series changes sign
/// between adjacent positions, a synthetic vertex is inserted at the
/// interpolated crossing (fraction `e / (e - f)` for adjacent values
/// `e`, `f`) so the highlighted path stays geometrically consistent
/// with the sign change. Exactly one crossing per interval is assumed.
pub fn highlight(aggregates: &[CategoryAggregate]) -> PositionalHighlight {
    let mut polyline = Vec::with_capacity(aggregates.len());

    for (i, aggr) in aggregates.iter().enumerate() {
        if i > 0 {
            let e = aggregates[i - 1].sum;
            let f = aggr.sum;
            if e * f < 0.0 {
                let t = e / (e - f);
                polyline.push(Vertex::new((i - 1) as f32 + t, 0.0));
            }
        }

        let value = if aggr.sum == 0.0 { 0.0 } else { aggr.selected_sum };
        polyline.push(Vertex::new(i as f32, value));
    }

    PositionalHighlight { polyline }
}
