use data::CategoryAggregate;

use std::f32::consts::TAU;

/// Highlighted sub-region of a circular slice. Angles are in radians,
/// measured clockwise from 12 o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcHighlight {
    pub category: String,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
}

/// Slice sweeps proportional to each non-negative sum, in data order
/// starting at 12 o'clock. Negative-sum categories are dropped from
/// the layout entirely; a circular glyph cannot show them.
fn pie_layout(aggregates: &[CategoryAggregate]) -> Vec<(usize, f32, f32)> {
    let kept: Vec<(usize, f32)> = aggregates
        .iter()
        .enumerate()
        .filter(|(_, a)| a.sum >= 0.0)
        .map(|(i, a)| (i, a.sum))
        .collect();

    let total: f32 = kept.iter().map(|(_, sum)| sum).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    kept.into_iter()
        .map(|(i, sum)| {
            let sweep = sum / total * TAU;
            let start = angle;
            angle += sweep;
            (i, start, angle)
        })
        .collect()
}

/// Radius-origin highlighting: the highlighted ring keeps each slice's
/// full sweep and grows outward from the inner radius such that its
/// *area* is proportional to the selected fraction. `inner_ratio` is 0
/// for pies and greater for doughnuts.
pub fn radius_origin(
    aggregates: &[CategoryAggregate],
    outer_radius: f32,
    inner_ratio: f32,
) -> Vec<ArcHighlight> {
    let inner = inner_ratio.clamp(0.0, 1.0) * outer_radius;

    pie_layout(aggregates)
        .into_iter()
        .map(|(i, start, end)| {
            let aggr = &aggregates[i];
            let f = aggr.fraction().clamp(0.0, 1.0);
            // outer^2 - inner^2 proportional to f keeps perceived area
            // proportional to the highlighted count.
            let outer = (inner * inner + (outer_radius * outer_radius - inner * inner) * f).sqrt();
            ArcHighlight {
                category: aggr.category.clone(),
                inner_radius: inner,
                outer_radius: outer,
                start_angle: start,
                end_angle: end,
            }
        })
        .collect()
}

/// Angle-origin highlighting: each slice is split into two adjacent
/// sub-sectors sized by the selected and unselected sub-values, with
/// the selected sector first so it stays contiguous from the slice's
/// leading edge. The highlight keeps the full radius.
pub fn angle_origin(aggregates: &[CategoryAggregate], outer_radius: f32) -> Vec<ArcHighlight> {
    pie_layout(aggregates)
        .into_iter()
        .map(|(i, start, end)| {
            let aggr = &aggregates[i];
            let f = aggr.fraction().clamp(0.0, 1.0);
            ArcHighlight {
                category: aggr.category.clone(),
                inner_radius: 0.0,
                outer_radius,
                start_angle: start,
                end_angle: start + (end - start) * f,
            }
        })
        .collect()
}
