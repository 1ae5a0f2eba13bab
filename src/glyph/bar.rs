use data::CategoryAggregate;
use data::chart::Axis;

/// Highlighted extent of a simple bar, in data units along the
/// response axis. The origin is always zero; the renderer applies the
/// same axis scale it uses for the full bar.
#[derive(Debug, Clone, PartialEq)]
pub struct RectHighlight {
    pub category: String,
    pub origin: f32,
    pub extent: f32,
    pub axis: Axis,
}

/// Highlighted extent of one segment in a stacked bar. The baseline is
/// the running total of all prior categories' sums, not zero, so each
/// segment grows away from the shared stack edge in its own sign
/// direction.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedRectHighlight {
    pub category: String,
    pub baseline: f32,
    pub extent: f32,
}

pub fn simple(aggregates: &[CategoryAggregate], axis: Axis) -> Vec<RectHighlight> {
    aggregates
        .iter()
        .map(|aggr| RectHighlight {
            category: aggr.category.clone(),
            origin: 0.0,
            extent: extent(aggr),
            axis,
        })
        .collect()
}

pub fn stacked(aggregates: &[CategoryAggregate]) -> Vec<StackedRectHighlight> {
    let mut running = 0.0;
    aggregates
        .iter()
        .map(|aggr| {
            let baseline = running;
            running += aggr.sum;
            StackedRectHighlight {
                category: aggr.category.clone(),
                baseline,
                extent: extent(aggr),
            }
        })
        .collect()
}

/// Zero-sum categories and empty selections both highlight nothing.
fn extent(aggr: &CategoryAggregate) -> f32 {
    if aggr.sum == 0.0 { 0.0 } else { aggr.selected_sum }
}
