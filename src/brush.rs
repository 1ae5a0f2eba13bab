use crate::coords::ScaledCoordinateCache;

use iced_core::{Point, Rectangle};

/// Returns the rectangle with non-negative width and height, moving
/// the origin so it stays the top-left corner. A pointer dragged
/// backward produces negative extents; they are corrected here rather
/// than rejected.
pub fn normalize(rect: Rectangle) -> Rectangle {
    let mut out = rect;
    if out.width < 0.0 {
        out.x += out.width;
        out.width = -out.width;
    }
    if out.height < 0.0 {
        out.y += out.height;
        out.height = -out.height;
    }
    out
}

/// Whether a point lies within a rectangle expanded by `tolerance` on
/// every side. Half-open on the far edges, like brush selection.
pub fn is_within(point: Point, rect: Rectangle, tolerance: f32) -> bool {
    let mut r = normalize(rect);
    r.x -= tolerance;
    r.y -= tolerance;
    r.width += 2.0 * tolerance;
    r.height += 2.0 * tolerance;

    r.x <= point.x && point.x < r.x + r.width && r.y <= point.y && point.y < r.y + r.height
}

/// Selects the rows whose cached coordinates along dimensions `dim_i`
/// (horizontal) and `dim_j` (vertical) fall inside the brush.
///
/// The brush is given in absolute matrix pixels; `cell` locates the
/// scatter cell so the brush can be shifted into cell-local space.
/// Bounds are half-open: a point exactly on the max edge is excluded,
/// one on the min edge included. Brushing the diagonal self-comparison
/// cell (`dim_i == dim_j`) deselects everything, since a dimension has
/// no meaningful self-scatter.
pub fn select(
    brush: Rectangle,
    dim_i: usize,
    dim_j: usize,
    cell: Rectangle,
    coords: &ScaledCoordinateCache,
) -> Vec<usize> {
    if dim_i == dim_j {
        return Vec::new();
    }

    let b = normalize(brush);
    let x_min = (b.x - cell.x).floor() as i32;
    let x_max = (b.x + b.width - cell.x).floor() as i32;
    let y_min = (b.y - cell.y).floor() as i32;
    let y_max = (b.y + b.height - cell.y).floor() as i32;

    let xs = coords.dimension(dim_i);
    let ys = coords.dimension(dim_j);

    let mut selected = Vec::new();
    for row in 0..xs.len().min(ys.len()) {
        let x = xs[row];
        let y = ys[row];
        if x_min <= x && x < x_max && y_min <= y && y < y_max {
            selected.push(row);
        }
    }
    selected
}
