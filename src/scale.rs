use data::Domain;

/// Monotonic mapping from a data domain to a pixel range.
///
/// Linear scales may carry an inverted range (`range.0 > range.1`) so
/// the screen-Y convention, where pixels grow downward while values
/// grow upward, is expressed in the scale itself. Band scales map
/// ordered categories to evenly spaced slot centers and are invertible
/// by index lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Scale {
    Linear {
        domain: (f32, f32),
        range: (f32, f32),
    },
    Band {
        categories: Vec<String>,
        range: (f32, f32),
    },
}

impl Scale {
    pub fn linear(domain: (f32, f32), range: (f32, f32)) -> Self {
        Scale::Linear { domain, range }
    }

    pub fn band(categories: Vec<String>, range: (f32, f32)) -> Self {
        Scale::Band { categories, range }
    }

    /// Builds the natural scale for a domain: linear for numeric
    /// extents, band for category lists.
    pub fn from_domain(domain: &Domain, range: (f32, f32)) -> Self {
        match domain {
            Domain::Linear { min, max } => Scale::linear((*min, *max), range),
            Domain::Ordinal(categories) => Scale::band(categories.clone(), range),
        }
    }

    /// Projects a data value to a pixel coordinate. For band scales the
    /// value is a category index, resolved to the slot center.
    pub fn project(&self, value: f32) -> f32 {
        match self {
            Scale::Linear { domain, range } => {
                let span = domain.1 - domain.0;
                if span == 0.0 {
                    range.0
                } else {
                    range.0 + (value - domain.0) / span * (range.1 - range.0)
                }
            }
            Scale::Band { categories, range } => {
                if categories.is_empty() {
                    return range.0;
                }
                let step = (range.1 - range.0) / categories.len() as f32;
                let index = (value.round().max(0.0) as usize).min(categories.len() - 1);
                range.0 + step * (index as f32 + 0.5)
            }
        }
    }

    /// Projects to the nearest integer pixel, the form cached for
    /// brush selection.
    pub fn px(&self, value: f32) -> i32 {
        self.project(value).round() as i32
    }

    /// Slot width of a band scale, zero for linear scales.
    pub fn band_width(&self) -> f32 {
        match self {
            Scale::Linear { .. } => 0.0,
            Scale::Band { categories, range } => {
                if categories.is_empty() {
                    0.0
                } else {
                    ((range.1 - range.0) / categories.len() as f32).abs()
                }
            }
        }
    }

    /// Inverts a pixel coordinate to a category index, for band scales
    /// only.
    pub fn invert_index(&self, px: f32) -> Option<usize> {
        match self {
            Scale::Linear { .. } => None,
            Scale::Band { categories, range } => {
                if categories.is_empty() {
                    return None;
                }
                let step = (range.1 - range.0) / categories.len() as f32;
                if step == 0.0 {
                    return None;
                }
                let index = ((px - range.0) / step).floor();
                if index < 0.0 || index >= categories.len() as f32 {
                    None
                } else {
                    Some(index as usize)
                }
            }
        }
    }
}
