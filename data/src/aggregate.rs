use crate::Row;

use rustc_hash::FxHashMap;

/// Per-category totals: the full sum and the sum over selected rows.
///
/// Invariants: `selected_sum` is zero or carries the sign of `sum`,
/// and `|selected_sum| <= |sum|`.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAggregate {
    pub category: String,
    pub sum: f32,
    pub selected_sum: f32,
}

impl CategoryAggregate {
    /// Selected fraction of this category, zero when the total is zero.
    pub fn fraction(&self) -> f32 {
        if self.sum == 0.0 {
            0.0
        } else {
            self.selected_sum / self.sum
        }
    }
}

/// Groups rows by category, summing values sign-preserved, and
/// independently summing the rows named by `selected_indices`.
///
/// Categories appear in order of first appearance; categories with no
/// selected rows are still present with `selected_sum = 0`.
pub fn aggregate(rows: &[Row], selected_indices: &[usize]) -> Vec<CategoryAggregate> {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut out: Vec<CategoryAggregate> = Vec::new();

    let mut selected = vec![false; rows.len()];
    for &i in selected_indices {
        if let Some(flag) = selected.get_mut(i) {
            *flag = true;
        }
    }

    for (i, row) in rows.iter().enumerate() {
        let slot = *index.entry(row.category.as_str()).or_insert_with(|| {
            out.push(CategoryAggregate {
                category: row.category.clone(),
                sum: 0.0,
                selected_sum: 0.0,
            });
            out.len() - 1
        });

        let value = row.value();
        out[slot].sum += value;
        if selected[i] {
            out[slot].selected_sum += value;
        }
    }

    out
}

/// Sorts descending by `|sum|`, the order bar charts display in.
pub fn sort_by_magnitude(aggregates: &mut [CategoryAggregate]) {
    aggregates.sort_by(|a, b| {
        b.sum
            .abs()
            .partial_cmp(&a.sum.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
