use crate::Row;

/// Percentage variation applied to alternating groups so a simulated
/// selection doesn't look uniform across categories.
const K1: f32 = 0.15;
const K2: f32 = 2.0 * K1;

/// The current selection: explicit row indices, or a scalar percentage
/// when no per-row selection exists yet.
///
/// Rebuilt wholesale on every brush or slider interaction; there is no
/// incremental diffing.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Indices(Vec<usize>),
    Percentage(f32),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Indices(Vec::new())
    }
}

impl Selection {
    pub fn deselect_all(&mut self) {
        *self = Selection::Indices(Vec::new());
    }

    /// Replaces the selection with an explicit index set. Duplicates
    /// are removed; order is not meaningful.
    pub fn set_indices(&mut self, mut indices: Vec<usize>) {
        indices.sort_unstable();
        indices.dedup();
        *self = Selection::Indices(indices);
    }

    /// Replaces the selection with a bare percentage, clamped to
    /// `[0, 1]`. Per-row indices are synthesized lazily by `resolve`.
    pub fn select_percentage(&mut self, percentage: f32) {
        *self = Selection::Percentage(percentage.clamp(0.0, 1.0));
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Selection::Indices(indices) => indices.is_empty(),
            Selection::Percentage(p) => *p <= 0.0,
        }
    }

    pub fn contains(&self, row: usize) -> bool {
        match self {
            Selection::Indices(indices) => indices.contains(&row),
            Selection::Percentage(_) => false,
        }
    }

    /// Resolves this selection to explicit row indices, synthesizing a
    /// per-group selection when only a percentage is available.
    pub fn resolve(&self, rows: &[Row]) -> Vec<usize> {
        match self {
            Selection::Indices(indices) => indices.clone(),
            Selection::Percentage(p) => percentage_indices(rows, *p),
        }
    }
}

/// Selects approximately `percentage` of the rows in each category
/// group, picking the leading rows of each group.
///
/// The percentage is varied up and down on alternating groups (by
/// `K1`/`K2`, clamped to `[0, 1]`) so the simulated selection differs
/// visibly between categories. Groups are delimited by the first
/// occurrence of each distinct category, which assumes rows arrive
/// grouped by category.
pub fn percentage_indices(rows: &[Row], percentage: f32) -> Vec<usize> {
    let mut first_indices: Vec<usize> = Vec::new();
    let mut seen: Vec<&str> = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        if !seen.contains(&row.category.as_str()) {
            seen.push(&row.category);
            first_indices.push(i);
        }
    }
    first_indices.push(rows.len());

    let mut selected = Vec::new();
    for g in 0..first_indices.len().saturating_sub(1) {
        let start = first_indices[g];
        let len = first_indices[g + 1] - start;

        let mut varied = percentage;
        if K2 < percentage && percentage < 1.0 - K2 {
            varied = percentage * if g % 2 > 0 { 1.0 - K2 } else { 1.0 + K2 };
        } else if K1 < percentage && percentage < 1.0 - K1 {
            varied = percentage * if g % 2 > 0 { 1.0 - K1 } else { 1.0 + K1 };
        }
        varied = varied.clamp(0.0, 1.0);

        let count = (varied * len as f32).floor() as usize;
        selected.extend(start..start + count.min(len));
    }

    log::debug!(
        "percentage selection: {:.2} over {} rows -> {} selected",
        percentage,
        rows.len(),
        selected.len()
    );
    selected
}

/// Spreads a target fraction evenly over `len` slots, marking slot `i`
/// whenever the running total crosses an integer. Used to simulate a
/// plausible per-row selection from a bare percentage.
pub fn spread_flags(len: usize, percentage: f32) -> Vec<bool> {
    let p = f64::from(percentage.clamp(0.0, 1.0));
    (0..len)
        .map(|i| ((i + 1) as f64 * p).floor() > (i as f64 * p).floor())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grouped_rows() -> Vec<Row> {
        let mut rows = Vec::new();
        for _ in 0..10 {
            rows.push(Row::new("A", 1.0));
        }
        for _ in 0..20 {
            rows.push(Row::new("B", 1.0));
        }
        rows
    }

    #[test]
    fn deselect_all_clears_indices() {
        let mut sel = Selection::Indices(vec![1, 2, 3]);
        sel.deselect_all();
        assert!(sel.is_empty());
    }

    #[test]
    fn set_indices_dedups() {
        let mut sel = Selection::default();
        sel.set_indices(vec![3, 1, 3, 2, 1]);
        assert_eq!(sel, Selection::Indices(vec![1, 2, 3]));
    }

    #[test]
    fn select_percentage_clamps() {
        let mut sel = Selection::default();
        sel.select_percentage(1.5);
        assert_eq!(sel, Selection::Percentage(1.0));
    }

    #[test]
    fn percentage_selects_leading_rows_per_group() {
        let selected = percentage_indices(&grouped_rows(), 0.5);
        // First group is varied up (1 + K2), second down (1 - K2).
        assert_eq!(selected.iter().filter(|&&i| i < 10).count(), 6);
        assert_eq!(selected.iter().filter(|&&i| i >= 10).count(), 7);
        // Leading rows of each group.
        assert!(selected.contains(&0));
        assert!(selected.contains(&10));
    }

    #[test]
    fn percentage_extremes_are_not_varied() {
        assert!(percentage_indices(&grouped_rows(), 0.0).is_empty());
        assert_eq!(percentage_indices(&grouped_rows(), 1.0).len(), 30);
    }

    #[test]
    fn resolve_passes_explicit_indices_through() {
        let rows = grouped_rows();
        let sel = Selection::Indices(vec![2, 5]);
        assert_eq!(sel.resolve(&rows), vec![2, 5]);
    }

    #[test]
    fn spread_flags_hits_target_count() {
        let flags = spread_flags(10, 0.3);
        assert_eq!(flags.iter().filter(|&&f| f).count(), 3);

        let flags = spread_flags(7, 0.5);
        let count = flags.iter().filter(|&&f| f).count();
        assert_eq!(count, 3);
    }

    #[test]
    fn spread_flags_are_evenly_spaced() {
        let flags = spread_flags(8, 0.5);
        assert_eq!(
            flags,
            vec![false, true, false, true, false, true, false, true]
        );
    }
}
