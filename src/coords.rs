use crate::scale::Scale;

use data::DataSet;

/// Precomputed integer pixel coordinates, one dense column per
/// dimension, indexed by row.
///
/// Rebuilt whenever the row set or a scale domain changes; reused
/// across brush-move events otherwise. An empty row set builds empty
/// columns, so selection trivially matches nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScaledCoordinateCache {
    coords: Vec<Vec<i32>>,
    row_count: usize,
}

impl ScaledCoordinateCache {
    pub fn build(dataset: &DataSet, scales: &[Scale]) -> Self {
        let row_count = dataset.len();
        let coords = scales
            .iter()
            .enumerate()
            .map(|(dim, scale)| {
                (0..row_count)
                    .map(|row| scale.px(dataset.numeric(dim, row)))
                    .collect()
            })
            .collect();

        Self { coords, row_count }
    }

    pub fn dimension(&self, dim: usize) -> &[i32] {
        self.coords.get(dim).map_or(&[], Vec::as_slice)
    }

    pub fn dimension_count(&self) -> usize {
        self.coords.len()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Staleness is detected by row-count comparison; a dataset swap
    /// with the same row count keeps the same pixel layout contract.
    pub fn is_stale(&self, dataset: &DataSet) -> bool {
        self.row_count != dataset.len()
    }

    /// Rebuilds when stale, which is cheaper than returning silently
    /// wrong selections.
    pub fn ensure(&mut self, dataset: &DataSet, scales: &[Scale]) {
        if self.is_stale(dataset) || self.coords.len() != scales.len() {
            log::warn!(
                "scaled coordinate cache stale ({} rows cached, {} in dataset); rebuilding",
                self.row_count,
                dataset.len()
            );
            *self = Self::build(dataset, scales);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data::Row;

    fn dataset() -> DataSet {
        DataSet::new(vec![
            Row::with_dimensions("A", vec![0.0, 0.0]),
            Row::with_dimensions("A", vec![5.0, 2.0]),
            Row::with_dimensions("B", vec![10.0, 4.0]),
        ])
    }

    fn scales(dataset: &DataSet) -> Vec<Scale> {
        (0..dataset.dimension_count())
            .map(|d| Scale::from_domain(dataset.domain(d).unwrap(), (0.0, 200.0)))
            .collect()
    }

    #[test]
    fn builds_dense_columns_per_dimension() {
        let data = dataset();
        let cache = ScaledCoordinateCache::build(&data, &scales(&data));

        assert_eq!(cache.dimension_count(), 3);
        assert_eq!(cache.row_count(), 3);
        // Dimension 1: values 0, 5, 10 over [0, 10] -> [0, 100, 200].
        assert_eq!(cache.dimension(1), &[0, 100, 200]);
        // Dimension 0: band centers for categories A, A, B.
        assert_eq!(cache.dimension(0), &[50, 50, 150]);
    }

    #[test]
    fn empty_rows_build_empty_columns() {
        let data = DataSet::new(Vec::new());
        let cache = ScaledCoordinateCache::build(&data, &scales(&data));
        assert_eq!(cache.row_count(), 0);
        assert!(cache.dimension(0).is_empty());
    }

    #[test]
    fn ensure_rebuilds_on_row_count_change() {
        let data = dataset();
        let mut cache = ScaledCoordinateCache::build(&data, &scales(&data));

        let mut rows: Vec<Row> = data.rows().to_vec();
        rows.push(Row::with_dimensions("B", vec![10.0, 4.0]));
        let grown = DataSet::new(rows);

        assert!(cache.is_stale(&grown));
        cache.ensure(&grown, &scales(&grown));
        assert_eq!(cache.row_count(), 4);
        assert!(!cache.is_stale(&grown));
    }

    #[test]
    fn unknown_dimension_is_an_empty_slice() {
        let data = dataset();
        let cache = ScaledCoordinateCache::build(&data, &scales(&data));
        assert!(cache.dimension(9).is_empty());
    }
}
