pub mod aggregate;
pub mod chart;
pub mod config;
pub mod selection;

pub use aggregate::{CategoryAggregate, aggregate, sort_by_magnitude};
pub use config::GraphConfig;
pub use selection::Selection;

/// A single observation: a category plus one or more numeric fields.
///
/// `values[0]` is the response value that aggregate glyphs sum over;
/// any further entries are extra dimensions for scatter-style layouts.
/// Rows are immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub category: String,
    pub values: Vec<f32>,
}

impl Row {
    pub fn new(category: impl Into<String>, value: f32) -> Self {
        Self {
            category: category.into(),
            values: vec![value],
        }
    }

    pub fn with_dimensions(category: impl Into<String>, values: Vec<f32>) -> Self {
        Self {
            category: category.into(),
            values,
        }
    }

    /// The response value summed by aggregate glyphs.
    pub fn value(&self) -> f32 {
        self.values.first().copied().unwrap_or(0.0)
    }
}

/// Domain of a dimension: a numeric extent or an ordered category list.
#[derive(Debug, Clone, PartialEq)]
pub enum Domain {
    Linear { min: f32, max: f32 },
    Ordinal(Vec<String>),
}

impl Domain {
    /// Index of a category within an ordinal domain.
    pub fn index_of(&self, category: &str) -> Option<usize> {
        match self {
            Domain::Ordinal(categories) => categories.iter().position(|c| c == category),
            Domain::Linear { .. } => None,
        }
    }
}

/// An immutable row set with per-dimension domains.
///
/// Dimension 0 is the ordinal category axis; dimension `d >= 1` maps to
/// `row.values[d - 1]`. Domains are computed once at construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataSet {
    rows: Vec<Row>,
    domains: Vec<Domain>,
}

impl DataSet {
    pub fn new(rows: Vec<Row>) -> Self {
        let domains = Self::compute_domains(&rows);
        Self { rows, domains }
    }

    fn compute_domains(rows: &[Row]) -> Vec<Domain> {
        let mut categories: Vec<String> = Vec::new();
        for row in rows {
            if !categories.iter().any(|c| *c == row.category) {
                categories.push(row.category.clone());
            }
        }

        let numeric_dims = rows.iter().map(|r| r.values.len()).max().unwrap_or(0);
        let mut domains = vec![Domain::Ordinal(categories)];

        for d in 0..numeric_dims {
            let mut min = f32::INFINITY;
            let mut max = f32::NEG_INFINITY;
            for row in rows {
                let v = row.values.get(d).copied().unwrap_or(0.0);
                if v < min {
                    min = v;
                }
                if v > max {
                    max = v;
                }
            }
            if min > max {
                min = 0.0;
                max = 0.0;
            }
            domains.push(Domain::Linear { min, max });
        }

        domains
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of dimensions, counting the category axis as dimension 0.
    pub fn dimension_count(&self) -> usize {
        self.domains.len()
    }

    pub fn domain(&self, dimension: usize) -> Option<&Domain> {
        self.domains.get(dimension)
    }

    /// Numeric value of a row along a dimension. The category axis
    /// resolves to the category's index within the ordinal domain.
    pub fn numeric(&self, dimension: usize, row: usize) -> f32 {
        let Some(row) = self.rows.get(row) else {
            return 0.0;
        };
        if dimension == 0 {
            self.domains
                .first()
                .and_then(|d| d.index_of(&row.category))
                .map_or(0.0, |i| i as f32)
        } else {
            row.values.get(dimension - 1).copied().unwrap_or(0.0)
        }
    }
}
