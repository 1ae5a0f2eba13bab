use data::selection::spread_flags;

/// A highlighted interval along the value axis, directed from the
/// quantile boundary it grows out of.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub from: f32,
    pub to: f32,
}

impl Span {
    pub fn length(&self) -> f32 {
        (self.to - self.from).abs()
    }
}

/// A point beyond the whiskers. Outliers carry the per-row selected
/// flag and are drawn highlighted or not independently of the box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outlier {
    pub value: f32,
    pub selected: bool,
}

/// Per-row selection for the box glyph: real flags when available, or
/// a target fraction to simulate one from.
#[derive(Debug, Clone, Copy)]
pub enum BoxSelection<'a> {
    Flags(&'a [bool]),
    Percentage(f32),
}

/// Quantile decomposition of a distribution plus the highlighted
/// extent of each segment.
///
/// `segment_fractions` are the selected fractions of the four
/// quantile-bounded segments in value order: whisker-low to q1, q1 to
/// median, median to q3, q3 to whisker-high.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxHighlight {
    pub q1: f32,
    pub median: f32,
    pub q3: f32,
    pub whisker_low: f32,
    pub whisker_high: f32,
    pub segment_fractions: [f32; 4],
    /// Box highlight, growing from the median toward q1 and q3.
    pub box_spans: [Span; 2],
    /// Whisker highlight, growing from each quartile outward.
    pub whisker_spans: [Span; 2],
    pub outliers: Vec<Outlier>,
}

/// Linear-interpolated quantile of a sorted slice (the R-7 rule).
fn quantile(sorted: &[f32], p: f32) -> f32 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    let h = (n - 1) as f32 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (sorted[hi] - sorted[lo]) * (h - lo as f32)
}

/// Computes the box decomposition and its highlight.
///
/// Whiskers extend 1.5 IQR from the nearest quartile, clamped to the
/// data extremes; anything beyond them is an outlier. Each segment's
/// selected fraction counts selected points strictly between its
/// boundaries; a point sitting exactly on an interior boundary splits
/// half to each adjacent segment. Empty input yields `None`.
pub fn highlight(values: &[f32], selection: BoxSelection<'_>) -> Option<BoxHighlight> {
    if values.is_empty() {
        return None;
    }

    // Sort values carrying the per-row flags; simulated flags spread
    // over the sorted order.
    let mut pairs: Vec<(f32, bool)> = match selection {
        BoxSelection::Flags(flags) => values
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, flags.get(i).copied().unwrap_or(false)))
            .collect(),
        BoxSelection::Percentage(_) => values.iter().map(|&v| (v, false)).collect(),
    };
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    if let BoxSelection::Percentage(p) = selection {
        for (pair, flag) in pairs.iter_mut().zip(spread_flags(values.len(), p)) {
            pair.1 = flag;
        }
    }

    let sorted: Vec<f32> = pairs.iter().map(|&(v, _)| v).collect();
    let q1 = quantile(&sorted, 0.25);
    let median = quantile(&sorted, 0.5);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;
    let whisker_low = (q1 - 1.5 * iqr).max(sorted[0]);
    let whisker_high = (q3 + 1.5 * iqr).min(sorted[sorted.len() - 1]);

    let boundaries = [whisker_low, q1, median, q3, whisker_high];
    let mut total_weights = [0.0f32; 4];
    let mut selected_weights = [0.0f32; 4];
    let mut outliers = Vec::new();

    for &(value, selected) in &pairs {
        if value < whisker_low || value > whisker_high {
            outliers.push(Outlier { value, selected });
            continue;
        }

        let mut add = |segment: usize, weight: f32| {
            total_weights[segment] += weight;
            if selected {
                selected_weights[segment] += weight;
            }
        };

        if let Some(k) = (1..=3).find(|&k| value == boundaries[k]) {
            // Boundary tie: half to each adjacent segment.
            add(k - 1, 0.5);
            add(k, 0.5);
        } else if value == whisker_low {
            add(0, 1.0);
        } else if value == whisker_high {
            add(3, 1.0);
        } else {
            let segment = (0..4)
                .find(|&k| boundaries[k] < value && value < boundaries[k + 1])
                .unwrap_or(0);
            add(segment, 1.0);
        }
    }

    let mut segment_fractions = [0.0f32; 4];
    for k in 0..4 {
        if total_weights[k] > 0.0 {
            segment_fractions[k] = selected_weights[k] / total_weights[k];
        }
    }

    let box_spans = [
        Span {
            from: median,
            to: median - segment_fractions[1] * (median - q1),
        },
        Span {
            from: median,
            to: median + segment_fractions[2] * (q3 - median),
        },
    ];
    let whisker_spans = [
        Span {
            from: q1,
            to: q1 - segment_fractions[0] * (q1 - whisker_low),
        },
        Span {
            from: q3,
            to: q3 + segment_fractions[3] * (whisker_high - q3),
        },
    ];

    Some(BoxHighlight {
        q1,
        median,
        q3,
        whisker_low,
        whisker_high,
        segment_fractions,
        box_spans,
        whisker_spans,
        outliers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-5;

    #[test]
    fn quantiles_interpolate_linearly() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert!((quantile(&sorted, 0.25) - 1.75).abs() < TOLERANCE);
        assert!((quantile(&sorted, 0.5) - 2.5).abs() < TOLERANCE);
        assert!((quantile(&sorted, 1.0) - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn whiskers_clamp_to_data_extremes() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let hl = highlight(&values, BoxSelection::Percentage(0.0)).unwrap();
        assert_eq!(hl.q1, 2.0);
        assert_eq!(hl.median, 3.0);
        assert_eq!(hl.q3, 4.0);
        // 1.5 IQR would reach -1 and 7; the data only spans [1, 5].
        assert_eq!(hl.whisker_low, 1.0);
        assert_eq!(hl.whisker_high, 5.0);
        assert!(hl.outliers.is_empty());
    }

    #[test]
    fn far_points_become_outliers_with_their_flags() {
        let values = [1.0, 10.0, 11.0, 12.0, 13.0, 14.0, 30.0];
        let flags = [true, false, false, false, false, false, false];
        let hl = highlight(&values, BoxSelection::Flags(&flags)).unwrap();

        assert_eq!(hl.outliers.len(), 2);
        assert_eq!(
            hl.outliers[0],
            Outlier {
                value: 1.0,
                selected: true
            }
        );
        assert_eq!(
            hl.outliers[1],
            Outlier {
                value: 30.0,
                selected: false
            }
        );
    }

    #[test]
    fn boundary_tie_splits_half_to_each_segment() {
        // The median lands exactly on the selected value 3.
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let flags = [false, false, true, false, false];
        let hl = highlight(&values, BoxSelection::Flags(&flags)).unwrap();

        assert!((hl.segment_fractions[1] - 0.5).abs() < TOLERANCE);
        assert!((hl.segment_fractions[2] - 0.5).abs() < TOLERANCE);
        assert_eq!(hl.segment_fractions[0], 0.0);
        assert_eq!(hl.segment_fractions[3], 0.0);

        // Box highlight reaches halfway from the median to each
        // quartile.
        assert!((hl.box_spans[0].to - 2.5).abs() < TOLERANCE);
        assert!((hl.box_spans[1].to - 3.5).abs() < TOLERANCE);
    }

    #[test]
    fn weighted_fractions_recover_the_target_percentage() {
        let values: Vec<f32> = (1..=20).map(|v| v as f32).collect();
        let hl = highlight(&values, BoxSelection::Percentage(0.5)).unwrap();

        // No outliers here, so population-weighted fractions must
        // average back to the simulated selection's share.
        let boundaries = [
            hl.whisker_low,
            hl.q1,
            hl.median,
            hl.q3,
            hl.whisker_high,
        ];
        assert!(boundaries.windows(2).all(|w| w[0] <= w[1]));

        let mut selected = 0.0;
        let mut total = 0.0;
        // Reconstruct segment populations by the same tie policy.
        for &v in &values {
            let weight_of = |k: usize| {
                if (1..=3).any(|b| v == boundaries[b]) {
                    if v == boundaries[k + 1] || v == boundaries[k] {
                        0.5
                    } else {
                        0.0
                    }
                } else if (boundaries[k] < v && v < boundaries[k + 1])
                    || (k == 0 && v == boundaries[0])
                    || (k == 3 && v == boundaries[4])
                {
                    1.0
                } else {
                    0.0
                }
            };
            for k in 0..4 {
                let w = weight_of(k);
                total += w;
                selected += w * hl.segment_fractions[k];
            }
        }
        assert!((selected / total - 0.5).abs() < 0.05);
    }

    #[test]
    fn single_point_distribution_is_degenerate_but_defined() {
        let hl = highlight(&[7.0], BoxSelection::Percentage(1.0)).unwrap();
        assert_eq!(hl.median, 7.0);
        assert_eq!(hl.whisker_low, 7.0);
        assert_eq!(hl.whisker_high, 7.0);
        assert!(hl.box_spans.iter().all(|s| s.length() == 0.0));
    }

    #[test]
    fn empty_distribution_yields_none() {
        assert!(highlight(&[], BoxSelection::Percentage(0.5)).is_none());
    }
}
