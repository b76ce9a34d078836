use fxhash::{FxHashMap, FxHashSet};

use crate::errors::StatsError;
use crate::models::{Histogram, HistogramBin, LengthCount, LengthSummary, ValueCount};

///
/// Count occurrences of each value, most frequent first. Ties are ordered by value.
/// `None` entries are not counted.
///
pub fn value_counts<'a, I>(values: I) -> Vec<ValueCount>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for value in values.into_iter().flatten() {
        *counts.entry(value).or_default() += 1;
    }

    let mut counts: Vec<ValueCount> = counts
        .into_iter()
        .map(|(value, count)| ValueCount {
            value: value.to_string(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    counts
}

///
/// Number of distinct values. `None` entries are not counted.
///
pub fn n_unique<'a, I>(values: I) -> usize
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    values.into_iter().flatten().collect::<FxHashSet<_>>().len()
}

///
/// Count occurrences of each length, most frequent first. Ties are ordered by length.
///
pub fn length_counts(lengths: &[u64]) -> Vec<LengthCount> {
    let mut counts: FxHashMap<u64, usize> = FxHashMap::default();
    for &length in lengths {
        *counts.entry(length).or_default() += 1;
    }

    let mut counts: Vec<LengthCount> = counts
        .into_iter()
        .map(|(ali_length, count)| LengthCount { ali_length, count })
        .collect();
    counts.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.ali_length.cmp(&b.ali_length))
    });
    counts
}

fn median_of_sorted(sorted: &[u64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0
    } else {
        sorted[n / 2] as f64
    }
}

///
/// Summarize a set of lengths. Returns `None` when there is nothing to summarize.
///
pub fn summarize_lengths(lengths: &[u64]) -> Option<LengthSummary> {
    if lengths.is_empty() {
        return None;
    }

    let mut sorted = lengths.to_vec();
    sorted.sort_unstable();

    let count = sorted.len();
    let mean = sorted.iter().map(|&l| l as f64).sum::<f64>() / count as f64;

    let std = (count > 1).then(|| {
        let squares: f64 = sorted.iter().map(|&l| (l as f64 - mean).powi(2)).sum();
        (squares / (count - 1) as f64).sqrt()
    });

    Some(LengthSummary {
        count,
        minimum: sorted[0],
        maximum: sorted[count - 1],
        mean,
        median: median_of_sorted(&sorted),
        std,
    })
}

///
/// Bin lengths into `n_bins` equal-width bins spanning `[min, max]`.
///
/// When every value is the same the range is widened by 0.5 on each side, and an
/// empty input uses the range `[0, 1]`.
///
pub fn histogram(lengths: &[u64], n_bins: usize) -> Result<Histogram, StatsError> {
    if n_bins == 0 {
        return Err(StatsError::InvalidBinCount(n_bins));
    }

    let (mut lower, mut upper) = match (lengths.iter().min(), lengths.iter().max()) {
        (Some(&min), Some(&max)) => (min as f64, max as f64),
        _ => (0.0, 1.0),
    };
    if lower == upper {
        lower -= 0.5;
        upper += 0.5;
    }

    let width = (upper - lower) / n_bins as f64;
    let mut counts = vec![0usize; n_bins];
    for &length in lengths {
        let index = ((length as f64 - lower) / width) as usize;
        counts[index.min(n_bins - 1)] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: lower + i as f64 * width,
            upper: if i + 1 == n_bins {
                upper
            } else {
                lower + (i + 1) as f64 * width
            },
            count,
        })
        .collect();

    Ok(Histogram { bins })
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_value_counts_order() {
        let values = ["b", "a", "c", "a", "b", "a"].map(Some);
        let counts = value_counts(values);

        let flat: Vec<(&str, usize)> = counts.iter().map(|c| (c.value.as_str(), c.count)).collect();
        assert_eq!(flat, vec![("a", 3), ("b", 2), ("c", 1)]);
    }

    #[rstest]
    fn test_value_counts_ties_and_missing() {
        let counts = value_counts([Some("z"), None, Some("y"), None]);
        let flat: Vec<(&str, usize)> = counts.iter().map(|c| (c.value.as_str(), c.count)).collect();
        assert_eq!(flat, vec![("y", 1), ("z", 1)]);
    }

    #[rstest]
    fn test_n_unique_ignores_missing() {
        assert_eq!(n_unique([Some("a"), Some("b"), Some("a"), None]), 2);
        assert_eq!(n_unique(Vec::<Option<&str>>::new()), 0);
    }

    #[rstest]
    fn test_length_counts() {
        let counts = length_counts(&[300, 10, 300, 10, 5]);
        assert_eq!(
            counts,
            vec![
                LengthCount { ali_length: 10, count: 2 },
                LengthCount { ali_length: 300, count: 2 },
                LengthCount { ali_length: 5, count: 1 },
            ]
        );
    }

    #[rstest]
    fn test_summarize_even() {
        let summary = summarize_lengths(&[4, 1, 3, 2]).unwrap();

        assert_eq!(summary.count, 4);
        assert_eq!(summary.minimum, 1);
        assert_eq!(summary.maximum, 4);
        assert_eq!(summary.mean, 2.5);
        assert_eq!(summary.median, 2.5);
        assert!((summary.std.unwrap() - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[rstest]
    fn test_summarize_odd_and_single() {
        assert_eq!(summarize_lengths(&[9, 1, 5]).unwrap().median, 5.0);

        let single = summarize_lengths(&[7]).unwrap();
        assert_eq!(single.median, 7.0);
        assert_eq!(single.std, None);

        assert_eq!(summarize_lengths(&[]), None);
    }

    #[rstest]
    fn test_histogram_bins() {
        let values: Vec<u64> = (1..=10).collect();
        let histogram = histogram(&values, 3).unwrap();

        let counts: Vec<usize> = histogram.bins.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![3, 3, 4]);
        assert_eq!(histogram.bins[0].lower, 1.0);
        assert_eq!(histogram.bins[1].lower, 4.0);
        assert_eq!(histogram.bins[2].upper, 10.0);
        assert_eq!(histogram.total(), 10);
    }

    #[rstest]
    fn test_histogram_single_value() {
        let histogram = histogram(&[42, 42, 42], 4).unwrap();

        assert_eq!(histogram.bins.len(), 4);
        assert_eq!(histogram.bins[0].lower, 41.5);
        assert_eq!(histogram.bins[3].upper, 42.5);
        assert_eq!(histogram.bins.iter().filter(|b| b.count > 0).count(), 1);
        assert_eq!(histogram.total(), 3);
    }

    #[rstest]
    fn test_histogram_empty_and_invalid() {
        let empty = histogram(&[], 2).unwrap();
        assert_eq!(empty.total(), 0);
        assert_eq!(empty.bins[1].upper, 1.0);

        assert_eq!(histogram(&[1, 2], 0), Err(StatsError::InvalidBinCount(0)));
    }
}
