/// Asserts that a numerical value is in the provided interval `[a,b]` and panics
/// with a helpful message if not
///
/// ### Example
/// ```should_panic
/// let epsilon = 2.0;
/// bandit_regret::assert_interval!(epsilon, 0.0, 1.0);
/// ```
/// This will panic with the message "Invalid value for \`epsilon\`. Must be in the interval \[0, 1\]."
#[macro_export]
macro_rules! assert_interval {
    ($var:expr, $a:expr, $b:expr) => {
        assert!(
            $var >= $a && $var <= $b,
            "Invalid value for `{}`. Must be in the interval [{}, {}].",
            stringify!($var),
            $a,
            $b,
        );
    };
}

/// Index of the largest value, breaking ties by the lowest index
///
/// `Iterator::max_by` keeps the *last* maximum, so ties are resolved by hand.
/// NaN values are never selected unless every value is NaN.
///
/// **Panics** if `values` is empty
pub(crate) fn argmax(values: &[f64]) -> usize {
    assert!(!values.is_empty(), "argmax of an empty slice");
    values.iter().enumerate().fold(0, |best, (i, &x)| {
        let current = values[best];
        if x > current || (current.is_nan() && !x.is_nan()) {
            i
        } else {
            best
        }
    })
}

/// Elementwise mean of equal-length series
///
/// **Panics** if `series` is empty or the series differ in length
pub(crate) fn mean_series(series: Vec<Vec<f64>>) -> Vec<f64> {
    assert!(
        series.windows(2).all(|w| w[0].len() == w[1].len()),
        "Series must have equal length"
    );
    let n = series.len() as f64;
    transpose_iter(series)
        .map(|column| column.iter().sum::<f64>() / n)
        .collect()
}

pub(crate) fn transpose_iter<T>(v: Vec<Vec<T>>) -> impl Iterator<Item = Vec<T>> {
    assert!(!v.is_empty());
    let len = v[0].len();
    let mut iters = v.into_iter().map(|n| n.into_iter()).collect::<Vec<_>>();
    (0..len).map(move |_| {
        iters
            .iter_mut()
            .map(|n| n.next().unwrap())
            .collect::<Vec<T>>()
    })
}
