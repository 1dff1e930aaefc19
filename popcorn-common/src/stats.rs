/// Arithmetic mean accumulated as `sum(x_i / n)`.
///
/// Dividing each term before summing keeps the rounding identical to the
/// figures shown in the watched summary. An empty slice yields `0.0`.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    values.iter().fold(0.0, |acc, value| acc + value / n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert!(!mean(&[]).is_nan());
    }

    #[test]
    fn test_single_value() {
        assert_eq!(mean(&[7.5]), 7.5);
    }

    #[test]
    fn test_running_weighted_sum() {
        let values = [8.0, 9.0, 7.0];
        let expected = 8.0 / 3.0 + 9.0 / 3.0 + 7.0 / 3.0;
        assert_eq!(mean(&values), expected);
        assert!((mean(&values) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_runtime_average() {
        assert_eq!(mean(&[148.0, 152.0]), 150.0);
    }
}
