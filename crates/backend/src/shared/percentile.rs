use rust_decimal::Decimal;

/// Percentile rank of `value` within `sorted` (ascending), in 0..=100.
///
/// Values equal to `value` count as half below it. An empty list ranks 0.
pub fn percentile_rank(sorted: &[Decimal], value: Decimal) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }

    let count_lower = sorted.iter().filter(|v| **v < value).count();
    let count_equal = sorted.iter().filter(|v| **v == value).count();

    (count_lower as f64 + 0.5 * count_equal as f64) / sorted.len() as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(v: i64) -> Decimal {
        Decimal::from(v)
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(percentile_rank(&[], d(10)), 0.0);
    }

    #[test]
    fn test_distinct_values() {
        let sorted = [d(10), d(20), d(30), d(40)];
        assert_eq!(percentile_rank(&sorted, d(10)), 12.5);
        assert_eq!(percentile_rank(&sorted, d(40)), 87.5);
    }

    #[test]
    fn test_ties_count_half() {
        let sorted = [d(10), d(20), d(20), d(30)];
        assert_eq!(percentile_rank(&sorted, d(20)), 50.0);
    }

    #[test]
    fn test_value_outside_list() {
        let sorted = [d(10), d(20)];
        assert_eq!(percentile_rank(&sorted, d(5)), 0.0);
        assert_eq!(percentile_rank(&sorted, d(50)), 100.0);
    }
}
