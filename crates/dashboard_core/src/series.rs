//! Small numeric helpers shared by chart views.

/// Rounds to `decimals` places, halves away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Running sum as a percentage of the total, one decimal, in input order.
///
/// The order is the caller's ranking and is never changed. A sequence whose
/// total is zero yields zeros.
pub fn cumulative_percent(magnitudes: &[f64]) -> Vec<f64> {
    let total: f64 = magnitudes.iter().sum();
    if total == 0.0 {
        return vec![0.0; magnitudes.len()];
    }

    let mut running = 0.0;
    magnitudes
        .iter()
        .map(|value| {
            running += value;
            round_to(running / total * 100.0, 1)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cumulative_percent_ends_at_one_hundred() {
        let spend = [45.2, 38.7, 22.4, 18.9, 15.6, 12.3, 9.8, 7.5, 6.2, 23.4];
        let cumulative = cumulative_percent(&spend);

        assert_eq!(cumulative.len(), spend.len());
        assert_eq!(cumulative[0], 22.6);
        assert_eq!(*cumulative.last().expect("last"), 100.0);
        assert!(cumulative.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn preserves_caller_order() {
        let cumulative = cumulative_percent(&[1.0, 3.0]);
        assert_eq!(cumulative, vec![25.0, 100.0]);
        let cumulative = cumulative_percent(&[3.0, 1.0]);
        assert_eq!(cumulative, vec![75.0, 100.0]);
    }

    #[test]
    fn zero_entries_keep_the_sequence_flat() {
        assert_eq!(cumulative_percent(&[2.0, 0.0, 2.0]), vec![50.0, 50.0, 100.0]);
        assert_eq!(cumulative_percent(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert!(cumulative_percent(&[]).is_empty());
    }

    #[test]
    fn round_to_one_decimal() {
        assert_eq!(round_to(12.345, 1), 12.3);
        assert_eq!(round_to(7.25, 0), 7.0);
    }
}
