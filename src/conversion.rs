//! Counter byte <-> percentage conversion.

/// Reassemble a 24-bit counter from its three bytes
pub fn raw_counter(lo: u8, hi: u8, ex: u8) -> u32 {
    lo as u32 | (hi as u32) << 8 | (ex as u32) << 16
}

/// Percentage of `threshold` represented by the counter bytes. Not clamped.
pub fn to_percent(threshold: u32, lo: u8, hi: u8, ex: u8) -> f64 {
    raw_counter(lo, hi, ex) as f64 * 100.0 / threshold as f64
}

/// Counter bytes `(lo, hi, ex)` for `percent` of `threshold`.
///
/// Bits above 24 are dropped. Callers keep `percent` within 0..=100.
pub fn from_percent(threshold: u32, percent: f64) -> (u8, u8, u8) {
    let raw = (percent * threshold as f64 / 100.0).round() as u64;
    (
        (raw & 0xFF) as u8,
        ((raw >> 8) & 0xFF) as u8,
        ((raw >> 16) & 0xFF) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{COUNTER_1_THRESHOLD, COUNTER_2_THRESHOLD};

    const THRESHOLDS: [u32; 2] = [COUNTER_1_THRESHOLD, COUNTER_2_THRESHOLD];

    #[test]
    fn percent_matches_formula() {
        let cases: [(u8, u8, u8); 4] = [(0, 0, 0), (0x96, 0x0F, 0), (0xFF, 0xFF, 0xFF), (1, 2, 3)];
        for &t in &THRESHOLDS {
            for &(lo, hi, ex) in &cases {
                let raw = lo as u32 | (hi as u32) << 8 | (ex as u32) << 16;
                assert_eq!(to_percent(t, lo, hi, ex), raw as f64 * 100.0 / t as f64);
            }
        }
    }

    #[test]
    fn threshold_is_one_hundred_percent() {
        assert_eq!(to_percent(COUNTER_1_THRESHOLD, 0x96, 0x0F, 0), 100.0);
        assert_eq!(to_percent(COUNTER_2_THRESHOLD, 0xB6, 0x0C, 0), 100.0);
    }

    #[test]
    fn reads_are_not_clamped() {
        assert!(to_percent(COUNTER_2_THRESHOLD, 0, 0, 1) > 100.0);
    }

    #[test]
    fn round_trip_within_rounding_bound() {
        for &t in &THRESHOLDS {
            let bound = 50.0 / t as f64 + 1e-9;
            for step in 0..=1000 {
                let p = step as f64 / 10.0;
                let (lo, hi, ex) = from_percent(t, p);
                let back = to_percent(t, lo, hi, ex);
                assert!((back - p).abs() <= bound, "t={:#x} p={} back={}", t, p, back);
            }
        }
    }

    #[test]
    fn known_values() {
        // 50% of 0xF96 = 1995 = 0x07CB
        assert_eq!(from_percent(COUNTER_1_THRESHOLD, 50.0), (0xCB, 0x07, 0x00));
        // 75% of 0xCB6 = 2440.5 -> 2441 = 0x0989
        assert_eq!(from_percent(COUNTER_2_THRESHOLD, 75.0), (0x89, 0x09, 0x00));
        assert_eq!(from_percent(COUNTER_1_THRESHOLD, 0.0), (0, 0, 0));
        assert_eq!(from_percent(COUNTER_1_THRESHOLD, 100.0), (0x96, 0x0F, 0x00));
    }

    #[test]
    fn bits_above_24_are_discarded() {
        // 0x1_000_001 raw
        let (lo, hi, ex) = from_percent(100, 0x0100_0001 as f64);
        assert_eq!((lo, hi, ex), (0x01, 0x00, 0x00));
    }
}
