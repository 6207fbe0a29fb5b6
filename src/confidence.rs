//! Maps raw scores onto a bounded, deliberately humble confidence percentage.

use crate::config::ConfidenceWindow;
use serde::Serialize;

/// `floor + round(raw / normalization * (ceiling - floor))`, clamped into
/// `[floor, ceiling]`. Scores outside the nominal raw range are absorbed by
/// the clamp.
///
/// Arithmetic stays in `f64` until the final clamp, so extreme windows
/// saturate instead of overflowing. `f64::max` discards a NaN operand.
pub fn map_confidence(raw: i32, window: &ConfidenceWindow) -> u8 {
    let floor = f64::from(window.floor);
    let ceiling = f64::from(window.ceiling);
    let scaled = (f64::from(raw) / window.normalization * (ceiling - floor)).round();
    let mapped = (floor + scaled).max(floor).min(ceiling);
    mapped.max(0.0).min(100.0) as u8
}

/// Presentation tier of a confidence percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConfidenceTier {
    /// 80 and above
    High,
    /// 60 to 79
    Medium,
    /// Below 60
    Low,
}

impl ConfidenceTier {
    pub fn of(confidence: u8) -> Self {
        if confidence >= 80 {
            ConfidenceTier::High
        } else if confidence >= 60 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "HIGH",
            ConfidenceTier::Medium => "MEDIUM",
            ConfidenceTier::Low => "LOW",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(raw: i32) -> u8 {
        map_confidence(raw, &ConfidenceWindow::default())
    }

    #[test]
    fn test_known_points() {
        assert_eq!(map(0), 45);
        assert_eq!(map(20), 55);
        assert_eq!(map(58), 74);
        assert_eq!(map(105), 97);
    }

    #[test]
    fn test_clamped_both_ends() {
        assert_eq!(map(-10), 45);
        assert_eq!(map(-1000), 45);
        assert_eq!(map(106), 97);
        assert_eq!(map(10_000), 97);
    }

    #[test]
    fn test_bounds_hold_over_range() {
        for raw in -50..=200 {
            let c = map(raw);
            assert!((45..=97).contains(&c), "raw {} mapped to {}", raw, c);
        }
    }

    #[test]
    fn test_monotonic() {
        let mut prev = map(-20);
        for raw in -19..=150 {
            let c = map(raw);
            assert!(c >= prev);
            prev = c;
        }
    }

    #[test]
    fn test_extreme_windows_saturate() {
        let tiny = ConfidenceWindow {
            normalization: 1e-300,
            ..ConfidenceWindow::default()
        };
        assert_eq!(map_confidence(10, &tiny), 97);
        assert_eq!(map_confidence(0, &tiny), 45);
        assert_eq!(map_confidence(-10, &tiny), 45);

        let flat = ConfidenceWindow {
            floor: 60,
            ceiling: 60,
            normalization: 1e-300,
        };
        assert_eq!(map_confidence(10, &flat), 60);

        let wide = ConfidenceWindow {
            floor: i32::MIN,
            ceiling: i32::MAX,
            normalization: 105.0,
        };
        assert_eq!(map_confidence(i32::MAX, &wide), 100);
        assert_eq!(map_confidence(i32::MIN, &wide), 0);
    }

    #[test]
    fn test_tiers() {
        assert_eq!(ConfidenceTier::of(97), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::of(80), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::of(79), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::of(60), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::of(45), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::Medium.as_str(), "MEDIUM");
    }
}
