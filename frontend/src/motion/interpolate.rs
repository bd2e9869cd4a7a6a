/// Piecewise-linear lookup in a keyframe table of `(progress, value)` pairs
/// sorted by progress. Inputs outside the table hold the end values.
pub fn interpolate(progress: f64, keyframes: &[(f64, f64)]) -> f64 {
    let (first, last) = match (keyframes.first(), keyframes.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return 0.0,
    };
    if progress <= first.0 {
        return first.1;
    }
    if progress >= last.0 {
        return last.1;
    }
    for pair in keyframes.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if progress <= x1 {
            if x1 <= x0 {
                return y1;
            }
            return y0 + (y1 - y0) * (progress - x0) / (x1 - x0);
        }
    }
    last.1
}

/// Card offset in viewport-height percent: below the fold to resting.
pub const OFFSET_VH: [(f64, f64); 2] = [(0.0, 100.0), (1.0, 0.0)];

/// Fully opaque halfway through a card's own range.
pub const CARD_OPACITY: [(f64, f64); 3] = [(0.0, 0.0), (0.5, 1.0), (1.0, 1.0)];

/// Dimming of a card while the next one slides over it.
pub const COVERED_BRIGHTNESS: [(f64, f64); 2] = [(0.0, 1.0), (1.0, 0.6)];

/// Section heading fades out during the first half of the sequence.
pub const HEADING_OPACITY: [(f64, f64); 2] = [(0.0, 1.0), (0.5, 0.0)];

/// Scroll-reveal entrance used by section blocks.
pub const REVEAL_OPACITY: [(f64, f64); 3] = [(0.0, 0.0), (0.2, 0.5), (0.6, 1.0)];
pub const REVEAL_OFFSET_PX: [(f64, f64); 3] = [(0.0, 40.0), (0.4, 12.0), (1.0, 0.0)];

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn holds_end_values_outside_table() {
        assert_eq!(interpolate(-1.0, &OFFSET_VH), 100.0);
        assert_eq!(interpolate(2.0, &OFFSET_VH), 0.0);
        assert_eq!(interpolate(0.5, &[]), 0.0);
        assert_eq!(interpolate(0.5, &[(0.3, 7.0)]), 7.0);
    }

    #[test]
    fn interpolates_inside_segments() {
        assert!(close(interpolate(0.25, &OFFSET_VH), 75.0));
        assert!(close(interpolate(0.25, &CARD_OPACITY), 0.5));
        assert!(close(interpolate(0.75, &CARD_OPACITY), 1.0));
        assert!(close(interpolate(0.1, &REVEAL_OPACITY), 0.25));
        assert!(close(interpolate(0.4, &REVEAL_OPACITY), 0.75));
        assert!(close(interpolate(0.7, &REVEAL_OFFSET_PX), 6.0));
    }

    #[test]
    fn opacity_table_matches_doubling_rule() {
        for step in 0..=100 {
            let p = f64::from(step) / 100.0;
            assert!(close(interpolate(p, &CARD_OPACITY), (p * 2.0).min(1.0)));
        }
    }

    #[test]
    fn duplicate_breakpoints_jump() {
        let table = [(0.0, 0.0), (0.5, 0.0), (0.5, 1.0), (1.0, 1.0)];
        assert_eq!(interpolate(0.5, &table), 0.0);
        assert_eq!(interpolate(0.51, &table), 1.0);
    }
}
