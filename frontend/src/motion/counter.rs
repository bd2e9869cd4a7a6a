//! Count-up animation for the metric boxes.

/// Full length of one count-up run.
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Frame interval used when driving the counter from a timer.
pub const COUNTER_FRAME_MS: u32 = 16;

pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// Counter reading `elapsed_ms` after the run started. Lands exactly on
/// `end` once the duration has passed.
pub fn counter_value(end: f64, elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return end;
    }
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    if progress >= 1.0 {
        end
    } else {
        end * ease_out_quart(progress)
    }
}

/// Metric values arrive as strings like `"99.3"`; anything unparsable
/// counts up to zero.
pub fn parse_metric(value: &str) -> f64 {
    let numeric: String = value
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    numeric.parse().unwrap_or(0.0)
}

/// Large-number suffixes keep one decimal, everything else is rounded.
pub fn format_metric(value: f64, suffix: &str) -> String {
    match suffix {
        "+" | "M" => format!("{:.1}", value),
        _ => format!("{}", value.round() as i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_both_ends() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert!(ease_out_quart(0.5) > 0.9);
        assert_eq!(ease_out_quart(3.0), 1.0);
    }

    #[test]
    fn counter_settles_on_target() {
        assert_eq!(counter_value(68.0, 0.0, COUNTER_DURATION_MS), 0.0);
        assert_eq!(counter_value(68.0, 2500.0, COUNTER_DURATION_MS), 68.0);
        let mid = counter_value(68.0, 1000.0, COUNTER_DURATION_MS);
        assert!(mid > 60.0 && mid < 68.0);
        assert_eq!(counter_value(5.0, 10.0, 0.0), 5.0);
    }

    #[test]
    fn parses_leading_number() {
        assert_eq!(parse_metric("99.3"), 99.3);
        assert_eq!(parse_metric(" 72 "), 72.0);
        assert_eq!(parse_metric("10k"), 10.0);
        assert_eq!(parse_metric("n/a"), 0.0);
    }

    #[test]
    fn formats_by_suffix() {
        assert_eq!(format_metric(67.6, "%"), "68");
        assert_eq!(format_metric(2.46, "M"), "2.5");
        assert_eq!(format_metric(150.0, "+"), "150.0");
        assert_eq!(format_metric(0.4, ""), "0");
    }
}
