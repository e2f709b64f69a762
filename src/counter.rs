//! Stat Counter Math
//!
//! Pure half of the animated hero counters: parse a target like "250+" into
//! a number and a preserved suffix, and compute the value shown at each tick
//! of the linear 0 → target ramp.

/// Number of animation steps from 0 to the target.
pub const COUNTER_TICKS: u32 = 50;

/// Milliseconds between steps (~1.5s total).
pub const COUNTER_TICK_MS: u32 = 30;

/// Split a stat label into its numeric target and trailing suffix.
///
/// The number is the leading digit run (thousands separators allowed inside,
/// e.g. "1,200+" → 1200); the suffix is everything after it ("+", "%", " km").
/// Returns `None` when the text does not start with a digit.
pub fn parse_counter(text: &str) -> Option<(u64, String)> {
    let trimmed = text.trim();
    let mut digits = String::new();
    let mut rest = trimmed;
    for (i, ch) in trimmed.char_indices() {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else if ch == ',' && !digits.is_empty() {
            // separator inside the number, skip
        } else {
            rest = &trimmed[i..];
            break;
        }
        rest = "";
    }
    if digits.is_empty() {
        return None;
    }
    let target = digits.parse::<u64>().ok()?;
    Some((target, rest.to_string()))
}

/// Value displayed at `tick` (1..=COUNTER_TICKS) of the ramp toward `target`.
/// Monotone, and exactly `target` on the final tick.
pub fn counter_value(target: u64, tick: u32) -> u64 {
    let tick = tick.min(COUNTER_TICKS) as u64;
    (target * tick / COUNTER_TICKS as u64).min(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_counter() {
        assert_eq!(parse_counter("250+"), Some((250, "+".to_string())));
        assert_eq!(parse_counter("95%"), Some((95, "%".to_string())));
        assert_eq!(parse_counter("1,200+"), Some((1200, "+".to_string())));
        assert_eq!(parse_counter("42"), Some((42, String::new())));
        assert_eq!(parse_counter("fast"), None);
        assert_eq!(parse_counter(""), None);
    }

    #[test]
    fn test_counter_ramp_ends_on_target() {
        assert_eq!(counter_value(250, 0), 0);
        assert_eq!(counter_value(250, COUNTER_TICKS), 250);
        // Never overshoots, even past the last tick
        assert_eq!(counter_value(250, COUNTER_TICKS + 10), 250);
    }

    #[test]
    fn test_counter_ramp_is_monotone() {
        let mut prev = 0;
        for tick in 1..=COUNTER_TICKS {
            let v = counter_value(997, tick);
            assert!(v >= prev, "ramp decreased at tick {tick}");
            prev = v;
        }
        assert_eq!(prev, 997);
    }
}
