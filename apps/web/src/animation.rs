//! Loading pulse shown while the trial document is in flight.

const PULSE_SPEED: f64 = 3.0;
const PULSE_MAX_FRAME_DELTA: f64 = 0.25;
const PULSE_CYCLE: f64 = 4.0;

/// Advances the pulse phase by the time since the last frame.
///
/// The phase only moves while `active`; the clock is always updated so the
/// pulse does not jump when loading starts again.
pub fn advance_pulse(phase: f64, last_tick: Option<f64>, now_seconds: f64, active: bool) -> (f64, Option<f64>) {
    let delta = last_tick
        .map(|last| (now_seconds - last).clamp(0.0, PULSE_MAX_FRAME_DELTA))
        .unwrap_or(0.0);

    let next = if active {
        delta.mul_add(PULSE_SPEED, phase).rem_euclid(PULSE_CYCLE)
    } else {
        phase.rem_euclid(PULSE_CYCLE)
    };

    (next, Some(now_seconds))
}

/// `""`, `"."`, `".."` or `"..."` for the current phase.
pub fn loading_dots(phase: f64) -> &'static str {
    match phase.rem_euclid(PULSE_CYCLE) as u8 {
        0 => "",
        1 => ".",
        2 => "..",
        _ => "...",
    }
}

#[cfg(test)]
mod tests {
    use super::{advance_pulse, loading_dots, PULSE_CYCLE, PULSE_SPEED};

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-9, "expected {expected}, got {actual}, diff {diff}");
    }

    #[test]
    fn first_tick_initializes_time_without_advancing() {
        let (phase, last_tick) = advance_pulse(1.5, None, 10.0, true);
        assert_close(phase, 1.5);
        assert_eq!(last_tick, Some(10.0));
    }

    #[test]
    fn active_pulse_advances_and_wraps() {
        let start = PULSE_CYCLE - 0.1;
        let (phase, last_tick) = advance_pulse(start, Some(4.0), 4.2, true);
        assert_close(phase, 0.2f64.mul_add(PULSE_SPEED, start).rem_euclid(PULSE_CYCLE));
        assert_eq!(last_tick, Some(4.2));
    }

    #[test]
    fn idle_pulse_holds_but_updates_clock() {
        let (phase, last_tick) = advance_pulse(2.25, Some(1.0), 1.2, false);
        assert_close(phase, 2.25);
        assert_eq!(last_tick, Some(1.2));
    }

    #[test]
    fn large_frame_gap_is_clamped() {
        let (phase, _) = advance_pulse(0.0, Some(3.0), 30.0, true);
        assert_close(phase, 0.25 * PULSE_SPEED);
    }

    #[test]
    fn backwards_time_does_not_reverse_the_pulse() {
        let (phase, _) = advance_pulse(3.5, Some(10.0), 9.0, true);
        assert_close(phase, 3.5);
    }

    #[test]
    fn dots_follow_the_phase() {
        assert_eq!(loading_dots(0.4), "");
        assert_eq!(loading_dots(1.0), ".");
        assert_eq!(loading_dots(3.9), "...");
        assert_eq!(loading_dots(5.2), ".");
    }
}
