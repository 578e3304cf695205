//! Movement domain: speed-based admission of locomotion forces.

/// Speeds at or below this (after rounding) count as standing still.
const FROZEN_THRESHOLD: f32 = 0.02;

/// Round to two decimal places, half away from zero.
pub fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

/// Tracks the body speed across physics ticks and gates force application.
///
/// Limits must be positive; they are not validated here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedGate {
    current: f32,
    previous: f32,
    forward_limit: f32,
    run_limit: f32,
    backward_limit: f32,
}

impl SpeedGate {
    pub fn new(forward_limit: f32, run_limit: f32, backward_limit: f32) -> Self {
        Self {
            current: 0.0,
            previous: 0.0,
            forward_limit,
            run_limit,
            backward_limit,
        }
    }

    /// Record the speed read at the start of a physics tick.
    pub fn sample(&mut self, speed: f32) {
        self.previous = self.current;
        self.current = speed;
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn previous(&self) -> f32 {
        self.previous
    }

    pub fn may_walk(&self) -> bool {
        self.current < self.forward_limit
    }

    pub fn may_run(&self) -> bool {
        self.current < self.run_limit
    }

    pub fn may_backward(&self) -> bool {
        self.current < self.backward_limit
    }

    /// True when the body has been effectively stationary for two
    /// consecutive physics ticks.
    pub fn is_frozen(&self) -> bool {
        let previous = round2(self.previous);
        let current = round2(self.current);
        previous < FROZEN_THRESHOLD && current < FROZEN_THRESHOLD && previous == current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate_after(speeds: &[f32]) -> SpeedGate {
        let mut gate = SpeedGate::new(2.0, 4.0, 1.0);
        for speed in speeds {
            gate.sample(*speed);
        }
        gate
    }

    #[test]
    fn test_sample_shifts_history() {
        let gate = gate_after(&[0.5, 1.5]);
        assert_eq!(gate.previous(), 0.5);
        assert_eq!(gate.current(), 1.5);

        let gate = gate_after(&[0.5, 1.5, 3.0]);
        assert_eq!(gate.previous(), 1.5);
        assert_eq!(gate.current(), 3.0);
    }

    #[test]
    fn test_admission_is_strictly_below_limit() {
        let below = gate_after(&[1.99]);
        assert!(below.may_walk());

        let at_limit = gate_after(&[2.0]);
        assert!(!at_limit.may_walk());
        assert!(at_limit.may_run());
        assert!(!at_limit.may_backward());

        let fast = gate_after(&[4.0]);
        assert!(!fast.may_walk());
        assert!(!fast.may_run());
        assert!(!fast.may_backward());

        let slow = gate_after(&[0.5]);
        assert!(slow.may_backward());
    }

    #[test]
    fn test_frozen_after_two_still_ticks() {
        assert!(gate_after(&[0.01, 0.01]).is_frozen());
        assert!(gate_after(&[0.0, 0.0]).is_frozen());
    }

    #[test]
    fn test_not_frozen_when_speed_changes_or_is_too_high() {
        assert!(!gate_after(&[0.01, 0.03]).is_frozen());
        assert!(!gate_after(&[0.03, 0.01]).is_frozen());
        assert!(!gate_after(&[0.0, 0.01]).is_frozen());
        assert!(!gate_after(&[0.5, 0.5]).is_frozen());
    }

    #[test]
    fn test_frozen_tolerates_sub_rounding_noise() {
        assert!(gate_after(&[0.0101, 0.0099]).is_frozen());
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.014), 0.01);
        assert_eq!(round2(0.016), 0.02);
        assert_eq!(round2(-1.234), -1.23);
    }
}
