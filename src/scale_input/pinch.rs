use bevy::prelude::*;

/// Turns two-finger touch positions into pinch distance deltas.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct PinchTracker {
    last_distance: Option<f32>,
}

impl PinchTracker {
    /// Feed the current touch positions once per frame. Returns `last - current` when two fingers
    /// stay down and their spread changed, so pinching outward yields a negative delta.
    #[allow(clippy::float_cmp, reason = "an unchanged spread must not re-trigger an impulse")]
    pub fn update(&mut self, contacts: &[Vec2]) -> Option<f32> {
        let [a, b] = contacts else {
            self.last_distance = None;
            return None;
        };

        let current = a.distance(*b);
        let last = self.last_distance.replace(current)?;

        (last != current).then_some(last - current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(spread: f32) -> [Vec2; 2] { [Vec2::ZERO, Vec2::new(spread, 0.0)] }

    #[test]
    fn test_first_two_finger_frame_only_records() {
        let mut tracker = PinchTracker::default();
        assert_eq!(tracker.update(&pair(100.0)), None);
        assert_eq!(tracker.last_distance, Some(100.0));
    }

    #[test]
    fn test_spreading_fingers_emit_negative_delta() {
        let mut tracker = PinchTracker::default();
        tracker.update(&pair(100.0));
        assert_eq!(tracker.update(&pair(130.0)), Some(-30.0));
        assert_eq!(tracker.update(&pair(120.0)), Some(10.0));
    }

    #[test]
    fn test_unchanged_spread_emits_nothing() {
        let mut tracker = PinchTracker::default();
        tracker.update(&pair(50.0));
        assert_eq!(tracker.update(&pair(50.0)), None);
    }

    #[test]
    fn test_other_contact_counts_reset() {
        let mut tracker = PinchTracker::default();
        tracker.update(&pair(100.0));

        assert_eq!(tracker.update(&[Vec2::ZERO]), None);
        assert_eq!(tracker.last_distance, None);

        // a fresh two-finger touch starts over rather than jumping from the old spread
        assert_eq!(tracker.update(&pair(300.0)), None);
        assert_eq!(tracker.update(&pair(290.0)), Some(10.0));

        tracker.update(&[Vec2::ZERO, Vec2::X, Vec2::Y]);
        assert_eq!(tracker.last_distance, None);
    }
}
