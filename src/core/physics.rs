//! Damped velocity model for player movement.
//!
//! Pure functions only; the player task owns the state and feeds it back in
//! every tick.

use crate::types::{SPEED_DAMPING, SPEED_LIMIT};

/// Advance one axis of velocity by one tick.
///
/// Prior speed fades by the damping factor, then directional input (sign only)
/// adds one unit of thrust, and the result is clamped to the speed limit.
/// With no input the speed decays geometrically toward zero.
pub fn step_axis(speed: f64, direction: i8) -> f64 {
    let mut speed = speed * SPEED_DAMPING;
    speed += f64::from(direction.signum());
    speed.clamp(-SPEED_LIMIT, SPEED_LIMIT)
}

/// Advance both axes of velocity by one tick.
pub fn update_speed(row_speed: f64, col_speed: f64, row_dir: i8, col_dir: i8) -> (f64, f64) {
    (step_axis(row_speed, row_dir), step_axis(col_speed, col_dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_speed_decays_toward_zero() {
        let mut speed = 2.0;
        for _ in 0..40 {
            speed = step_axis(speed, 0);
        }
        assert!(speed.abs() < 1e-3);
    }

    #[test]
    fn held_input_converges_below_limit() {
        let mut speed = 0.0;
        for _ in 0..100 {
            speed = step_axis(speed, 1);
            assert!(speed <= SPEED_LIMIT);
        }
        // Geometric series limit: 1 / (1 - damping).
        assert!(speed > 1.0 && speed <= SPEED_LIMIT);
    }

    #[test]
    fn reversal_fights_existing_momentum() {
        let mut speed = 0.0;
        for _ in 0..20 {
            speed = step_axis(speed, 1);
        }
        let before = speed;
        speed = step_axis(speed, -1);
        assert!(speed < before);
    }

    #[test]
    fn direction_magnitude_is_ignored() {
        assert_eq!(step_axis(0.0, 1), step_axis(0.0, 127));
        assert_eq!(step_axis(0.0, -1), step_axis(0.0, -128));
    }

    #[test]
    fn both_axes_update_independently() {
        let (rs, cs) = update_speed(1.0, -1.0, 0, 1);
        assert_eq!(rs, 1.0 * SPEED_DAMPING);
        assert_eq!(cs, -1.0 * SPEED_DAMPING + 1.0);
    }
}
