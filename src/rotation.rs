//! Angle advancement for the rotating bodies
//!
//! Both the sun and the Earth spin about the vertical axis by a fixed
//! amount per tick. Angles decrease over time (the bodies revolve to the
//! left) and are wrapped by a full turn when they fall below -2π, so they
//! stay bounded for the lifetime of the process.

use std::f32::consts::TAU;

/// Wrap an angle back by one full turn once it has fallen below -2π.
///
/// The comparison is a strict less-than: an angle exactly equal to -2π is
/// left untouched for that tick and wraps on the next one.
pub fn wrap(current: f32) -> f32 {
    if current < -TAU {
        current + TAU
    } else {
        current
    }
}

/// Advance an angle by one tick: wrap it if needed, then subtract the
/// per-tick decrement. Pure arithmetic, cannot fail.
pub fn advance(current: f32, decrement: f32) -> f32 {
    wrap(current) - decrement
}

/// Spin state of one body: its current angle about the vertical axis and
/// its fixed per-tick speed.
#[derive(Debug, Clone, Copy)]
pub struct RotationState {
    angle: f32,
    speed: f32,
}

/// Result of advancing a [`RotationState`] by one tick.
///
/// `from` is the (possibly wrapped) angle the tick starts at, `to` is the
/// angle it ends at. When `wrapped` is set, the driver writes `from` to the
/// body's orientation immediately instead of letting the previous
/// transition's end value stand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinStep {
    pub from: f32,
    pub to: f32,
    pub wrapped: bool,
}

impl RotationState {
    /// Create a spin state. `speed` must be strictly positive and never
    /// changes afterwards.
    pub fn new(angle: f32, speed: f32) -> Self {
        debug_assert!(speed > 0.0, "rotation speed must be strictly positive");
        Self { angle, speed }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Advance the owned angle by one tick and report the transition the
    /// driver should animate.
    pub fn step(&mut self) -> SpinStep {
        let from = wrap(self.angle);
        let wrapped = from != self.angle;
        self.angle = from - self.speed;
        SpinStep {
            from,
            to: self.angle,
            wrapped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        EARTH_INITIAL_ANGLE, EARTH_ROTATION_SPEED, SUN_INITIAL_ANGLE, SUN_ROTATION_SPEED,
    };
    use std::f32::consts::{FRAC_PI_3, PI};

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-6, "{a} != {b}");
    }

    #[test]
    fn no_wrap_above_full_negative_turn() {
        // current >= -2π: plain subtraction
        assert_close(advance(1.0, 0.25), 0.75);
        assert_close(advance(0.0, 0.25), -0.25);
        assert_close(advance(-TAU + 0.1, 0.25), -TAU + 0.1 - 0.25);
    }

    #[test]
    fn wraps_below_full_negative_turn() {
        let current = -TAU - 0.001;
        assert_close(advance(current, 0.1), (current + TAU) - 0.1);
        assert_close(advance(current, 0.1), -0.101);
    }

    #[test]
    fn exact_boundary_is_not_wrapped() {
        // strict less-than: -2π itself passes through unwrapped that tick
        assert_close(advance(-TAU, 0.1), -TAU - 0.1);
        assert_close(wrap(-TAU), -TAU);
    }

    #[test]
    fn sun_first_tick() {
        let mut sun = RotationState::new(SUN_INITIAL_ANGLE, SUN_ROTATION_SPEED);
        let step = sun.step();
        assert_close(step.from, PI / 2.0);
        assert_close(step.to, FRAC_PI_3);
        assert!(!step.wrapped);
        assert_close(sun.angle(), FRAC_PI_3);
    }

    #[test]
    fn earth_first_tick() {
        let mut earth = RotationState::new(EARTH_INITIAL_ANGLE, EARTH_ROTATION_SPEED);
        let step = earth.step();
        assert_close(step.from, 0.0);
        assert_close(step.to, -PI / 40.0);
        assert!(!step.wrapped);
    }

    #[test]
    fn step_reports_wrap_and_starts_from_wrapped_angle() {
        let mut state = RotationState::new(-TAU - 0.001, 0.1);
        let step = state.step();
        assert!(step.wrapped);
        assert_close(step.from, -0.001);
        assert_close(step.to, -0.101);
    }

    #[test]
    fn angle_stays_bounded_over_many_ticks() {
        let mut state = RotationState::new(SUN_INITIAL_ANGLE, SUN_ROTATION_SPEED);
        let mut previous = state.angle();
        for _ in 0..10_000 {
            let step = state.step();
            // strictly decreasing within a tick, wrapping between ticks
            assert!(step.to < step.from);
            assert!(state.angle() > -TAU - state.speed());
            assert!(state.angle() < TAU);
            if !step.wrapped {
                assert!(state.angle() < previous);
            }
            previous = state.angle();
        }
    }
}
