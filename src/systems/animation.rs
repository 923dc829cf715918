//! Animation driver
//!
//! Once per tick the driver advances the sun and Earth angles and installs
//! a fresh rotation transition for each; every frame, both bodies are
//! oriented along their transition at the tick's elapsed fraction. The two
//! bodies always move in lockstep: their transitions are installed in the
//! same tick and sampled with the same fraction.

use bevy::prelude::*;

use crate::components::{EarthGlobe, SpinArc, SunLight};
use crate::resources::{OrbitalTick, SkyRotations};

/// Advance both rotations when the current transition completes.
///
/// Both steps are computed before either body is touched. When a step
/// wrapped, the wrapped angle is written to the body immediately, ahead of
/// the per-frame sampling that follows.
pub fn drive_orbital_tick(
    time: Res<Time>,
    mut tick: ResMut<OrbitalTick>,
    mut rotations: ResMut<SkyRotations>,
    mut sun: Query<(&mut Transform, &mut SpinArc), (With<SunLight>, Without<EarthGlobe>)>,
    mut earth: Query<(&mut Transform, &mut SpinArc), (With<EarthGlobe>, Without<SunLight>)>,
) {
    if !tick.timer.tick(time.delta()).just_finished() {
        return;
    }

    let (sun_step, earth_step) = rotations.step();

    if let Ok((mut transform, mut arc)) = sun.single_mut() {
        if sun_step.wrapped {
            transform.rotation = Quat::from_rotation_y(sun_step.from);
        }
        *arc = SpinArc {
            from: sun_step.from,
            to: sun_step.to,
        };
    }

    if let Ok((mut transform, mut arc)) = earth.single_mut() {
        if earth_step.wrapped {
            transform.rotation = Quat::from_rotation_y(earth_step.from);
        }
        *arc = SpinArc {
            from: earth_step.from,
            to: earth_step.to,
        };
    }
}

/// Orient every spinning body along its transition, linear timing
pub fn apply_spin_arcs(tick: Res<OrbitalTick>, mut bodies: Query<(&mut Transform, &SpinArc)>) {
    let fraction = tick.timer.fraction();
    for (mut transform, arc) in bodies.iter_mut() {
        transform.rotation = Quat::from_rotation_y(arc.at(fraction));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        EARTH_INITIAL_ANGLE, EARTH_ROTATION_SPEED, SUN_INITIAL_ANGLE, SUN_ROTATION_SPEED,
    };
    use crate::rotation::RotationState;
    use std::f32::consts::{PI, TAU};
    use std::time::Duration;

    fn test_app() -> (App, Entity, Entity) {
        let mut app = App::new();
        app.init_resource::<Time>();
        app.init_resource::<SkyRotations>();
        app.init_resource::<OrbitalTick>();
        app.add_systems(Update, (drive_orbital_tick, apply_spin_arcs).chain());

        let sun = app
            .world_mut()
            .spawn((
                Transform::from_rotation(Quat::from_rotation_y(SUN_INITIAL_ANGLE)),
                SunLight,
                SpinArc::rest(SUN_INITIAL_ANGLE),
            ))
            .id();
        let earth = app
            .world_mut()
            .spawn((
                Transform::from_rotation(Quat::from_rotation_y(EARTH_INITIAL_ANGLE)),
                EarthGlobe,
                SpinArc::rest(EARTH_INITIAL_ANGLE),
            ))
            .id();

        (app, sun, earth)
    }

    fn advance(app: &mut App, millis: u64) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(millis));
        app.update();
    }

    fn rotation_of(app: &App, entity: Entity) -> Quat {
        app.world().get::<Transform>(entity).unwrap().rotation
    }

    fn assert_rotation(app: &App, entity: Entity, angle: f32) {
        let expected = Quat::from_rotation_y(angle);
        let actual = rotation_of(app, entity);
        assert!(
            actual.angle_between(expected) < 1e-4,
            "expected rotation {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn both_bodies_update_together_within_one_tick() {
        let (mut app, sun, earth) = test_app();
        let sun_before = rotation_of(&app, sun);
        let earth_before = rotation_of(&app, earth);

        // Halfway into the transition installed by the first completed tick
        advance(&mut app, 1500);

        let sun_after = rotation_of(&app, sun);
        let earth_after = rotation_of(&app, earth);
        assert!(sun_after.angle_between(sun_before) > 1e-4);
        assert!(earth_after.angle_between(earth_before) > 1e-4);

        assert_rotation(&app, sun, SUN_INITIAL_ANGLE - SUN_ROTATION_SPEED / 2.0);
        assert_rotation(&app, earth, EARTH_INITIAL_ANGLE - EARTH_ROTATION_SPEED / 2.0);
    }

    #[test]
    fn nothing_moves_before_the_first_tick_completes() {
        let (mut app, sun, earth) = test_app();

        advance(&mut app, 400);

        assert_rotation(&app, sun, SUN_INITIAL_ANGLE);
        assert_rotation(&app, earth, EARTH_INITIAL_ANGLE);
    }

    #[test]
    fn rotations_accumulate_one_speed_step_per_tick() {
        let (mut app, _, _) = test_app();

        for _ in 0..3 {
            advance(&mut app, 1000);
        }

        let rotations = app.world().resource::<SkyRotations>();
        let sun_expected = SUN_INITIAL_ANGLE - 3.0 * SUN_ROTATION_SPEED;
        let earth_expected = EARTH_INITIAL_ANGLE - 3.0 * EARTH_ROTATION_SPEED;
        assert!((rotations.sun.angle() - sun_expected).abs() < 1e-5);
        assert!((rotations.earth.angle() - earth_expected).abs() < 1e-5);
        assert!((sun_expected - 0.0).abs() < 1e-5, "sanity: 3 sun ticks from π/2 reach 0");
        assert!((earth_expected + 3.0 * PI / 40.0).abs() < 1e-5);
    }

    #[test]
    fn completed_tick_installs_the_next_transition() {
        let (mut app, sun, _) = test_app();

        // Exactly one tick: the new transition has just been installed and
        // its fraction is zero, so the body sits at the transition start.
        advance(&mut app, 1000);

        let arc = app.world().get::<SpinArc>(sun).unwrap();
        assert!((arc.from - SUN_INITIAL_ANGLE).abs() < 1e-5);
        assert!((arc.to - (SUN_INITIAL_ANGLE - SUN_ROTATION_SPEED)).abs() < 1e-5);
        assert_rotation(&app, sun, SUN_INITIAL_ANGLE);
    }

    #[test]
    fn body_below_a_full_negative_turn_starts_its_tick_at_the_wrapped_angle() {
        let (mut app, sun, _) = test_app();
        app.insert_resource(SkyRotations {
            sun: RotationState::new(-TAU - 0.001, 0.1),
            earth: RotationState::new(EARTH_INITIAL_ANGLE, EARTH_ROTATION_SPEED),
        });

        // Exactly one tick: the wrapped angle is written to the body and
        // the new transition runs from there
        advance(&mut app, 1000);

        let arc = app.world().get::<SpinArc>(sun).unwrap();
        assert!((arc.from - (-0.001)).abs() < 1e-4);
        assert!((arc.to - (-0.101)).abs() < 1e-4);
        assert_rotation(&app, sun, -0.001);
    }
}
