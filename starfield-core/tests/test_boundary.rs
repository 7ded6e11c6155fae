//! Tests for arena containment

use glam::Vec2;
use starfield_core::collision::CollisionResolver;
use starfield_core::config::Arena;
use starfield_core::tests::test_helpers::body;

fn contain_one(position: (f32, f32), velocity: (f32, f32)) -> Vec2 {
    // Mass 10 gives radius 10.5
    let mut bodies = vec![body(10.0, position, velocity)];
    CollisionResolver::new(Arena { width: 1280.0, height: 720.0 }).contain(&mut bodies);
    bodies[0].velocity
}

#[test]
fn test_left_wall_pushes_right() {
    assert_eq!(contain_one((5.0, 360.0), (-3.0, 1.0)), Vec2::new(3.0, 1.0));
}

#[test]
fn test_right_wall_pushes_left() {
    assert_eq!(contain_one((1275.0, 360.0), (2.0, 0.0)), Vec2::new(-2.0, 0.0));
}

#[test]
fn test_top_wall_pushes_down() {
    assert_eq!(contain_one((640.0, 5.0), (0.0, -4.0)), Vec2::new(0.0, 4.0));
}

#[test]
fn test_bottom_wall_pushes_up() {
    assert_eq!(contain_one((640.0, 715.0), (0.5, 3.0)), Vec2::new(0.5, -3.0));
}

#[test]
fn test_corner_handles_both_axes() {
    assert_eq!(contain_one((5.0, 5.0), (-1.0, -1.0)), Vec2::new(1.0, 1.0));
    assert_eq!(contain_one((1279.0, 719.0), (1.0, 2.0)), Vec2::new(-1.0, -2.0));
}

#[test]
fn test_inward_velocity_kept() {
    assert_eq!(contain_one((5.0, 360.0), (3.0, 0.0)), Vec2::new(3.0, 0.0));
}

#[test]
fn test_inside_body_untouched() {
    assert_eq!(contain_one((640.0, 360.0), (-7.0, 9.0)), Vec2::new(-7.0, 9.0));
}

#[test]
fn test_position_not_changed() {
    let mut bodies = vec![body(10.0, (-20.0, 900.0), (-1.0, 1.0))];
    CollisionResolver::new(Arena::default()).contain(&mut bodies);

    assert_eq!(bodies[0].position, Vec2::new(-20.0, 900.0));
    assert_eq!(bodies[0].velocity, Vec2::new(1.0, -1.0));
}
