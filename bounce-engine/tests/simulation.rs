use bounce_engine::{ Body, PointerSample, SimConfig, World };

use glam::Vec2;

/// A world with default tuning and a few spread-out bodies
fn populated_world() -> World {
    let mut world = World::new(SimConfig::default());
    for (pos, vel) in [
        (Vec2::new(-0.6, 0.4), Vec2::new(1.2, 0.)),
        (Vec2::new(0., 0.7), Vec2::new(-0.4, 0.3)),
        (Vec2::new(0.5, -0.2), Vec2::new(0., -1.)),
    ] {
        world.push_body(Body::new(pos, vel, 0.05, 10.).unwrap());
    }
    world
}

// ==================================================================================
// Wall containment
// ==================================================================================

#[test]
fn dropped_ball_settles_on_the_floor() {
    let mut world = World::new(SimConfig::default());
    world.push_body(Body::new(Vec2::new(0., 0.5), Vec2::ZERO, 0.05, 10.).unwrap());

    for _ in 0..600 {
        world.step(0.016, &PointerSample::default());
    }

    let body = &world.bodies()[0];
    let floor = -1. + body.radius();
    assert!(
        body.pos.y >= floor - 1e-3 && body.pos.y < floor + 0.1,
        "ball ended at y = {}, floor is {floor}",
        body.pos.y,
    );
    assert!(body.vel.y.abs() < 0.5, "still bouncing hard: {}", body.vel.y);
}

#[test]
fn bodies_stay_inside_the_walls() {
    let mut world = populated_world();
    let dt = 0.016;

    for _ in 0..500 {
        world.step(dt, &PointerSample::default());

        // walls resolve before integration, so at observation time at most
        // one step of drift plus a pair separation can remain
        let he = world.bounds().half_extents;
        for body in world.bodies() {
            let slack_x = body.vel.x.abs() * dt + 0.01;
            let slack_y = body.vel.y.abs() * dt + 0.01;
            assert!(body.pos.x.abs() <= he.x - body.radius() + slack_x);
            assert!(body.pos.y.abs() <= he.y - body.radius() + slack_y);
        }
    }
}

// ==================================================================================
// Collision laws through full steps
// ==================================================================================

#[test]
fn head_on_equal_masses_swap_velocities() {
    let mut world = World::new(SimConfig {
        gravity: Vec2::ZERO,
        drag: 0.,
        restitution: 1.,
        ..SimConfig::default()
    });
    world.push_body(Body::new(Vec2::new(-0.11, 0.), Vec2::new(1., 0.), 0.1, 5.).unwrap());
    world.push_body(Body::new(Vec2::new(0.11, 0.), Vec2::new(-1., 0.), 0.1, 5.).unwrap());

    // one step brings them into contact, the next resolves it
    for _ in 0..2 {
        world.step(0.016, &PointerSample::default());
    }

    let [a, b] = world.bodies() else { unreachable!() };
    assert!((a.vel.x - -1.).abs() < 1e-5, "left ball has vel.x = {}", a.vel.x);
    assert!((b.vel.x - 1.).abs() < 1e-5, "right ball has vel.x = {}", b.vel.x);
}

#[test]
fn drag_decay_is_monotonic() {
    let mut world = World::new(SimConfig {
        gravity: Vec2::ZERO,
        ..SimConfig::default()
    });
    world.push_body(Body::new(Vec2::ZERO, Vec2::new(2., 1.), 0.05, 1.).unwrap());

    let mut last_speed = world.bodies()[0].vel.length();
    for _ in 0..100 {
        world.step(0.016, &PointerSample::default());
        let speed = world.bodies()[0].vel.length();
        assert!(speed <= last_speed + 1e-6, "speed grew from {last_speed} to {speed}");
        last_speed = speed;
    }
}

// ==================================================================================
// Determinism and interaction
// ==================================================================================

#[test]
fn identical_worlds_stay_bitwise_identical() {
    let mut first = populated_world();
    let mut second = populated_world();

    for _ in 0..200 {
        first.step(0.016, &PointerSample::default());
        second.step(0.016, &PointerSample::default());
    }

    for (a, b) in first.bodies().iter().zip(second.bodies()) {
        assert_eq!(a.pos, b.pos);
        assert_eq!(a.vel, b.vel);
    }
}

#[test]
fn drag_gesture_places_holds_and_throws() {
    let mut world = World::new(SimConfig::default());
    world.push_body(Body::new(Vec2::ZERO, Vec2::ZERO, 0.1, 10.).unwrap());

    // press on the body at the viewport center
    world.pointer_pressed(Vec2::new(400., 300.));
    assert_eq!(world.selected(), Some(0));

    // drag right over a few frames; the body tracks the pointer exactly
    let mut pixel = Vec2::new(400., 300.);
    for _ in 0..5 {
        let last_pixel = pixel;
        pixel += Vec2::new(20., 0.);
        let pointer = PointerSample { pixel, last_pixel, down: true };
        world.step(0.016, &pointer);

        let expected = world.viewport().ndc_from_pixels(pixel);
        assert_eq!(world.bodies()[0].pos, expected);
    }

    world.pointer_released();
    assert_eq!(world.selected(), None);

    // thrown to the right with the gesture's velocity
    let vel = world.bodies()[0].vel;
    assert!(vel.x > 1., "throw was {vel}");
    assert!(vel.y.abs() < 1e-4);
}
