use rand::{Rng, SeedableRng};
use bounce_engine as be;
use macroquad::prelude::{ Vec2, Vec4 };

pub trait Scene {
    fn name(&self) -> &'static str;
    fn create_world(&self) -> be::World;
}

/// The classic pit: a cluster of small balls and one big one dropped into
/// the box, ready to be flung around with the mouse.
pub struct BallPit {
    seed: u64,
    flip_gravity: bool,
    name: &'static str,
}

impl Scene for BallPit {
    fn name(&self) -> &'static str {
        self.name
    }

    fn create_world(&self) -> be::World {
        let mut rng = rand::rngs::SmallRng::seed_from_u64(self.seed);

        let mut config = be::SimConfig::default();
        if self.flip_gravity {
            config.gravity = -config.gravity;
        }

        let mut world = be::World::new(config);
        for _ in 0..20 {
            let pos = Vec2::new(rng.random_range(0. ..0.1), rng.random_range(0. ..0.1));
            let color = Vec4::new(
                rng.random_range(0. ..1.),
                rng.random_range(0. ..1.),
                rng.random_range(0. ..1.),
                1.,
            );
            world.push_body(
                be::Body::new(pos, Vec2::ZERO, 0.05, 10.)
                    .expect("pit ball parameters are valid")
                    .with_damping(config.wall_damping)
                    .expect("default damping is within range")
                    .with_color(color),
            );
        }
        let color = Vec4::new(
            rng.random_range(0. ..1.),
            rng.random_range(0. ..1.),
            rng.random_range(0. ..1.),
            1.,
        );
        world.push_body(
            be::Body::new(Vec2::new(0.05, 0.05), Vec2::ZERO, 0.2, 10.)
                .expect("big ball parameters are valid")
                .with_color(color),
        );
        world
    }
}

/// Two equal balls meeting in the middle with gravity and drag off, so the
/// elastic velocity swap is plainly visible.
pub struct HeadOnCollision;

impl Scene for HeadOnCollision {
    fn name(&self) -> &'static str {
        "Head-on collision"
    }

    fn create_world(&self) -> be::World {
        let mut world = be::World::new(be::SimConfig {
            gravity: Vec2::ZERO,
            drag: 0.,
            restitution: 1.,
            ..be::SimConfig::default()
        });
        world.push_body(
            be::Body::new(Vec2::new(-0.5, 0.), Vec2::new(1.5, 0.), 0.1, 5.)
                .expect("ball parameters are valid")
                .with_color(Vec4::new(0.9, 0.3, 0.3, 1.)),
        );
        world.push_body(
            be::Body::new(Vec2::new(0.5, 0.), Vec2::new(-1.5, 0.), 0.1, 5.)
                .expect("ball parameters are valid")
                .with_color(Vec4::new(0.3, 0.5, 0.9, 1.)),
        );
        world
    }
}

/// A heavy ball barrels through a light one.
pub struct HeavyMeetsLight;

impl Scene for HeavyMeetsLight {
    fn name(&self) -> &'static str {
        "Heavy meets light"
    }

    fn create_world(&self) -> be::World {
        let mut world = be::World::new(be::SimConfig {
            gravity: Vec2::ZERO,
            drag: 0.,
            restitution: 1.,
            ..be::SimConfig::default()
        });
        world.push_body(
            be::Body::new(Vec2::new(-0.6, 0.), Vec2::new(1., 0.), 0.2, 40.)
                .expect("ball parameters are valid")
                .with_color(Vec4::new(0.9, 0.7, 0.2, 1.)),
        );
        world.push_body(
            be::Body::new(Vec2::new(0.5, 0.), Vec2::new(-1., 0.), 0.05, 2.)
                .expect("ball parameters are valid")
                .with_color(Vec4::new(0.5, 0.9, 0.5, 1.)),
        );
        world
    }
}

pub fn get_all_scenes() -> Vec<Box<dyn Scene>> {
    vec![
        Box::new(BallPit {
            seed: 4444,
            flip_gravity: false,
            name: "Ball pit",
        }),
        Box::new(BallPit {
            seed: 4444,
            flip_gravity: true,
            name: "Ball pit, gravity flipped",
        }),
        Box::new(HeadOnCollision),
        Box::new(HeavyMeetsLight),
    ]
}
