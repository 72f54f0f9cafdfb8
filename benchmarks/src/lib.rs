//! Scene builders shared by the benchmarks.

use glam::Vec2;
use planar::ecs::components::{
    Acceleration, AngularVelocity, Collider, Friction, Mass, Position, Restitution, Rotation,
    Velocity,
};
use planar::{PhysicsConfig, PhysicsWorld};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Spawn `n` dynamic bodies, alternating boxes and circles, packed into a
/// square area so that a share of them overlap.
pub fn setup_scene(n: usize) -> (hecs::World, PhysicsWorld) {
    let mut world = hecs::World::new();
    let mut rng = StdRng::seed_from_u64(42);
    let side = (n as f32).sqrt() * 18.0;

    // Floor
    world.spawn((
        Position(Vec2::new(side * 0.5, side + 20.0)),
        Collider::rectangle(Vec2::new(side * 2.0, 40.0)).expect("valid floor"),
        Friction::default(),
    ));

    for i in 0..n {
        let position = Vec2::new(rng.gen::<f32>() * side, rng.gen::<f32>() * side);
        let collider = if i % 2 == 0 {
            Collider::rectangle(Vec2::splat(20.0)).expect("valid box")
        } else {
            Collider::circle(20.0).expect("valid circle")
        };
        world.spawn((
            Position(position),
            Rotation(rng.gen::<f32>()),
            Velocity(Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5) * 100.0),
            AngularVelocity(0.0),
            Acceleration(Vec2::new(0.0, 900.0)),
            Mass(1.0),
            Restitution(0.5),
            Friction::default(),
            collider,
        ));
    }

    (world, PhysicsWorld::new(PhysicsConfig::default()))
}

/// Spawn `n` capsules in a row, each overlapping its neighbour.
pub fn setup_capsule_chain(n: usize) -> (hecs::World, PhysicsWorld) {
    let mut world = hecs::World::new();
    for i in 0..n {
        world.spawn((
            Position(Vec2::new(i as f32 * 20.0, 0.0)),
            Velocity(Vec2::ZERO),
            Mass(1.0),
            Collider::capsule(24.0, 24.0).expect("valid capsule"),
        ));
    }
    (world, PhysicsWorld::new(PhysicsConfig::default()))
}
