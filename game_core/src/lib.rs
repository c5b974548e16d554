pub mod components;
pub mod config;
pub mod error;
pub mod fsm;
pub mod game_state;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use fsm::*;
pub use game_state::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use systems::{AngledBounce, CollisionResolver, Contact};

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation. Returns the side that scored, if any.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    resolver: &dyn CollisionResolver,
    score: &mut Score,
    events: &mut Events,
    input: &mut InputQueue,
    rng: &mut GameRng,
) -> Option<Side> {
    // Clear events at start of frame
    events.clear();

    // 1. Paddles: queued input, then scripted tracking
    ingest_inputs(world, map, input);
    track_ball(world, map, config);

    // 2. Move ball (top/bottom walls only)
    move_ball(world, map, events);

    // 3. Swept check against paddles and walls
    check_collisions(world, map, config, resolver, events);

    // 4. Check scoring (ball left the field)
    check_scoring(world, map, score, events, rng, config);

    events.scored
}

/// Helper to create a vertically centred paddle entity
pub fn create_paddle(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    side: Side,
    controller: Controller,
) -> hecs::Entity {
    let size = Vec2::new(config.paddle_width, config.paddle_height);
    world.spawn((Paddle::new(side, map.paddle_spawn(side, config), size), controller))
}

/// Helper to create the ball entity; `pos` becomes its serve position
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2, size: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, Vec2::splat(size)),))
}
