use hecs::World;

use crate::components::*;
use crate::resources::*;
use crate::GameMap;

/// Apply queued displacement to human-controlled paddles, then drain the queue
pub fn ingest_inputs(world: &mut World, map: &GameMap, input: &mut InputQueue) {
    for (_entity, (paddle, controller)) in world.query_mut::<(&mut Paddle, &Controller)>() {
        if *controller != Controller::Human {
            continue;
        }
        let delta = input.total_for(paddle.side);
        if delta != 0.0 {
            paddle.move_by(delta, map.height);
        }
    }

    // Clear processed inputs
    input.clear();
}
