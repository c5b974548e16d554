use crate::{Ball, Config, Events, GameMap, GameRng, Score, Side};
use hecs::World;

/// Check if ball left the field through either side (scoring)
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    config: &Config,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.x <= 0.0 {
            Side::Opponent
        } else if ball.pos.x + ball.size.x >= map.width {
            Side::Player
        } else {
            continue;
        };

        score.increment(scorer);
        events.scored = Some(scorer);
        log::debug!(
            "{} scores ({} - {})",
            scorer,
            score.player,
            score.opponent
        );

        // The conceding side serves: the ball heads away from it
        ball.reset(scorer, config, rng);
    }
}
