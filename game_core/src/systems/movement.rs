use crate::{Ball, Config, Controller, Events, GameMap, Paddle};
use glam::Vec2;
use hecs::World;

impl Ball {
    /// Sub-stepped move for one frame, bouncing off the top and bottom walls.
    /// Leaving through the sides is not handled here; scoring reads the final x.
    /// Returns true if a wall was hit.
    pub fn advance(&mut self, map: &GameMap) -> bool {
        self.prev_pos = self.pos;

        let (steps, mut step) = self.sub_steps();
        let mut hit_wall = false;
        for _ in 0..steps {
            self.pos += step;
            hit_wall |= self.bounce_off_walls(map, &mut step);
        }
        hit_wall
    }

    /// Snap to the wall and point `vel` (and the remaining `step`) away from it.
    /// Only counts as a hit when the ball was heading into the wall.
    pub(crate) fn bounce_off_walls(&mut self, map: &GameMap, step: &mut Vec2) -> bool {
        if self.pos.y <= 0.0 {
            let hit = step.y < 0.0;
            self.pos.y = 0.0;
            self.vel.y = self.vel.y.abs();
            step.y = step.y.abs();
            hit
        } else if self.pos.y + self.size.y >= map.height {
            let hit = step.y > 0.0;
            self.pos.y = map.height - self.size.y;
            self.vel.y = -self.vel.y.abs();
            step.y = -step.y.abs();
            hit
        } else {
            false
        }
    }
}

/// Let scripted paddles follow the ball
pub fn track_ball(world: &mut World, map: &GameMap, config: &Config) {
    let ball = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => *ball,
        None => return, // No ball in world
    };

    for (_entity, (paddle, controller)) in world.query_mut::<(&mut Paddle, &Controller)>() {
        if *controller == Controller::Auto {
            paddle.auto_track(&ball, map.height, config.ai_step);
        }
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, map: &GameMap, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.advance(map) {
            events.ball_hit_wall = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Side};

    fn setup() -> (World, Config, GameMap, Events) {
        let config = Config::new();
        let map = GameMap::new(&config).unwrap();
        (World::new(), config, map, Events::new())
    }

    fn ball_at(pos: Vec2, vel: Vec2) -> Ball {
        Ball::new(pos, vel, Vec2::splat(7.0))
    }

    #[test]
    fn test_advance_moves_by_full_velocity() {
        let (_, _, map, _) = setup();
        let mut ball = ball_at(Vec2::new(396.0, 296.0), Vec2::new(5.0, 3.0));

        assert!(!ball.advance(&map));

        assert!((ball.pos.x - 401.0).abs() < 1e-4);
        assert!((ball.pos.y - 299.0).abs() < 1e-4);
        assert_eq!(ball.prev_pos, Vec2::new(396.0, 296.0));
    }

    #[test]
    fn test_advance_clamps_to_top_wall() {
        let (_, _, map, _) = setup();
        let mut ball = ball_at(Vec2::new(100.0, 0.5), Vec2::new(0.0, -1.0));

        assert!(ball.advance(&map), "Should report the wall hit");

        assert_eq!(ball.pos.y, 0.0, "Single step ends clamped to the wall");
        assert_eq!(ball.vel.y, 1.0, "Should head down after hitting top");
    }

    #[test]
    fn test_advance_bounces_off_bottom_wall() {
        let (_, _, map, _) = setup();
        let mut ball = ball_at(Vec2::new(100.0, 591.0), Vec2::new(5.0, 3.0));

        assert!(ball.advance(&map));

        assert!(ball.vel.y < 0.0, "Should head up after hitting bottom");
        assert!(ball.pos.y + ball.size.y <= map.height);
        assert_eq!(ball.vel.x, 5.0, "X velocity should be unchanged");
    }

    #[test]
    fn test_top_wall_flip_from_centre_serve() {
        let (_, _, map, _) = setup();
        let mut ball = ball_at(Vec2::new(396.0, 296.0), Vec2::new(5.0, 3.0));

        let mut top_hits = 0;
        for _ in 0..1000 {
            let vy_before = ball.vel.y;
            let start_y = ball.pos.y;
            let (steps, step) = ball.sub_steps();
            let hit = ball.advance(&map);
            assert!(ball.pos.y >= 0.0 && ball.pos.y <= map.height - ball.size.y);

            if hit && vy_before < 0.0 {
                top_hits += 1;
                assert!(ball.vel.y > 0.0, "vy should flip to positive at the top");

                // Snapped to y = 0 on the first sub-step that reached the wall,
                // then the remaining sub-steps carried it back down
                let contact_step = (1..=steps)
                    .find(|k| start_y + *k as f32 * step.y <= 0.0)
                    .unwrap();
                let expected_y = (steps - contact_step) as f32 * step.y.abs();
                assert!(
                    (ball.pos.y - expected_y).abs() < 1e-3,
                    "expected y {} after snapping to the wall, got {}",
                    expected_y,
                    ball.pos.y
                );
                break;
            }
        }
        assert_eq!(top_hits, 1, "Ball should reach the top wall");
    }

    #[test]
    fn test_move_ball_sets_wall_event() {
        let (mut world, _, map, mut events) = setup();
        create_ball(&mut world, Vec2::new(100.0, 1.0), Vec2::new(5.0, -3.0), 7.0);

        move_ball(&mut world, &map, &mut events);

        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_auto_paddle_tracks_ball() {
        let (mut world, config, map, _) = setup();
        let paddle = create_paddle(&mut world, &map, &config, Side::Opponent, Controller::Auto);
        create_ball(&mut world, Vec2::new(600.0, 50.0), Vec2::new(5.0, 3.0), 7.0);

        track_ball(&mut world, &map, &config);

        let p = world.get::<&Paddle>(paddle).unwrap();
        assert_eq!(p.pos.y, 250.0 - config.ai_step);
    }

    #[test]
    fn test_human_paddle_is_not_tracked() {
        let (mut world, config, map, _) = setup();
        let paddle = create_paddle(&mut world, &map, &config, Side::Player, Controller::Human);
        create_ball(&mut world, Vec2::new(600.0, 50.0), Vec2::new(5.0, 3.0), 7.0);

        track_ball(&mut world, &map, &config);

        let p = world.get::<&Paddle>(paddle).unwrap();
        assert_eq!(p.pos.y, 250.0);
    }

    #[test]
    fn test_track_without_ball_is_noop() {
        let (mut world, config, map, _) = setup();
        let paddle = create_paddle(&mut world, &map, &config, Side::Opponent, Controller::Auto);

        track_ball(&mut world, &map, &config);

        let p = world.get::<&Paddle>(paddle).unwrap();
        assert_eq!(p.pos.y, 250.0);
    }
}
