use crate::{Aabb, Ball, Config, Events, GameMap, Paddle, Side};
use hecs::World;

/// Decides where a ball ends up, and how fast, after striking a paddle
pub trait CollisionResolver {
    /// Push `ball` clear of `paddle` (defending `side`) and set its rebound velocity
    fn resolve(&self, ball: &mut Ball, paddle: &Aabb, side: Side, config: &Config);
}

/// Rebound angle follows the impact point; every return adds a little pace
/// up to the horizontal cap.
#[derive(Debug, Clone, Copy, Default)]
pub struct AngledBounce;

impl CollisionResolver for AngledBounce {
    fn resolve(&self, ball: &mut Ball, paddle: &Aabb, side: Side, config: &Config) {
        // Flush against the facing edge, plus a nudge so the next frame starts clear
        ball.pos.x = match side {
            Side::Player => paddle.max.x + config.paddle_nudge,
            Side::Opponent => paddle.min.x - ball.size.x - config.paddle_nudge,
        };

        // -1 = top edge of the paddle, 1 = bottom edge
        let offset = ((ball.rect().center().y - paddle.center().y) / (paddle.height() / 2.0))
            .clamp(-1.0, 1.0);

        let speed_x = (ball.vel.x.abs() + config.speed_increment).min(config.max_speed_x);
        ball.vel.x = side.opposite().sign() * speed_x;
        ball.vel.y = (ball.vel.y + offset * config.angle_gain)
            .clamp(-config.max_speed_y, config.max_speed_y);
    }
}

/// What a collision sweep touched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contact {
    pub wall: bool,
    pub paddle: Option<Side>,
}

impl Ball {
    /// Re-walk this frame's path in sub-steps, testing the paddles after each one.
    ///
    /// The paddle test is swept: it uses the box spanning the last tested
    /// position and the current one, so a ball that jumped clean over a thin
    /// paddle is still caught. The first sub-step sweeps from `prev_pos`, which
    /// covers the distance already travelled by [`Ball::advance`].
    pub fn check_collision(
        &mut self,
        paddles: &[Paddle],
        map: &GameMap,
        config: &Config,
        resolver: &dyn CollisionResolver,
    ) -> Contact {
        let mut contact = Contact::default();
        let (steps, mut step) = self.sub_steps();
        let mut from = self.prev_pos;

        'sweep: for _ in 0..steps {
            self.pos += step;
            contact.wall |= self.bounce_off_walls(map, &mut step);

            let swept = Aabb::from_pos_size(from, self.size).union(&self.rect());
            for paddle in paddles {
                let rect = paddle.rect();
                if self.heading_toward(paddle.side) && swept.intersects(&rect) {
                    resolver.resolve(self, &rect, paddle.side, config);
                    contact.paddle = Some(paddle.side);
                    break 'sweep;
                }
            }
            from = self.pos;
        }

        self.prev_pos = self.pos;
        self.correct_drift(map, config);
        contact
    }

    fn heading_toward(&self, side: Side) -> bool {
        self.vel.x * side.sign() > 0.0
    }

    /// Unreachable with a well-behaved resolver; clamp rather than let the
    /// ball leave the field or outrun the caps.
    fn correct_drift(&mut self, map: &GameMap, config: &Config) {
        let max_y = map.height - self.size.y;
        if !(0.0..=max_y).contains(&self.pos.y) {
            log::warn!("ball y {} left [0, {}], clamping", self.pos.y, max_y);
            self.pos.y = self.pos.y.clamp(0.0, max_y);
        }

        if self.vel.x.abs() > config.max_speed_x || self.vel.y.abs() > config.max_speed_y {
            log::warn!("ball velocity {} above caps, clamping", self.vel);
            self.vel.x = self.vel.x.clamp(-config.max_speed_x, config.max_speed_x);
            self.vel.y = self.vel.y.clamp(-config.max_speed_y, config.max_speed_y);
        }
    }
}

/// Check ball collisions with walls and paddles
pub fn check_collisions(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    resolver: &dyn CollisionResolver,
    events: &mut Events,
) {
    // Collect paddle data without holding borrows
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let contact = ball.check_collision(&paddles, map, config, resolver);
        if contact.wall {
            events.ball_hit_wall = true;
        }
        if let Some(side) = contact.paddle {
            log::debug!("{} returned the ball at {}", side, ball.vel);
            events.ball_hit_paddle = Some(side);
        }
    }
}
