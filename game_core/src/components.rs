use crate::{Aabb, Config, GameRng};
use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which end of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle, usually the human
    Player,
    /// Right paddle, scripted unless two-player
    Opponent,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Horizontal sign of a velocity heading toward this side
    pub fn sign(self) -> f32 {
        match self {
            Side::Player => -1.0,
            Side::Opponent => 1.0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => f.write_str("Player"),
            Side::Opponent => f.write_str("Opponent"),
        }
    }
}

/// Paddle component - a vertical rectangle pinned to one side
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // top-left
    pub size: Vec2,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2) -> Self {
        Self { side, pos, size }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Shift vertically, keeping the whole paddle inside the field
    pub fn move_by(&mut self, delta_y: f32, field_height: f32) {
        self.pos.y = (self.pos.y + delta_y).clamp(0.0, field_height - self.size.y);
    }

    /// Scripted opponent: close the gap to the ball centre by at most `step`
    pub fn auto_track(&mut self, ball: &Ball, field_height: f32, step: f32) {
        let gap = ball.rect().center().y - self.center_y();
        let delta = gap.clamp(-step, step);
        if delta != 0.0 {
            self.move_by(delta, field_height);
        }
    }
}

/// How a paddle is driven each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    /// Queued input deltas
    Human,
    /// Tracks the ball on its own
    Auto,
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // top-left
    pub vel: Vec2, // units per frame
    pub size: Vec2,
    /// Position at the start of the current frame, for swept tests
    pub prev_pos: Vec2,
    /// Serve position
    pub origin: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel,
            size,
            prev_pos: pos,
            origin: pos,
        }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Split this frame's velocity so no step moves more than ~1 unit on the
    /// dominant axis
    pub fn sub_steps(&self) -> (u32, Vec2) {
        let steps = self.vel.x.abs().max(self.vel.y.abs()).max(1.0) as u32;
        (steps, self.vel / steps as f32)
    }

    /// Back to the serve position, heading toward `toward`
    pub fn reset(&mut self, toward: Side, config: &Config, rng: &mut GameRng) {
        self.pos = self.origin;
        self.prev_pos = self.origin;

        let vy = if rng.0.gen_bool(0.5) {
            config.serve_speed_y
        } else {
            -config.serve_speed_y
        };
        self.vel = Vec2::new(toward.sign() * config.serve_speed_x, vy);
    }

    /// Opening serve of a match: either direction
    pub fn serve(&mut self, config: &Config, rng: &mut GameRng) {
        let toward = if rng.0.gen_bool(0.5) {
            Side::Player
        } else {
            Side::Opponent
        };
        self.reset(toward, config, rng);
    }
}
