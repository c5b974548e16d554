use crate::Side;
use serde::{Deserialize, Serialize};

/// Frame clock supplied by the host
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub now: f32,   // Host clock reading, seconds (monotonic)
    pub frame: u64, // Frames simulated this match
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u8,
    pub opponent: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player = self.player.saturating_add(1),
            Side::Opponent => self.opponent = self.opponent.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    pub fn has_winner(&self, target: u8) -> Option<Side> {
        if self.player >= target {
            Some(Side::Player)
        } else if self.opponent >= target {
            Some(Side::Opponent)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame, each kind at most once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Events {
    pub ball_hit_wall: bool,
    /// Paddle that returned the ball
    pub ball_hit_paddle: Option<Side>,
    /// Side that won the point
    pub scored: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = None;
        self.scored = None;
    }

    pub fn is_empty(&self) -> bool {
        !self.ball_hit_wall && self.ball_hit_paddle.is_none() && self.scored.is_none()
    }
}

/// Paddle displacement requests queued by the host between frames
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<(Side, f32)>, // (side, delta_y)
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push_input(&mut self, side: Side, delta_y: f32) {
        self.inputs.push((side, delta_y));
    }

    /// Net displacement requested for `side` this frame
    pub fn total_for(&self, side: Side) -> f32 {
        self.inputs
            .iter()
            .filter(|(s, _)| *s == side)
            .map(|(_, d)| d)
            .sum()
    }
}
