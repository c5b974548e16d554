use crate::{
    create_ball, create_paddle, step, target_score, validate_best_of, Aabb, AngledBounce, Ball,
    CollisionResolver, Config, ConfigError, Controller, Events, GameMap, GameRng, InputQueue,
    MatchAction, MatchFsm, MatchPhase, Paddle, Score, Side, Time, TransitionResult,
};
use glam::Vec2;
use hecs::World;
use serde::{Deserialize, Serialize};

/// Read-only view of a frame for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub frame: u64,
    pub player_paddle: Aabb,
    pub opponent_paddle: Aabb,
    pub ball: Aabb,
    pub ball_velocity: Vec2,
    pub score: Score,
    pub target_score: u8,
    pub game_over: bool,
    pub winner: Option<Side>,
    pub menu_showing: bool,
    pub phase: MatchPhase,
}

/// Match controller: owns the paddles and ball, drives one frame per `update`,
/// and keeps score until a side reaches the target.
pub struct GameState {
    pub world: World,
    pub map: GameMap,
    pub config: Config,
    pub time: Time,
    pub rng: GameRng,
    input: InputQueue,
    events: Events,
    score: Score,
    fsm: MatchFsm,
    resolver: Box<dyn CollisionResolver>,
    best_of: u8,
    target_score: u8,
    winner: Option<Side>,
    game_over_at: Option<f32>,
}

impl GameState {
    /// Build a match from `config`, failing fast on geometry the simulation
    /// cannot run on. The first match starts immediately with `config.best_of`.
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        let map = GameMap::new(&config)?;
        let mut world = World::new();

        let opponent_controller = if config.two_player {
            Controller::Human
        } else {
            Controller::Auto
        };
        create_paddle(&mut world, &map, &config, Side::Player, Controller::Human);
        create_paddle(&mut world, &map, &config, Side::Opponent, opponent_controller);
        create_ball(
            &mut world,
            map.ball_spawn(config.ball_size),
            Vec2::ZERO,
            config.ball_size,
        );

        let best_of = config.best_of;
        let mut state = Self {
            world,
            map,
            config,
            time: Time::default(),
            rng: GameRng::new(seed),
            input: InputQueue::new(),
            events: Events::new(),
            score: Score::new(),
            fsm: MatchFsm::new(),
            resolver: Box::new(AngledBounce),
            best_of,
            target_score: target_score(best_of),
            winner: None,
            game_over_at: None,
        };
        state.start_new_match(best_of)?;
        Ok(state)
    }

    /// Swap the paddle bounce policy
    pub fn with_resolver(mut self, resolver: impl CollisionResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Queue a paddle displacement for the next frame
    pub fn push_input(&mut self, side: Side, delta_y: f32) {
        self.input.push_input(side, delta_y);
    }

    /// Queue one frame of movement: -1 = up, 0 = stop, 1 = down
    pub fn push_direction(&mut self, side: Side, dir: i8) {
        if dir != 0 {
            self.push_input(side, dir.signum() as f32 * self.config.paddle_step);
        }
    }

    /// Advance one frame. `now` is the host's monotonic clock in seconds.
    ///
    /// Only the game-over hold runs once the match is decided; paddles, ball
    /// and score stay frozen until a new match starts.
    pub fn update(&mut self, now: f32) -> Events {
        self.time.now = now;
        self.events.clear();

        match self.fsm.phase() {
            MatchPhase::Playing => {}
            MatchPhase::GameOver => {
                self.input.clear();
                self.check_hold_elapsed();
                return self.events;
            }
            MatchPhase::ReplayMenu | MatchPhase::Exited => {
                self.input.clear();
                return self.events;
            }
        }

        self.time.frame += 1;
        step(
            &mut self.world,
            &self.map,
            &self.config,
            self.resolver.as_ref(),
            &mut self.score,
            &mut self.events,
            &mut self.input,
            &mut self.rng,
        );
        self.check_game_over();
        self.events
    }

    /// End the match the first time a side reaches the target score.
    /// Once over, further calls change nothing.
    pub fn check_game_over(&mut self) -> bool {
        if self.fsm.is_game_over() {
            return true;
        }

        match self.score.has_winner(self.target_score) {
            Some(winner) => {
                self.fsm.transition(MatchAction::Win);
                self.winner = Some(winner);
                self.game_over_at = Some(self.time.now);
                log::info!(
                    "{} wins {} - {} (best of {})",
                    winner,
                    self.score.player,
                    self.score.opponent,
                    self.best_of
                );
                true
            }
            None => false,
        }
    }

    fn check_hold_elapsed(&mut self) {
        let Some(since) = self.game_over_at else {
            return;
        };
        if self.time.now - since >= self.config.game_over_hold {
            self.fsm.transition(MatchAction::HoldElapsed);
            log::info!("replay menu open");
        }
    }

    /// Start over: scores to zero, paddles centred, a fresh serve in a random
    /// direction. Allowed from any phase.
    pub fn start_new_match(&mut self, best_of: u8) -> Result<(), ConfigError> {
        validate_best_of(best_of)?;
        self.fsm.reset();
        self.begin_match(best_of);
        Ok(())
    }

    /// Replay-menu choice of the next match length
    pub fn choose_match_length(&mut self, best_of: u8) -> Result<TransitionResult, ConfigError> {
        validate_best_of(best_of)?;
        let result = self.fsm.transition(MatchAction::PlayAgain);
        if result.success {
            self.begin_match(best_of);
        }
        Ok(result)
    }

    /// Leave from the result screen or the replay menu
    pub fn quit(&mut self) -> TransitionResult {
        let result = self.fsm.transition(MatchAction::Quit);
        if result.success {
            log::info!("match exited");
        }
        result
    }

    fn begin_match(&mut self, best_of: u8) {
        self.best_of = best_of;
        self.target_score = target_score(best_of);
        self.score = Score::new();
        self.winner = None;
        self.game_over_at = None;
        self.events.clear();
        self.input.clear();
        self.time.frame = 0;

        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.pos = self.map.paddle_spawn(paddle.side, &self.config);
        }
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.serve(&self.config, &mut self.rng);
        }

        log::info!(
            "new match: best of {}, first to {}",
            best_of,
            self.target_score
        );
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .map(|(_e, paddle)| *paddle)
            .find(|paddle| paddle.side == side)
    }

    pub fn snapshot(&self) -> Snapshot {
        let rect_of = |side| self.paddle(side).map(|p| p.rect()).unwrap_or_default();
        let ball = self.ball();
        Snapshot {
            frame: self.time.frame,
            player_paddle: rect_of(Side::Player),
            opponent_paddle: rect_of(Side::Opponent),
            ball: ball.map(|b| b.rect()).unwrap_or_default(),
            ball_velocity: ball.map(|b| b.vel).unwrap_or_default(),
            score: self.score,
            target_score: self.target_score,
            game_over: self.is_game_over(),
            winner: self.winner,
            menu_showing: self.is_menu_showing(),
            phase: self.fsm.phase(),
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn phase(&self) -> MatchPhase {
        self.fsm.phase()
    }

    pub fn is_game_over(&self) -> bool {
        self.fsm.is_game_over()
    }

    pub fn is_menu_showing(&self) -> bool {
        self.fsm.is_menu_showing()
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn best_of(&self) -> u8 {
        self.best_of
    }

    pub fn target_score(&self) -> u8 {
        self.target_score
    }
}
