/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // gap between paddle and side edge
    pub const PADDLE_STEP: f32 = 10.0; // per frame, human input
    pub const AI_STEP: f32 = 6.0; // per frame, scripted opponent

    // Ball
    pub const BALL_SIZE: f32 = 7.0;
    pub const SERVE_SPEED_X: f32 = 5.0;
    pub const SERVE_SPEED_Y: f32 = 3.0;
    pub const MAX_SPEED_X: f32 = 9.0;
    pub const MAX_SPEED_Y: f32 = 7.0;
    pub const SPEED_INCREMENT: f32 = 0.3; // added to |vx| on paddle hit
    pub const ANGLE_GAIN: f32 = 3.0;
    pub const PADDLE_NUDGE: f32 = 1.0;

    // Match
    pub const BEST_OF: u8 = 5;
    pub const BEST_OF_OPTIONS: [u8; 3] = [3, 5, 7];
    pub const GAME_OVER_HOLD: f32 = 3.0; // seconds before the replay menu
}
