use crate::{ConfigError, Params, Side};
use serde::{Deserialize, Serialize};

/// Game configuration
///
/// Missing fields fall back to [`Params`] when deserialized, so a host can
/// override only the values it cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_step: f32,
    pub ai_step: f32,
    pub ball_size: f32,
    pub serve_speed_x: f32,
    pub serve_speed_y: f32,
    pub max_speed_x: f32,
    pub max_speed_y: f32,
    pub speed_increment: f32,
    pub angle_gain: f32,
    pub paddle_nudge: f32,
    pub best_of: u8,
    pub game_over_hold: f32,
    /// Both paddles take input; otherwise the opponent tracks the ball.
    pub two_player: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_step: Params::PADDLE_STEP,
            ai_step: Params::AI_STEP,
            ball_size: Params::BALL_SIZE,
            serve_speed_x: Params::SERVE_SPEED_X,
            serve_speed_y: Params::SERVE_SPEED_Y,
            max_speed_x: Params::MAX_SPEED_X,
            max_speed_y: Params::MAX_SPEED_Y,
            speed_increment: Params::SPEED_INCREMENT,
            angle_gain: Params::ANGLE_GAIN,
            paddle_nudge: Params::PADDLE_NUDGE,
            best_of: Params::BEST_OF,
            game_over_hold: Params::GAME_OVER_HOLD,
            two_player: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check geometry and speed settings before any entity is built
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.field_width > 0.0 && self.field_height > 0.0) {
            return Err(ConfigError::NonPositiveField {
                width: self.field_width,
                height: self.field_height,
            });
        }

        for (name, value) in [
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_step", self.paddle_step),
            ("ai_step", self.ai_step),
            ("ball_size", self.ball_size),
            ("serve_speed_x", self.serve_speed_x),
            ("max_speed_x", self.max_speed_x),
            ("max_speed_y", self.max_speed_y),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        for (name, value) in [
            ("paddle_margin", self.paddle_margin),
            ("speed_increment", self.speed_increment),
            ("angle_gain", self.angle_gain),
            ("paddle_nudge", self.paddle_nudge),
            ("game_over_hold", self.game_over_hold),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }
        if !self.serve_speed_y.is_finite() {
            return Err(ConfigError::NotFinite {
                name: "serve_speed_y",
                value: self.serve_speed_y,
            });
        }

        // Both paddles plus their margins must leave room for the ball between them
        let occupied = 2.0 * (self.paddle_margin + self.paddle_width) + self.ball_size;
        if self.paddle_height > self.field_height || occupied >= self.field_width {
            return Err(ConfigError::PaddleTooLarge {
                width: self.paddle_width,
                height: self.paddle_height,
                field_width: self.field_width,
                field_height: self.field_height,
            });
        }

        if self.ball_size >= self.field_height {
            return Err(ConfigError::BallTooLarge {
                size: self.ball_size,
                field_width: self.field_width,
                field_height: self.field_height,
            });
        }

        if self.serve_speed_x > self.max_speed_x {
            return Err(ConfigError::ServeAboveCap {
                axis: 'x',
                serve: self.serve_speed_x,
                cap: self.max_speed_x,
            });
        }
        if self.serve_speed_y.abs() > self.max_speed_y {
            return Err(ConfigError::ServeAboveCap {
                axis: 'y',
                serve: self.serve_speed_y,
                cap: self.max_speed_y,
            });
        }

        validate_best_of(self.best_of)
    }

    /// Get X position (left edge) for the paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_margin,
            Side::Opponent => self.field_width - self.paddle_margin - self.paddle_width,
        }
    }
}

/// Best-of-N needs an odd, non-zero N so one side always wins outright
pub fn validate_best_of(best_of: u8) -> Result<(), ConfigError> {
    if best_of == 0 || best_of % 2 == 0 {
        return Err(ConfigError::InvalidBestOf(best_of));
    }
    Ok(())
}

/// Points needed to win a best-of-N match
pub fn target_score(best_of: u8) -> u8 {
    best_of.div_ceil(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Player), 10.0, "Left paddle X position");
        assert_eq!(
            config.paddle_x(Side::Opponent),
            780.0,
            "Right paddle X position"
        );
    }

    #[test]
    fn test_rejects_non_positive_field() {
        let config = Config {
            field_width: 0.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveField { .. })
        ));

        let config = Config {
            field_height: -600.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveField { .. })
        ));
    }

    #[test]
    fn test_rejects_paddle_taller_than_field() {
        let config = Config {
            paddle_height: 601.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTooLarge { .. })
        ));
    }

    #[test]
    fn test_rejects_ball_larger_than_field() {
        let config = Config {
            field_height: 120.0,
            paddle_height: 100.0,
            ball_size: 120.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BallTooLarge { .. })
        ));
    }

    #[test]
    fn test_rejects_serve_above_cap() {
        let config = Config {
            serve_speed_x: 12.0,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ServeAboveCap {
                axis: 'x',
                serve: 12.0,
                cap: 9.0
            })
        );
    }

    #[test]
    fn test_rejects_negative_paddle_nudge() {
        let config = Config {
            paddle_nudge: -5.0,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Negative {
                name: "paddle_nudge",
                value: -5.0
            })
        );
    }

    #[test]
    fn test_rejects_negative_speed_increment() {
        let config = Config {
            speed_increment: -6.0,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Negative {
                name: "speed_increment",
                value: -6.0
            })
        );
    }

    #[test]
    fn test_rejects_negative_margin_gain_and_hold() {
        for config in [
            Config {
                paddle_margin: -1.0,
                ..Config::new()
            },
            Config {
                angle_gain: -3.0,
                ..Config::new()
            },
            Config {
                game_over_hold: -0.5,
                ..Config::new()
            },
        ] {
            assert!(matches!(
                config.validate(),
                Err(ConfigError::Negative { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_non_finite_tuning() {
        let config = Config {
            angle_gain: f32::INFINITY,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite {
                name: "angle_gain",
                ..
            })
        ));

        let config = Config {
            serve_speed_y: f32::NAN,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite {
                name: "serve_speed_y",
                ..
            })
        ));

        let config = Config {
            game_over_hold: f32::NAN,
            ..Config::new()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NotFinite { .. })));
    }

    #[test]
    fn test_zero_tuning_values_are_accepted() {
        let config = Config {
            paddle_margin: 0.0,
            speed_increment: 0.0,
            angle_gain: 0.0,
            paddle_nudge: 0.0,
            game_over_hold: 0.0,
            ..Config::new()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_best_of_must_be_odd() {
        assert_eq!(validate_best_of(0), Err(ConfigError::InvalidBestOf(0)));
        assert_eq!(validate_best_of(4), Err(ConfigError::InvalidBestOf(4)));
        for best_of in Params::BEST_OF_OPTIONS {
            assert_eq!(validate_best_of(best_of), Ok(()));
        }
    }

    #[test]
    fn test_target_score_is_majority() {
        assert_eq!(target_score(1), 1);
        assert_eq!(target_score(3), 2);
        assert_eq!(target_score(5), 3);
        assert_eq!(target_score(7), 4);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "best_of": 7, "two_player": true }"#).unwrap();
        assert_eq!(config.best_of, 7);
        assert!(config.two_player);
        assert_eq!(config.field_width, Params::FIELD_WIDTH);
        assert_eq!(config.max_speed_x, Params::MAX_SPEED_X);
    }
}
