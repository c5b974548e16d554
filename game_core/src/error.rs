use thiserror::Error;

/// Invalid construction or match parameters. Always fatal to the call that
/// produced it; the simulation never starts from a bad configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("field must have positive dimensions, got {width}x{height}")]
    NonPositiveField { width: f32, height: f32 },

    #[error("paddle {width}x{height} does not fit a {field_width}x{field_height} field")]
    PaddleTooLarge {
        width: f32,
        height: f32,
        field_width: f32,
        field_height: f32,
    },

    #[error("ball size {size} does not fit a {field_width}x{field_height} field")]
    BallTooLarge {
        size: f32,
        field_width: f32,
        field_height: f32,
    },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("{name} must be zero or more, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },

    #[error("serve speed {serve} exceeds cap {cap} on the {axis} axis")]
    ServeAboveCap { axis: char, serve: f32, cap: f32 },

    #[error("best-of must be an odd number of points, got {0}")]
    InvalidBestOf(u8),
}
