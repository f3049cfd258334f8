//! Box Breakout - a tiny Breakout game with oscillating boxes
//!
//! Core modules:
//! - `sim`: Gameplay simulation (box motion, ball collisions, game state)
//! - `renderer`: Drawing surface abstraction and HUD/shape drawing
//! - `platform`: Window/input/clock abstraction plus a headless backend
//! - `settings`: Window and run configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use platform::{FrameInput, Key};
pub use renderer::{Canvas, Color};
pub use settings::Settings;
pub use sim::{Game, GamePhase, GameState};

/// Game configuration constants
pub mod consts {
    /// Window defaults
    pub const WINDOW_WIDTH: u32 = 800;
    pub const WINDOW_HEIGHT: u32 = 600;
    pub const WINDOW_TITLE: &str = "The Breakout Game";
    pub const TARGET_FPS: u32 = 60;

    /// Number of boxes, the last one is the paddle
    pub const BOX_COUNT: usize = 5;
    /// Boxes that must be destroyed to win
    pub const TARGET_BOX_COUNT: usize = 4;
    /// Starting positions (targets first, paddle last)
    pub const BOX_POSITIONS: [(f32, f32); BOX_COUNT] = [
        (100.0, 100.0),
        (400.0, 250.0),
        (150.0, 350.0),
        (500.0, 450.0),
        (800.0 - 100.0, 600.0 - 60.0),
    ];

    /// Box motion
    pub const BOX_SPEED: f32 = 400.0; // pixels per second
    pub const BOX_BOUNCE_DECAY: f32 = 0.95;
    pub const BOX_OSCILLATION_AMPLITUDE: f32 = 20.0;
    pub const BOX_OSCILLATION_FREQUENCY: f32 = 2.0;
    pub const BOX_WIDTH_RANGE: (f32, f32) = (50.0, 100.0);
    pub const BOX_HEIGHT_RANGE: (f32, f32) = (40.0, 60.0);

    /// Paddle
    pub const PADDLE_WIDTH: f32 = 200.0;
    pub const PADDLE_HEIGHT: f32 = 30.0;
    /// Distance from the window bottom to the paddle's top edge
    pub const PADDLE_ROW_OFFSET: f32 = 60.0;

    /// Ball
    pub const BALL_SIZE: f32 = 50.0;
    pub const BALL_START_Y: f32 = 150.0;
    pub const BALL_START_VELOCITY: (f32, f32) = (200.0, 200.0);

    /// Edge proximity used to pick which side of a box was hit
    pub const COLLISION_THRESHOLD: f32 = 15.0;
    /// Corner-to-corner distance under which a box lights up
    pub const HIGHLIGHT_RADIUS: f32 = 100.0;

    /// HUD text
    pub const WIN_BANNER: &str = "YEAH BRO YOU DID IT,\n \nI AM REALLY PROUD OF YOU!";
    pub const LOSE_BANNER: &str = "ARE YA WINNING SON?";
}
