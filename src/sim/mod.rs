//! Gameplay simulation
//!
//! All game rules live here:
//! - Box motion and window bounces
//! - Ball collision detection and edge-based resolution
//! - Score and win/lose latches
//!
//! Input arrives as a `FrameInput` snapshot; drawing goes through `Canvas`.

pub mod ball;
pub mod block;
pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use block::Block;
pub use collision::{CollisionResult, resolve_box_collision, resolve_window_collision};
pub use rect::Rect;
pub use state::{GamePhase, GameState};
pub use tick::Game;
