//! Platform abstraction layer
//!
//! Handles the host framework's:
//! - Window configuration
//! - Input polling (keyboard edges, mouse position)
//! - Frame timing
//!
//! The simulation never talks to these traits directly. Each frame the host
//! polls them once into a `FrameInput` snapshot.

pub mod headless;

use glam::Vec2;
use serde::{Deserialize, Serialize};

pub use headless::HeadlessPlatform;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
}

impl Key {
    /// Destroy-key rotation handed out to boxes at setup
    pub const ROTATION: [Key; 4] = [Key::W, Key::A, Key::S, Key::D];

    pub fn as_str(&self) -> &'static str {
        match self {
            Key::W => "W",
            Key::A => "A",
            Key::S => "S",
            Key::D => "D",
        }
    }
}

/// Window management
pub trait Window {
    /// Current drawable size in pixels
    fn size(&self) -> Vec2;
    fn set_title(&mut self, title: &str);
    fn set_size(&mut self, width: u32, height: u32);
    fn set_target_fps(&mut self, fps: u32);
}

/// Keyboard and mouse state
pub trait Input {
    /// True only on the frame the key went down
    fn is_key_pressed(&self, key: Key) -> bool;
    fn mouse_x(&self) -> f32;
}

/// Frame timing
pub trait Clock {
    /// Seconds since the previous frame
    fn delta_seconds(&self) -> f32;
    /// Seconds since the game started
    fn seconds_elapsed(&self) -> f32;
}

/// Input commands for a single frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    pub dt: f32,
    pub seconds_elapsed: f32,
    pub mouse_x: f32,
    pub window_size: Vec2,
    /// Keys newly pressed this frame
    pub pressed: Vec<Key>,
}

impl FrameInput {
    /// Snapshot the host state for this frame
    pub fn poll<P: Window + Input + Clock + ?Sized>(platform: &P) -> Self {
        Self {
            dt: platform.delta_seconds(),
            seconds_elapsed: platform.seconds_elapsed(),
            mouse_x: platform.mouse_x(),
            window_size: platform.size(),
            pressed: Key::ROTATION
                .into_iter()
                .filter(|&k| platform.is_key_pressed(k))
                .collect(),
        }
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}
