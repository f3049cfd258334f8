//! Headless backend with a fixed timestep and scripted input

use glam::Vec2;

use super::{Clock, Input, Key, Window};
use crate::consts::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::sim::Game;

/// In-memory window/input/clock. Key presses last exactly one frame.
#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub target_fps: u32,
    pub mouse_x: f32,
    dt: f32,
    elapsed: f32,
    frame: u64,
    pressed: Vec<Key>,
}

impl HeadlessPlatform {
    pub fn new(dt: f32) -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            target_fps: 0,
            mouse_x: WINDOW_WIDTH as f32 / 2.0,
            dt,
            elapsed: 0.0,
            frame: 0,
            pressed: Vec::new(),
        }
    }

    /// Press a key for the current frame
    pub fn press(&mut self, key: Key) {
        if !self.pressed.contains(&key) {
            self.pressed.push(key);
        }
    }

    /// Frames advanced so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Step the clock and release this frame's key presses
    pub fn advance(&mut self) {
        self.elapsed += self.dt;
        self.frame += 1;
        self.pressed.clear();
    }

    /// Autopilot: keep the paddle under the ball and press the key of
    /// every highlighted box
    pub fn drive(&mut self, game: &Game) {
        let ball = game.ball();
        self.mouse_x = ball.position.x + ball.size.x / 2.0;

        let keys: Vec<Key> = game
            .blocks()
            .iter()
            .filter(|b| b.alive && b.highlight)
            .filter_map(|b| b.destroy_key)
            .collect();
        for key in keys {
            self.press(key);
        }
    }
}

impl Window for HeadlessPlatform {
    fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn set_target_fps(&mut self, fps: u32) {
        self.target_fps = fps;
    }
}

impl Input for HeadlessPlatform {
    fn is_key_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    fn mouse_x(&self) -> f32 {
        self.mouse_x
    }
}

impl Clock for HeadlessPlatform {
    fn delta_seconds(&self) -> f32 {
        self.dt
    }

    fn seconds_elapsed(&self) -> f32 {
        self.elapsed
    }
}
