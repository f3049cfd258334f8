//! Boxes: oscillating targets and the mouse-driven paddle

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::GameState;
use crate::consts::*;
use crate::platform::{FrameInput, Key};
use crate::renderer::{Canvas, Color, draw_block};

/// A box entity
///
/// Dead boxes are kept in place; `alive == false` only stops them from
/// updating, rendering and colliding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub position: Vec2,
    pub size: Vec2,
    pub is_paddle: bool,
    pub alive: bool,
    /// Lit up while the ball is close enough to destroy it
    pub highlight: bool,
    /// Key that destroys this box while highlighted (None for the paddle)
    pub destroy_key: Option<Key>,
    pub base_color: Color,
    pub highlight_color: Color,
    /// Travel direction (zero for the paddle)
    pub direction: Vec2,
    /// Pixels per second, decays on every window bounce
    pub speed: f32,
    pub oscillation_phase: f32,
    pub oscillation_amplitude: f32,
    pub oscillation_frequency: f32,
}

impl Block {
    /// A target box with random color, size and horizontal heading
    pub fn new_target<R: Rng + ?Sized>(position: Vec2, destroy_key: Key, rng: &mut R) -> Self {
        let size = Vec2::new(
            rng.random_range(BOX_WIDTH_RANGE.0..=BOX_WIDTH_RANGE.1),
            rng.random_range(BOX_HEIGHT_RANGE.0..=BOX_HEIGHT_RANGE.1),
        );
        Self {
            position,
            size,
            is_paddle: false,
            alive: true,
            highlight: false,
            destroy_key: Some(destroy_key),
            base_color: Color::random(rng),
            highlight_color: Color::CYAN,
            direction: Vec2::new(rng.random_range(-1.0..=1.0), 0.0),
            speed: BOX_SPEED,
            oscillation_phase: 0.0,
            oscillation_amplitude: BOX_OSCILLATION_AMPLITUDE,
            oscillation_frequency: BOX_OSCILLATION_FREQUENCY,
        }
    }

    pub fn new_paddle(position: Vec2) -> Self {
        Self {
            position,
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            is_paddle: true,
            alive: true,
            highlight: false,
            destroy_key: None,
            base_color: Color::RED,
            highlight_color: Color::CYAN,
            direction: Vec2::ZERO,
            speed: BOX_SPEED,
            oscillation_phase: 0.0,
            oscillation_amplitude: 0.0,
            oscillation_frequency: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    /// Move, bounce off the window and draw. Does nothing once dead or
    /// after the game has ended.
    pub fn update(&mut self, state: &GameState, input: &FrameInput, canvas: &mut dyn Canvas) {
        if !self.alive || state.end_game {
            return;
        }

        self.update_position(input);
        self.check_window_collision(input.window_size);
        draw_block(canvas, self);
    }

    fn update_position(&mut self, input: &FrameInput) {
        if self.is_paddle {
            self.position.x = input.mouse_x - self.size.x / 2.0;
            self.position.y = input.window_size.y - PADDLE_ROW_OFFSET;
        } else {
            self.position += self.direction * self.speed * input.dt;
            self.oscillation_phase += input.dt * self.oscillation_frequency;
            // Offset is applied per frame on top of the travel
            self.position.y += self.oscillation_phase.sin() * self.oscillation_amplitude;
        }
    }

    /// Returns true if the box bounced on either axis
    fn check_window_collision(&mut self, window_size: Vec2) -> bool {
        if self.is_paddle {
            return false;
        }

        let rect = self.rect();
        let mut bounced = false;

        if (rect.left() <= 0.0 && self.direction.x < 0.0)
            || (rect.right() >= window_size.x && self.direction.x > 0.0)
        {
            self.position.x = self.position.x.max(0.0).min(window_size.x - self.size.x);
            self.direction.x = -self.direction.x;
            self.speed *= BOX_BOUNCE_DECAY;
            bounced = true;
        }
        if (rect.top() < 0.0 && self.direction.y < 0.0)
            || (rect.bottom() >= window_size.y && self.direction.y > 0.0)
        {
            self.position.y = self.position.y.max(0.0).min(window_size.y - self.size.y);
            self.direction.y = -self.direction.y;
            self.speed *= BOX_BOUNCE_DECAY;
            bounced = true;
        }

        if bounced {
            log::debug!("Box bounced off window, speed now {:.1}", self.speed);
        }
        bounced
    }
}
