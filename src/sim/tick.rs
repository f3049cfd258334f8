//! Game setup and the per-frame update
//!
//! Update order each frame: boxes, then the ball, then the HUD.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::block::Block;
use super::state::{GamePhase, GameState};
use crate::consts::*;
use crate::platform::{FrameInput, Key, Window};
use crate::renderer::{Canvas, Color, draw_hud};
use crate::settings::Settings;

/// Owns the boxes, the ball and the shared game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub state: GameState,
    /// Seed the boxes were randomized from
    pub seed: u64,
    blocks: [Block; BOX_COUNT],
    ball: Ball,
}

impl Game {
    /// Configure the window and build the starting layout
    pub fn setup(settings: &Settings, window: &mut dyn Window, seed: u64) -> Self {
        window.set_target_fps(settings.target_fps);
        window.set_title(&settings.title);
        window.set_size(settings.window_width, settings.window_height);

        let mut rng = Pcg32::seed_from_u64(seed);
        let mut key_index = rng.random_range(0..Key::ROTATION.len());

        let blocks: [Block; BOX_COUNT] = std::array::from_fn(|i| {
            let (x, y) = BOX_POSITIONS[i];
            let position = Vec2::new(x, y);
            if i < TARGET_BOX_COUNT {
                let key = Key::ROTATION[key_index];
                key_index = (key_index + 1) % Key::ROTATION.len();
                Block::new_target(position, key, &mut rng)
            } else {
                Block::new_paddle(position)
            }
        });

        log::info!(
            "Game setup (seed {}), destroy keys: {}",
            seed,
            blocks
                .iter()
                .filter_map(|b| b.destroy_key)
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        );

        Self {
            state: GameState::new(),
            seed,
            blocks,
            ball: Ball::new(settings.window_width as f32),
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Mutable box access (scripted scenarios and tests)
    pub fn blocks_mut(&mut self) -> &mut [Block] {
        &mut self.blocks
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    /// Advance one frame and draw it
    pub fn update(&mut self, input: &FrameInput, canvas: &mut dyn Canvas) {
        let phase_before = self.state.phase();
        canvas.clear_background(Color::WHITE);

        let mut dead = 0;
        for block in self.blocks.iter_mut() {
            block.update(&self.state, input, canvas);
            if !block.alive {
                dead += 1;
            }
        }

        if dead == TARGET_BOX_COUNT {
            self.state.win_game = true;
        }
        if self.state.win_game {
            self.state.end_game = true;
        }

        self.ball
            .update(&mut self.blocks, &mut self.state, input, canvas);

        if !self.state.end_game {
            self.state.timer = input.seconds_elapsed;
        }
        draw_hud(canvas, &self.state, input.window_size);

        let phase = self.state.phase();
        if phase != phase_before {
            log::info!(
                "Phase {:?} -> {:?} (score {}, {:.1} s)",
                phase_before,
                phase,
                self.state.score,
                self.state.timer
            );
        }
    }
}
