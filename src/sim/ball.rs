//! The ball: proximity interaction with boxes plus edge-based bouncing

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::block::Block;
use super::collision::{resolve_box_collision, resolve_window_collision};
use super::rect::Rect;
use super::state::GameState;
use crate::consts::*;
use crate::platform::FrameInput;
use crate::renderer::{Canvas, Color, draw_ball};

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
    pub color: Color,
    /// Fill of the circle drawn at the ball's center
    pub core_color: Color,
}

impl Ball {
    /// Ball centered horizontally near the top, heading down-right
    pub fn new(window_width: f32) -> Self {
        Self {
            position: Vec2::new(window_width / 2.0, BALL_START_Y),
            size: Vec2::splat(BALL_SIZE),
            velocity: Vec2::new(BALL_START_VELOCITY.0, BALL_START_VELOCITY.1),
            color: Color::YELLOW,
            core_color: Color::PURPLE,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    /// Collide and move while the game runs; always draw.
    pub fn update(
        &mut self,
        blocks: &mut [Block],
        state: &mut GameState,
        input: &FrameInput,
        canvas: &mut dyn Canvas,
    ) {
        if !state.end_game {
            self.collision_check(blocks, state, input);
            self.position += self.velocity * input.dt;
        }
        draw_ball(canvas, self);
    }

    pub fn is_colliding_with(&self, block: &Block) -> bool {
        self.rect().overlaps(&block.rect())
    }

    /// Every live box in slice order, then the window once
    fn collision_check(&mut self, blocks: &mut [Block], state: &mut GameState, input: &FrameInput) {
        for (index, block) in blocks.iter_mut().enumerate() {
            if !block.alive {
                continue;
            }
            self.interact(index, block, state, input);
            self.collide_with_block(block);
        }

        self.collide_with_window(state, input.window_size);
    }

    /// Highlight nearby target boxes and destroy them on their key.
    ///
    /// Runs for every live box each frame whether or not the rectangles
    /// overlap. Distance is measured between top-left corners.
    fn interact(&self, index: usize, block: &mut Block, state: &mut GameState, input: &FrameInput) {
        if block.is_paddle {
            return;
        }

        if self.position.distance(block.position) < HIGHLIGHT_RADIUS {
            block.highlight = true;

            if let Some(key) = block.destroy_key {
                if input.is_pressed(key) {
                    state.score += 1;
                    block.alive = false;
                    log::info!(
                        "Box {} destroyed with {} (score {})",
                        index,
                        key.as_str(),
                        state.score
                    );
                }
            }
        } else {
            block.highlight = false;
        }
    }

    fn collide_with_block(&mut self, block: &Block) {
        let result =
            resolve_box_collision(self.rect(), self.velocity, &block.rect(), COLLISION_THRESHOLD);
        if result.hit {
            self.position = result.position;
            self.velocity = result.velocity;
        }
    }

    fn collide_with_window(&mut self, state: &mut GameState, window_size: Vec2) {
        let result = resolve_window_collision(self.rect(), self.velocity, window_size);
        if !result.hit {
            return;
        }

        self.position = result.position;
        self.velocity = result.velocity;
        log::debug!("Ball bounced off window at ({:.1}, {:.1})", self.position.x, self.position.y);

        if result.exited_bottom && !state.end_game {
            state.end_game = true;
            log::info!("Ball left through the bottom edge");
        }
    }
}
