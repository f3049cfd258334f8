//! Drawing for boxes, the ball and the HUD

use glam::Vec2;

use super::{Canvas, Color};
use crate::consts::{LOSE_BANNER, WIN_BANNER};
use crate::sim::{Ball, Block, GameState};

/// Draw a box, using its highlight color while lit
pub fn draw_block(canvas: &mut dyn Canvas, block: &Block) {
    canvas.set_line_color(block.base_color);
    canvas.set_line_size(1.0);
    canvas.set_fill_color(if block.highlight {
        block.highlight_color
    } else {
        block.base_color
    });
    canvas.rectangle(block.position, block.size);
}

/// Draw the ball: a square body with a circle at its center
pub fn draw_ball(canvas: &mut dyn Canvas, ball: &Ball) {
    canvas.set_line_color(Color::BLACK);
    canvas.set_line_size(1.0);
    canvas.set_fill_color(ball.color);
    canvas.rectangle(ball.position, ball.size);

    canvas.set_fill_color(ball.core_color);
    canvas.circle(ball.rect().center(), ball.size.x / 4.0);
}

/// Draw the end banner (if any), score and timer
pub fn draw_hud(canvas: &mut dyn Canvas, state: &GameState, window_size: Vec2) {
    if state.end_game {
        let banner = if state.win_game { WIN_BANNER } else { LOSE_BANNER };
        canvas.text(
            banner,
            Vec2::new(window_size.x / 2.0 - 50.0, window_size.y / 2.0),
        );
    }

    canvas.text(&format!("Score: {}", state.score), Vec2::new(10.0, 10.0));
    canvas.text(&format!("Time: {:.1} s", state.timer), Vec2::new(10.0, 50.0));
}
