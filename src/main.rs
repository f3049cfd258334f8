//! Box Breakout entry point
//!
//! Runs the game headless with the autopilot and prints the final state.
//! Usage: `box-breakout [settings.json]`

use std::path::PathBuf;

use box_breakout::platform::HeadlessPlatform;
use box_breakout::renderer::RecordingCanvas;
use box_breakout::{FrameInput, Game, Settings};

fn main() {
    env_logger::init();
    log::info!("Box Breakout (headless) starting...");

    let settings = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load(&path),
        None => Settings::default(),
    };

    let mut platform = HeadlessPlatform::new(settings.frame_dt());
    let mut game = Game::setup(&settings, &mut platform, settings.resolve_seed());
    let mut canvas = RecordingCanvas::new();

    while platform.frame() < u64::from(settings.demo_frames) && !game.phase().is_over() {
        platform.drive(&game);
        let input = FrameInput::poll(&platform);
        canvas.clear();
        game.update(&input, &mut canvas);
        platform.advance();
    }

    log::info!(
        "Finished after {} frames: {:?}, score {}, {:.1} s",
        platform.frame(),
        game.phase(),
        game.state.score,
        game.state.timer
    );

    match serde_json::to_string_pretty(&game.state) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize game state: {}", e),
    }
}
