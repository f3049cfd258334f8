//! Game-wide progress shared by the boxes and the ball

use serde::{Deserialize, Serialize};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Every target box destroyed
    Won,
    /// Ball fell through the bottom of the window
    Lost,
}

impl GamePhase {
    pub fn is_over(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Score, end-of-game latches and the displayed timer
///
/// `end_game` and `win_game` only ever go from false to true.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub score: u32,
    /// Freezes box updates, ball physics and the timer
    pub end_game: bool,
    pub win_game: bool,
    /// Seconds shown on the HUD (stops advancing once ended)
    pub timer: f32,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GamePhase {
        if self.win_game {
            GamePhase::Won
        } else if self.end_game {
            GamePhase::Lost
        } else {
            GamePhase::Playing
        }
    }
}
