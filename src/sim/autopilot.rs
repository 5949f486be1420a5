//! Idle/demo mode - the computer plays the game
//!
//! Used by the headless binary and by long-running tests.

use super::state::Game;
use super::tick::InputState;

/// Choose this tick's keys from the current game state
pub fn steer(game: &Game) -> InputState {
    if game.paused {
        return InputState {
            start: true,
            ..Default::default()
        };
    }

    // Dead zone keeps the basket from jittering around the target
    let dead_zone = game.tuning().basket_width / 4.0;
    let delta = game.fruit.body.pos.x - game.basket.body.pos.x;

    InputState {
        left: delta < -dead_zone,
        right: delta > dead_zone,
        ..Default::default()
    }
}
