//! Fixed timestep simulation tick
//!
//! Core game loop: one call per 60 Hz tick.

use serde::{Deserialize, Serialize};

use super::entity::EntityKind;
use super::state::Game;

/// Key state sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    /// Move basket left (wins over right)
    pub left: bool,
    /// Move basket right
    pub right: bool,
    /// Begin play while paused
    pub start: bool,
    /// Reset the scoreboard while paused
    pub reset: bool,
    /// Leave the game while paused
    pub quit: bool,
}

/// Whether the driver should keep ticking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One pass of the per-tick pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Predict,
    Interact,
    Commit,
}

impl Game {
    /// Advance the game by one tick of `dt` seconds
    pub fn update(&mut self, dt: f32) -> Flow {
        // Anything odd from the clock just stalls the tick
        self.dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        if self.paused {
            let input = self.input;
            if input.start {
                self.paused = false;
                log::info!("Game started");
            } else if input.reset {
                self.scoreboard.reset();
                log::info!("Scoreboard reset");
            } else if input.quit {
                log::info!("Quit requested");
                return Flow::Quit;
            }
            return Flow::Continue;
        }

        self.note_tick();

        // Strict barriers: every entity finishes a pass before the next begins
        self.run_pass(Pass::Predict);
        self.run_pass(Pass::Interact);
        self.run_pass(Pass::Commit);

        Flow::Continue
    }

    fn run_pass(&mut self, pass: Pass) {
        for kind in EntityKind::ORDER {
            let ctx = self.context();
            let entity = self.entity_mut(kind);
            let event = match pass {
                Pass::Predict => entity.predict(&ctx),
                Pass::Interact => entity.interact(&ctx),
                Pass::Commit => {
                    entity.commit();
                    None
                }
            };
            if let Some(event) = event {
                self.dispatch(event);
            }
        }
    }
}
