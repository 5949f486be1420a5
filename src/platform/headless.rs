//! Headless collaborators: computer input, scripted input, log output

use std::collections::VecDeque;

use super::{InputSource, RenderSink};
use crate::renderer::Frame;
use crate::sim::{Game, InputState, autopilot};

/// Plays the game itself
#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot;

impl InputSource for Autopilot {
    fn poll(&mut self, game: &Game) -> InputState {
        autopilot::steer(game)
    }
}

/// Replays a fixed list of inputs, then holds no keys
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    inputs: VecDeque<InputState>,
}

impl ScriptedInput {
    pub fn new(inputs: impl IntoIterator<Item = InputState>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _game: &Game) -> InputState {
        self.inputs.pop_front().unwrap_or_default()
    }
}

/// Logs the HUD whenever it changes
#[derive(Debug, Default)]
pub struct LogSink {
    last_hud: Option<(String, String, bool)>,
    frames: u64,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames received so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for LogSink {
    fn draw(&mut self, frame: &Frame) {
        self.frames += 1;

        let hud = (
            frame.score_text.clone(),
            frame.lives_text.clone(),
            frame.paused,
        );
        if self.last_hud.as_ref() != Some(&hud) {
            log::info!(
                "Score: {}  Lives: {}{}",
                hud.0,
                hud.1,
                if hud.2 { "  (paused)" } else { "" }
            );
            self.last_hud = Some(hud);
        }
        log::trace!(
            "basket x={:.1} fruit=({:.1}, {:.1})",
            frame.basket.center.x,
            frame.fruit.center.x,
            frame.fruit.center.y
        );
    }
}
