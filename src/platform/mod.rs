//! Platform abstraction layer
//!
//! The game only needs three things from the outside world:
//! - Key state once per tick ([`InputSource`])
//! - Somewhere to put the finished frame ([`RenderSink`])
//! - A fixed-rate tick with the elapsed time ([`TickSource`])
//!
//! [`run`] wires them to a [`Game`]. Windowed front-ends implement the traits;
//! the headless implementations here back the demo binary and the tests.

pub mod clock;
pub mod headless;

pub use clock::{FixedClock, SteppedClock};
pub use headless::{Autopilot, LogSink, ScriptedInput};

use crate::renderer::Frame;
use crate::sim::{Flow, Game, GameEvent, InputState};

/// Reads the current key state
pub trait InputSource {
    fn poll(&mut self, game: &Game) -> InputState;
}

/// Draws a finished frame
pub trait RenderSink {
    fn draw(&mut self, frame: &Frame);
}

/// Blocks until the next tick and reports the seconds since the previous one
pub trait TickSource {
    fn next_tick(&mut self) -> f32;
}

/// What happened during a [`run`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Calls to `Game::update`, paused or not
    pub ticks: u64,
    pub catches: u32,
    pub misses: u32,
    pub game_overs: u32,
    /// Highest score reached in any game of the run
    pub best_score: u64,
    pub final_score: u64,
    /// Stopped on a quit request rather than the tick budget
    pub quit: bool,
}

/// Drive the game until it asks to quit or `max_ticks` ticks have run
pub fn run(
    game: &mut Game,
    input: &mut dyn InputSource,
    sink: &mut dyn RenderSink,
    clock: &mut dyn TickSource,
    max_ticks: Option<u64>,
) -> RunSummary {
    let mut summary = RunSummary::default();

    while max_ticks.is_none_or(|max| summary.ticks < max) {
        let dt = clock.next_tick();
        let keys = input.poll(game);
        game.set_input(keys);

        let score_before = game.scoreboard.score;
        let flow = game.update(dt);
        summary.ticks += 1;

        for event in game.drain_events() {
            match event {
                GameEvent::Caught { .. } => summary.catches += 1,
                GameEvent::Missed => summary.misses += 1,
                GameEvent::GameOver => {
                    summary.game_overs += 1;
                    summary.best_score = summary.best_score.max(score_before);
                }
            }
        }
        summary.best_score = summary.best_score.max(game.scoreboard.score);

        if flow == Flow::Quit {
            summary.quit = true;
            break;
        }

        sink.draw(&game.frame());
    }

    summary.final_score = game.scoreboard.score;
    log::info!(
        "Run finished after {} ticks: {} caught, {} missed, best score {}",
        summary.ticks,
        summary.catches,
        summary.misses,
        summary.best_score
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<Frame>,
    }

    impl RenderSink for RecordingSink {
        fn draw(&mut self, frame: &Frame) {
            self.frames.push(frame.clone());
        }
    }

    #[test]
    fn test_run_stops_at_tick_budget() {
        let mut game = Game::with_seed(11);
        let mut sink = RecordingSink::default();
        let summary = run(
            &mut game,
            &mut Autopilot,
            &mut sink,
            &mut SteppedClock::new(SIM_DT),
            Some(600),
        );

        assert_eq!(summary.ticks, 600);
        assert!(!summary.quit);
        assert_eq!(sink.frames.len(), 600);
        assert_eq!(game.ticks(), 599);
        assert!(summary.catches >= 1);
        assert_eq!(summary.final_score, game.scoreboard.score);
    }

    #[test]
    fn test_run_stops_on_quit() {
        let quit = InputState {
            quit: true,
            ..Default::default()
        };
        let mut game = Game::with_seed(11);
        let mut input = ScriptedInput::new(vec![InputState::default(), quit]);
        let mut sink = RecordingSink::default();

        let summary = run(
            &mut game,
            &mut input,
            &mut sink,
            &mut SteppedClock::new(SIM_DT),
            None,
        );

        assert!(summary.quit);
        assert_eq!(summary.ticks, 2);
        // No frame is drawn for the quitting tick
        assert_eq!(sink.frames.len(), 1);
    }

    #[test]
    fn test_run_counts_misses_and_game_over() {
        // Start, then never move: the basket sits at the center, so most fruit is missed
        let mut inputs = vec![InputState {
            start: true,
            ..Default::default()
        }];
        inputs.extend(std::iter::repeat_n(InputState::default(), 3000));
        let mut game = Game::with_seed(5);
        let mut input = ScriptedInput::new(inputs);

        let summary = run(
            &mut game,
            &mut input,
            &mut RecordingSink::default(),
            &mut SteppedClock::new(SIM_DT),
            Some(3001),
        );

        // Nothing restarts the game, so it stays over
        assert_eq!(summary.game_overs, 1);
        assert_eq!(summary.misses, 2);
        assert!(game.paused);
        assert_eq!(game.scoreboard.lives, 2);
    }
}
