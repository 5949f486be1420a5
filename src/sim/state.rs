//! Game state and event handlers
//!
//! The [`Game`] owns the three entities and everything that is shared between
//! them: the pause flag, the last tick's delta, the input snapshot and the RNG.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::basket::Basket;
use super::entity::{Entity, EntityKind, GameEvent, TickContext};
use super::fruit::Fruit;
use super::scoreboard::Scoreboard;
use super::tick::InputState;
use crate::renderer::Frame;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for start; nothing moves
    Paused,
    /// Entities simulate every tick
    Running,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    pub basket: Basket,
    pub fruit: Fruit,
    pub scoreboard: Scoreboard,
    /// Simulation halted until start is pressed
    pub paused: bool,
    /// Input snapshot for the next tick
    pub input: InputState,
    /// Seconds elapsed in the last tick
    pub(crate) dt: f32,
    tuning: Tuning,
    seed: u64,
    rng: Pcg32,
    ticks: u64,
    events: Vec<GameEvent>,
}

impl Game {
    /// Create a paused game with the given balance and seed
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let basket = Basket::new(&tuning);
        let fruit = Fruit::new(&tuning, &mut rng);
        let scoreboard = Scoreboard::new(tuning.starting_lives);

        Self {
            basket,
            fruit,
            scoreboard,
            paused: true,
            input: InputState::default(),
            dt: 0.0,
            tuning,
            seed,
            rng,
            ticks: 0,
            events: Vec::new(),
        }
    }

    /// Create a paused game with default balance
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Tuning::default(), seed)
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of ticks that ran the entity pipeline
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn phase(&self) -> GamePhase {
        if self.paused {
            GamePhase::Paused
        } else {
            GamePhase::Running
        }
    }

    /// Replace the input snapshot used by the next tick
    pub fn set_input(&mut self, input: InputState) {
        self.input = input;
    }

    /// Events dispatched since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Presentation state as of the last commit
    pub fn frame(&self) -> Frame {
        Frame::new(
            &self.tuning,
            self.basket.shown,
            self.fruit.shown,
            &self.scoreboard,
            self.paused,
        )
    }

    pub(crate) fn note_tick(&mut self) {
        self.ticks += 1;
    }

    /// Snapshot of the cross-entity values an entity may read
    pub(crate) fn context(&self) -> TickContext {
        TickContext {
            dt: self.dt,
            input: self.input,
            fruit_pos: self.fruit.body.pos,
            lives: self.scoreboard.lives,
        }
    }

    pub(crate) fn entity_mut(&mut self, kind: EntityKind) -> &mut dyn Entity {
        match kind {
            EntityKind::Basket => &mut self.basket,
            EntityKind::Fruit => &mut self.fruit,
            EntityKind::Scoreboard => &mut self.scoreboard,
        }
    }

    /// Route an entity's event to its handler
    pub(crate) fn dispatch(&mut self, event: GameEvent) {
        match event {
            GameEvent::Caught { basket_x } => {
                self.fruit.body.pos.x = basket_x;
                self.succeeded();
            }
            GameEvent::Missed => self.failed(),
            GameEvent::GameOver => self.game_over(),
        }
        self.events.push(event);
    }

    /// Fruit caught
    pub fn succeeded(&mut self) {
        self.scoreboard.increment();
        self.fruit.next_fruit(&mut self.rng);
        log::info!("Caught! score {}", self.scoreboard.score);
    }

    /// Fruit missed with lives to spare
    pub fn failed(&mut self) {
        self.scoreboard.decrement();
        self.fruit.reset(&mut self.rng);
    }

    /// Fruit missed on the last life
    pub fn game_over(&mut self) {
        let final_score = self.scoreboard.score;
        self.scoreboard.reset();
        self.basket.reset();
        self.fruit.reset(&mut self.rng);
        self.paused = true;
        log::info!("Final score {}, press start to play again", final_score);
    }
}
