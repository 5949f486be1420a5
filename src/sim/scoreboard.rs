//! Score and lives

use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scoreboard {
    pub score: u64,
    pub lives: u8,
    /// Committed HUD text
    pub score_text: String,
    pub lives_text: String,
    starting_lives: u8,
}

impl Scoreboard {
    pub fn new(starting_lives: u8) -> Self {
        let mut scoreboard = Self {
            score: 0,
            lives: starting_lives,
            score_text: String::new(),
            lives_text: String::new(),
            starting_lives,
        };
        scoreboard.reset();
        scoreboard
    }

    pub fn increment(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    /// Lose a life; never drops below zero
    pub fn decrement(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = self.starting_lives;
        self.commit();
    }
}

impl Entity for Scoreboard {
    fn kind(&self) -> EntityKind {
        EntityKind::Scoreboard
    }

    fn commit(&mut self) {
        self.score_text = self.score.to_string();
        self.lives_text = self.lives.to_string();
    }
}
