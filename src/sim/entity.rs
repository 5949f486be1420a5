//! Entity capability shared by the basket, the fruit and the scoreboard
//!
//! A tick runs three passes over every entity: predict, interact, commit.
//! Entities never reach into each other. Whatever they need to read comes in
//! through a [`TickContext`] built by the game, and whatever they want to do to
//! the rest of the game goes back out as a [`GameEvent`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::tick::InputState;

/// Which entity a slot in the update order refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Basket,
    Fruit,
    Scoreboard,
}

impl EntityKind {
    /// Iteration order for every pass of a tick
    pub const ORDER: [EntityKind; 3] = [EntityKind::Basket, EntityKind::Fruit, EntityKind::Scoreboard];
}

/// Game-level events raised by entities and dispatched by the game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Basket caught the fruit; `basket_x` is where the fruit snaps to
    Caught { basket_x: f32 },
    /// Fruit hit the floor with lives to spare
    Missed,
    /// Fruit hit the floor with no lives left
    GameOver,
}

/// Read-only view of the game handed to each entity during a pass
#[derive(Debug, Clone, Copy)]
pub struct TickContext {
    /// Seconds since the previous tick
    pub dt: f32,
    pub input: InputState,
    /// Fruit position as of this entity's turn
    pub fruit_pos: Vec2,
    /// Lives remaining as of this entity's turn
    pub lives: u8,
}

/// Axis-aligned rectangle, centered, as published to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.size / 2.0
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.size / 2.0
    }
}

/// Kinematic state of a sprite-like entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(size: Vec2) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size,
        }
    }

    /// Explicit Euler step
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// The per-tick capability set every entity implements
///
/// Each pass runs over all entities before the next pass begins. Events
/// returned from a pass are dispatched before the next entity runs.
pub trait Entity {
    fn kind(&self) -> EntityKind;

    /// Apply input and velocity
    fn predict(&mut self, _ctx: &TickContext) -> Option<GameEvent> {
        None
    }

    /// Resolve boundaries and cross-entity rules
    fn interact(&mut self, _ctx: &TickContext) -> Option<GameEvent> {
        None
    }

    /// Publish simulation state to presentation state
    fn commit(&mut self) {}
}
