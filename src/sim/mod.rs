//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only
//! - Fixed entity order (basket, fruit, scoreboard) for every pass
//! - No rendering or platform dependencies beyond publishing a frame

pub mod autopilot;
pub mod basket;
pub mod entity;
pub mod fruit;
pub mod scoreboard;
pub mod state;
pub mod tick;

pub use basket::Basket;
pub use entity::{Body, Entity, EntityKind, GameEvent, Rect, TickContext};
pub use fruit::Fruit;
pub use scoreboard::Scoreboard;
pub use state::{Game, GamePhase};
pub use tick::{Flow, InputState};
