//! Catch the Fruit - a single-screen arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, three-phase tick, game state)
//! - `renderer`: Presentation state and backend-agnostic geometry
//! - `platform`: Input/render/clock collaborator traits and the driver loop
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::TuningError;
pub use sim::{Flow, Game, GameEvent, GamePhase, InputState};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Longest frame the clock will report, so a stall can't tunnel the fruit
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Orthographic viewport (field plus HUD strip)
    pub const ORTHO_WIDTH: f32 = 1000.0;
    pub const ORTHO_HEIGHT: f32 = 750.0;
    /// Floor line height; fruit spawns here
    pub const FIELD_HEIGHT: f32 = 650.0;

    /// Basket defaults
    pub const BASKET_WIDTH: f32 = 75.0;
    pub const BASKET_HEIGHT: f32 = 10.0;
    pub const BASKET_MARGIN: f32 = 30.0;
    pub const BASKET_SPEED: f32 = 500.0;
    /// Extra reach on either side of the basket when checking a catch
    pub const CATCH_SLACK: f32 = 5.0;

    /// Fruit defaults
    pub const FRUIT_SIDE: f32 = 8.0;
    pub const FRUIT_BASE_SPEED: f32 = 250.0;
    /// Fall speed multiplier applied on every catch
    pub const FRUIT_SPEEDUP: f32 = 1.05;

    /// Lives at the start of a game
    pub const STARTING_LIVES: u8 = 2;
}
