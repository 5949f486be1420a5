//! The player's basket

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Body, Entity, EntityKind, GameEvent, Rect, TickContext};
use crate::tuning::Tuning;

/// Horizontal-only paddle that catches fruit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Basket {
    pub body: Body,
    /// Last committed rectangle
    pub shown: Rect,
    tuning: Tuning,
}

impl Basket {
    pub fn new(tuning: &Tuning) -> Self {
        let mut basket = Self {
            body: Body::new(Vec2::new(tuning.basket_width, tuning.basket_height)),
            shown: Rect::default(),
            tuning: tuning.clone(),
        };
        basket.reset();
        basket
    }

    /// Back to the center of the field, at rest
    pub fn reset(&mut self) {
        self.body.pos = Vec2::new(self.tuning.field_width / 2.0, self.tuning.basket_margin);
        self.body.vel = Vec2::ZERO;
        self.commit();
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.tuning.basket_half_width()
    }

    /// Horizontal span (inclusive) in which a fruit counts as caught
    pub fn catch_range(&self) -> (f32, f32) {
        let reach = self.half_width() + self.tuning.catch_slack;
        (self.body.pos.x - reach, self.body.pos.x + reach)
    }

    /// Fruit is inside the catch span and has dropped below the basket
    pub fn can_catch(&self, fruit_pos: Vec2) -> bool {
        let (left, right) = self.catch_range();
        (left..=right).contains(&fruit_pos.x) && fruit_pos.y < self.body.pos.y
    }
}

impl Entity for Basket {
    fn kind(&self) -> EntityKind {
        EntityKind::Basket
    }

    fn predict(&mut self, ctx: &TickContext) -> Option<GameEvent> {
        let speed = self.tuning.basket_speed;
        let vx = if ctx.input.left {
            -speed
        } else if ctx.input.right {
            speed
        } else {
            0.0
        };
        self.body.vel = Vec2::new(vx, 0.0);
        self.body.integrate(ctx.dt);
        None
    }

    fn interact(&mut self, ctx: &TickContext) -> Option<GameEvent> {
        self.body.pos.x = self.tuning.clamp_basket_x(self.body.pos.x);

        if self.can_catch(ctx.fruit_pos) {
            Some(GameEvent::Caught {
                basket_x: self.body.pos.x,
            })
        } else {
            None
        }
    }

    fn commit(&mut self) {
        self.shown = self.body.rect();
    }
}
