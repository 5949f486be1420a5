//! The falling fruit

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Body, Entity, EntityKind, GameEvent, Rect, TickContext};
use crate::tuning::Tuning;

/// Vertical-only falling target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fruit {
    pub body: Body,
    /// Last committed rectangle
    pub shown: Rect,
    tuning: Tuning,
}

impl Fruit {
    pub fn new<R: Rng>(tuning: &Tuning, rng: &mut R) -> Self {
        let mut fruit = Self {
            body: Body::new(Vec2::splat(tuning.fruit_side)),
            shown: Rect::default(),
            tuning: tuning.clone(),
        };
        fruit.reset(rng);
        fruit
    }

    /// Fresh fruit at base speed (start of game, after a miss)
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.spawn(rng, -self.tuning.fruit_base_speed);
    }

    /// Fruit after a catch: falls faster than the last one
    pub fn next_fruit<R: Rng>(&mut self, rng: &mut R) {
        self.spawn(rng, self.body.vel.y * self.tuning.fruit_speedup);
    }

    /// Current fall speed (positive, units/s)
    #[inline]
    pub fn fall_speed(&self) -> f32 {
        -self.body.vel.y
    }

    fn spawn<R: Rng>(&mut self, rng: &mut R, vel_y: f32) {
        let x = rng.random_range(0..=self.tuning.spawn_x_max()) as f32;
        self.body.pos = Vec2::new(x, self.tuning.field_height);
        self.body.vel = Vec2::new(0.0, vel_y);
        self.commit();
        log::debug!("Spawning fruit at x: {}, fall speed: {:.1}", x, self.fall_speed());
    }
}

impl Entity for Fruit {
    fn kind(&self) -> EntityKind {
        EntityKind::Fruit
    }

    fn predict(&mut self, ctx: &TickContext) -> Option<GameEvent> {
        self.body.integrate(ctx.dt);

        if self.body.pos.y >= 0.0 {
            return None;
        }
        if ctx.lives > 0 {
            log::info!("Fruit fell, resetting fall speed");
            Some(GameEvent::Missed)
        } else {
            log::info!("Game over!");
            Some(GameEvent::GameOver)
        }
    }

    fn commit(&mut self) {
        self.shown = self.body.rect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::InputState;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn ctx(dt: f32, lives: u8) -> TickContext {
        TickContext {
            dt,
            input: InputState::default(),
            fruit_pos: Vec2::ZERO,
            lives,
        }
    }

    #[test]
    fn test_spawn_at_top_within_field() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut fruit = Fruit::new(&tuning, &mut rng);
        for _ in 0..200 {
            assert_eq!(fruit.body.pos.y, tuning.field_height);
            assert!((0.0..=tuning.field_width).contains(&fruit.body.pos.x));
            assert_eq!(fruit.body.pos.x.fract(), 0.0);
            fruit.reset(&mut rng);
        }
    }

    #[test]
    fn test_next_fruit_speeds_up() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut fruit = Fruit::new(&Tuning::default(), &mut rng);
        assert_eq!(fruit.body.vel.y, -250.0);

        fruit.next_fruit(&mut rng);
        assert!((fruit.body.vel.y - -262.5).abs() < 1e-3);
        fruit.next_fruit(&mut rng);
        assert!((fruit.body.vel.y - -275.625).abs() < 1e-3);
        assert_eq!(fruit.body.vel.x, 0.0);
    }

    #[test]
    fn test_reset_returns_to_base_speed() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut fruit = Fruit::new(&Tuning::default(), &mut rng);
        for _ in 0..10 {
            fruit.next_fruit(&mut rng);
        }
        assert!(fruit.fall_speed() > 400.0);
        fruit.reset(&mut rng);
        assert_eq!(fruit.fall_speed(), 250.0);
    }

    #[test]
    fn test_predict_falls_without_event() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut fruit = Fruit::new(&Tuning::default(), &mut rng);
        let event = fruit.predict(&ctx(0.1, 2));
        assert_eq!(event, None);
        assert!((fruit.body.pos.y - 625.0).abs() < 1e-3);
    }

    #[test]
    fn test_predict_below_floor_with_lives_misses() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut fruit = Fruit::new(&Tuning::default(), &mut rng);
        fruit.body.pos.y = 1.0;
        assert_eq!(fruit.predict(&ctx(0.1, 1)), Some(GameEvent::Missed));
    }

    #[test]
    fn test_predict_below_floor_without_lives_ends_game() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut fruit = Fruit::new(&Tuning::default(), &mut rng);
        fruit.body.pos.y = 1.0;
        assert_eq!(fruit.predict(&ctx(0.1, 0)), Some(GameEvent::GameOver));
    }

    #[test]
    fn test_landing_exactly_on_floor_is_not_a_miss() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut fruit = Fruit::new(&Tuning::default(), &mut rng);
        fruit.body.pos.y = 0.0;
        assert_eq!(fruit.predict(&ctx(0.0, 2)), None);
    }
}
