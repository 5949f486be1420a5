//! Presentation state handed to the render sink each tick

use glam::{Mat4, Vec2};
use serde::{Deserialize, Serialize};

use crate::sim::{Rect, Scoreboard};
use crate::tuning::Tuning;

/// HUD row offsets above the floor line
pub const CONTROLS_SHIFT: f32 = 25.0;
pub const SCORE_SHIFT: f32 = 55.0;
pub const LIVES_SHIFT: f32 = 85.0;

/// A centered text label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub pos: Vec2,
}

impl Label {
    pub fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            pos: Vec2::new(x, y),
        }
    }
}

/// Everything a front-end needs to draw one tick
///
/// Coordinates are in field units with the origin at the bottom-left corner,
/// y pointing up. [`Frame::projection`] maps them to clip space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Width and height of the orthographic viewport
    pub viewport: Vec2,
    pub basket: Rect,
    pub fruit: Rect,
    /// Horizontal floor line endpoints
    pub floor: [Vec2; 2],
    pub score_text: String,
    pub lives_text: String,
    /// Captions and values, in draw order
    pub labels: Vec<Label>,
    pub paused: bool,
}

impl Frame {
    pub fn new(
        tuning: &Tuning,
        basket: Rect,
        fruit: Rect,
        scoreboard: &Scoreboard,
        paused: bool,
    ) -> Self {
        let width = tuning.field_width;
        let floor_y = tuning.field_height;
        // HUD columns snap to whole units
        let center = (width / 2.0).floor();
        let captions = (width / 3.0).floor();
        let values = (2.0 * width / 3.0).floor();

        let labels = vec![
            Label::new("Left: A, Right: D", center, floor_y + CONTROLS_SHIFT),
            Label::new("Score: ", captions, floor_y + SCORE_SHIFT),
            Label::new("Lives: ", captions, floor_y + LIVES_SHIFT),
            Label::new(scoreboard.score_text.clone(), values, floor_y + SCORE_SHIFT),
            Label::new(scoreboard.lives_text.clone(), values, floor_y + LIVES_SHIFT),
        ];

        Self {
            viewport: Vec2::new(width, tuning.ortho_height),
            basket,
            fruit,
            floor: [Vec2::new(0.0, floor_y), Vec2::new(width, floor_y)],
            score_text: scoreboard.score_text.clone(),
            lives_text: scoreboard.lives_text.clone(),
            labels,
            paused,
        }
    }

    /// Orthographic projection from field units to clip space
    pub fn projection(&self) -> Mat4 {
        Mat4::orthographic_rh(0.0, self.viewport.x, 0.0, self.viewport.y, -1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Game;
    use glam::Vec3;

    #[test]
    fn test_frame_layout() {
        let game = Game::with_seed(1);
        let frame = game.frame();

        assert_eq!(frame.viewport, Vec2::new(1000.0, 750.0));
        assert_eq!(frame.floor, [Vec2::new(0.0, 650.0), Vec2::new(1000.0, 650.0)]);
        assert_eq!(frame.score_text, "0");
        assert_eq!(frame.lives_text, "2");

        let score_value = &frame.labels[3];
        assert_eq!(score_value.text, "0");
        assert_eq!(score_value.pos, Vec2::new(666.0, 705.0));
        assert_eq!(frame.labels[1].pos, Vec2::new(333.0, 705.0));
        assert_eq!(frame.labels[0].pos, Vec2::new(500.0, 675.0));
    }

    #[test]
    fn test_frame_tracks_committed_state() {
        let game = Game::with_seed(1);
        let frame = game.frame();
        assert_eq!(frame.basket, game.basket.shown);
        assert_eq!(frame.fruit, game.fruit.shown);
        assert!(frame.paused);
    }

    #[test]
    fn test_projection_corners() {
        let frame = Game::with_seed(1).frame();
        let proj = frame.projection();
        let bottom_left = proj.project_point3(Vec3::new(0.0, 0.0, 0.0));
        let top_right = proj.project_point3(Vec3::new(1000.0, 750.0, 0.0));
        assert!((bottom_left.x + 1.0).abs() < 1e-5 && (bottom_left.y + 1.0).abs() < 1e-5);
        assert!((top_right.x - 1.0).abs() < 1e-5 && (top_right.y - 1.0).abs() < 1e-5);
    }
}
