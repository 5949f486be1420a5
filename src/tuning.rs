//! Data-driven game balance
//!
//! Every gameplay constant lives here so a JSON file can override it.
//! Missing keys fall back to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// Field geometry and entity constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    /// Width of the playable field
    pub field_width: f32,
    /// Height of the floor line (fruit spawns here)
    pub field_height: f32,
    /// Total viewport height, field plus HUD
    pub ortho_height: f32,

    // === Basket ===
    pub basket_width: f32,
    pub basket_height: f32,
    /// Resting height of the basket above the bottom edge
    pub basket_margin: f32,
    /// Horizontal speed while a direction key is held (units/s)
    pub basket_speed: f32,
    /// Extra reach either side of the basket for catches
    pub catch_slack: f32,

    // === Fruit ===
    pub fruit_side: f32,
    /// Fall speed of a freshly reset fruit (units/s, positive)
    pub fruit_base_speed: f32,
    /// Multiplier applied to the fall speed on every catch
    pub fruit_speedup: f32,

    // === Scoreboard ===
    pub starting_lives: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: ORTHO_WIDTH,
            field_height: FIELD_HEIGHT,
            ortho_height: ORTHO_HEIGHT,

            basket_width: BASKET_WIDTH,
            basket_height: BASKET_HEIGHT,
            basket_margin: BASKET_MARGIN,
            basket_speed: BASKET_SPEED,
            catch_slack: CATCH_SLACK,

            fruit_side: FRUIT_SIDE,
            fruit_base_speed: FRUIT_BASE_SPEED,
            fruit_speedup: FRUIT_SPEEDUP,

            starting_lives: STARTING_LIVES,
        }
    }
}

impl Tuning {
    /// Parse and validate a tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a tuning file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values that would make clamping or spawning ill-defined
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(value: f32, field: &'static str) -> Result<(), TuningError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive number",
                })
            }
        }

        positive(self.field_width, "field_width")?;
        positive(self.field_height, "field_height")?;
        positive(self.ortho_height, "ortho_height")?;
        positive(self.basket_width, "basket_width")?;
        positive(self.basket_height, "basket_height")?;
        positive(self.basket_speed, "basket_speed")?;
        positive(self.fruit_side, "fruit_side")?;
        positive(self.fruit_base_speed, "fruit_base_speed")?;

        if self.basket_width >= self.field_width {
            return Err(TuningError::Invalid {
                field: "basket_width",
                reason: "must be narrower than the field",
            });
        }
        if !(self.basket_margin.is_finite()
            && self.basket_margin >= 0.0
            && self.basket_margin < self.field_height)
        {
            return Err(TuningError::Invalid {
                field: "basket_margin",
                reason: "must lie between the bottom edge and the floor line",
            });
        }
        if self.ortho_height < self.field_height {
            return Err(TuningError::Invalid {
                field: "ortho_height",
                reason: "must be at least field_height",
            });
        }
        if !(self.catch_slack.is_finite() && self.catch_slack >= 0.0) {
            return Err(TuningError::Invalid {
                field: "catch_slack",
                reason: "must be zero or positive",
            });
        }
        if !(self.fruit_speedup.is_finite() && self.fruit_speedup >= 1.0) {
            return Err(TuningError::Invalid {
                field: "fruit_speedup",
                reason: "must be at least 1.0",
            });
        }
        if self.starting_lives == 0 {
            return Err(TuningError::Invalid {
                field: "starting_lives",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Half the basket width
    #[inline]
    pub fn basket_half_width(&self) -> f32 {
        self.basket_width / 2.0
    }

    /// Clamp a basket x position to the field
    pub fn clamp_basket_x(&self, x: f32) -> f32 {
        let half = self.basket_half_width();
        x.clamp(half, self.field_width - half)
    }

    /// Widest integer x a fruit may spawn at
    pub fn spawn_x_max(&self) -> u32 {
        self.field_width.floor() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.field_width, 1000.0);
        assert_eq!(tuning.field_height, 650.0);
        assert_eq!(tuning.starting_lives, 2);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "basket_speed": 800.0 }"#).unwrap();
        assert_eq!(tuning.basket_speed, 800.0);
        assert_eq!(tuning.basket_width, BASKET_WIDTH);
        assert_eq!(tuning.fruit_speedup, FRUIT_SPEEDUP);
    }

    #[test]
    fn test_rejects_basket_wider_than_field() {
        let err = Tuning::from_json(r#"{ "field_width": 50.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "basket_width",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_shrinking_speedup() {
        let err = Tuning::from_json(r#"{ "fruit_speedup": 0.9 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "fruit_speedup",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_zero_lives() {
        let err = Tuning::from_json(r#"{ "starting_lives": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "starting_lives",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "fruit_base_speed": 300.0, "starting_lives": 3 }}"#).unwrap();

        let tuning = Tuning::load(file.path()).unwrap();
        assert_eq!(tuning.fruit_base_speed, 300.0);
        assert_eq!(tuning.starting_lives, 3);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Tuning::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, TuningError::Io { .. }));
    }

    #[test]
    fn test_clamp_basket_x() {
        let tuning = Tuning::default();
        let half = tuning.basket_half_width();
        assert_eq!(tuning.clamp_basket_x(-100.0), half);
        assert_eq!(tuning.clamp_basket_x(5000.0), tuning.field_width - half);
        assert_eq!(tuning.clamp_basket_x(400.0), 400.0);
    }
}
