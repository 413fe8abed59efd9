//! Data-driven game balance
//!
//! Every number the simulation uses lives here so a session can be rebalanced
//! from JSON without touching code. Defaults come from [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Physics and scoring parameters for one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub width: f32,
    pub height: f32,

    pub ball_radius: f32,
    pub restart_speed: f32,
    pub spawn_vx_max: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_bottom_offset: f32,

    pub catch_vy_boost: f32,
    pub catch_vx_boost: f32,
    pub catch_lift: f32,

    pub milestone_every: u32,
    pub milestone_vy_bonus: f32,
    pub drop_speed_step: f32,

    pub star_radius: f32,
    pub star_min_speed: f32,
    pub star_speed_lead: f32,
    pub star_points: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,

            ball_radius: BALL_RADIUS,
            restart_speed: BALL_RESTART_SPEED,
            spawn_vx_max: BALL_SPAWN_VX_MAX,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,

            catch_vy_boost: CATCH_VY_BOOST,
            catch_vx_boost: CATCH_VX_BOOST,
            catch_lift: CATCH_LIFT,

            milestone_every: MILESTONE_EVERY,
            milestone_vy_bonus: MILESTONE_VY_BONUS,
            drop_speed_step: DROP_SPEED_STEP,

            star_radius: STAR_RADIUS,
            star_min_speed: STAR_MIN_SPEED,
            star_speed_lead: STAR_SPEED_LEAD,
            star_points: STAR_POINTS,
        }
    }
}

impl Tuning {
    /// Paddle top edge (fixed for the whole session)
    #[inline]
    pub fn paddle_y(&self) -> f32 {
        self.height - self.paddle_bottom_offset
    }

    /// Check that a session built from these numbers can run.
    ///
    /// Spawn positions are drawn from `[radius, width - radius)`, so a ball or
    /// star at least as wide as the canvas is rejected here rather than
    /// panicking inside the RNG later.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("width", self.width),
            ("height", self.height),
            ("ball_radius", self.ball_radius),
            ("restart_speed", self.restart_speed),
            ("spawn_vx_max", self.spawn_vx_max),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_bottom_offset", self.paddle_bottom_offset),
            ("catch_vy_boost", self.catch_vy_boost),
            ("catch_vx_boost", self.catch_vx_boost),
            ("catch_lift", self.catch_lift),
            ("milestone_vy_bonus", self.milestone_vy_bonus),
            ("drop_speed_step", self.drop_speed_step),
            ("star_radius", self.star_radius),
            ("star_min_speed", self.star_min_speed),
            ("star_speed_lead", self.star_speed_lead),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, "must be a finite number"));
            }
        }

        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("ball_radius", self.ball_radius),
            ("restart_speed", self.restart_speed),
            ("spawn_vx_max", self.spawn_vx_max),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("star_radius", self.star_radius),
            // A non-positive boost would leave a caught ball moving down
            ("catch_vy_boost", self.catch_vy_boost),
            ("catch_vx_boost", self.catch_vx_boost),
            // Floor for the star fall speed
            ("star_min_speed", self.star_min_speed),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::invalid(field, "must be positive"));
            }
        }

        let non_negative = [
            ("catch_lift", self.catch_lift),
            ("milestone_vy_bonus", self.milestone_vy_bonus),
            ("drop_speed_step", self.drop_speed_step),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::invalid(field, "must not be negative"));
            }
        }

        if self.ball_radius * 2.0 >= self.width {
            return Err(ConfigError::invalid(
                "ball_radius",
                "ball must be narrower than the canvas",
            ));
        }
        if self.star_radius * 2.0 >= self.width {
            return Err(ConfigError::invalid(
                "star_radius",
                "star must be narrower than the canvas",
            ));
        }
        if self.paddle_bottom_offset < 0.0 || self.paddle_bottom_offset >= self.height {
            return Err(ConfigError::invalid(
                "paddle_bottom_offset",
                "paddle must sit inside the canvas",
            ));
        }
        if self.milestone_every == 0 {
            return Err(ConfigError::invalid("milestone_every", "must be at least 1"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.paddle_y(), 560.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "ball_radius": 10.0 }"#).unwrap();
        assert_eq!(tuning.ball_radius, 10.0);
        assert_eq!(tuning.width, CANVAS_WIDTH);
        assert_eq!(tuning.milestone_every, MILESTONE_EVERY);
    }

    #[test]
    fn test_rejects_ball_wider_than_canvas() {
        let tuning = Tuning {
            ball_radius: 200.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::Invalid {
                field: "ball_radius",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_zero_milestone() {
        let tuning = Tuning {
            milestone_every: 0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::Invalid {
                field: "milestone_every",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        let tuning = Tuning {
            catch_vy_boost: f32::NAN,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    fn rejected_field(tuning: Tuning) -> Option<&'static str> {
        match tuning.validate() {
            Err(ConfigError::Invalid { field, .. }) => Some(field),
            _ => None,
        }
    }

    #[test]
    fn test_rejects_non_positive_catch_boosts() {
        for boost in [0.0, -1.0] {
            let vy = Tuning {
                catch_vy_boost: boost,
                ..Default::default()
            };
            assert_eq!(rejected_field(vy), Some("catch_vy_boost"));

            let vx = Tuning {
                catch_vx_boost: boost,
                ..Default::default()
            };
            assert_eq!(rejected_field(vx), Some("catch_vx_boost"));
        }
    }

    #[test]
    fn test_rejects_negative_milestone_bonus() {
        let tuning = Tuning {
            milestone_vy_bonus: -10.0,
            ..Default::default()
        };
        assert_eq!(rejected_field(tuning), Some("milestone_vy_bonus"));

        let zero = Tuning {
            milestone_vy_bonus: 0.0,
            ..Default::default()
        };
        assert!(zero.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_drop_speed_step() {
        let tuning = Tuning {
            drop_speed_step: -0.5,
            ..Default::default()
        };
        assert_eq!(rejected_field(tuning), Some("drop_speed_step"));
    }

    #[test]
    fn test_rejects_non_positive_star_min_speed() {
        let tuning = Tuning {
            star_min_speed: 0.0,
            ..Default::default()
        };
        assert_eq!(rejected_field(tuning), Some("star_min_speed"));
    }

    #[test]
    fn test_rejects_negative_catch_lift() {
        let tuning = Tuning {
            catch_lift: -2.0,
            ..Default::default()
        };
        assert_eq!(rejected_field(tuning), Some("catch_lift"));
    }

    #[test]
    fn test_rejects_paddle_below_canvas() {
        let tuning = Tuning {
            paddle_bottom_offset: 700.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }
}
