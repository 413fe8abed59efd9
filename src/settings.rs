//! Game settings and preferences
//!
//! Which variant to play, colors, HUD placement, and the balance numbers in
//! [`Tuning`]. Loaded from JSON; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Rule set the session runs under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Variant {
    #[default]
    /// Ball drifts sideways and bounces off walls, ceiling and paddle
    Bounce,
    /// Ball falls straight down and respawns at the top when caught
    Drop {
        /// Spawn a bonus star every milestone
        #[serde(default)]
        bonus_star: bool,
    },
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Bounce => "Bounce",
            Variant::Drop { bonus_star: true } => "Drop (bonus star)",
            Variant::Drop { bonus_star: false } => "Drop",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bounce" => Some(Variant::Bounce),
            "drop" => Some(Variant::Drop { bonus_star: false }),
            "star" | "drop_star" | "drop-star" => Some(Variant::Drop { bonus_star: true }),
            _ => None,
        }
    }

    /// Whether the bonus star mechanic is live
    pub fn star_enabled(&self) -> bool {
        matches!(self, Variant::Drop { bonus_star: true })
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub variant: Variant,
    pub tuning: Tuning,

    // === Colors (any CSS color string) ===
    pub ball_color: String,
    pub paddle_color: String,
    pub star_color: String,
    pub score_color: String,

    // === HUD ===
    pub score_font: String,
    /// Baseline-left anchor of the score text
    pub score_pos: (f32, f32),

    /// Fixed RNG seed (random per run when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            tuning: Tuning::default(),

            ball_color: "blue".to_string(),
            paddle_color: "white".to_string(),
            star_color: "gold".to_string(),
            score_color: "white".to_string(),

            score_font: "18px Arial".to_string(),
            score_pos: (10.0, 25.0),

            seed: None,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.tuning.validate()?;
        Ok(settings)
    }

    /// Parse settings if present, falling back to defaults on any problem
    pub fn load_or_default(json: Option<&str>) -> Self {
        let Some(json) = json else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings ({})", settings.variant.as_str());
                settings
            }
            Err(err) => {
                log::warn!("Ignoring settings: {err}");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
