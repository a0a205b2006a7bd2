use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

/// Largest grid side, in cells, the terminal renderer can lay out
pub const MAX_GRID_CELLS: u32 = 1024;

/// Inclusive range of ticks a perishable entity lives for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeSpan {
    pub min: u32,
    pub max: u32,
}

impl LifeSpan {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, life: u32) -> bool {
        (self.min..=self.max).contains(&life)
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: u32,
    /// Height of the game grid in cells
    pub grid_height: u32,
    /// Side of one cell in surface units
    pub cell_size: u32,
    /// Number of rocks on the field
    pub rock_count: usize,

    /// Snake speed in ticks per second at spawn
    pub base_speed: f32,
    /// Speed added each time the snake grows
    pub speed_step: f32,

    /// Lifetime range of the apple
    pub apple_life: LifeSpan,
    /// Ticks per blink cycle of a dying apple
    pub apple_blink_period: u32,
    /// Lifetime range of every rock
    pub rock_life: LifeSpan,
    /// Ticks per blink cycle of a dying rock
    pub rock_blink_period: u32,
    /// Remaining life at which entities start blinking
    pub low_life_threshold: u32,

    /// Fixed RNG seed; a fresh one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 32,
            grid_height: 24,
            cell_size: 20,
            rock_count: 3,
            base_speed: 5.0,
            speed_step: 0.5,
            apple_life: LifeSpan::new(25, 70),
            apple_blink_period: 3,
            rock_life: LifeSpan::new(40, 150),
            rock_blink_period: 3,
            low_life_threshold: 20,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Load overrides from a JSON file; omitted fields keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }

    /// Reject values that would break the simulation invariants
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_width > 0 && self.grid_height > 0,
            "grid must have at least one cell, got {}x{}",
            self.grid_width,
            self.grid_height
        );
        ensure!(self.cell_size > 0, "cell size must be positive");
        ensure!(
            self.grid_width <= MAX_GRID_CELLS && self.grid_height <= MAX_GRID_CELLS,
            "grid is limited to {MAX_GRID_CELLS}x{MAX_GRID_CELLS} cells, got {}x{}",
            self.grid_width,
            self.grid_height
        );
        for cells in [self.grid_width, self.grid_height] {
            // Positions are i32 surface units
            let extent = u64::from(cells) * u64::from(self.cell_size);
            ensure!(
                i32::try_from(extent).is_ok(),
                "grid side of {cells} cells of size {} does not fit the coordinate range",
                self.cell_size
            );
        }
        ensure!(
            self.base_speed.is_finite() && self.base_speed > 0.0,
            "base speed must be positive, got {}",
            self.base_speed
        );
        ensure!(
            self.speed_step.is_finite() && self.speed_step >= 0.0,
            "speed step must not be negative, got {}",
            self.speed_step
        );
        for (name, span) in [("apple", self.apple_life), ("rock", self.rock_life)] {
            // A zero-tick life would expire again on the very next tick.
            ensure!(span.min >= 1, "{name} life must last at least one tick");
            ensure!(
                span.min <= span.max,
                "{name} life range is empty: [{}, {}]",
                span.min,
                span.max
            );
        }
        ensure!(
            self.apple_blink_period > 0 && self.rock_blink_period > 0,
            "blink periods must be positive"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 32);
        assert_eq!(config.grid_height, 24);
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.rock_count, 3);
        assert_eq!(config.apple_life, LifeSpan::new(25, 70));
        assert_eq!(config.rock_life, LifeSpan::new(40, 150));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 12);
        assert_eq!(config.base_speed, 5.0);
    }

    #[test]
    fn test_life_span_is_inclusive() {
        let span = LifeSpan::new(25, 70);
        assert!(span.contains(25));
        assert!(span.contains(70));
        assert!(!span.contains(24));
        assert!(!span.contains(71));
    }

    #[test]
    fn test_validate_rejects_broken_values() {
        let mut config = GameConfig::small();
        config.apple_life = LifeSpan::new(0, 10);
        assert!(config.validate().is_err());

        let mut config = GameConfig::small();
        config.rock_life = LifeSpan::new(50, 40);
        assert!(config.validate().is_err());

        let mut config = GameConfig::small();
        config.base_speed = 0.0;
        assert!(config.validate().is_err());

        let config = GameConfig::new(0, 10);
        assert!(config.validate().is_err());

        let mut config = GameConfig::small();
        config.rock_blink_period = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_grid() {
        assert!(GameConfig::new(200_000_000, 1).validate().is_err());
        assert!(GameConfig::new(40_000, 1).validate().is_err());
        assert!(GameConfig::new(1, MAX_GRID_CELLS + 1).validate().is_err());
        assert!(GameConfig::new(MAX_GRID_CELLS, MAX_GRID_CELLS).validate().is_ok());

        let mut config = GameConfig::new(MAX_GRID_CELLS, 10);
        config.cell_size = u32::MAX / 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "rock_count": 7, "seed": 42 }}"#).unwrap();

        let config = GameConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.rock_count, 7);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.grid_width, 32);
        assert_eq!(config.apple_life, LifeSpan::new(25, 70));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::from_json_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
