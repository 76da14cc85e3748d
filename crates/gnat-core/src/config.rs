//! Simulation configuration, loadable from TOML

use crate::error::{GnatError, Result};
use crate::types::{Key, Playfield};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Timing constants for the catch-up loop, all expressed against the
/// hardware tick rate `hz`. One simulated frame corresponds to one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cadence {
    /// Hardware ticks per second.
    pub hz: u64,
    /// Target physical redraws per second.
    pub fps: u64,
    /// Seconds between fly spawns.
    pub spawn_period_secs: u64,
    /// Projectile position updates per second.
    pub updates_per_second: u64,
    /// Seconds between enemy shots.
    pub enemy_fire_secs: u64,
}

impl Default for Cadence {
    fn default() -> Self {
        Self {
            hz: 1000,
            fps: 30,
            spawn_period_secs: 5,
            updates_per_second: 100,
            enemy_fire_secs: 1,
        }
    }
}

impl Cadence {
    /// Reject cadences whose derived tick periods collapse to zero.
    /// Periods that don't divide `hz` evenly are fine: they truncate to
    /// whole ticks.
    pub fn validate(&self) -> Result<()> {
        if self.hz == 0 {
            return Err(GnatError::ValueOutOfRange {
                field: "hz".into(),
                min: 1,
                max: i64::MAX,
                value: 0,
            });
        }
        if self.fps == 0 || self.fps > self.hz {
            return Err(GnatError::ValueOutOfRange {
                field: "fps".into(),
                min: 1,
                max: self.hz as i64,
                value: self.fps as i64,
            });
        }
        if self.updates_per_second == 0 || self.updates_per_second > self.hz {
            return Err(GnatError::ValueOutOfRange {
                field: "updates_per_second".into(),
                min: 1,
                max: self.hz as i64,
                value: self.updates_per_second as i64,
            });
        }
        if self.hz % 2 != 0 {
            return Err(GnatError::CadenceMismatch(format!(
                "hz {} must be even for the half-second fps sample window",
                self.hz
            )));
        }
        if self.spawn_period_secs == 0 || self.enemy_fire_secs == 0 {
            return Err(GnatError::ConfigError(
                "spawn_period_secs and enemy_fire_secs must be nonzero".into(),
            ));
        }
        Ok(())
    }
}

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub playfield: Playfield,
    pub cadence: Cadence,
    /// Raw scan codes for the five logical keys, in [`Key::ALL`] order.
    pub scan_codes: [i32; Key::COUNT],
    /// Maximum number of concurrently live flies.
    pub swarm_capacity: usize,
    /// Seed for the spawn RNG.
    pub seed: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            playfield: Playfield::default(),
            cadence: Cadence::default(),
            // left, right, up, down, space
            scan_codes: [75, 77, 72, 80, 57],
            swarm_capacity: 10_000,
            seed: 0xDEAD_BEEF,
        }
    }
}

impl SimConfig {
    /// Load a config from a TOML file. Missing fields fall back to defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: SimConfig = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.cadence.validate()?;
        if self.playfield.cell <= 0
            || self.playfield.width < 3 * self.playfield.cell
            || self.playfield.height < 3 * self.playfield.cell
        {
            return Err(GnatError::ConfigError(format!(
                "playfield {}x{} too small for cell size {}",
                self.playfield.width, self.playfield.height, self.playfield.cell
            )));
        }
        if self.swarm_capacity == 0 {
            return Err(GnatError::ConfigError("swarm_capacity must be nonzero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_fps_above_hz_rejected() {
        let mut cadence = Cadence::default();
        cadence.fps = cadence.hz + 1;
        assert!(matches!(
            cadence.validate(),
            Err(GnatError::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn test_odd_hz_rejected() {
        let mut cadence = Cadence::default();
        cadence.hz = 999;
        assert!(matches!(
            cadence.validate(),
            Err(GnatError::CadenceMismatch(_))
        ));
    }

    #[test]
    fn test_zero_hz_rejected() {
        let mut cadence = Cadence::default();
        cadence.hz = 0;
        assert!(cadence.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: SimConfig = toml::from_str(
            r#"
            [cadence]
            hz = 500
            fps = 25
            "#,
        )
        .unwrap();
        assert_eq!(config.cadence.hz, 500);
        assert_eq!(config.cadence.fps, 25);
        assert_eq!(config.cadence.spawn_period_secs, 5);
        assert_eq!(config.playfield, Playfield::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tiny_playfield_rejected() {
        let mut config = SimConfig::default();
        config.playfield.width = 16;
        assert!(matches!(config.validate(), Err(GnatError::ConfigError(_))));
    }
}
