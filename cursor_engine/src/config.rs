//! Engine configuration

use serde::{Deserialize, Serialize};

/// Tunable timing knobs for a cursor engine
///
/// Durations are presentation-facing as well as behavioral: the tick
/// duration scales wait-block pauses, while the move and fizzle
/// durations are surfaced so a host UI can animate transitions at the
/// pace the engine expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Milliseconds per simulation tick; wait blocks pause for
    /// `ticks * tick_duration_ms`
    pub tick_duration_ms: u64,
    /// How long a host should animate a single cell move
    pub move_duration_ms: u64,
    /// How long a host should animate the fizzle before the run settles
    pub fizzle_duration_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_duration_ms: 50,
            move_duration_ms: 200,
            fizzle_duration_ms: 300,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.tick_duration_ms, 50);
        assert_eq!(config.move_duration_ms, 200);
        assert_eq!(config.fizzle_duration_ms, 300);
    }
}
