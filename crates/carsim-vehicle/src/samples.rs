//! Filter window sizes

use serde::{Deserialize, Serialize};

/// Number of samples averaged by each of the integrator's filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleSizes {
    /// Engine RPM filter.
    pub rpm: usize,
    /// Road speed filter.
    pub speed: usize,
    /// Brake filter.
    pub brake: usize,
    /// Accelerator pedal filter.
    pub accelerator_pedal: usize,
}

impl Default for SampleSizes {
    fn default() -> Self {
        Self {
            rpm: 60,
            speed: 180,
            brake: 10,
            accelerator_pedal: 40,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_deserialize_keeps_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let sizes: SampleSizes = serde_json::from_str(r#"{"speed": 40}"#)?;
        assert_eq!(sizes.speed, 40);
        assert_eq!(sizes.rpm, 60);
        assert_eq!(sizes.brake, 10);
        assert_eq!(sizes.accelerator_pedal, 40);
        Ok(())
    }
}
