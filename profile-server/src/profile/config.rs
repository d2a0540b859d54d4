//! Scan configuration.

use chrono::Duration;

/// Configuration parameters for one profile scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileConfig {
    /// Minimum dwell required to change vehicles, in seconds.
    /// Applied whenever a transfer occurs; never on a same-trip
    /// continuation.
    pub transfer_margin_secs: i64,

    /// Walking speed used to turn footpath distances into elapsed time,
    /// in metres per second.
    pub walk_speed: f64,
}

impl ProfileConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(transfer_margin_secs: i64, walk_speed: f64) -> Self {
        Self {
            transfer_margin_secs,
            walk_speed,
        }
    }

    /// Returns the transfer margin as a Duration.
    pub fn transfer_margin(&self) -> Duration {
        Duration::seconds(self.transfer_margin_secs)
    }

    /// Elapsed walking time for a footpath of the given length, rounded up
    /// to whole seconds.
    ///
    /// Rounding up shifts the propagated departure earlier, so a footpath
    /// candidate never claims a departure the walk cannot actually reach.
    pub fn walk_time(&self, distance_meters: f64) -> Duration {
        Duration::seconds((distance_meters / self.walk_speed).ceil() as i64)
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            transfer_margin_secs: 120, // 2 minutes
            walk_speed: 1.4,           // typical pedestrian pace
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ProfileConfig::default();

        assert_eq!(config.transfer_margin_secs, 120);
        assert_eq!(config.walk_speed, 1.4);
        assert_eq!(config.transfer_margin(), Duration::seconds(120));
    }

    #[test]
    fn custom_config() {
        let config = ProfileConfig::new(60, 2.0);

        assert_eq!(config.transfer_margin(), Duration::seconds(60));
        assert_eq!(config.walk_time(100.0), Duration::seconds(50));
    }

    #[test]
    fn walk_time_rounds_up() {
        let config = ProfileConfig::new(0, 3.0);

        // 100m at 3 m/s is 33.3s; round up to 34.
        assert_eq!(config.walk_time(100.0), Duration::seconds(34));
        // Exact divisions are not rounded.
        assert_eq!(config.walk_time(99.0), Duration::seconds(33));
        assert_eq!(config.walk_time(0.0), Duration::seconds(0));
    }
}
