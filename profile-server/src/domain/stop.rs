//! Stop identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A stop (station, platform, or other boardable location) in the network.
///
/// Stops are identified by a caller-assigned numeric index, as produced by
/// whatever timetable importer feeds the scan. The scan itself never
/// interprets the number.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StopId(pub u32);

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(StopId(17).to_string(), "17");
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", StopId(3)), "StopId(3)");
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(StopId(5));
        assert!(set.contains(&StopId(5)));
        assert!(!set.contains(&StopId(6)));
    }
}
