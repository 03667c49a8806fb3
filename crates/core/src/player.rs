use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Level;

/// A scored, labeled entity.
///
/// Players order by `level` first. Two players on the same level are ordered
/// by `name`, so the lexicographically greater name ranks higher and wins the
/// last leaderboard slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Player {
    pub name: String,
    pub level: Level,
}

impl Player {
    pub fn new(name: impl Into<String>, level: Level) -> Self {
        Self { name: name.into(), level }
    }
}

impl Ord for Player {
    fn cmp(&self, other: &Self) -> Ordering {
        self.level
            .cmp(&other.level)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Player {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.level)
    }
}
