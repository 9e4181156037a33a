use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a next/previous navigation: 1-based `current` out of `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPosition {
    pub current: usize,
    pub total: usize,
}

/// What the match counter shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchCount {
    #[default]
    None,
    Total(usize),
    Position(MatchPosition),
}

impl MatchCount {
    pub fn from_total(total: usize) -> Self {
        if total == 0 {
            MatchCount::None
        } else {
            MatchCount::Total(total)
        }
    }
}

impl From<MatchPosition> for MatchCount {
    fn from(pos: MatchPosition) -> Self {
        if pos.total == 0 {
            MatchCount::None
        } else {
            MatchCount::Position(pos)
        }
    }
}

impl fmt::Display for MatchCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchCount::None => write!(f, "No matches"),
            MatchCount::Total(1) => write!(f, "1 match"),
            MatchCount::Total(n) => write!(f, "{n} matches"),
            MatchCount::Position(p) => write!(f, "{} of {}", p.current, p.total),
        }
    }
}
