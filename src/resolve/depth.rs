//! Remaining resolution depth.

use serde::{Deserialize, Serialize};

/// Hard cap on how many levels a single resolution may expand.
pub const MAX_DEPTH: u8 = 10;

/// How many more levels of reference-following are allowed.
///
/// Always within `0..=MAX_DEPTH`. Decrementing saturates at zero; at zero
/// every nested link stays a Reference, which also ends any cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Depth(u8);

impl Depth {
    pub const ZERO: Depth = Depth(0);
    pub const MAX: Depth = Depth(MAX_DEPTH);

    /// Clamps `levels` to [`MAX_DEPTH`].
    pub fn new(levels: usize) -> Self {
        Depth(levels.min(MAX_DEPTH as usize) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// One level less, floored at zero.
    pub fn next(self) -> Self {
        Depth(self.0.saturating_sub(1))
    }

    pub fn is_exhausted(self) -> bool {
        self.0 == 0
    }
}

impl From<u8> for Depth {
    fn from(levels: u8) -> Self {
        Depth::new(levels as usize)
    }
}

impl From<Depth> for u8 {
    fn from(depth: Depth) -> Self {
        depth.0
    }
}

impl std::fmt::Display for Depth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
