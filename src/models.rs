//! Core data models for bowlscore
//!
//! These models describe a scored game: the frames it was partitioned into
//! and the totals derived from them. They are produced by the scorer and
//! consumed by the reporters.

use serde::{Deserialize, Serialize};

/// Number of frames in a game
pub const LAST_FRAME: u8 = 10;

/// Pins standing at the start of a frame
pub const ALL_PINS: i32 = 10;

/// How a frame was closed out
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum FrameMark {
    /// Pins left standing after both balls
    #[default]
    Open,
    /// All pins down with the second ball
    Spare,
    /// All pins down with the first ball
    Strike,
}

impl FrameMark {
    /// Classify a frame from its two-ball base
    pub fn classify(first: i32, second: i32) -> Self {
        if first == ALL_PINS {
            FrameMark::Strike
        } else if first + second == ALL_PINS {
            FrameMark::Spare
        } else {
            FrameMark::Open
        }
    }

    /// Number of following balls added as bonus
    pub fn bonus_balls(&self) -> usize {
        match self {
            FrameMark::Open => 0,
            FrameMark::Spare => 1,
            FrameMark::Strike => 2,
        }
    }

    /// Score-sheet symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            FrameMark::Open => "-",
            FrameMark::Spare => "/",
            FrameMark::Strike => "X",
        }
    }
}

impl std::fmt::Display for FrameMark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameMark::Open => write!(f, "open"),
            FrameMark::Spare => write!(f, "spare"),
            FrameMark::Strike => write!(f, "strike"),
        }
    }
}

/// One scored frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Frame number (1-10)
    pub number: u8,
    /// Pins knocked down by the first ball
    pub first: i32,
    /// Pins knocked down by the second ball (0 on a strike)
    pub second: i32,
    /// Sum of the balls looked ahead for a strike or spare
    pub bonus: i32,
    pub mark: FrameMark,
    /// Frame score including bonus
    pub score: i32,
    /// Cumulative game score after this frame
    pub running_total: i32,
}

/// Full result of scoring one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    /// Ball sequence as supplied
    pub balls: Vec<i32>,
    pub frames: Vec<Frame>,
    pub total: i32,
}

impl GameReport {
    /// Count of frames with the given mark
    pub fn count(&self, mark: FrameMark) -> usize {
        self.frames.iter().filter(|f| f.mark == mark).count()
    }

    /// True when every frame is a strike
    pub fn is_perfect(&self) -> bool {
        self.frames.len() == LAST_FRAME as usize && self.count(FrameMark::Strike) == self.frames.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(FrameMark::classify(10, 0), FrameMark::Strike);
        assert_eq!(FrameMark::classify(10, 10), FrameMark::Strike);
        assert_eq!(FrameMark::classify(3, 7), FrameMark::Spare);
        assert_eq!(FrameMark::classify(0, 10), FrameMark::Spare);
        assert_eq!(FrameMark::classify(4, 5), FrameMark::Open);
    }

    #[test]
    fn test_bonus_balls() {
        assert_eq!(FrameMark::Open.bonus_balls(), 0);
        assert_eq!(FrameMark::Spare.bonus_balls(), 1);
        assert_eq!(FrameMark::Strike.bonus_balls(), 2);
    }

    #[test]
    fn test_mark_serializes_lowercase() {
        let json = serde_json::to_string(&FrameMark::Strike).expect("serialize mark");
        assert_eq!(json, "\"strike\"");
    }
}
