//! Ten-pin bowling scoring
//!
//! Validates a flat sequence of ball pinfalls and scores it frame by frame.
//!
//! # Scoring Rules
//!
//! ```text
//! Game Score = Σ (first + second + bonus) over frames 1..=10
//!
//! Where:
//!   Strike (first == 10)       → second = 0, bonus = next two balls
//!   Spare  (first + second == 10) → bonus = next ball
//!   Open                       → bonus = 0
//! ```
//!
//! Bonus balls are looked at, not consumed: in frames 1-9 they are read again
//! as the next frame's own balls, in frame 10 they are the final throws of
//! the game. Frames 1-9 must not knock down more than 10 pins; frame 10 is
//! exempt from that check.
//!
//! # Example
//!
//! ```
//! let total = bowlscore::scoring::score(&[10; 12]).unwrap();
//! assert_eq!(total, 300);
//! ```

mod scorer;

pub use scorer::{score, score_game};

use thiserror::Error;

/// Errors raised while validating a ball sequence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("{}", missing_message(.frame, .bonus))]
    MissingData { frame: u8, bonus: bool },

    #[error("Frame {frame} has invalid scores {}", format_pair(.values))]
    InvalidFrame { frame: u8, values: (i32, i32) },
}

fn missing_message(frame: &u8, bonus: &bool) -> String {
    if *bonus {
        "Not enough balls".to_string()
    } else {
        format!("No data for frame {}", frame)
    }
}

fn format_pair(values: &(i32, i32)) -> String {
    format!("({}, {})", values.0, values.1)
}

impl ScoreError {
    /// Frame the error was raised in
    pub fn frame(&self) -> u8 {
        match self {
            ScoreError::MissingData { frame, .. } | ScoreError::InvalidFrame { frame, .. } => {
                *frame
            }
        }
    }
}

pub type ScoreResult<T> = Result<T, ScoreError>;
