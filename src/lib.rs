//! bowlscore - Ten-pin bowling score calculator
//!
//! Validates a complete game given as a flat sequence of ball pinfalls and
//! computes its total score.
//!
//! ```
//! use bowlscore::scoring::{score, ScoreError};
//!
//! assert_eq!(score(&[10, 3, 7, 6, 1, 10, 10, 10, 2, 8, 9, 0, 7, 3, 10, 10, 10]), Ok(193));
//! assert!(matches!(score(&[9, 7]), Err(ScoreError::InvalidFrame { frame: 1, .. })));
//! ```

pub mod cli;
pub mod config;
pub mod input;
pub mod models;
pub mod reporters;
pub mod scoring;
