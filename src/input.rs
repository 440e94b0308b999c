//! Ball token parsing
//!
//! Turns raw command-line tokens into pinfall counts. Range checks are left
//! to the scorer so out-of-range balls are reported against their frame.

use thiserror::Error;

/// Message printed for any malformed input
pub const INVALID_FORMAT: &str = "Invalid input data format";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input data format: '{token}' (ball {position}) is not an integer")]
    InvalidFormat { token: String, position: usize },
}

/// Parse every token as a ball count
///
/// Positions in errors are 1-indexed.
pub fn parse_balls<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<i32>, InputError> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let token = token.as_ref().trim();
            token.parse::<i32>().map_err(|_| InputError::InvalidFormat {
                token: token.to_string(),
                position: i + 1,
            })
        })
        .collect()
}
