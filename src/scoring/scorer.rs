//! Frame-by-frame scorer
//!
//! Walks the ball sequence once with an index cursor. The caller's slice is
//! never modified; bonus balls are peeked without advancing the cursor.

use super::{ScoreError, ScoreResult};
use crate::models::{Frame, FrameMark, GameReport, ALL_PINS, LAST_FRAME};
use tracing::{debug, trace};

/// Read-only cursor over the remaining balls
struct BallCursor<'a> {
    balls: &'a [i32],
    pos: usize,
}

impl<'a> BallCursor<'a> {
    fn new(balls: &'a [i32]) -> Self {
        Self { balls, pos: 0 }
    }

    /// Consume the next ball for `frame`
    fn take(&mut self, frame: u8) -> ScoreResult<i32> {
        let ball = *self
            .balls
            .get(self.pos)
            .ok_or(ScoreError::MissingData { frame, bonus: false })?;
        self.pos += 1;
        Ok(ball)
    }

    /// Up to `count` upcoming balls, not consumed
    fn peek(&self, count: usize) -> &'a [i32] {
        let end = (self.pos + count).min(self.balls.len());
        &self.balls[self.pos..end]
    }
}

/// Score a complete game, returning the total
pub fn score(balls: &[i32]) -> ScoreResult<i32> {
    score_game(balls).map(|report| report.total)
}

/// Score a complete game, returning the per-frame breakdown
///
/// Stops at the first invalid or missing ball. Balls past what frame 10
/// needs are ignored.
pub fn score_game(balls: &[i32]) -> ScoreResult<GameReport> {
    let mut cursor = BallCursor::new(balls);
    let mut frames = Vec::with_capacity(LAST_FRAME as usize);
    let mut total: i32 = 0;

    for number in 1..=LAST_FRAME {
        let is_last_frame = number == LAST_FRAME;

        let first = cursor.take(number)?;
        let second = if first == ALL_PINS {
            0
        } else {
            cursor.take(number)?
        };

        let in_range = |pins: i32| (0..=ALL_PINS).contains(&pins);
        if !in_range(first) || !in_range(second) || (first + second > ALL_PINS && !is_last_frame)
        {
            return Err(ScoreError::InvalidFrame {
                frame: number,
                values: (first, second),
            });
        }

        let mark = FrameMark::classify(first, second);
        let extra_balls = mark.bonus_balls();
        let lookahead = cursor.peek(extra_balls);
        if is_last_frame && lookahead.len() < extra_balls {
            return Err(ScoreError::MissingData {
                frame: number,
                bonus: true,
            });
        }
        // Frame-10 bonus balls are never range-checked
        let bonus = lookahead.iter().fold(0i32, |acc, &b| acc.saturating_add(b));

        let frame_score = (first + second).saturating_add(bonus);
        total = frame_score.saturating_add(total);
        trace!(
            "Frame {}: ({}, {}) {} bonus={} score={}",
            number,
            first,
            second,
            mark,
            bonus,
            frame_score
        );

        frames.push(Frame {
            number,
            first,
            second,
            bonus,
            mark,
            score: frame_score,
            running_total: total,
        });
    }

    debug!(
        "Scored {} balls ({} consumed): total={}",
        balls.len(),
        cursor.pos,
        total
    );

    Ok(GameReport {
        balls: balls.to_vec(),
        frames,
        total,
    })
}
