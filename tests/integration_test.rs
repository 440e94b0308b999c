//! Library-level scoring properties

use bowlscore::models::FrameMark;
use bowlscore::scoring::{score, score_game, ScoreError};

#[test]
fn test_literal_games() {
    assert_eq!(score(&[10; 12]), Ok(300));
    assert_eq!(
        score(&[9, 0, 3, 5, 6, 1, 3, 6, 8, 1, 5, 3, 2, 5, 8, 0, 7, 1, 8, 1]),
        Ok(82)
    );
    assert_eq!(
        score(&[10, 3, 7, 6, 1, 10, 10, 10, 2, 8, 9, 0, 7, 3, 10, 10, 10]),
        Ok(193)
    );
}

#[test]
fn test_all_spares_of_five() {
    let report = score_game(&[5; 21]).expect("legal game");
    assert_eq!(report.total, 150);
    assert_eq!(report.count(FrameMark::Spare), 10);
}

#[test]
fn test_short_game_reports_next_frame() {
    // Nine strikes and nothing else: frame 10 has no first ball
    let err = score(&[10; 9]).unwrap_err();
    assert_eq!(
        err,
        ScoreError::MissingData {
            frame: 10,
            bonus: false
        }
    );
    assert_eq!(err.to_string(), "No data for frame 10");
}

#[test]
fn test_strikes_then_missing_bonus_for_each_frame_count() {
    // k strikes followed by nothing fails in frame k+1
    for k in 0..9u8 {
        let balls = vec![10; k as usize];
        assert_eq!(score(&balls).unwrap_err().frame(), k + 1);
    }
}

#[test]
fn test_every_frame_sum_over_ten_is_rejected() {
    for frame in 1..=9usize {
        let mut balls = vec![0; 20];
        balls[(frame - 1) * 2] = 6;
        balls[(frame - 1) * 2 + 1] = 5;
        let err = score(&balls).unwrap_err();
        assert_eq!(
            err,
            ScoreError::InvalidFrame {
                frame: frame as u8,
                values: (6, 5)
            }
        );
    }
}

#[test]
fn test_scores_within_bounds() {
    let games: [&[i32]; 4] = [
        &[0; 20],
        &[10; 12],
        &[5; 21],
        &[1, 9, 10, 0, 10, 10, 4, 6, 3, 3, 7, 0, 10, 10, 2, 8, 10],
    ];
    for game in games {
        let total = score(game).expect("legal game");
        assert!((0..=300).contains(&total), "{total}");
    }
}
