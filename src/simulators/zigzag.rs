//! Zigzag conversion by row-assignment walk.

use crate::step::{Direction, Phase, StepPair, StepRecorder, StepState, ZigzagDetail};

/// `num_rows` of 0 is treated like 1 (nothing to zigzag across). Rows past
/// the character count can never be reached, so only those that can be are
/// held; the detail still reports `num_rows` as given.
pub fn simulate(s: &str, num_rows: usize) -> StepPair {
    let mut recorder = StepRecorder::new();

    if num_rows <= 1 {
        recorder.record(
            format!("numRows is 1, string remains unchanged: \"{}\"", s),
            StepState::new(
                Phase::Found,
                ZigzagDetail {
                    num_rows,
                    rows: vec![s.to_string()],
                    direction: None,
                    result: Some(s.to_string()),
                },
            ),
        );
        return StepPair::shared(recorder.finish());
    }

    let reachable = num_rows.min(s.chars().count().max(1));
    let mut rows = vec![String::new(); reachable];
    let mut row = 0usize;
    let mut direction = Direction::Up;

    for (i, ch) in s.chars().enumerate() {
        if row == 0 {
            direction = Direction::Down;
        } else if row == num_rows - 1 {
            direction = Direction::Up;
        }
        rows[row].push(ch);

        recorder.record(
            format!("Placing \"{}\" in row {}.", ch, row),
            StepState::new(
                Phase::Searching,
                ZigzagDetail {
                    num_rows,
                    rows: rows.clone(),
                    direction: Some(direction),
                    result: None,
                },
            )
            .with_pointer("i", i)
            .with_pointer("currRow", row),
        );

        row = match direction {
            Direction::Down => row + 1,
            Direction::Up => row - 1,
        };
    }

    let result = rows.concat();
    recorder.record(
        format!("Final Zigzag result: \"{}\"", result),
        StepState::new(
            Phase::Found,
            ZigzagDetail {
                num_rows,
                rows,
                direction: None,
                result: Some(result),
            },
        ),
    );
    StepPair::shared(recorder.finish())
}
