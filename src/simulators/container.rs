//! Container with most water.
//!
//! The optimal pass moves two pointers inward from both ends and always
//! advances the side bounding the smaller height; on equal heights the right
//! pointer moves. The brute pass checks every pair `(i, j)`.

use crate::step::{ContainerDetail, Phase, Step, StepDetail, StepPair, StepRecorder, StepState};

/// Heights are expected to be non-negative
pub fn simulate(heights: &[i32]) -> StepPair {
    StepPair::new(brute_force(heights), optimal(heights))
}

fn area(heights: &[i32], l: usize, r: usize) -> i64 {
    heights[l].min(heights[r]) as i64 * (r - l) as i64
}

fn brute_force(heights: &[i32]) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let mut max_area = 0i64;

    for i in 0..heights.len() {
        for j in (i + 1)..heights.len() {
            let current = area(heights, i, j);
            let is_new_max = current > max_area;
            if is_new_max {
                max_area = current;
            }

            recorder.record(
                format!("Pair [{}, {}]: area {}", i, j, current),
                StepState::new(
                    Phase::Searching,
                    ContainerDetail {
                        heights: heights.to_vec(),
                        area: current,
                        max_area,
                        is_new_max,
                        calculation: Some(calculation(heights, i, j, current)),
                    },
                )
                .with_pointer("i", i)
                .with_pointer("j", j),
            );
        }
    }

    record_result(&mut recorder, heights, max_area);
    recorder.finish()
}

fn optimal(heights: &[i32]) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let mut max_area = 0i64;
    let (mut l, mut r) = (0usize, heights.len().saturating_sub(1));

    while l < r {
        let current = area(heights, l, r);
        let is_new_max = current > max_area;
        if is_new_max {
            max_area = current;
        }

        recorder.record(
            format!(
                "Window [{}, {}]: height={}, width={}. Area: {}",
                l,
                r,
                heights[l].min(heights[r]),
                r - l,
                current
            ),
            StepState::new(
                Phase::Searching,
                ContainerDetail {
                    heights: heights.to_vec(),
                    area: current,
                    max_area,
                    is_new_max,
                    calculation: Some(calculation(heights, l, r, current)),
                },
            )
            .with_pointer("left", l)
            .with_pointer("right", r),
        );

        if heights[l] < heights[r] {
            l += 1;
        } else {
            r -= 1;
        }
    }

    record_result(&mut recorder, heights, max_area);
    recorder.finish()
}

fn calculation(heights: &[i32], l: usize, r: usize, current: i64) -> String {
    format!(
        "min({}, {}) * {} = {}",
        heights[l],
        heights[r],
        r - l,
        current
    )
}

fn record_result(recorder: &mut StepRecorder, heights: &[i32], max_area: i64) {
    recorder.record(
        format!("Maximum area found: {}", max_area),
        StepState::new(
            Phase::Found,
            ContainerDetail {
                heights: heights.to_vec(),
                area: max_area,
                max_area,
                is_new_max: false,
                calculation: None,
            },
        ),
    );
}

/// `maxArea` reported by the terminal step of a list
pub fn reported_max_area(steps: &[Step]) -> Option<i64> {
    match &steps.last()?.state.detail {
        StepDetail::Container(c) => Some(c.max_area),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_heights_move_right_pointer() {
        let pair = simulate(&[3, 1, 3]);
        let second = &pair.optimal_steps[1];
        assert_eq!(second.state.pointer("left"), Some(0));
        assert_eq!(second.state.pointer("right"), Some(1));
    }

    #[test]
    fn test_fewer_than_two_heights() {
        let pair = simulate(&[4]);
        assert_eq!(pair.optimal_steps.len(), 1);
        assert_eq!(reported_max_area(&pair.optimal_steps), Some(0));
        assert_eq!(reported_max_area(&pair.brute_force_steps), Some(0));
    }
}
