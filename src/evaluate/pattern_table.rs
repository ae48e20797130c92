//! Run-length / open-end scoring bands.
//!
//! Rows are indexed by the run length (capped at five), columns by the number of
//! open ends (0, 1 or 2). Within a row, more open ends never score less; within
//! a column, longer runs never score less.

use crate::board::WIN_CONDITION;

pub const FIVE: i32 = 100_000;

pub const PATTERN_SCORES: [[i32; 3]; WIN_CONDITION + 1] = [
    // no run
    [0, 0, 0],
    // one
    [0, 3, 10],
    // two
    [5, 30, 100],
    // three
    [50, 300, 3_000],
    // four
    [100, 5_000, 50_000],
    // five or more
    [FIVE, FIVE, FIVE],
];

#[inline(always)]
pub fn pattern_score(count: usize, open_ends: usize) -> i32 {
    PATTERN_SCORES[count.min(WIN_CONDITION)][open_ends.min(2)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_ignores_open_ends() {
        for open_ends in 0..=2 {
            assert_eq!(pattern_score(5, open_ends), 100_000);
            assert_eq!(pattern_score(9, open_ends), 100_000);
        }
    }

    #[test]
    fn test_four_band() {
        assert_eq!(pattern_score(4, 2), 50_000);
        assert_eq!(pattern_score(4, 1), 5_000);
        assert_eq!(pattern_score(4, 0), 100);
    }

    #[test]
    fn test_three_band() {
        assert_eq!(pattern_score(3, 2), 3_000);
        assert_eq!(pattern_score(3, 1), 300);
        assert_eq!(pattern_score(3, 0), 50);
    }

    #[test]
    fn test_two_band() {
        assert_eq!(pattern_score(2, 2), 100);
        assert_eq!(pattern_score(2, 1), 30);
        assert_eq!(pattern_score(2, 0), 5);
    }

    #[test]
    fn test_one_band() {
        assert_eq!(pattern_score(1, 2), 10);
        assert_eq!(pattern_score(1, 1), 3);
        assert_eq!(pattern_score(1, 0), 0);
    }

    #[test]
    fn test_table_is_monotonic() {
        for count in 1..=WIN_CONDITION {
            for open_ends in 1..=2 {
                assert!(pattern_score(count, open_ends) >= pattern_score(count, open_ends - 1));
            }
            for open_ends in 0..=2 {
                assert!(pattern_score(count, open_ends) >= pattern_score(count - 1, open_ends));
            }
        }
    }
}
