//! Scoring module - Classic line-clear scoring and level progression
//!
//! - A lock that clears N lines scores `LINE_SCORES[N] * level`, using the
//!   level in effect before those lines are counted.
//! - The level is `lines / 10 + 1`, so every game starts at level 1.
//! - Gravity speeds up by 100ms per level down to a 50ms floor.

use crate::types::{BASE_DROP_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_DROP_MS};

/// Calculate line clear score
/// lines: number of lines cleared; counts outside the table score 0
/// level: current level (1-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    LINE_SCORES
        .get(lines)
        .copied()
        .unwrap_or(0)
        .saturating_mul(level)
}

/// Level for a total line count
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Get drop interval for a level (in milliseconds)
pub fn get_drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS.saturating_sub(speedup).max(MIN_DROP_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_line_scores() {
        // Level 1
        assert_eq!(calculate_line_score(0, 1), 0);
        assert_eq!(calculate_line_score(1, 1), 40);
        assert_eq!(calculate_line_score(2, 1), 100);
        assert_eq!(calculate_line_score(3, 1), 300);
        assert_eq!(calculate_line_score(4, 1), 1200);

        // Level 5
        assert_eq!(calculate_line_score(1, 5), 40 * 5);
        assert_eq!(calculate_line_score(4, 5), 1200 * 5);
    }

    #[test]
    fn test_out_of_table_clears_score_nothing() {
        assert_eq!(calculate_line_score(5, 3), 0);
        assert_eq!(calculate_line_score(20, 1), 0);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(calculate_level(0), 1);
        assert_eq!(calculate_level(9), 1);
        assert_eq!(calculate_level(10), 2);
        assert_eq!(calculate_level(29), 3);
        assert_eq!(calculate_level(100), 11);
    }

    #[test]
    fn test_drop_intervals() {
        assert_eq!(get_drop_interval_ms(1), 1000);
        assert_eq!(get_drop_interval_ms(2), 900);
        assert_eq!(get_drop_interval_ms(10), 100);
        assert_eq!(get_drop_interval_ms(11), 50);
        assert_eq!(get_drop_interval_ms(40), 50);
        assert_eq!(get_drop_interval_ms(u32::MAX), 50);
    }
}
