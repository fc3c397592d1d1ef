//! Scoring module - layer clear points and fall speed per level
//!
//! Points for one settle are `LINE_SCORES[lines] * level`. Clearing more than
//! four layers at once cannot happen with four-block pieces and scores 0.
//!
//! [`level_for_lines`] is the level progression rule. The session does not
//! call it on its own: the level only changes through
//! [`GameState::set_level`](crate::game_state::GameState::set_level).

use crate::types::{
    BASE_INTERVAL_MS, INITIAL_LEVEL, LEVEL_SPEED_MULTIPLIER, LINES_PER_LEVEL, LINE_SCORES,
    MIN_DROP_INTERVAL_MS,
};

/// Points for clearing `lines` layers with a single piece at `level`
pub fn calculate_score(lines: u32, level: u32) -> u32 {
    LINE_SCORES
        .get(lines as usize)
        .copied()
        .unwrap_or(0)
        .saturating_mul(level)
}

/// Level reached after `lines_cleared` total lines; never lower than `current`
pub fn level_for_lines(lines_cleared: u32, current: u32) -> u32 {
    let earned = lines_cleared / LINES_PER_LEVEL + INITIAL_LEVEL;
    earned.max(current)
}

/// Fall interval for a level: `max(100, 3000 * 0.85^(level - 1))` milliseconds
pub fn drop_interval_ms(level: u32) -> u32 {
    let steps = level.saturating_sub(1).min(i32::MAX as u32) as i32;
    let interval = BASE_INTERVAL_MS as f64 * LEVEL_SPEED_MULTIPLIER.powi(steps);
    (interval as u32).max(MIN_DROP_INTERVAL_MS)
}
