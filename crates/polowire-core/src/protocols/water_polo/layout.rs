pub const GAME_TIME_CODE: &str = "0042100000";
pub const SHOT_TIME_CODE: &str = "0042100005";
pub const TIMEOUT_TIMER_CODE: &str = "0042100010";
pub const SCORE_CODE: &str = "0042100015";
pub const TIMEOUTS_LEFT_CODE: &str = "0042100019";
pub const PERIOD_CODE: &str = "0042100023";
pub const HOME_PENALTY_TIMER_CODE: &str = "0042100024";
pub const AWAY_PENALTY_TIMER_CODE: &str = "0042100045";
pub const HOME_PENALTIES_CODE: &str = "0042100066";
pub const AWAY_PENALTIES_CODE: &str = "0042100141";

pub const CLOCK_SEPARATOR: char = ':';

pub const SCORE_LEN: usize = 4;
pub const SCORE_HOME_RANGE: std::ops::Range<usize> = 0..2;
pub const SCORE_AWAY_RANGE: std::ops::Range<usize> = 2..4;

/// Below this length a timeouts payload is skipped instead of rejected.
pub const TIMEOUTS_MIN_LEN: usize = 2;
pub const TIMEOUTS_LEN: usize = 4;
pub const TIMEOUTS_HOME_OFFSET: usize = 0;
pub const TIMEOUTS_AWAY_OFFSET: usize = 1;
pub const TIMEOUTS_HOME_PARTIAL_OFFSET: usize = 2;
pub const TIMEOUTS_AWAY_PARTIAL_OFFSET: usize = 3;

pub const PENALTY_TIMER_CHUNK_LEN: usize = 7;
pub const PENALTY_COUNT_CHUNK_LEN: usize = 3;
pub const CAP_RANGE: std::ops::Range<usize> = 0..2;
pub const PENALTY_TIME_RANGE: std::ops::Range<usize> = 2..7;
pub const PENALTY_COUNT_RANGE: std::ops::Range<usize> = 2..3;
