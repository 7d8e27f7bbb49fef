//! Latest-value game state assembled from dispatched events.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dispatch::EventConsumer;
use crate::protocols::water_polo::PenaltyCounts;

/// Consumer that keeps the most recent value of every event kind.
///
/// # Examples
/// ```
/// use polowire_core::{EventDispatcher, GameState};
///
/// let mut dispatcher = EventDispatcher::new(GameState::default());
/// dispatcher
///     .process_message(b"A1\x17\x16\x010042100000\x0207:30")
///     .unwrap();
/// assert_eq!(dispatcher.consumer().game_time, Some(450));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shot_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_timer: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeouts: Option<TimeoutsState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
    pub home: TeamPenalties,
    pub away: TeamPenalties,
    /// Messages with a type code outside the recognized table.
    pub unknown_messages: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub home: u32,
    pub away: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutsState {
    pub home: u32,
    pub away: u32,
    pub home_partial: u32,
    pub away_partial: u32,
}

/// Per-team penalty view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPenalties {
    /// Remaining seconds by cap; each timer record overwrites its cap.
    pub timers: BTreeMap<u32, u32>,
    /// Penalty counts by cap; replaced wholesale by each counts message.
    pub counts: PenaltyCounts,
}

impl EventConsumer for GameState {
    fn game_time(&mut self, seconds: u32) {
        self.game_time = Some(seconds);
    }

    fn shot_time(&mut self, seconds: u32) {
        self.shot_time = Some(seconds);
    }

    fn timeout_timer(&mut self, seconds: u32) {
        self.timeout_timer = Some(seconds);
    }

    fn score(&mut self, home: u32, away: u32) {
        self.score = Some(ScoreState { home, away });
    }

    fn timeouts_left(&mut self, home: u32, away: u32, home_partial: u32, away_partial: u32) {
        self.timeouts = Some(TimeoutsState {
            home,
            away,
            home_partial,
            away_partial,
        });
    }

    fn period(&mut self, number: u32) {
        self.period = Some(number);
    }

    fn home_penalty_timer(&mut self, cap: u32, seconds: u32) {
        self.home.timers.insert(cap, seconds);
    }

    fn away_penalty_timer(&mut self, cap: u32, seconds: u32) {
        self.away.timers.insert(cap, seconds);
    }

    fn home_penalties(&mut self, counts: &PenaltyCounts) {
        self.home.counts = counts.clone();
    }

    fn away_penalties(&mut self, counts: &PenaltyCounts) {
        self.away.counts = counts.clone();
    }

    fn unknown_message(&mut self, _message_type: &str, _payload: &str) {
        self.unknown_messages += 1;
    }
}
