use crate::protocols::water_polo::{PenaltyCounts, ScoreboardEvent};

/// Capability set notified by [`EventDispatcher`](super::EventDispatcher).
///
/// Every method defaults to a no-op, so a consumer implements only the event
/// kinds it observes. Repeated timer messages call the timer method once per
/// record.
///
/// # Examples
/// ```
/// use polowire_core::{EventConsumer, EventDispatcher};
///
/// #[derive(Default)]
/// struct Scores(Vec<(u32, u32)>);
///
/// impl EventConsumer for Scores {
///     fn score(&mut self, home: u32, away: u32) {
///         self.0.push((home, away));
///     }
/// }
///
/// let mut dispatcher = EventDispatcher::new(Scores::default());
/// dispatcher
///     .process_message(b"A1\x17\x16\x010042100015\x020714")
///     .unwrap();
/// assert_eq!(dispatcher.consumer().0, vec![(7, 14)]);
/// ```
pub trait EventConsumer {
    fn game_time(&mut self, _seconds: u32) {}

    fn shot_time(&mut self, _seconds: u32) {}

    fn timeout_timer(&mut self, _seconds: u32) {}

    fn score(&mut self, _home: u32, _away: u32) {}

    fn timeouts_left(&mut self, _home: u32, _away: u32, _home_partial: u32, _away_partial: u32) {}

    fn period(&mut self, _number: u32) {}

    fn home_penalty_timer(&mut self, _cap: u32, _seconds: u32) {}

    fn away_penalty_timer(&mut self, _cap: u32, _seconds: u32) {}

    fn home_penalties(&mut self, _counts: &PenaltyCounts) {}

    fn away_penalties(&mut self, _counts: &PenaltyCounts) {}

    fn unknown_message(&mut self, _message_type: &str, _payload: &str) {}
}

/// Ignores every event.
impl EventConsumer for () {}

impl<C: EventConsumer + ?Sized> EventConsumer for &mut C {
    fn game_time(&mut self, seconds: u32) {
        (**self).game_time(seconds);
    }

    fn shot_time(&mut self, seconds: u32) {
        (**self).shot_time(seconds);
    }

    fn timeout_timer(&mut self, seconds: u32) {
        (**self).timeout_timer(seconds);
    }

    fn score(&mut self, home: u32, away: u32) {
        (**self).score(home, away);
    }

    fn timeouts_left(&mut self, home: u32, away: u32, home_partial: u32, away_partial: u32) {
        (**self).timeouts_left(home, away, home_partial, away_partial);
    }

    fn period(&mut self, number: u32) {
        (**self).period(number);
    }

    fn home_penalty_timer(&mut self, cap: u32, seconds: u32) {
        (**self).home_penalty_timer(cap, seconds);
    }

    fn away_penalty_timer(&mut self, cap: u32, seconds: u32) {
        (**self).away_penalty_timer(cap, seconds);
    }

    fn home_penalties(&mut self, counts: &PenaltyCounts) {
        (**self).home_penalties(counts);
    }

    fn away_penalties(&mut self, counts: &PenaltyCounts) {
        (**self).away_penalties(counts);
    }

    fn unknown_message(&mut self, message_type: &str, payload: &str) {
        (**self).unknown_message(message_type, payload);
    }
}

/// Deliver one event to the matching consumer methods.
pub fn emit<C: EventConsumer + ?Sized>(event: &ScoreboardEvent, consumer: &mut C) {
    match event {
        ScoreboardEvent::GameTime { seconds } => consumer.game_time(*seconds),
        ScoreboardEvent::ShotTime { seconds } => consumer.shot_time(*seconds),
        ScoreboardEvent::TimeoutTimer { seconds } => consumer.timeout_timer(*seconds),
        ScoreboardEvent::Score { home, away } => consumer.score(*home, *away),
        ScoreboardEvent::TimeoutsLeft {
            home,
            away,
            home_partial,
            away_partial,
        } => consumer.timeouts_left(*home, *away, *home_partial, *away_partial),
        ScoreboardEvent::Period { number } => consumer.period(*number),
        ScoreboardEvent::HomePenaltyTimers { timers } => {
            for timer in timers {
                consumer.home_penalty_timer(timer.cap, timer.seconds);
            }
        }
        ScoreboardEvent::AwayPenaltyTimers { timers } => {
            for timer in timers {
                consumer.away_penalty_timer(timer.cap, timer.seconds);
            }
        }
        ScoreboardEvent::HomePenalties { counts } => consumer.home_penalties(counts),
        ScoreboardEvent::AwayPenalties { counts } => consumer.away_penalties(counts),
        ScoreboardEvent::Unknown {
            message_type,
            payload,
        } => consumer.unknown_message(message_type, payload),
    }
}
