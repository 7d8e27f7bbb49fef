use tracing::debug;

use super::consumer::{EventConsumer, emit};
use super::error::DecodeError;
use crate::protocols::frame::{DecodedFrame, decode_frame};
use crate::protocols::water_polo::{PayloadError, ScoreboardEvent, parse_event};

/// Routes decoded frames to a consumer.
///
/// A payload is parsed completely before the consumer sees anything, so a
/// rejected payload never leaves partial notifications behind.
pub struct EventDispatcher<C> {
    consumer: C,
}

impl<C: EventConsumer> EventDispatcher<C> {
    pub fn new(consumer: C) -> Self {
        Self { consumer }
    }

    pub fn consumer(&self) -> &C {
        &self.consumer
    }

    pub fn consumer_mut(&mut self) -> &mut C {
        &mut self.consumer
    }

    pub fn into_consumer(self) -> C {
        self.consumer
    }

    /// Parse the frame payload, notify the consumer and return the event.
    ///
    /// `Ok(None)` means the frame was skipped (incomplete timeouts data) and
    /// the consumer was not called.
    pub fn dispatch(
        &mut self,
        frame: &DecodedFrame,
    ) -> Result<Option<ScoreboardEvent>, PayloadError> {
        let event = parse_event(&frame.message_type, &frame.payload)?;
        if let Some(event) = &event {
            debug!(message_type = %frame.message_type, ?event, "dispatching scoreboard event");
            emit(event, &mut self.consumer);
        }
        Ok(event)
    }

    /// Decode raw frame bytes and dispatch the result.
    pub fn process_message(
        &mut self,
        message: &[u8],
    ) -> Result<Option<ScoreboardEvent>, DecodeError> {
        let frame = decode_frame(message)?;
        Ok(self.dispatch(&frame)?)
    }
}
