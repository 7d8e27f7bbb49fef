//! Event dispatch: type-code routing and consumer notification.
//!
//! `EventDispatcher` turns a `DecodedFrame` into a `ScoreboardEvent` and
//! calls the matching `EventConsumer` methods. It keeps no state between
//! calls beyond the consumer it owns.

mod consumer;
mod dispatcher;
mod error;

pub use consumer::{EventConsumer, emit};
pub use dispatcher::EventDispatcher;
pub use error::DecodeError;
