pub const COMMENT_PREFIX: char = '#';

/// Hex never contains this, so a first token holding it is a timestamp.
pub const TIMESTAMP_MARKER: char = ':';
