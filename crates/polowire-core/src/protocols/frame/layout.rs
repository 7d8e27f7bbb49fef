pub const ETB: u8 = 0x17;
pub const SYN: u8 = 0x16;
pub const SOH: u8 = 0x01;
pub const STX: u8 = 0x02;

/// ETB followed by SYN; every frame header starts here.
pub const MARKER: [u8; 2] = [ETB, SYN];

/// Bytes preceding the marker that carry the message id.
pub const MESSAGE_ID_LEN: usize = 2;
pub const SEQUENCE_LEN: usize = 8;
pub const MESSAGE_TYPE_LEN: usize = 10;

/// Marker + SOH + message type + STX, without the optional blocks.
pub const MIN_HEADER_LEN: usize = MARKER.len() + 1 + MESSAGE_TYPE_LEN + 1;
