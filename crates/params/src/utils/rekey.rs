//! Constants for the ElGamal rekey protocol

/// Number of leading hex digits of M.x kept as the session key (128 bits)
pub const SESSION_KEY_HEX_WIDTH: usize = 32;

/// Lower bound the legacy deployment used when drawing the message generator
pub const LEGACY_MESSAGE_GENERATOR_MIN: u64 = 2000;

/// Separator between the fields of a persisted key record
pub const KEY_RECORD_SEPARATOR: char = ';';

/// Number of fields in a key record: label, x, y
pub const KEY_RECORD_FIELDS: usize = 3;

/// Number of fields handed to the transport: R.x, R.y, C.x, C.y, session key
pub const REKEY_TUPLE_FIELDS: usize = 5;
