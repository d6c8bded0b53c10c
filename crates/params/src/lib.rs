//! Constant values for ecrekey operations
//!
//! Curve tables are stored as big-endian hex strings so they can be compared
//! digit for digit against the published SEC 2 / FIPS 186 values.

pub mod traditional;
pub mod utils;
