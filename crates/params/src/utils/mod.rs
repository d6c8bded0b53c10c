//! Protocol-level constants shared across ecrekey crates

pub mod rekey;
