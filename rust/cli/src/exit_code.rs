//! Exit codes returned by [`run`](crate::run).

pub const SUCCESS: i32 = 0;

/// Any failure: bad arguments, bad configuration, I/O, engine errors.
pub const ERROR: i32 = 2;

/// The run stopped before finishing the requested work.
pub const INTERRUPTED: i32 = 130;
