//! Process exit codes (BSD sysexits.h compatible)

/// Successful termination, also used after printing help
pub const OK: i32 = 0;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Requested data does not exist
pub const DATAERR: i32 = 65;

/// Remote note service unavailable
pub const UNAVAILABLE: i32 = 69;

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// Input/output error
pub const IOERR: i32 = 74;
