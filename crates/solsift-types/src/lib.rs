mod error;
mod event;

pub use error::{Error, Result};
pub use event::{Emission, LineEvent, RecordEvent, TestOutcome};

/// Pool program id surfaced when no `--pool-program-id` is given.
///
/// This is the vanity id the pool test fixture deploys under; any other
/// program's nested output is treated as noise.
pub const DEFAULT_POOL_PROGRAM_ID: &str = "Poo1111111111111111111111111111111111111112";
