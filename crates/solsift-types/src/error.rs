use std::fmt;

/// Result type for solsift operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal transcript-consistency violations.
///
/// The transcript is emitted by a trusted runtime; if the invocation stack
/// stops lining up, continuing would mislabel every subsequent nested line,
/// so the pass aborts instead of recovering.
#[derive(Debug)]
pub enum Error {
    /// A `success`/`failed` record arrived with no active invocation
    StackUnderflow { program: String },
    /// The terminated program does not match the innermost active invocation
    FrameMismatch { expected: String, reported: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::StackUnderflow { program } => {
                write!(
                    f,
                    "terminal event for program {} with no active invocation",
                    program
                )
            }
            Error::FrameMismatch { expected, reported } => {
                write!(
                    f,
                    "terminal event for program {} but innermost invocation is {}",
                    reported, expected
                )
            }
        }
    }
}

impl std::error::Error for Error {}
