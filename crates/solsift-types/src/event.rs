// NOTE: Event Model Rationale
//
// The harness interleaves two streams on stdout: libtest framing
// (`Running …`, `test … ...`, bare outcome tokens) and env-logger records
// from solana-program-test. Classification is total and first-match-wins,
// so every line maps to exactly one `LineEvent` and the pipeline can match
// exhaustively. `Noise` is a real classification, not an error: records
// from components other than the message processor, and record tails the
// classifier does not recognize, are deliberately dropped because the
// upstream format evolves and unknown shapes are uninteresting.

/// Classification of one raw transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// `Running tests/functional.rs (target/…)` — a new suite starts
    Suite { name: String },
    /// `test <name>( - should panic) ... <trailer>`
    ///
    /// With `--nocapture` the first runtime record (or the outcome token
    /// itself) can land on the same line; the trailer is re-classified as
    /// if it were a fresh line.
    TestStart {
        name: String,
        expect_failure: bool,
        trailer: Option<String>,
    },
    /// A bare libtest outcome token
    TestEnd { outcome: TestOutcome },
    /// A message-processor record with a recognized tail
    Record(RecordEvent),
    /// A timestamped record from another component, or an unrecognized tail
    Noise,
    /// Everything else; passed through byte-for-byte
    Plain,
}

/// Libtest outcome tokens, verbatim casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestOutcome {
    Passed,
    Failed,
    Ignored,
}

impl TestOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestOutcome::Passed => "ok",
            TestOutcome::Failed => "FAILED",
            TestOutcome::Ignored => "ignored",
        }
    }
}

/// Recognized message-processor record tails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordEvent {
    /// `Program log: <message>`
    Log { message: String },
    /// `Program consumption: <remaining> units remaining`
    Sample { remaining: u64 },
    /// `Program failed to complete: <cause>`
    Failure { cause: String },
    /// `Program <id> invoke [<depth>]`
    Invoked { program: String, depth: u32 },
    /// `Program <id> consumed <units> of <budget> compute units`
    Consumed {
        program: String,
        units: u64,
        budget: u64,
    },
    /// `Program <id> success` or `Program <id> failed: <err>`
    Finished {
        program: String,
        error: Option<String>,
    },
}

/// One unit of annotated output, ready for rendering.
///
/// The pipeline decides *what* appears; the CLI views decide how it looks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission {
    SuiteBanner { name: String },
    TestBanner { name: String },
    OutcomeBanner { outcome: TestOutcome },
    ProgramLog { message: String },
    BudgetDelta { cumulative: u64, incremental: u64 },
    FinalConsumption { total: u64, delta: u64 },
    ExecutionFailure { cause: String, nested: bool },
    BlockStart { program: String },
    BlockEnd { program: String, error: Option<String> },
    /// Raw line, original terminator included; nothing added
    Passthrough { raw: String },
}
