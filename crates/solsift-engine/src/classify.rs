use regex::Regex;
use std::sync::LazyLock;

use solsift_types::{LineEvent, RecordEvent, TestOutcome};

/// `     Running tests/functional.rs (target/debug/deps/functional-…)`
static SUITE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*Running (?:unittests )?(?P<name>\S+)(?: \(.+\))?$").unwrap()
});

/// `test path::to::case - should panic ... <trailer>`
static TEST_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^test (?P<name>\S+)(?P<panic> - should panic)? \.\.\.\s?(?P<trailer>.*)$")
        .unwrap()
});

/// Bare libtest outcome token
static TEST_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<outcome>ok|FAILED|ignored)\s*$").unwrap());

/// env-logger record: `[<ts>Z LEVEL module::path] tail`
static RECORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\[(?P<ts>\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d+Z)\s+(?P<level>[A-Z]+)\s+(?P<component>[A-Za-z0-9_:]+)\]\s?(?P<tail>.*)$",
    )
    .unwrap()
});

static PROGRAM_LOG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Program log: (?P<message>.*)$").unwrap());

static SAMPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Program consumption: (?P<remaining>\d+) units remaining$").unwrap()
});

static FAILURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Program failed to complete: (?P<cause>.*)$").unwrap());

// The discriminator in the remaining shapes is a base58 program id, not a
// literal keyword, so these must run after the literal prefixes above.
static INVOKED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Program (?P<program>[1-9A-HJ-NP-Za-km-z]+) invoke \[(?P<depth>\d+)\]$").unwrap()
});

static CONSUMED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^Program (?P<program>[1-9A-HJ-NP-Za-km-z]+) consumed (?P<units>\d+) of (?P<budget>\d+) compute units$",
    )
    .unwrap()
});

static SUCCEEDED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Program (?P<program>[1-9A-HJ-NP-Za-km-z]+) success$").unwrap());

static FAILED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Program (?P<program>[1-9A-HJ-NP-Za-km-z]+) failed: (?P<err>.*)$").unwrap()
});

/// Classify one raw line (terminator already stripped).
///
/// Total and deterministic: every line maps to exactly one `LineEvent`,
/// first matching shape wins, in the fixed priority order suite header >
/// test start > test end > runtime record > plain.
pub fn classify_line(line: &str) -> LineEvent {
    if let Some(caps) = SUITE.captures(line) {
        return LineEvent::Suite {
            name: caps["name"].to_string(),
        };
    }

    if let Some(caps) = TEST_START.captures(line) {
        let trailer = caps["trailer"].to_string();
        return LineEvent::TestStart {
            name: caps["name"].to_string(),
            expect_failure: caps.name("panic").is_some(),
            trailer: (!trailer.is_empty()).then_some(trailer),
        };
    }

    if let Some(caps) = TEST_END.captures(line) {
        return LineEvent::TestEnd {
            outcome: parse_outcome(&caps["outcome"]),
        };
    }

    if let Some(caps) = RECORD.captures(line) {
        if !is_message_processor(&caps["component"]) {
            return LineEvent::Noise;
        }
        return match classify_record_tail(&caps["tail"]) {
            Some(record) => LineEvent::Record(record),
            None => LineEvent::Noise,
        };
    }

    LineEvent::Plain
}

/// Only `solana_runtime::message_processor` (and its `stable_log` child)
/// carries program output; every other component is noise.
fn is_message_processor(component: &str) -> bool {
    component.split("::").any(|seg| seg == "message_processor")
}

fn parse_outcome(token: &str) -> TestOutcome {
    match token {
        "ok" => TestOutcome::Passed,
        "FAILED" => TestOutcome::Failed,
        _ => TestOutcome::Ignored,
    }
}

fn classify_record_tail(tail: &str) -> Option<RecordEvent> {
    if let Some(caps) = PROGRAM_LOG.captures(tail) {
        return Some(RecordEvent::Log {
            message: caps["message"].to_string(),
        });
    }

    if let Some(caps) = SAMPLE.captures(tail) {
        return Some(RecordEvent::Sample {
            remaining: caps["remaining"].parse().ok()?,
        });
    }

    if let Some(caps) = FAILURE.captures(tail) {
        return Some(RecordEvent::Failure {
            cause: caps["cause"].to_string(),
        });
    }

    if let Some(caps) = INVOKED.captures(tail) {
        return Some(RecordEvent::Invoked {
            program: caps["program"].to_string(),
            depth: caps["depth"].parse().ok()?,
        });
    }

    if let Some(caps) = CONSUMED.captures(tail) {
        return Some(RecordEvent::Consumed {
            program: caps["program"].to_string(),
            units: caps["units"].parse().ok()?,
            budget: caps["budget"].parse().ok()?,
        });
    }

    if let Some(caps) = SUCCEEDED.captures(tail) {
        return Some(RecordEvent::Finished {
            program: caps["program"].to_string(),
            error: None,
        });
    }

    if let Some(caps) = FAILED.captures(tail) {
        return Some(RecordEvent::Finished {
            program: caps["program"].to_string(),
            error: Some(caps["err"].to_string()),
        });
    }

    None
}
