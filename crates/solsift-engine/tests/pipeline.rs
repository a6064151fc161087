use solsift_engine::Pipeline;
use solsift_types::{Emission, TestOutcome};

const POOL: &str = "Poo1111111111111111111111111111111111111112";

/// A message-processor record line as solana-program-test emits it.
fn record(tail: &str) -> String {
    format!("[2022-03-09T09:59:57.659492000Z DEBUG solana_runtime::message_processor::stable_log] {tail}\n")
}

fn drive(pipeline: &mut Pipeline, lines: &[String]) -> Vec<Emission> {
    lines
        .iter()
        .flat_map(|line| pipeline.process(line).expect("well-formed transcript"))
        .collect()
}

#[test]
fn test_invoke_consume_success_block() {
    let mut pipeline = Pipeline::new("ABC");
    let emissions = drive(
        &mut pipeline,
        &[
            record("Program ABC invoke [1]"),
            record("Program ABC consumed 2423 of 300000 compute units"),
            record("Program ABC success"),
        ],
    );

    assert_eq!(
        emissions,
        vec![
            Emission::BlockStart {
                program: "ABC".to_string()
            },
            Emission::FinalConsumption {
                total: 2423,
                delta: 2423
            },
            Emission::BlockEnd {
                program: "ABC".to_string(),
                error: None
            },
        ]
    );
}

#[test]
fn test_sample_pair_yields_single_delta() {
    let mut pipeline = Pipeline::new("ABC");
    // First invocation teaches the tracker the real 300000 budget.
    drive(
        &mut pipeline,
        &[
            record("Program ABC invoke [1]"),
            record("Program ABC consumed 2423 of 300000 compute units"),
            record("Program ABC success"),
        ],
    );

    let emissions = drive(
        &mut pipeline,
        &[
            record("Program ABC invoke [1]"),
            record("Program consumption: 296164 units remaining"),
            record("Program consumption: 296147 units remaining"),
        ],
    );

    assert_eq!(
        emissions,
        vec![
            Emission::BlockStart {
                program: "ABC".to_string()
            },
            // 296164 only arms the baseline; 296147 yields the one delta.
            Emission::BudgetDelta {
                cumulative: 3853,
                incremental: 17
            },
        ]
    );
}

#[test]
fn test_other_programs_are_filtered_to_noise() {
    let mut pipeline = Pipeline::new("ABC");
    let emissions = drive(
        &mut pipeline,
        &[
            record("Program TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA invoke [1]"),
            record("Program log: Instruction: Transfer"),
            record("Program consumption: 199000 units remaining"),
            record("Program TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA consumed 3000 of 200000 compute units"),
            record("Program TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA success"),
        ],
    );
    assert_eq!(emissions, vec![]);
}

#[test]
fn test_nested_invocation_depth_gates_log_output() {
    let mut pipeline = Pipeline::new("ABC");
    let emissions = drive(
        &mut pipeline,
        &[
            record("Program ABC invoke [1]"),
            record("Program log: delegating"),
            record("Program TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA invoke [2]"),
            record("Program log: inside the token program"),
            record("Program TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA success"),
            record("Program log: back on top"),
            record("Program ABC success"),
        ],
    );

    assert_eq!(
        emissions,
        vec![
            Emission::BlockStart {
                program: "ABC".to_string()
            },
            Emission::ProgramLog {
                message: "delegating".to_string()
            },
            Emission::ProgramLog {
                message: "back on top".to_string()
            },
            Emission::BlockEnd {
                program: "ABC".to_string(),
                error: None
            },
        ]
    );
}

#[test]
fn test_execution_failure_notes_nesting() {
    let mut pipeline = Pipeline::new("ABC");
    let emissions = drive(
        &mut pipeline,
        &[
            record("Program ABC invoke [1]"),
            record("Program TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA invoke [2]"),
            record("Program failed to complete: exceeded maximum number of instructions"),
        ],
    );
    assert_eq!(
        emissions.last(),
        Some(&Emission::ExecutionFailure {
            cause: "exceeded maximum number of instructions".to_string(),
            nested: true,
        })
    );

    let mut pipeline = Pipeline::new("ABC");
    let emissions = drive(
        &mut pipeline,
        &[
            record("Program ABC invoke [1]"),
            record("Program failed to complete: exceeded maximum number of instructions"),
        ],
    );
    assert_eq!(
        emissions.last(),
        Some(&Emission::ExecutionFailure {
            cause: "exceeded maximum number of instructions".to_string(),
            nested: false,
        })
    );
}

#[test]
fn test_should_panic_case_emits_only_framing() {
    let mut pipeline = Pipeline::new("ABC");
    let emissions = drive(
        &mut pipeline,
        &[
            "test x - should panic ... \n".to_string(),
            record("Program ABC invoke [1]"),
            record("Program failed to complete: panicked"),
            "some stray panic output\n".to_string(),
            record("Program ABC failed: custom program error: 0x10"),
            "FAILED\n".to_string(),
        ],
    );

    assert_eq!(
        emissions,
        vec![
            Emission::TestBanner {
                name: "x".to_string()
            },
            Emission::OutcomeBanner {
                outcome: TestOutcome::Failed
            },
        ]
    );
}

#[test]
fn test_suppression_keeps_stack_state_updating() {
    let mut pipeline = Pipeline::new("ABC");
    drive(
        &mut pipeline,
        &[
            "test quiet - should panic ... \n".to_string(),
            record("Program ABC invoke [1]"),
            record("Program ABC failed: custom program error: 0x10"),
            "FAILED\n".to_string(),
        ],
    );

    // The suppressed case must leave the stack back at depth 0, or this
    // follow-up invocation would be mislabeled as nested.
    let emissions = drive(
        &mut pipeline,
        &[
            "test loud ... \n".to_string(),
            record("Program ABC invoke [1]"),
            record("Program log: visible again"),
        ],
    );
    assert_eq!(
        emissions,
        vec![
            Emission::TestBanner {
                name: "loud".to_string()
            },
            Emission::BlockStart {
                program: "ABC".to_string()
            },
            Emission::ProgramLog {
                message: "visible again".to_string()
            },
        ]
    );
}

#[test]
fn test_test_start_trailer_is_reclassified() {
    let mut pipeline = Pipeline::new("ABC");
    let line = "test fast ... [2022-03-09T09:59:57.659492000Z DEBUG solana_runtime::message_processor::stable_log] Program ABC invoke [1]\n";
    let emissions = pipeline.process(line).unwrap();
    assert_eq!(
        emissions,
        vec![
            Emission::TestBanner {
                name: "fast".to_string()
            },
            Emission::BlockStart {
                program: "ABC".to_string()
            },
        ]
    );
}

#[test]
fn test_unrecognized_lines_pass_through_verbatim() {
    let mut pipeline = Pipeline::new(POOL);
    let raw = "running 8 tests\n";
    assert_eq!(
        pipeline.process(raw).unwrap(),
        vec![Emission::Passthrough {
            raw: raw.to_string()
        }]
    );

    // Foreign-component records vanish instead of passing through.
    let noise = "[2022-03-09T09:59:57.659492000Z INFO  solana_runtime::bank] bank frozen\n";
    assert_eq!(pipeline.process(noise).unwrap(), vec![]);
}

#[test]
fn test_unmatched_terminal_event_aborts_the_pass() {
    let mut pipeline = Pipeline::new(POOL);
    assert!(pipeline.process(&record("Program ABC success")).is_err());
}
