use solsift_types::{Emission, LineEvent, RecordEvent, Result};

use crate::budget::BudgetTracker;
use crate::classify::classify_line;
use crate::scope::TestScope;
use crate::stack::InvocationStack;

/// One streaming pass over a transcript.
///
/// All state lives here and is threaded explicitly per line; nothing is
/// process-wide, so a pass can be driven with synthetic line sequences in
/// tests. Lines must arrive in order, once.
#[derive(Debug)]
pub struct Pipeline {
    program_of_interest: String,
    stack: InvocationStack,
    budget: BudgetTracker,
    scope: TestScope,
}

impl Pipeline {
    pub fn new(program_of_interest: impl Into<String>) -> Self {
        Self {
            program_of_interest: program_of_interest.into(),
            stack: InvocationStack::new(),
            budget: BudgetTracker::new(),
            scope: TestScope::new(),
        }
    }

    /// Process one raw line (terminator included, if any) and return the
    /// transcript fragment it produces, in emission order.
    ///
    /// Errors are fatal input-consistency violations; the caller must not
    /// feed further lines after one.
    pub fn process(&mut self, raw: &str) -> Result<Vec<Emission>> {
        let content = raw.trim_end_matches('\n').trim_end_matches('\r');
        let terminator = &raw[content.len()..];

        let mut out = Vec::new();
        self.handle_line(content, terminator, &mut out)?;
        Ok(out)
    }

    fn handle_line(
        &mut self,
        line: &str,
        terminator: &str,
        out: &mut Vec<Emission>,
    ) -> Result<()> {
        match classify_line(line) {
            LineEvent::Suite { name } => {
                out.push(Emission::SuiteBanner { name });
            }
            LineEvent::TestStart {
                name,
                expect_failure,
                trailer,
            } => {
                self.scope.on_test_start(&name, expect_failure);
                out.push(Emission::TestBanner { name });
                // A nocapture line can carry a runtime record (or the
                // outcome token) after the `...`; treat it as a fresh line
                // under the scope just entered.
                if let Some(rest) = trailer {
                    self.handle_line(&rest, terminator, out)?;
                }
            }
            LineEvent::TestEnd { outcome } => {
                self.scope.on_test_end();
                out.push(Emission::OutcomeBanner { outcome });
            }
            LineEvent::Record(record) => {
                self.handle_record(record, out)?;
            }
            LineEvent::Noise => {}
            LineEvent::Plain => {
                if !self.scope.is_suppressed() {
                    out.push(Emission::Passthrough {
                        raw: format!("{line}{terminator}"),
                    });
                }
            }
        }
        Ok(())
    }

    /// Runtime records always update stack/budget state; whether the
    /// resulting emission survives depends on the current scope. Framing
    /// has already been handled, so everything produced here is
    /// suppressible.
    fn handle_record(&mut self, record: RecordEvent, out: &mut Vec<Emission>) -> Result<()> {
        let suppressed = self.scope.is_suppressed();
        let mut emit = |emission: Emission, out: &mut Vec<Emission>| {
            if !suppressed {
                out.push(emission);
            }
        };

        match record {
            RecordEvent::Log { message } => {
                if self.on_interest() {
                    emit(Emission::ProgramLog { message }, out);
                }
            }
            RecordEvent::Sample { remaining } => {
                if self.on_interest() {
                    if let Some(delta) = self.budget.on_sample(remaining) {
                        emit(
                            Emission::BudgetDelta {
                                cumulative: delta.cumulative,
                                incremental: delta.incremental,
                            },
                            out,
                        );
                    }
                }
            }
            RecordEvent::Failure { cause } => {
                // Surfaced no matter which program is on top
                emit(
                    Emission::ExecutionFailure {
                        cause,
                        nested: self.stack.depth() > 1,
                    },
                    out,
                );
            }
            RecordEvent::Invoked { program, .. } => {
                if program == self.program_of_interest {
                    emit(
                        Emission::BlockStart {
                            program: program.clone(),
                        },
                        out,
                    );
                }
                self.stack.on_invoked(program);
            }
            RecordEvent::Consumed {
                program: _,
                units,
                budget,
            } => {
                // Depth is checked before the corresponding pop, which
                // arrives on a later line.
                let interesting = self.on_interest();
                let delta = self.budget.on_consumed(units, budget, self.stack.depth());
                if interesting {
                    emit(
                        Emission::FinalConsumption {
                            total: units,
                            delta,
                        },
                        out,
                    );
                }
            }
            RecordEvent::Finished { program, error } => {
                let popped = self.stack.on_terminated(&program)?;
                if popped == self.program_of_interest {
                    emit(
                        Emission::BlockEnd {
                            program: popped,
                            error,
                        },
                        out,
                    );
                }
            }
        }
        Ok(())
    }

    fn on_interest(&self) -> bool {
        self.stack.top() == Some(self.program_of_interest.as_str())
    }
}
