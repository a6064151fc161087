use solsift_types::{Error, Result};

/// Currently-active program invocations, innermost last.
///
/// `invoke` and `success`/`failed` arrive as separate, non-adjacent log
/// lines, so the stack is the only record of where in the call tree a
/// given line belongs.
#[derive(Debug, Default)]
pub struct InvocationStack {
    frames: Vec<String>,
}

impl InvocationStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_invoked(&mut self, program: String) {
        self.frames.push(program);
    }

    /// Pop the innermost invocation for a `success`/`failed` record.
    ///
    /// Strict: the transcript restates the program id on terminal events,
    /// so a mismatch (or an empty stack) means the transcript is malformed
    /// and the pass must stop.
    pub fn on_terminated(&mut self, reported: &str) -> Result<String> {
        let popped = self.frames.pop().ok_or_else(|| Error::StackUnderflow {
            program: reported.to_string(),
        })?;
        if popped != reported {
            return Err(Error::FrameMismatch {
                expected: popped,
                reported: reported.to_string(),
            });
        }
        Ok(popped)
    }

    pub fn top(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
