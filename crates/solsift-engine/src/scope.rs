/// Where the stream currently sits relative to libtest framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeState {
    Idle,
    Active,
    /// Inside a `- should panic` case: its failure is the expected outcome,
    /// so its noisy runtime output is withheld.
    Suppressed,
}

/// Tracks the current test case and whether its output is being withheld.
///
/// Suppression silences runtime-record and plain-line output only; framing
/// banners always show, and stack/budget state keeps updating underneath so
/// later cases see a consistent invocation depth.
#[derive(Debug)]
pub struct TestScope {
    state: ScopeState,
    label: Option<String>,
}

impl Default for TestScope {
    fn default() -> Self {
        Self {
            state: ScopeState::Idle,
            label: None,
        }
    }
}

impl TestScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_test_start(&mut self, name: &str, expect_failure: bool) {
        self.state = if expect_failure {
            ScopeState::Suppressed
        } else {
            ScopeState::Active
        };
        self.label = Some(name.to_string());
    }

    /// Any outcome clears the scope; suppression is about expected
    /// failures' noise, not the actual result.
    pub fn on_test_end(&mut self) {
        self.state = ScopeState::Idle;
        self.label = None;
    }

    pub fn is_suppressed(&self) -> bool {
        self.state == ScopeState::Suppressed
    }

    pub fn state(&self) -> ScopeState {
        self.state
    }

    pub fn current_label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}
