/// Compute budget assumed until the first top-level `consumed` record
/// reveals the real one. Mainnet budget, matching what the pool test suite
/// pins via `set_bpf_compute_max_units`.
pub const DEFAULT_COMPUTE_BUDGET: u64 = 200_000;

/// Consumption deltas derived from one `Program consumption:` sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleDelta {
    /// Units consumed since the top-level invocation began
    pub cumulative: u64,
    /// Units consumed since the previous sample
    pub incremental: u64,
}

/// Correlates `Program consumption: N units remaining` samples into
/// human-meaningful deltas.
///
/// `full_budget` is learned from the first `consumed X of Y` record seen at
/// stack depth 1 and stays at the default if the program of interest never
/// runs top-level (a valid, degenerate stream). Nothing here resets between
/// test cases; only a new top-level `consumed` record restarts the
/// baseline.
#[derive(Debug)]
pub struct BudgetTracker {
    full_budget: u64,
    previous_remaining: Option<u64>,
}

impl Default for BudgetTracker {
    fn default() -> Self {
        Self {
            full_budget: DEFAULT_COMPUTE_BUDGET,
            previous_remaining: None,
        }
    }
}

impl BudgetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn full_budget(&self) -> u64 {
        self.full_budget
    }

    /// Handle a `consumed <units> of <budget>` record.
    ///
    /// Returns the consumption not yet accounted for by samples, for the
    /// final-consumption line. At depth 1 this is also the moment the true
    /// budget becomes known; the sample baseline restarts so the next
    /// invocation's first sample only re-arms it.
    pub fn on_consumed(&mut self, units: u64, budget: u64, depth: usize) -> u64 {
        let accounted = self
            .previous_remaining
            .map(|prev| self.full_budget.saturating_sub(prev))
            .unwrap_or(0);
        if depth == 1 {
            self.full_budget = budget;
            self.previous_remaining = None;
        }
        units.saturating_sub(accounted)
    }

    /// Handle a `consumption: <remaining> units remaining` sample.
    ///
    /// The first sample after a baseline restart only records; every later
    /// one yields a delta pair.
    pub fn on_sample(&mut self, remaining: u64) -> Option<SampleDelta> {
        let delta = self.previous_remaining.map(|prev| SampleDelta {
            cumulative: self.full_budget.saturating_sub(remaining),
            incremental: prev.saturating_sub(remaining),
        });
        self.previous_remaining = Some(remaining);
        delta
    }
}
