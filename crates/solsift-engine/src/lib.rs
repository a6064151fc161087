mod budget;
mod classify;
mod pipeline;
mod scope;
mod stack;

pub use budget::{BudgetTracker, DEFAULT_COMPUTE_BUDGET, SampleDelta};
pub use classify::classify_line;
pub use pipeline::Pipeline;
pub use scope::{ScopeState, TestScope};
pub use stack::InvocationStack;
