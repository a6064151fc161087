mod args;
mod commands;
pub mod presentation;

pub use args::Cli;
pub use commands::run;
