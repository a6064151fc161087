use clap::Parser;
use solsift_types::DEFAULT_POOL_PROGRAM_ID;

/// Usage:
///   cargo test-bpf -- --show-output --nocapture --test-threads=1 2>&1 | solsift
#[derive(Parser)]
#[command(name = "solsift")]
#[command(about = "Filter and annotate Solana program-test transcripts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base58 id of the pool program whose nested output is surfaced;
    /// everything else is treated as noise
    #[arg(short = 'p', long, default_value = DEFAULT_POOL_PROGRAM_ID)]
    pub pool_program_id: String,
}
