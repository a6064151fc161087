use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use solsift_engine::Pipeline;

use crate::args::Cli;
use crate::presentation::{EmissionView, Palette};

pub fn run(cli: Cli) -> Result<()> {
    let palette = Palette::detect();
    let stdin = io::stdin();
    let stdout = io::stdout();
    annotate_stream(
        &mut stdin.lock(),
        &mut stdout.lock(),
        cli.pool_program_id,
        palette,
    )
}

/// Single-pass stream driver: read one line, classify/update/format, write,
/// repeat until end-of-stream. Lines keep their original terminator so
/// passthrough stays byte-for-byte.
fn annotate_stream(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    pool_program_id: String,
    palette: Palette,
) -> Result<()> {
    let mut pipeline = Pipeline::new(pool_program_id);
    let mut buf = String::new();
    loop {
        buf.clear();
        if reader
            .read_line(&mut buf)
            .context("reading transcript from stdin")?
            == 0
        {
            break;
        }
        for emission in pipeline.process(&buf).context("malformed transcript")? {
            write!(writer, "{}", EmissionView::new(&emission, palette))?;
        }
    }
    writer.flush()?;
    Ok(())
}
