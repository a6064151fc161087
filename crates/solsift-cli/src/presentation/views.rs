use std::fmt;

use solsift_types::{Emission, TestOutcome};

use super::palette::Palette;

/// Total banner width, frame characters included.
const BANNER_WIDTH: usize = 60;

/// Renders one `Emission` as transcript text.
///
/// Pure formatting policy; every decision about *whether* something
/// appears was already made by the pipeline.
pub struct EmissionView<'a> {
    emission: &'a Emission,
    palette: Palette,
}

impl<'a> EmissionView<'a> {
    pub fn new(emission: &'a Emission, palette: Palette) -> Self {
        Self { emission, palette }
    }
}

impl fmt::Display for EmissionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let p = &self.palette;
        match self.emission {
            Emission::SuiteBanner { name } => {
                write_framed(f, p, &name.to_uppercase(), '=', FrameColor::Info)
            }
            Emission::TestBanner { name } => write_framed(f, p, name, '-', FrameColor::Info),
            Emission::OutcomeBanner { outcome } => {
                let line = centered(&format!(" {} ", outcome.as_str()), '-');
                let painted = match outcome {
                    TestOutcome::Passed => p.ok(&line),
                    TestOutcome::Failed => p.err(&line),
                    TestOutcome::Ignored => p.muted(&line),
                };
                writeln!(f, "{painted}")?;
                writeln!(f)
            }
            Emission::ProgramLog { message } => {
                writeln!(f, "{} log {}", p.frame("|"), message)
            }
            Emission::BudgetDelta {
                cumulative,
                incremental,
            } => {
                writeln!(
                    f,
                    "{} compute units consumed: {} (+{})",
                    p.frame("|"),
                    cumulative,
                    incremental
                )
            }
            Emission::FinalConsumption { total, delta } => {
                writeln!(
                    f,
                    "{} total consumed: {} (+{})",
                    p.frame("|"),
                    total,
                    delta
                )
            }
            Emission::ExecutionFailure { cause, nested } => {
                write_framed(f, p, "EXECUTION FAILED", '=', FrameColor::Error)?;
                if *nested {
                    writeln!(f, "{}", p.err("(raised by a nested invocation)"))?;
                }
                writeln!(f, "{cause}")
            }
            Emission::BlockStart { program } => {
                let line = format!("/{}", centered(&format!(" {program} "), '-'));
                writeln!(f, "{}", p.heading(&line))
            }
            Emission::BlockEnd { program, error } => {
                let painted = match error {
                    None => p.ok(&format!(
                        "\\{}",
                        centered(&format!(" {program} success "), '-')
                    )),
                    Some(err) => p.err(&format!(
                        "\\{}",
                        centered(&format!(" {program} failed: {err} "), '-')
                    )),
                };
                writeln!(f, "{painted}")?;
                writeln!(f)
            }
            Emission::Passthrough { raw } => write!(f, "{raw}"),
        }
    }
}

enum FrameColor {
    Info,
    Error,
}

fn centered(text: &str, fill: char) -> String {
    let mut line = String::new();
    let width = BANNER_WIDTH.saturating_sub(2);
    let pad = width.saturating_sub(text.chars().count());
    for _ in 0..pad / 2 {
        line.push(fill);
    }
    line.push_str(text);
    for _ in 0..pad.div_ceil(2) {
        line.push(fill);
    }
    line
}

fn write_framed(
    f: &mut fmt::Formatter,
    palette: &Palette,
    text: &str,
    fill: char,
    color: FrameColor,
) -> fmt::Result {
    let width = BANNER_WIDTH - 2;
    let rule: String = std::iter::repeat_n(fill, width).collect();
    let body = format!("|{:^width$}|", text);
    let (top, mid, bottom) = (format!("/{rule}\\"), body, format!("\\{rule}/"));
    match color {
        FrameColor::Info => {
            writeln!(f, "{}", palette.frame(&top))?;
            writeln!(f, "{}", palette.heading(&mid))?;
            writeln!(f, "{}", palette.frame(&bottom))
        }
        FrameColor::Error => {
            writeln!(f, "{}", palette.err(&top))?;
            writeln!(f, "{}", palette.err(&mid))?;
            writeln!(f, "{}", palette.err(&bottom))
        }
    }
}
