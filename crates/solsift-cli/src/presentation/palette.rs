use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Color switch for the views.
///
/// Views stay pure `Display` impls; whether color codes appear is decided
/// once, up front, so piping the annotated transcript into a file or a
/// pager stays clean.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    colored: bool,
}

impl Palette {
    pub fn detect() -> Self {
        Self {
            colored: std::io::stdout().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { colored: false }
    }

    pub fn frame(&self, text: &str) -> String {
        if self.colored {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn heading(&self, text: &str) -> String {
        if self.colored {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn ok(&self, text: &str) -> String {
        if self.colored {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn err(&self, text: &str) -> String {
        if self.colored {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn muted(&self, text: &str) -> String {
        if self.colored {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}
