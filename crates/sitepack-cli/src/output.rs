//! User-facing report lines on stdout.
//!
//! `-q` silences the decorated report. Errors and raw payloads (TOML, JSON,
//! paths) still go out: one is a problem the user must see, the other is
//! what a pipe is waiting for.

use std::io;

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy)]
enum Tone {
    Success,
    Warning,
    Info,
    Error,
}

impl Tone {
    const fn symbol(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Warning => "\u{26a0}",
            Self::Info => "\u{2139}",
            Self::Error => "\u{2717}",
        }
    }
}

pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color || !Term::stdout().is_term(),
            term: Term::stdout(),
        }
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.report(msg.to_owned())
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.report(self.decorate(Tone::Success, msg))
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.report(self.decorate(Tone::Warning, msg))
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.report(self.decorate(Tone::Info, msg))
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.report(line)
    }

    /// A problem the run recovered from. Written even with `-q`.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(&self.decorate(Tone::Error, msg))
    }

    /// Machine-readable payload. Written even with `-q`.
    pub fn raw(&self, text: &str) -> io::Result<()> {
        self.term.write_line(text)
    }

    fn report(&self, line: String) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&line)
    }

    fn decorate(&self, tone: Tone, msg: &str) -> String {
        let symbol = tone.symbol();
        if self.no_color {
            return format!("{symbol} {msg}");
        }
        match tone {
            Tone::Success => format!("{} {}", symbol.green().bold(), msg.green()),
            Tone::Warning => format!("{} {}", symbol.yellow().bold(), msg.yellow()),
            Tone::Info => format!("{} {}", symbol.blue().bold(), msg.blue()),
            Tone::Error => format!("{} {}", symbol.red().bold(), msg.red()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            quiet,
            no_color,
            ..GlobalArgs::default()
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn plain_lines_carry_their_symbol() {
        let out = manager(false, true);
        assert_eq!(out.decorate(Tone::Success, "done"), "\u{2713} done");
        assert_eq!(
            out.decorate(Tone::Error, "Error reading a.ts: bad"),
            "\u{2717} Error reading a.ts: bad"
        );
    }

    #[test]
    fn colored_lines_wrap_the_message() {
        let out = OutputManager {
            quiet: false,
            no_color: false,
            term: Term::stdout(),
        };
        let line = out.decorate(Tone::Warning, "careful");
        assert!(line.contains("careful"));
        assert!(line.contains('\u{1b}'));
    }

    #[test]
    fn config_can_disable_color() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        let out = OutputManager::new(&GlobalArgs::default(), &config);
        assert_eq!(out.decorate(Tone::Info, "x"), "\u{2139} x");
    }

    #[test]
    fn quiet_mode_still_accepts_every_line() {
        let out = manager(true, true);
        assert!(out.print("hidden").is_ok());
        assert!(out.error("shown").is_ok());
        assert!(out.raw("shown").is_ok());
    }
}
