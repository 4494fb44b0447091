//! Handles all console output for test runs.
//!
//! A [`Reporter`] writes every line to a primary sink (stdout by default) and,
//! optionally, mirrors it to a secondary sink such as `/dev/tty`. The mirror
//! is flushed after each line so it stays in step with the primary stream.

// ============================================================================
// OUTPUT SINKS: shared capture buffer
// ============================================================================

use crate::colors::Palette;
use crate::config::{RunnerConfig, DEFAULT_SUPPRESS_THRESHOLD};
use std::cell::RefCell;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::rc::Rc;
use termcolor::{Ansi, ColorChoice, NoColor, StandardStream, WriteColor};

/// Collects written bytes into a shared buffer for tests or programmatic capture.
#[derive(Clone, Default)]
pub struct Capture(Rc<RefCell<Vec<u8>>>);

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// REPORTER
// ============================================================================

pub struct Reporter {
    primary: Box<dyn WriteColor>,
    mirror: Option<Box<dyn WriteColor>>,
    suppress_threshold: usize,
}

impl Reporter {
    pub fn new(primary: Box<dyn WriteColor>) -> Self {
        Self {
            primary,
            mirror: None,
            suppress_threshold: DEFAULT_SUPPRESS_THRESHOLD,
        }
    }

    /// Builds the stdout reporter described by `config`. A tty that cannot be
    /// opened is not an error, the run simply goes without a mirror.
    pub fn from_config(config: &RunnerConfig) -> Self {
        let choice = if config.use_colors {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let reporter = Self::new(Box::new(StandardStream::stdout(choice)))
            .with_suppress_threshold(config.suppress_threshold);
        if !config.mirror_tty {
            return reporter;
        }
        match OpenOptions::new().write(true).open(&config.tty_path) {
            Ok(tty) => {
                let mirror: Box<dyn WriteColor> = if config.mirror_colors {
                    Box::new(Ansi::new(tty))
                } else {
                    Box::new(NoColor::new(tty))
                };
                reporter.mirrored_to(mirror)
            }
            Err(err) => {
                tracing::debug!(path = %config.tty_path.display(), %err, "tty mirror unavailable");
                reporter
            }
        }
    }

    /// A colorless reporter writing into the returned capture buffer.
    pub fn capture() -> (Self, Capture) {
        let capture = Capture::new();
        (Self::new(Box::new(NoColor::new(capture.clone()))), capture)
    }

    /// Like [`Reporter::capture`], but keeps the ANSI escape codes.
    pub fn capture_ansi() -> (Self, Capture) {
        let capture = Capture::new();
        (Self::new(Box::new(Ansi::new(capture.clone()))), capture)
    }

    /// Groups with at least this many cases print failures and summaries only.
    pub fn with_suppress_threshold(mut self, threshold: usize) -> Self {
        self.suppress_threshold = threshold;
        self
    }

    pub fn suppress_threshold(&self) -> usize {
        self.suppress_threshold
    }

    pub fn mirrored_to(mut self, mirror: Box<dyn WriteColor>) -> Self {
        self.mirror = Some(mirror);
        self
    }

    pub fn banner(&mut self, text: &str) -> io::Result<()> {
        self.line(Some(Palette::BrightWhite), text)
    }

    pub fn pass(&mut self, text: &str) -> io::Result<()> {
        self.line(Some(Palette::Green), text)
    }

    pub fn fail(&mut self, text: &str) -> io::Result<()> {
        self.line(Some(Palette::Red), text)
    }

    pub fn notice(&mut self, text: &str) -> io::Result<()> {
        self.line(Some(Palette::Yellow), text)
    }

    pub fn plain(&mut self, text: &str) -> io::Result<()> {
        self.line(None, text)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.primary.flush()?;
        if let Some(mirror) = self.mirror.as_mut() {
            mirror.flush()?;
        }
        Ok(())
    }

    fn line(&mut self, color: Option<Palette>, text: &str) -> io::Result<()> {
        write_line(self.primary.as_mut(), color, text)?;
        if let Some(mirror) = self.mirror.as_mut() {
            write_line(mirror.as_mut(), color, text)?;
            mirror.flush()?;
        }
        Ok(())
    }
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn write_line(sink: &mut dyn WriteColor, color: Option<Palette>, text: &str) -> io::Result<()> {
    match color {
        Some(color) => {
            sink.set_color(&color.spec())?;
            write!(sink, "{}", text)?;
            sink.reset()?;
        }
        None => write!(sink, "{}", text)?,
    }
    writeln!(sink)
}
