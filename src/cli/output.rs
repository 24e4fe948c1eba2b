//! User-facing progress output.
//!
//! Everything goes to stderr so stdout carries only the rendered cask.

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::sync::{Arc, Mutex};

type Sink = Arc<Mutex<Box<dyn WriteColor + Send>>>;

/// Writes colored status messages according to verbosity settings.
#[derive(Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
    sink: Sink,
}

impl fmt::Debug for OutputManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputManager")
            .field("verbose", &self.verbose)
            .field("quiet", &self.quiet)
            .finish_non_exhaustive()
    }
}

impl OutputManager {
    /// Create a new output manager writing to stderr
    ///
    /// Colors are used only when stderr is a terminal.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        let choice = if io::stderr().is_terminal() {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::with_writer(verbose, quiet, StandardStream::stderr(choice))
    }

    /// Create an output manager over any color-capable writer
    pub fn with_writer(verbose: bool, quiet: bool, writer: impl WriteColor + Send + 'static) -> Self {
        Self {
            verbose,
            quiet,
            sink: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Whether verbose messages are shown
    pub fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }

    /// Print message only in verbose mode
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if self.is_verbose() {
            self.write_styled(None, message)?;
        }
        Ok(())
    }

    /// Print a progress step
    pub fn progress(&self, message: &str) -> io::Result<()> {
        if self.is_verbose() {
            self.write_styled(Some(("→", Color::Cyan)), message)?;
        }
        Ok(())
    }

    /// Print success message unless quiet
    pub fn success(&self, message: &str) -> io::Result<()> {
        if !self.quiet {
            self.write_styled(Some(("✓", Color::Green)), message)?;
        }
        Ok(())
    }

    /// Print warning message unless quiet
    pub fn warn(&self, message: &str) -> io::Result<()> {
        if !self.quiet {
            self.write_styled(Some(("⚠", Color::Yellow)), message)?;
        }
        Ok(())
    }

    fn write_styled(&self, marker: Option<(&str, Color)>, message: &str) -> io::Result<()> {
        let mut sink = self
            .sink
            .lock()
            .map_err(|_| io::Error::other("output writer lock poisoned"))?;

        if let Some((glyph, color)) = marker {
            sink.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
            write!(sink, "{} ", glyph)?;
            sink.reset()?;
        }
        writeln!(sink, "{}", message)?;
        sink.flush()
    }
}
