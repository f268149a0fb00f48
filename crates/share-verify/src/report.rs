//! Human-readable output of a verification run.

use std::fmt::Display;
use std::io::{self, Write};

use console::style;
use itertools::Itertools;

use crate::loader::ShareRole;
use crate::pipeline::Reconstruction;
use crate::verifier::{Verdict, Verification};
use crate::Error;

/// Writes the trace of a verification run.
///
/// Labels are colored only when enabled with [`Reporter::with_colors`]; the
/// text is otherwise identical.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
    colored: bool,
}

fn format_vector(values: &[i64]) -> String {
    format!("[{}]", values.iter().join(", "))
}

impl<W: Write> Reporter<W> {
    /// Create a reporter writing plain text to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            colored: false,
        }
    }

    /// Enable or disable colored labels.
    pub fn with_colors(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Consume the reporter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn label<D: Display>(&self, text: D) -> console::StyledObject<D> {
        style(text).force_styling(self.colored)
    }

    /// Print the reconstructed vectors, the inner product and the expected update.
    pub fn reconstruction(
        &mut self,
        reconstruction: &Reconstruction,
        verification: &Verification,
    ) -> io::Result<()> {
        writeln!(
            self.out,
            "Reconstructed u: {}",
            format_vector(&reconstruction.u)
        )?;
        writeln!(
            self.out,
            "Reconstructed v: {}",
            format_vector(&reconstruction.v)
        )?;
        writeln!(self.out, "Dot(u,v) = {}", verification.dot)?;
        writeln!(
            self.out,
            "Reconstructed updated u: {}",
            format_vector(&reconstruction.updated)
        )?;
        writeln!(
            self.out,
            "Expected updated u   : {}",
            format_vector(&verification.expected)
        )
    }

    /// Print the verdict line and, on a mismatch, one line per differing index.
    pub fn verdict(&mut self, verdict: &Verdict) -> io::Result<()> {
        let heading = self.label("Verification:").bold();
        writeln!(self.out)?;
        match verdict {
            Verdict::Match => {
                let ok = self.label("OK").green().bold();
                writeln!(
                    self.out,
                    "{heading} {ok} — reconstructed updated vector matches expected updated vector"
                )
            }
            Verdict::Mismatch(mismatches) => {
                let failed = self.label("FAILED").red().bold();
                writeln!(self.out, "{heading} {failed} — differences at indices:")?;
                for m in mismatches {
                    writeln!(
                        self.out,
                        "  idx {}: got={} expected={} diff={}",
                        m.index,
                        m.actual,
                        m.expected,
                        m.difference()
                    )?;
                }
                Ok(())
            }
        }
    }

    /// Print the diagnostic for an error that ended the run.
    pub fn fatal(&mut self, error: &Error) -> io::Result<()> {
        match error {
            Error::DimensionMismatch { u, v, updated } => {
                let heading = self.label("Dimension mismatch between vectors:").red();
                writeln!(self.out, "{heading}")?;
                writeln!(self.out, "len(u)={u} len(v)={v} len(updated)={updated}")
            }
            _ if error.is_input_error() => {
                let diagnostic = self.label(error).red();
                writeln!(self.out, "{diagnostic}")
            }
            _ => {
                let prefix = self.label("error:").red().bold();
                writeln!(self.out, "{prefix} {error}")
            }
        }
    }

    /// Print the diagnostic for a share file of `role` that could not be loaded.
    pub fn load_failure(&mut self, role: ShareRole, error: &Error) -> io::Result<()> {
        self.fatal(error)?;
        writeln!(self.out, "Cannot read {role} shares; aborting")
    }
}
