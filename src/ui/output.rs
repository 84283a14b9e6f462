use crate::error::GrokError;
use crate::media::{SavedFile, SavedImage};
use colored::*;
use std::fmt::Display;
use std::io::{self, Write};

/// Dimmed `[grok]` diagnostic on stderr, shown only with `--verbose`.
pub fn log_verbose(verbose: bool, message: impl Display) {
    if verbose {
        eprintln!("{}", format!("[grok] {}", message).dimmed());
    }
}

pub fn report_error(error: &GrokError) {
    let _ = write_error(&mut io::stderr().lock(), error);
}

/// `Error: ...` line, plus a configuration hint when the upstream has no
/// media backend set up.
pub fn write_error<W: Write>(out: &mut W, error: &GrokError) -> io::Result<()> {
    writeln!(out, "{} {}", "Error:".red(), error)?;
    if let GrokError::UpstreamNotConfigured(_) = error {
        writeln!(
            out,
            "{}",
            "Please check your grok2api configuration or xAI API setup.".dimmed()
        )?;
    }
    Ok(())
}

pub fn display_saved_image<W: Write>(
    out: &mut W,
    label: &str,
    saved: &SavedImage,
) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        format!("✓ {} saved to:", label).green(),
        saved.path.display()
    )?;
    writeln!(out, "  Size: {}x{}", saved.width, saved.height)
}

pub fn display_saved_video<W: Write>(out: &mut W, saved: &SavedFile) -> io::Result<()> {
    writeln!(out, "{} {}", "✓ Video saved to:".green(), saved.path.display())?;
    writeln!(out, "  Size: {:.2} MB", saved.size_mb())
}
