use std::io::{self, Write};

/// Writes `message` and a newline to stdout, and to `writer` when one is given.
pub fn println(message: &str, writer: &mut Option<&mut dyn Write>) -> io::Result<()> {
    print(&format!("{message}\n"), writer)
}

/// Like [`println`] without the newline; flushes stdout so prompts show up
/// before input is read.
pub fn print(message: &str, writer: &mut Option<&mut dyn Write>) -> io::Result<()> {
    let mut stdout = io::stdout();
    if let Err(e) = write!(stdout, "{message}").and_then(|_| stdout.flush()) {
        tracing::warn!(error = %e, "Failed to write to stdout");
    }

    if let Some(w) = writer {
        write!(w, "{message}")?;
    }

    Ok(())
}
