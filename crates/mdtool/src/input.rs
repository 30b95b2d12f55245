//! Where the text to convert comes from, and where the result can go

use std::io::{IsTerminal, Read};

use crate::prelude::*;

/// Where the input was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Stdin,
    Clipboard,
}

impl Source {
    /// Piped stdin wins over the clipboard
    pub fn detect() -> Self {
        if std::io::stdin().is_terminal() {
            Source::Clipboard
        } else {
            Source::Stdin
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Stdin => write!(f, "stdin"),
            Source::Clipboard => write!(f, "clipboard"),
        }
    }
}

/// Read the raw text from `source`
pub fn read(source: Source) -> Result<String> {
    log::debug!("Reading input from {source}");
    match source {
        Source::Stdin => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
        Source::Clipboard => Ok(clipboard()?
            .get_text()
            .map_err(|e| Error::Clipboard(e.to_string()))?),
    }
}

/// Place `text` on the system clipboard
pub fn write_clipboard(text: &str) -> Result<()> {
    clipboard()?
        .set_text(text)
        .map_err(|e| Error::Clipboard(e.to_string()))?;
    log::debug!("Wrote {} bytes to the clipboard", text.len());
    Ok(())
}

fn clipboard() -> Result<arboard::Clipboard> {
    Ok(arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?)
}
