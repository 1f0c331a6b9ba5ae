pub mod cli;
pub mod report;
mod scan;
mod span;

pub use report::ReportStyle;
pub use scan::{ColumnMode, LexError, ScanError, ScanOptions, Scanner, Token, TokenKind};
pub use span::{Position, Spanned};

use std::io::{self, Write};

/// Tokenizes `source` with default options.
///
/// On failure the returned [`ScanError`] still holds every token scanned
/// before the offending character.
pub fn scan(source: &str) -> Result<Vec<Token>, ScanError> {
    Scanner::new(source).scan()
}

/// Scans `source`, printing one token per line to `out` and the error, if
/// any, to `err`. Tokens preceding an error are printed as well.
///
/// Returns `Ok(false)` when the scan hit an unknown character.
pub fn run<O, E>(
    out: &mut O,
    err: &mut E,
    name: &str,
    source: &str,
    options: ScanOptions,
    style: ReportStyle,
) -> io::Result<bool>
where
    O: Write,
    E: Write,
{
    let (tokens, error) = match Scanner::with_options(source, options).scan() {
        Ok(tokens) => (tokens, None),
        Err(ScanError { error, tokens }) => (tokens, Some(error)),
    };

    for token in &tokens {
        writeln!(out, "{token}")?;
    }
    out.flush()?;

    match error {
        Some(error) => {
            report::write(err, &error, source, name, style)?;
            Ok(false)
        }
        None => Ok(true),
    }
}
