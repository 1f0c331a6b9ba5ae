use std::io::{self, Write};
use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use crate::scan::LexError;
use crate::span::Spanned;

/// How lexical errors are shown to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportStyle {
    /// Single `[line:column] message` line instead of a source excerpt.
    pub plain: bool,
    pub color: bool,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            plain: false,
            color: true,
        }
    }
}

/// Writes `error` to `w`, pointing into `source`. `name` labels the source,
/// usually the script path.
pub fn write<W: Write>(
    w: &mut W,
    error: &LexError,
    source: &str,
    name: &str,
    style: ReportStyle,
) -> io::Result<()> {
    if style.plain {
        return writeln!(w, "{error}");
    }

    build(error, name, style.color).write((name, Source::from(source)), w)
}

/// Same as [`write`], collected into a string.
pub fn render(
    error: &LexError,
    source: &str,
    name: &str,
    style: ReportStyle,
) -> io::Result<String> {
    let mut buf = Vec::new();
    write(&mut buf, error, source, name, style)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn build<'a>(
    error: &LexError,
    name: &'a str,
    color: bool,
) -> Report<'a, (&'a str, Range<usize>)> {
    Report::build(ReportKind::Error, (name, error.span()))
        // spans are byte offsets into the source
        .with_config(
            Config::default()
                .with_index_type(IndexType::Byte)
                .with_color(color),
        )
        .with_label(
            Label::new((name, error.span()))
                .with_message(error.message())
                .with_color(Color::Red),
        )
        .finish()
}
