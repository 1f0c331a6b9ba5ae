use std::path::PathBuf;

use clap::Parser;

use crate::report::ReportStyle;
use crate::scan::{ColumnMode, ScanOptions};

#[derive(Debug, Parser)]
#[command(version, about = "Tokenize arithmetic expressions")]
pub struct Cli {
    /// Tokenize a script
    pub script: Option<PathBuf>,

    /// Count columns like the old tokenizer: spaces and tabs don't advance them
    #[arg(long, env = "CALCLEX_LEGACY_COLUMNS")]
    pub legacy_columns: bool,

    /// Append an EndOfFile token to a successful scan
    #[arg(long, env = "CALCLEX_EOF")]
    pub eof: bool,

    /// Print errors as a single `[line:column] message` line
    #[arg(long, env = "CALCLEX_PLAIN")]
    pub plain: bool,

    /// Disable colored output
    #[arg(long, env = "CALCLEX_NO_COLOR")]
    pub no_color: bool,

    /// Log scanner activity to stderr
    #[arg(short, long, env = "CALCLEX_VERBOSE")]
    pub verbose: bool,
}

impl Cli {
    pub fn scan_options(&self) -> ScanOptions {
        let columns = if self.legacy_columns {
            ColumnMode::TokenOnly
        } else {
            ColumnMode::Exact
        };

        ScanOptions::default().columns(columns).emit_eof(self.eof)
    }

    pub fn report_style(&self) -> ReportStyle {
        ReportStyle {
            plain: self.plain,
            color: !self.no_color,
        }
    }
}
