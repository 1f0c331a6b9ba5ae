use std::io;

use calclex::{run, ReportStyle, ScanOptions};
use tracing::debug;

/// Interactive session: each entered line is scanned on its own.
#[derive(Debug)]
pub struct Repl {
    options: ScanOptions,
    style: ReportStyle,
    entered: usize,
}

impl Repl {
    pub fn new(options: ScanOptions, style: ReportStyle) -> Self {
        Self {
            options,
            style,
            entered: 0,
        }
    }

    pub fn rep(&mut self, input: &str) -> io::Result<()> {
        self.entered += 1;
        let name = format!("<line {}>", self.entered);

        let clean = run(
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
            &name,
            input,
            self.options,
            self.style,
        )?;
        debug!(line = self.entered, clean, "line scanned");

        Ok(())
    }
}
