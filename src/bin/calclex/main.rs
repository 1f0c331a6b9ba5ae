mod repl;

use std::fs;
use std::io;
use std::process::exit;

use anyhow::Context;
use calclex::cli::Cli;
use calclex::{run, ReportStyle, ScanOptions};
use clap::Parser;
use repl::Repl;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.no_color)?;

    let options = cli.scan_options();
    let style = cli.report_style();

    if let Some(script) = &cli.script {
        let code =
            fs::read_to_string(script).with_context(|| format!("script `{}`", script.display()))?;
        let name = script.display().to_string();

        let clean = run(
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
            &name,
            &code,
            options,
            style,
        )?;
        if !clean {
            exit(1);
        }
    } else {
        repl(options, style)?;
    }

    Ok(())
}

/// Logs go to stderr so the token listing on stdout stays clean.
fn init_logging(verbose: bool, no_color: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("failed to initialize logging")
}

fn repl(options: ScanOptions, style: ReportStyle) -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut state = Repl::new(options, style);
    loop {
        match rl.readline("> ") {
            Ok(line) => {
                rl.add_history_entry(&line)?;
                state.rep(&line)?;
            }
            Err(ReadlineError::Eof) => return Ok(()),
            Err(ReadlineError::Interrupted) => {
                eprintln!("user exit");
                exit(1);
            }
            Err(e) => return Err(e),
        }
    }
}
