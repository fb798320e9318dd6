/// `.ov` compiler CLI

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use ov_compiler::{CompileOptions, CompileReport, Compiler};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: ovc <file.ov>";

#[derive(Parser, Debug)]
#[command(name = "ovc")]
#[command(about = "Translates .ov print scripts into C source files")]
#[command(version)]
struct Args {
    /// Input .ov source file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Write the C file here instead of next to the input
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print a JSON summary instead of the success line
    #[arg(long)]
    json: bool,

    /// Print the generated C code instead of writing a file
    #[arg(long, conflicts_with_all = ["output", "json"])]
    stdout: bool,

    /// Anything after the input file is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    ignored: Vec<OsString>,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            println!("{USAGE}");
            process::exit(1);
        }
    };
    init_logging(args.verbose);

    let Some(input) = args.input.clone() else {
        println!("{USAGE}");
        process::exit(1);
    };

    if !args.ignored.is_empty() {
        tracing::debug!(count = args.ignored.len(), "ignoring extra arguments");
    }

    if let Err(e) = run(&args, input) {
        println!("{e}");
        process::exit(1);
    }
}

fn run(args: &Args, input: PathBuf) -> anyhow::Result<()> {
    let mut options = CompileOptions::new(input);
    if let Some(ref output) = args.output {
        options = options.output(output.clone());
    }

    let compiler = Compiler::new(options);
    let output = compiler.compile()?;

    if args.stdout {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(&output.c_code)
            .context("Failed to write generated code to stdout")?;
        return Ok(());
    }

    output.write()?;

    let report = CompileReport::from(&output);
    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
    } else {
        println!("{report}");
    }

    Ok(())
}

/// Log to stderr so stdout carries only the user-facing lines.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}
