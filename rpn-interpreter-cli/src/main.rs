mod config;

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use config::Config;
use log::{debug, LevelFilter};
use rpn_interpreter::driver;
use std::io::{self, Read, Write};
use std::process;

/// Evaluates Reverse Polish Notation arithmetic, one expression per line
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// Expressions to evaluate instead of reading lines from stdin
    expressions: Vec<String>,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    let config = Config::from_env();
    init_logger(config.log_level(args.verbose.log_level_filter()));
    debug!("main");

    let input = if args.expressions.is_empty() {
        read_stdin()?
    } else {
        args.expressions.join("\n")
    };
    debug!("lines: {:?}", input.split('\n').collect::<Vec<_>>());

    let stdout = io::stdout();
    let mut output = stdout.lock();
    let summary = driver::run(&input, &mut output)?;
    output.flush().context("Failed to flush stdout")?;

    process::exit(summary.exit_code())
}

/// Logs to stdout so that debug lines interleave with the results.
fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stdout)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn read_stdin() -> Result<String> {
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .context("Failed to read from stdin")?;
    debug!("size: {}", bytes.len());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
