use anyhow::{Context, Result};
use clap::Parser;
use rpn_interpreter::recognizer::Recognizer;
use std::io::{self, BufRead};
use std::process;

/// Checks that every line on stdin is output the interpreter can produce
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {}

fn main() -> Result<()> {
    Arguments::parse();
    let recognizer = Recognizer::new()?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if !recognizer.recognize(&line) {
            println!("ERROR: Unrecognized: {}", line);
            process::exit(1);
        }
    }

    Ok(())
}
