use std::fs;

use clap::Parser;
use quill::{interpreter::lexer::tokenize, run_to_stdout};

/// quill runs scripts written in a tiny prefix language: one keyword, its
/// operands and a `;` per statement.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Pipe mode automatically prints out the last value an `eq`, `add`, `sub`,
    /// `mul` or `div` statement produced.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Print every token and its line to stderr before running the script.
    #[arg(short, long)]
    tokens: bool,

    /// The script to run. Nothing happens when it is omitted.
    path: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(path) = &args.path else {
        return;
    };

    let script = fs::read_to_string(path).unwrap_or_else(|_| {
                                                eprintln!("Could not find file \"{path}\"");
                                                std::process::exit(1);
                                            });

    let tokens = tokenize(&script);

    if args.tokens {
        for (token, line) in &tokens {
            eprintln!("{line:>4}  {token}");
        }
    }

    if let Err(e) = run_to_stdout(&tokens, args.pipe_mode) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
