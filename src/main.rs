use std::{fs, process::ExitCode};

use clap::Parser;
use shunt::{Error, evaluate, evaluate_postfix, to_postfix};
use tracing::{debug, warn};

/// shunt evaluates arithmetic expressions with `+`, `-`, `*`, `/` and
/// parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells shunt to read expressions from a file, one per line, instead of
    /// taking a single expression.
    #[arg(short, long)]
    file: bool,

    /// Prints the postfix token sequence instead of the value.
    #[arg(short, long, conflicts_with = "rpn")]
    postfix: bool,

    /// Treats the input as whitespace-separated postfix tokens and evaluates
    /// them directly.
    #[arg(short, long)]
    rpn: bool,

    /// Raises the log level on stderr; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

impl Args {
    /// Runs one expression according to the selected mode.
    fn run(&self, expression: &str) -> Result<String, Error> {
        if self.rpn {
            let tokens: Vec<&str> = expression.split_whitespace().collect();
            return Ok(evaluate_postfix(&tokens)?.to_string());
        }
        if self.postfix {
            return Ok(to_postfix(expression)?.join(" "));
        }
        Ok(evaluate(expression)?.to_string())
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::{
        filter::{LevelFilter, Targets},
        fmt::Layer,
        prelude::*,
    };

    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::registry().with(Layer::new().with_writer(std::io::stderr)
                                                    .with_filter(Targets::new().with_default(LevelFilter::WARN)
                                                                               .with_target("shunt",
                                                                                            level)))
                                  .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if !args.file {
        return match args.run(&args.contents) {
            Ok(output) => {
                println!("{output}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    let script = match fs::read_to_string(&args.contents) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            debug!(%e, "read failed");
            return ExitCode::FAILURE;
        },
    };

    let mut failures = 0usize;
    for (number, line) in script.lines().enumerate().map(|(i, l)| (i + 1, l)) {
        if line.trim().is_empty() {
            continue;
        }
        match args.run(line) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                failures += 1;
                eprintln!("Line {number}: {e}");
            },
        }
    }

    if failures > 0 {
        warn!(failures, "some expressions failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
