use std::{
    fs,
    io::{self, BufRead, Write},
};

use basix::{EvaluationOutcome, parse_line, process_line};
use clap::Parser;

/// basix is a small BASIC-flavored expression language: arithmetic over
/// integers and floats, with parenthesized grouping and unary minus.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as a path and evaluate the file line by line.
    #[arg(short, long)]
    file: bool,

    /// Print the parse tree of each line instead of evaluating it.
    #[arg(short, long)]
    tree: bool,

    /// Expression to evaluate; omit to start the interactive prompt.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    match args.contents {
        None => repl(args.tree),
        Some(path) if args.file => run_file(&path, args.tree),
        Some(expression) => {
            if !run_line(&expression, args.tree) {
                std::process::exit(1);
            }
        },
    }
}

/// Reads lines from the prompt until `exit()`.
///
/// Errors are printed and the prompt continues; only end of input or an
/// explicit `exit()` ends the session.
fn repl(tree: bool) {
    let stdin = io::stdin();
    loop {
        print!("basix > ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let text = line.trim_end_matches(['\n', '\r']);
        if text == "exit()" {
            break;
        }
        if text.contains("exit") {
            println!("Use exit() to exit");
            continue;
        }

        run_line(text, tree);
    }
}

/// Evaluates a file line by line, stopping at the first error.
fn run_file(path: &str, tree: bool) {
    let source = fs::read_to_string(path).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
        std::process::exit(1);
    });

    for line in source.lines() {
        if !run_line(line, tree) {
            break;
        }
    }
}

/// Runs one line through the pipeline and prints its outcome or error.
///
/// Returns `false` when the line failed, so callers can decide whether to
/// keep going (the prompt does, the file driver does not).
fn run_line(text: &str, tree: bool) -> bool {
    if tree {
        return match parse_line(text) {
            Ok(nodes) => {
                let rendered: Vec<String> = nodes.iter().map(ToString::to_string).collect();
                println!("{}", rendered.join(" "));
                true
            },
            Err(e) => {
                eprintln!("{e}");
                false
            },
        };
    }

    match process_line(text) {
        Ok(EvaluationOutcome::Value(value)) => {
            println!("{value}");
            true
        },
        Ok(EvaluationOutcome::Empty) => true,
        Err(e) => {
            eprintln!("{e}");
            false
        },
    }
}
