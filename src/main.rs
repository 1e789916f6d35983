use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use thisfunc::interpreter::{evaluator::core::Interpreter, lexer, parser};

/// The command the interactive shell terminates on.
const EXIT_COMMAND: &str = "e0";

/// thisfunc is an interactive interpreter for a small prefix-notation
/// expression language with positional-argument user functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Run a script file, one statement per line, instead of starting the
    /// interactive shell.
    #[arg(short, long)]
    file: Option<String>,

    /// Print the parsed syntax tree of every statement before evaluating it.
    #[arg(long)]
    ast: bool,
}

fn main() {
    let args = Args::parse();

    let mut interpreter = Interpreter::new();

    if let Some(path) = args.file {
        let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                         eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                         std::process::exit(1);
                     });

        for line in script.lines() {
            eval_and_print(&mut interpreter, line, args.ast);
        }

        return;
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("thisfunc > ");
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let line = line.trim_end_matches(['\r', '\n']);

        if line == EXIT_COMMAND {
            break;
        }

        eval_and_print(&mut interpreter, line, args.ast);
    }
}

/// Feeds one line through the pipeline and prints whatever it emits: the
/// rendered value, nothing for declarations and blank lines, or the error.
fn eval_and_print(interpreter: &mut Interpreter, line: &str, print_ast: bool) {
    if print_ast && let Some(statement) = parse_for_display(line) {
        println!("{statement}");
    }

    match interpreter.eval_line(line) {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => {},
        Err(e) => println!("{e}"),
    }
}

/// Re-runs lexing and parsing for the `--ast` dump. Errors are ignored here;
/// the evaluation pass reports them.
fn parse_for_display(line: &str) -> Option<thisfunc::ast::Statement> {
    let tokens = lexer::scan(line).ok()?;

    if tokens.is_empty() {
        return None;
    }

    let mut iter = tokens.iter().peekable();
    parser::statement::parse_statement(&mut iter).ok()
}
