use clap::{Parser, Subcommand};
use std::process;

use nock::{Evaluator, Noun, Step, Trace};

#[derive(Parser)]
#[command(
    name = "nock",
    version,
    about = "Interpreter for the six-opcode Nock combinator calculus"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a noun and print its canonical rendering
    Parse {
        /// Noun notation, e.g. "[1 2 3]"
        noun: String,
    },
    /// Reduce a formula against a subject and print the result
    Eval {
        /// Subject noun
        subject: String,
        /// Formula noun (must be a cell)
        formula: String,
        /// Print every reduction step to stderr
        #[arg(long)]
        trace: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse { noun } => cmd_parse(&noun),
        Command::Eval {
            subject,
            formula,
            trace,
        } => cmd_eval(&subject, &formula, trace),
    }
}

fn cmd_parse(text: &str) {
    let noun = parse_or_exit(text, "<noun>");
    println!("{}", noun);
}

fn cmd_eval(subject_text: &str, formula_text: &str, trace: bool) {
    let subject = parse_or_exit(subject_text, "<subject>");
    let formula = parse_or_exit(formula_text, "<formula>");

    let result = if trace {
        let mut tracer = StderrTrace;
        Evaluator::with_trace(&mut tracer).reduce(&subject, &formula)
    } else {
        nock::reduce(&subject, &formula)
    };

    match result {
        Ok(noun) => println!("{}", noun),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn parse_or_exit(text: &str, filename: &str) -> Noun {
    match nock::parse(text) {
        Ok(noun) => noun,
        Err(e) => {
            e.to_diagnostic().render(filename, text);
            process::exit(1);
        }
    }
}

/// Prints the classic reduction trace: one line per call in calculus
/// notation, `--` lines for each rewrite rule that fires.
struct StderrTrace;

impl Trace for StderrTrace {
    fn step(&mut self, step: &Step<'_>) {
        match step {
            Step::Reduce { subject, formula } => eprintln!("*[{} {}]", subject, formula),
            Step::Fas { axis, tree } => eprintln!("/[{} {}]", axis, tree),
            Step::Hax {
                axis,
                replacement,
                tree,
            } => eprintln!("#[{} {} {}]", axis, replacement, tree),
            Step::Wut(noun) => eprintln!("?{}", noun),
            Step::Lus(noun) => eprintln!("+{}", noun),
            Step::Tis(a, b) => eprintln!("=[{} {}]", a, b),
            Step::Rule(rule) => eprintln!("-- {}", rule),
        }
    }
}
