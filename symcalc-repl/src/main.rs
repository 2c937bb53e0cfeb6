use clap::{Parser, ValueEnum};
use log::LevelFilter;
use rustyline::{error::ReadlineError, DefaultEditor};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::io::{self, IsTerminal, Read};
use symcalc::{ClearPolicy, Error, Operation, OptionsBuilder, Session};

#[derive(Parser)]
#[command(
    name = "symcalc",
    version,
    about = "Symbolic calculator: evaluate, differentiate, simplify, expand and factor expressions",
    after_help = "Each line is `<operation> <expression>`, or just an expression to evaluate.\n\
                  Operations: evaluate (=, eval), differentiate (diff, or d/d<var> for another variable), simplify, expand, factor, clear.\n\
                  `Ans` refers to the last result.",
)]
struct Cli {
    /// Make `clear` also forget the last result
    #[arg(long)]
    clear_resets_ans: bool,

    /// The variable `differentiate` differentiates with respect to
    #[arg(long, default_value = "x")]
    variable: String,

    /// Set log level
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Splits a line into the operation and the expression it applies to.
///
/// The first word selects the operation if it is an operation key. A longer alphabetic first word
/// that is a likely typo of a key is reported as an unknown operation; anything else is an
/// expression to evaluate.
fn split_request<'a>(session: &Session, line: &'a str) -> Result<(Operation, &'a str), Error> {
    let line = line.trim();
    let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match session.operation(head) {
        Ok(op) => Ok((op, rest)),
        Err(err @ Error::UnknownOperation { suggestion: Some(_), .. })
            if !rest.is_empty() && head.len() > 3 && head.chars().all(char::is_alphabetic) => Err(err),
        Err(_) => Ok((Operation::Evaluate, line)),
    }
}

/// Runs a single request, printing the result or the error.
fn run(session: &mut Session, line: &str) {
    let result = split_request(session, line)
        .and_then(|(op, expr)| session.apply(op, expr));

    match result {
        Ok(applied) => {
            if applied.value.is_some() {
                println!("{}", applied.display);
            }
            if let Some(explanation) = &applied.explanation {
                println!("{}", explanation);
            }
        },
        Err(err) => {
            if let Err(io_err) = err.report_to_stderr() {
                eprintln!("{}", io_err);
            }
        },
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = TermLogger::init(
        cli.log_level.into(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("could not initialize logging: {}", err);
    }

    let clear_policy = if cli.clear_resets_ans {
        ClearPolicy::ResetAnswer
    } else {
        ClearPolicy::KeepAnswer
    };
    let mut session = Session::new(OptionsBuilder::new()
        .clear_policy(clear_policy)
        .variable(cli.variable)
        .build());

    if !io::stdin().is_terminal() {
        // one request per line
        let mut input = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut input) {
            eprintln!("{}", err);
            std::process::exit(1);
        }

        for line in input.lines().filter(|line| !line.trim().is_empty()) {
            run(&mut session, line);
        }
    } else {
        // run the repl / interactive mode
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            },
        };

        fn process_line(rl: &mut DefaultEditor, session: &mut Session) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            run(session, &input);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl, &mut session) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests() {
        let session = Session::default();
        assert_eq!(split_request(&session, "d/dx x^2").unwrap().1, "x^2");
        assert_eq!(split_request(&session, "x + 1").unwrap(), (Operation::Evaluate, "x + 1"));
        assert_eq!(split_request(&session, "clear").unwrap(), (Operation::Clear, ""));
        assert_eq!(split_request(&session, "E * 2").unwrap(), (Operation::Evaluate, "E * 2"));
        assert!(split_request(&session, "expnd (x+1)^2").is_err());
    }
}
