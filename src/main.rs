//! hmsubst CLI: parse types, apply and compose substitutions.

use std::env;
use std::io::{self, BufRead};
use std::process::ExitCode;

use tracing::{debug, Level};

use hmsubst::diagnostics::print_error;
use hmsubst::error::ParseError;
use hmsubst::parser::{parse_application, parse_substitution, parse_type};

/// What to run, from the command line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Parse(String),
    Apply { subst: String, ty: String },
    Compose { second: String, first: String },
    Stdin,
    Help,
    Version,
}

#[derive(Debug, PartialEq, Eq)]
struct Options {
    command: Command,
    verbose: bool,
}

impl Options {
    fn from_args(args: impl IntoIterator<Item = String>) -> Result<Options, String> {
        let mut verbose = false;
        let mut positional = Vec::new();

        for arg in args {
            match arg.as_str() {
                "-v" | "--verbose" => verbose = true,
                "-h" | "--help" => {
                    return Ok(Options {
                        command: Command::Help,
                        verbose,
                    })
                }
                "-V" | "--version" => {
                    return Ok(Options {
                        command: Command::Version,
                        verbose,
                    })
                }
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        let command = match (positional.next().as_deref(), positional.len()) {
            (Some("parse"), 1) => Command::Parse(next_arg(&mut positional)?),
            (Some("apply"), 2) => Command::Apply {
                subst: next_arg(&mut positional)?,
                ty: next_arg(&mut positional)?,
            },
            (Some("compose"), 2) => Command::Compose {
                second: next_arg(&mut positional)?,
                first: next_arg(&mut positional)?,
            },
            (Some("-"), 0) => Command::Stdin,
            (Some(cmd @ ("parse" | "apply" | "compose")), _) => {
                return Err(format!("wrong number of arguments for '{}'", cmd))
            }
            (Some(other), _) => return Err(format!("unknown command '{}'", other)),
            (None, _) => return Err("missing command".to_string()),
        };

        Ok(Options { command, verbose })
    }
}

fn next_arg(args: &mut impl Iterator<Item = String>) -> Result<String, String> {
    args.next().ok_or_else(|| "missing argument".to_string())
}

fn main() -> ExitCode {
    let options = match Options::from_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("Usage: hmsubst <parse|apply|compose> ARGS... | hmsubst -");
            eprintln!("       hmsubst --help");
            return ExitCode::from(1);
        }
    };

    let level = if options.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    debug!(?options, "starting");

    match options.command {
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            println!("hmsubst {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Command::Parse(source) => report("<type>", &source, parse_type(&source)),
        Command::Apply { subst, ty } => {
            let subst = match parse_substitution(&subst) {
                Ok(s) => s,
                Err(e) => return fail("<substitution>", &subst, &e),
            };
            report("<type>", &ty, parse_type(&ty).map(|ty| subst.apply(&ty)))
        }
        Command::Compose { second, first } => {
            let second_subst = match parse_substitution(&second) {
                Ok(s) => s,
                Err(e) => return fail("<second>", &second, &e),
            };
            report(
                "<first>",
                &first,
                parse_substitution(&first).map(|first| second_subst.compose(&first)),
            )
        }
        Command::Stdin => run_stdin(),
    }
}

/// Print a successful result, or the error against `source`.
fn report<T: std::fmt::Display>(
    name: &str,
    source: &str,
    result: Result<T, ParseError>,
) -> ExitCode {
    if emit(name, source, result) {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

/// Print the result to stdout or the error to stderr; true on success.
fn emit<T: std::fmt::Display>(name: &str, source: &str, result: Result<T, ParseError>) -> bool {
    match result {
        Ok(value) => {
            println!("{}", value);
            true
        }
        Err(e) => {
            show_error(name, source, &e);
            false
        }
    }
}

fn fail(name: &str, source: &str, error: &ParseError) -> ExitCode {
    show_error(name, source, error);
    ExitCode::from(1)
}

fn show_error(name: &str, source: &str, error: &ParseError) {
    if let Err(e) = print_error(name, source, error) {
        eprintln!("Error: {} ({})", error, e);
    }
}

/// Read `{subst} type` lines and print each applied result.
fn run_stdin() -> ExitCode {
    let mut failed = false;

    for (index, line) in io::stdin().lock().lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error reading stdin: {}", e);
                return ExitCode::from(1);
            }
        };
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        let name = format!("<stdin>:{}", index + 1);
        let result = parse_application(line).map(|(subst, ty)| subst.apply(&ty));
        if !emit(&name, line, result) {
            failed = true;
        }
    }

    if failed {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

fn print_help() {
    println!(
        r#"hmsubst - parse types, apply and compose substitutions

USAGE:
    hmsubst parse <TYPE>               Parse a type and print it back
    hmsubst apply <SUBST> <TYPE>       Apply a substitution to a type
    hmsubst compose <SECOND> <FIRST>   Compose substitutions (FIRST is applied first)
    hmsubst -                          Read "{{subst}} type" lines from stdin

OPTIONS:
    -v, --verbose        Log debug events to stderr
    -h, --help           Print help information
    -V, --version        Print version information

SYNTAX:
    Int, Bool            primitive types
    a, foo               type variables
    A -> B -> C          functions, right-associative: A -> (B -> C)
    a => b => T          type scheme binding a and b in T
    {{a: Int, b: a}}       substitution

EXAMPLES:
    hmsubst parse "Int -> Int -> Bool"
    hmsubst apply "{{a: Int, b: Bool}}" "a => (a -> b)"
    hmsubst compose "{{a: Int}}" "{{b: a -> a}}"
    echo "{{a: Int}} a -> b" | hmsubst -
"#
    );
}
