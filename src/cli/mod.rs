use std::process::ExitCode;

use clap::{arg, Command};

mod run;

use self::run::{print_tokens, run};

pub fn cli() -> Command {
    Command::new("reminisce")
        .about("Inspect destructuring pattern signatures")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .subcommand(
            Command::new("parse")
                .arg(arg!(<PATTERN> "Pattern text, e.g. \"label, (x, y)\""))
                .arg(arg!(-d --debug "Print tokens and the pattern tree"))
                .about("Parse a pattern and print the names it binds"),
        )
        .subcommand(
            Command::new("tokens")
                .arg(arg!(<PATTERN> "Pattern text to tokenize"))
                .about("Print the tokens of a pattern"),
        )
}

/// Logs go to stderr, and only when `RUST_LOG` is set, e.g.
/// `RUST_LOG=reminisce=trace` to follow every parser step.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

pub fn parse_cli() -> ExitCode {
    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("parse", args)) => {
            let Some(pattern) = args.get_one::<String>("PATTERN") else {
                return ExitCode::FAILURE;
            };
            let debug = args.get_flag("debug");

            if let Err(error) = run(pattern, debug) {
                eprintln!("{error:?}");
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Some(("tokens", args)) => {
            let Some(pattern) = args.get_one::<String>("PATTERN") else {
                return ExitCode::FAILURE;
            };
            print_tokens(pattern);
            ExitCode::SUCCESS
        }
        _ => ExitCode::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn debug_flag_is_optional() {
        let matches = cli().get_matches_from(["reminisce", "parse", "x, (y)"]);
        let Some(("parse", args)) = matches.subcommand() else {
            panic!("expected the parse subcommand");
        };
        assert_eq!(args.get_one::<String>("PATTERN").unwrap(), "x, (y)");
        assert!(!args.get_flag("debug"));
    }
}
