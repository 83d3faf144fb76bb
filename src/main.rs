use std::{fs::read_to_string, path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser};
use ilang::{lexer::lexer::tokenize, lexer::tokens::Token, parser::parser::parse, render_error};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Front end of the I language: tokenizes and parses a source file.
#[derive(Debug, Parser)]
#[command(name = "ilang", version, about)]
struct Cli {
    /// Source file to read
    path: PathBuf,

    /// Print the token stream instead of the parsed program
    #[arg(long)]
    tokens: bool,

    /// With --tokens, only print token kinds
    #[arg(long)]
    types: bool,

    /// With --tokens, only print token values
    #[arg(long)]
    values: bool,

    /// With --tokens, print all tokens as one list
    #[arg(long)]
    no_split: bool,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "ilang=warn",
        1 => "ilang=debug",
        _ => "ilang=trace",
    }
}

fn render_tokens(tokens: &[Token], cli: &Cli) -> Vec<String> {
    tokens
        .iter()
        .map(|token| match (cli.types, cli.values) {
            (true, false) => token.kind.to_string(),
            (false, true) => token.value.clone(),
            _ => token.to_string(),
        })
        .collect()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    let file = cli.path.to_string_lossy().into_owned();
    let source = match read_to_string(&cli.path) {
        Ok(source) => source,
        Err(err) => {
            error!(%file, %err, "failed to read source");
            eprintln!("Error: cannot read {}: {}", file, err);
            return ExitCode::from(2);
        }
    };

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("{}", render_error(&err, &source, &file));
            return ExitCode::from(1);
        }
    };

    if cli.tokens {
        let rendered = render_tokens(&tokens, &cli);
        if cli.no_split {
            println!("[{}]", rendered.join(", "));
        } else {
            for line in rendered {
                println!("{}", line);
            }
        }
        return ExitCode::SUCCESS;
    }

    match parse(tokens) {
        Ok(program) => {
            debug!(statements = program.len(), "done");
            print!("{}", program);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", render_error(&err, &source, &file));
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_defaults() {
        assert_eq!(directive_for_verbosity(0), "ilang=warn");
        assert_eq!(directive_for_verbosity(3), "ilang=trace");
    }

    #[test]
    fn token_rendering_follows_flags() {
        let tokens = tokenize("int x;").unwrap();
        let cli = Cli::parse_from(["ilang", "file.i", "--tokens", "--values"]);

        assert_eq!(render_tokens(&tokens, &cli), vec!["int", "x", ";"]);
    }
}
