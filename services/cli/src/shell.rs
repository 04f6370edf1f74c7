//! Line-oriented session over stdin. Filters stack across lines until a `list`
//! command clears them.

use std::io::{self, BufRead, Write};

use clap::Parser;
use hireflow::error::AppError;
use hireflow::model::Model;
use hireflow::storage::{save_model, Storage};
use tracing::{debug, warn};

use crate::cli::Command;
use crate::commands;

#[derive(Parser, Debug)]
#[command(no_binary_name = true, name = "hireflow", disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Command,
}

pub(crate) fn run(model: &mut Model, storage: &dyn Storage) -> Result<(), AppError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("hireflow shell; type `help` for commands, `exit` to leave");

    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "hireflow> ")?;
        stdout.flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "exit" | "quit") {
            break;
        }

        match handle_line(model, storage, line) {
            Ok(message) => println!("{message}"),
            Err(err) if err.is_recoverable() => println!("{err}"),
            Err(err) => return Err(err),
        }
    }
    debug!("shell closed");
    Ok(())
}

fn handle_line(model: &mut Model, storage: &dyn Storage, line: &str) -> Result<String, AppError> {
    let tokens = tokenize(line)?;
    let parsed = match ShellLine::try_parse_from(tokens) {
        Ok(parsed) => parsed,
        Err(err) => return Ok(err.render().to_string().trim_end().to_string()),
    };
    let outcome = commands::execute(model, parsed.command)?;
    if outcome.mutated {
        if let Err(err) = save_model(storage, model) {
            warn!(error = %err, "could not save after command");
            return Err(err.into());
        }
    }
    Ok(outcome.message)
}

/// Splits on whitespace, keeping single- or double-quoted runs together.
fn tokenize(line: &str) -> Result<Vec<String>, AppError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match quote {
            Some(open) if ch == open => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                in_token = true;
            }
            None if ch.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(ch);
                in_token = true;
            }
        }
    }

    if let Some(open) = quote {
        return Err(AppError::Command(format!("unterminated {open} quote")));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
