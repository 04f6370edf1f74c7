mod cli;
mod commands;
mod render;
mod shell;

use hireflow::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
