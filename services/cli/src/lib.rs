mod cli;
mod commands;
mod snapshot;

use sportsday_engine::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
