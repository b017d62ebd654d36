mod cli;
mod commands;
mod infra;
mod render;

use rev_radar::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
