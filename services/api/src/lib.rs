mod browse;
mod cli;
mod infra;
mod routes;
mod server;

use ghostcheck::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
