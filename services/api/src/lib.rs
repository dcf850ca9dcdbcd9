mod cli;
mod routes;
mod score;
mod server;

use dossier_scoring::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
