mod cli;
mod infra;
mod render;

use outfitly::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
