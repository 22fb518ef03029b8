mod cli;
mod config;
mod fs_ops;
mod generator;
mod stripper;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    cli::main().await
}
