use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use log::{debug, warn};

use crate::{
    config::{
        GeneratorConfig, StripperConfig, DEFAULT_COUNT, DEFAULT_GENERATOR_DIR,
        DEFAULT_IMAGE_URL, DEFAULT_STRIPPER_DIR,
    },
    fs_ops::{FileSystemOps, TokioFileSystemOps},
    generator, stripper,
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[clap(flatten)]
    verbose: Verbosity<InfoLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Write 1.json through <COUNT>.json into the metadata directory
    Generate {
        #[clap(long, env = "NOVAMETA_DIR", default_value = DEFAULT_GENERATOR_DIR)]
        dir: PathBuf,
        #[clap(long, env = "NOVAMETA_COUNT", default_value_t = DEFAULT_COUNT)]
        count: u32,
        #[clap(long, env = "NOVAMETA_IMAGE_URL", default_value = DEFAULT_IMAGE_URL)]
        image_url: String,
    },
    /// Drop the extension from every entry of the metadata directory
    StripExtensions {
        #[clap(long, env = "NOVAMETA_DIR", default_value = DEFAULT_STRIPPER_DIR)]
        dir: PathBuf,
    },
}

async fn generate(fs: &dyn FileSystemOps, config: GeneratorConfig) -> eyre::Result<()> {
    debug!("generator config: {:?}", config);
    let report = generator::generate(fs, &config).await?;
    debug!(
        "created directory: {}, files written: {}",
        report.created_dir,
        report.written
    );
    Ok(())
}

async fn strip_extensions(fs: &dyn FileSystemOps, config: StripperConfig) -> eyre::Result<()> {
    debug!("stripper config: {:?}", config);
    let report = stripper::strip_extensions(fs, &config).await?;
    if !report.failed.is_empty() {
        warn!(
            "{} of {} entries were not renamed",
            report.failed.len(),
            report.failed.len() + report.renamed.len()
        );
    }
    Ok(())
}

pub async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let fs = TokioFileSystemOps;
    match cli.command {
        Commands::Generate {
            dir,
            count,
            image_url,
        } => {
            let config = GeneratorConfig {
                dir,
                count,
                image_url,
            };
            generate(&fs, config).await
        }
        Commands::StripExtensions { dir } => strip_extensions(&fs, StripperConfig { dir }).await,
    }
}
