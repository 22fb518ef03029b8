pub mod error;
pub mod metadata;

use log::{debug, info, warn};
use serde_valid::Validate;

use crate::{config::GeneratorConfig, fs_ops::FileSystemOps};

use self::{
    error::Error::{self, *},
    metadata::MetadataRecord,
};

#[derive(Debug)]
pub struct GenerateReport {
    /// Whether the output directory had to be created.
    pub created_dir: bool,
    /// Number of files written, `1.json` through `<written>.json`.
    pub written: u32,
}

/// Writes `config.count` metadata files into `config.dir`.
///
/// The first failed write stops the run: the files written so far stay on
/// disk and the error is returned, so a successful run always leaves the
/// whole `1..=count` range behind.
pub async fn generate(
    fs: &dyn FileSystemOps,
    config: &GeneratorConfig,
) -> Result<GenerateReport, Error> {
    config.validate().map_err(InvalidConfig)?;

    let dir = config.dir.as_path();
    let created_dir = if fs.is_dir(dir).await {
        debug!("using existing directory {}", dir.display());
        false
    } else {
        fs.create_dir(dir)
            .await
            .map_err(|e| CannotCreateDir(dir.into(), e))?;
        info!("created directory {}", dir.display());
        true
    };

    let mut written = 0;
    for index in 1..=config.count {
        let json = MetadataRecord::new(index, &config.image_url)
            .to_json()
            .map_err(|e| CannotSerialize(index, e))?;
        let path = dir.join(metadata::file_name(index));

        if let Err(e) = fs.write(&path, json.as_bytes()).await {
            warn!(
                "stopping after {} of {} files",
                written,
                config.count
            );
            return Err(CannotWriteFile(path, e));
        }
        info!("generated {}", path.display());
        written = index;
    }

    info!(
        "generated {} metadata files in {}",
        written,
        dir.display()
    );

    Ok(GenerateReport {
        created_dir,
        written,
    })
}
