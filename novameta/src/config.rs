use std::path::PathBuf;

use serde_valid::Validate;

pub const DEFAULT_GENERATOR_DIR: &str = "metadata";
pub const DEFAULT_STRIPPER_DIR: &str = "./metadata";
pub const DEFAULT_COUNT: u32 = 1493;
pub const DEFAULT_IMAGE_URL: &str =
    "https://raw.githubusercontent.com/chro-dev/Nova_nft/main/nova.jpg";

/// Inputs for a single generator run.
#[derive(Debug, Clone, Validate)]
pub struct GeneratorConfig {
    /// Output directory. Created if missing, its parent must exist.
    pub dir: PathBuf,
    /// Number of records, written as `1.json` through `<count>.json`.
    pub count: u32,
    /// Embedded verbatim as `image` in every record.
    #[validate(pattern = r"^[A-Za-z][A-Za-z0-9+.-]*://\S+$")]
    pub image_url: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            dir: PathBuf::from(DEFAULT_GENERATOR_DIR),
            count: DEFAULT_COUNT,
            image_url: DEFAULT_IMAGE_URL.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StripperConfig {
    pub dir: PathBuf,
}

impl Default for StripperConfig {
    fn default() -> Self {
        StripperConfig {
            dir: PathBuf::from(DEFAULT_STRIPPER_DIR),
        }
    }
}
