use serde::{Deserialize, Serialize};

pub const NAME_PREFIX: &str = "NOVA NFT #";
pub const DESCRIPTION: &str = "A unique NOVA NFT";

/// One NFT asset description. Field order is the serialized key order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    pub name: String,
    pub description: String,
    pub image: String,
}

impl MetadataRecord {
    pub fn new(index: u32, image_url: &str) -> Self {
        MetadataRecord {
            name: format!("{NAME_PREFIX}{index}"),
            description: DESCRIPTION.into(),
            image: image_url.into(),
        }
    }

    /// Pretty-printed with two-space indentation.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

pub fn file_name(index: u32) -> String {
    format!("{index}.json")
}
