use std::path::PathBuf;

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone)]
pub struct PlaceRecord {
    pub path: PathBuf,
    pub place_id: String,
    pub scrape_success: bool,
    pub final_success: bool,
    pub display_name: String,
    pub size_bytes: u64,
}

impl PlaceRecord {
    pub fn from_document(path: PathBuf, doc: RecordDocument, size_bytes: u64) -> Self {
        Self {
            path,
            place_id: doc.place_id.unwrap_or_default(),
            scrape_success: doc.scrape_success,
            final_success: doc.final_success,
            display_name: doc.business_info.name,
            size_bytes,
        }
    }

    pub fn has_place_id(&self) -> bool {
        !self.place_id.is_empty()
    }

    // Success flags dominate; size only breaks ties between equal flags.
    pub fn quality_key(&self) -> (bool, bool, u64) {
        (self.final_success, self.scrape_success, self.size_bytes)
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecordDocument {
    pub place_id: Option<String>,
    #[serde(deserialize_with = "bool_or_false")]
    pub scrape_success: bool,
    #[serde(deserialize_with = "bool_or_false")]
    pub final_success: bool,
    pub business_info: BusinessInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BusinessInfo {
    pub name: String,
}

// Upstream writers are not consistent about these flags; anything that is
// not literally a JSON boolean counts as false.
fn bool_or_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or(false))
}
