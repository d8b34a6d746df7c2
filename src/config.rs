use std::path::PathBuf;

use crate::error::{Result, SyncError};

/// Location of the two inputs that make up one poem document
#[derive(Debug, Clone)]
pub struct DocumentPaths {
    /// Poem transcript with `#BookName:`-style headers and `#v` segments
    pub text_file: PathBuf,
    /// Tab- or comma-separated marker log
    pub markers_file: PathBuf,
}

/// Settings for the batch driver
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Folder holding one `Rubai-<n>` subfolder per item
    pub poems_root: PathBuf,
    /// First item to process (1-based, inclusive)
    pub range_start: u32,
    /// Last item to process (inclusive)
    pub range_end: u32,
    /// Added to the item number to form the catalog poem id
    pub catalog_base_id: u64,
    /// Where the generated XML files are written
    pub out_dir: PathBuf,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            poems_root: PathBuf::from("."),
            range_start: 1,
            range_end: 1,
            catalog_base_id: 0,
            out_dir: PathBuf::from("out"),
        }
    }
}

impl SyncConfig {
    /// Check the item range is non-empty and 1-based
    pub fn validate(&self) -> Result<()> {
        if self.range_start == 0 || self.range_start > self.range_end {
            return Err(SyncError::InvalidRange {
                start: self.range_start,
                end: self.range_end,
            });
        }
        Ok(())
    }

    /// Item numbers to process, in order
    pub fn items(&self) -> std::ops::RangeInclusive<u32> {
        self.range_start..=self.range_end
    }

    /// Folder for a single item
    pub fn item_folder(&self, item: u32) -> PathBuf {
        self.poems_root.join(format!("Rubai-{}", item))
    }

    /// Audio recording for a single item
    pub fn item_audio_path(&self, item: u32) -> PathBuf {
        self.item_folder(item).join(format!("rubai-{}.mp3", item))
    }

    /// Output XML path for a single item
    pub fn item_output_path(&self, item: u32) -> PathBuf {
        self.out_dir.join(format!("Rubai-{}.xml", item))
    }

    /// Catalog poem id for a single item
    pub fn catalog_id(&self, item: u32) -> u64 {
        self.catalog_base_id + u64::from(item)
    }
}
