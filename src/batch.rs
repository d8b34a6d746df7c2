use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::SyncConfig;
use crate::error::{Result, SyncError};
use crate::io::{file_md5, write_audio_list};
use crate::models::{Couplet, PoemAudio, PoemData, SyncInfo};

/// Correction factor the playback application expects in every audio list
pub const ONE_SECOND_BUG_FIX: u32 = 1000;

fn to_milliseconds(seconds: Option<f64>) -> Option<i64> {
    seconds
        .filter(|s| s.is_finite())
        .map(|s| (s * 1000.0).round() as i64)
}

/// Pair each couplet's two verse lines with audio offsets
///
/// Couplet at index `i` yields verse order `2i` (verse start) and `2i + 1`
/// (verse end). Timestamps that are missing or not finite are skipped.
pub fn generate_sync_info(couplets: &[Couplet]) -> Vec<SyncInfo> {
    let mut sync = Vec::with_capacity(couplets.len() * 2);

    for (index, couplet) in couplets.iter().enumerate() {
        let points = [
            (index * 2, couplet.verse_start_time),
            (index * 2 + 1, couplet.verse_end_time),
        ];
        for (verse_order, seconds) in points {
            match to_milliseconds(seconds) {
                Some(audio_milliseconds) => sync.push(SyncInfo {
                    verse_order,
                    audio_milliseconds,
                }),
                None => warn!(
                    "Couplet {} has no usable time for verse order {}",
                    couplet.number, verse_order
                ),
            }
        }
    }

    sync
}

/// Human-readable description of one item's recording
pub fn describe_item(item: u32, couplet: &Couplet) -> String {
    format!(
        "فایل صوتی بخش {} - {}",
        item,
        couplet.persian1.as_deref().unwrap_or_default()
    )
}

/// Assemble the audio-list record for one item
pub fn build_poem_audio(config: &SyncConfig, poem: &PoemData, item: u32) -> Result<PoemAudio> {
    let couplet = poem
        .couplet(item as usize)
        .ok_or(SyncError::ItemOutOfRange {
            item,
            total: poem.total_couplets(),
        })?;

    let audio_path = config.item_audio_path(item);
    let file_checksum = file_md5(&audio_path)?;

    Ok(PoemAudio {
        poem_id: config.catalog_id(item),
        id: item,
        file_path: audio_path.to_string_lossy().into_owned(),
        description: describe_item(item, couplet),
        file_checksum,
        one_second_bug_fix: ONE_SECOND_BUG_FIX,
        sync_array: generate_sync_info(std::slice::from_ref(couplet)),
    })
}

/// Result of a batch run
#[derive(Debug, Default)]
pub struct BatchResult {
    /// XML files written, in item order
    pub written: Vec<PathBuf>,
}

/// Generate one audio-list XML per item in the configured range
///
/// Stops at the first failing item.
pub fn process_range(config: &SyncConfig, poem: &PoemData) -> Result<BatchResult> {
    config.validate()?;
    let mut result = BatchResult::default();

    for item in config.items() {
        let audio = build_poem_audio(config, poem, item)?;
        let output_path = config.item_output_path(item);
        write_audio_list(&audio, &output_path)?;

        info!("XML file for Rubai-{} generated at {:?}", item, output_path);
        result.written.push(output_path);
    }

    Ok(result)
}
