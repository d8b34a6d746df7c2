/// One verse-to-audio sync point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncInfo {
    /// 0-based verse index; even = first line of a couplet, odd = second line
    pub verse_order: usize,
    /// Offset into the recording in milliseconds
    pub audio_milliseconds: i64,
}

/// Everything the audio-list XML needs for one recording
#[derive(Debug, Clone, PartialEq)]
pub struct PoemAudio {
    pub poem_id: u64,
    pub id: u32,
    pub file_path: String,
    pub description: String,
    pub file_checksum: String,
    pub one_second_bug_fix: u32,
    pub sync_array: Vec<SyncInfo>,
}
