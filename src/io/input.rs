use std::path::Path;

use tracing::{error, info};

use crate::config::DocumentPaths;
use crate::error::{Result, SyncError};
use crate::models::PoemData;
use crate::parser::parse_poem_document;

/// Read a UTF-8 text file fully into memory
pub fn read_text_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| {
        error!("Failed to read file {:?}: {}", path, source);
        SyncError::MissingFile {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Read the transcript and marker log and parse them into a poem
pub fn load_poem_document(paths: &DocumentPaths) -> Result<PoemData> {
    info!("Loading poem text from {:?}", paths.text_file);
    let text = read_text_file(&paths.text_file)?;

    info!("Loading markers from {:?}", paths.markers_file);
    let markers_log = read_text_file(&paths.markers_file)?;

    let poem = parse_poem_document(&text, &markers_log);
    info!(
        "Loaded \"{}\" from \"{}\": {} couplets",
        poem.poem_name,
        poem.book_name,
        poem.total_couplets()
    );
    Ok(poem)
}
