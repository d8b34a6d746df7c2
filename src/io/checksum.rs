use std::io::Read;
use std::path::Path;

use md5::{Digest, Md5};
use tracing::error;

use crate::error::{Result, SyncError};

/// Hex MD5 digest of a file's contents
pub fn file_md5(path: &Path) -> Result<String> {
    let missing = |source: std::io::Error| {
        error!("Failed to read audio file {:?}: {}", path, source);
        SyncError::MissingFile {
            path: path.to_path_buf(),
            source,
        }
    };

    let mut file = std::fs::File::open(path).map_err(missing)?;
    let mut hasher = Md5::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = file.read(&mut buffer).map_err(missing)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
