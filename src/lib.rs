pub mod batch;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod parser;
pub mod validation;

pub use batch::{generate_sync_info, process_range, BatchResult};
pub use config::{DocumentPaths, SyncConfig};
pub use error::SyncError;
pub use io::{load_poem_document, write_poem_json};
pub use models::{Couplet, MarkerTable, PoemAudio, PoemData, SyncInfo};
pub use parser::{build_marker_table, parse_poem, parse_poem_document};
pub use validation::{check_completeness, CompletenessIssue};
