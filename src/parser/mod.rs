pub mod markers;
pub mod transcript;

pub use markers::*;
pub use transcript::*;

use crate::models::PoemData;

/// Parse a poem document from the raw transcript and marker log contents
pub fn parse_poem_document(text: &str, markers_log: &str) -> PoemData {
    let markers = build_marker_table(markers_log);
    parse_poem(text, &markers)
}
