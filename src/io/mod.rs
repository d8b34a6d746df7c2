pub mod checksum;
pub mod input;
pub mod output;

pub use checksum::file_md5;
pub use input::{load_poem_document, read_text_file};
pub use output::{render_audio_list, write_audio_list, write_poem_json};
