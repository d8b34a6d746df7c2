use std::io::Cursor;
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::error;

use crate::error::{Result, SyncError};
use crate::models::{PoemAudio, PoemData};

/// Audio-list XML writer
struct AudioListWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl AudioListWriter {
    fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2),
        }
    }

    fn event(&mut self, event: Event<'_>) -> Result<()> {
        self.writer
            .write_event(event)
            .map_err(|e| SyncError::Xml(e.to_string()))
    }

    fn start(&mut self, name: &str) -> Result<()> {
        self.event(Event::Start(BytesStart::new(name)))
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn element(&mut self, name: &str, value: &str) -> Result<()> {
        self.start(name)?;
        self.event(Event::Text(BytesText::new(value)))?;
        self.end(name)
    }

    fn finish(self) -> Result<String> {
        String::from_utf8(self.writer.into_inner().into_inner())
            .map_err(|e| SyncError::Xml(e.to_string()))
    }
}

/// Render a `DesktopGanjoorPoemAudioList` document for one recording
pub fn render_audio_list(audio: &PoemAudio) -> Result<String> {
    let mut xml = AudioListWriter::new();

    xml.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    xml.start("DesktopGanjoorPoemAudioList")?;
    xml.start("PoemAudio")?;
    xml.element("PoemId", &audio.poem_id.to_string())?;
    xml.element("Id", &audio.id.to_string())?;
    xml.element("FilePath", &audio.file_path)?;
    xml.element("Description", &audio.description)?;
    xml.element("FileCheckSum", &audio.file_checksum)?;
    xml.element("OneSecondBugFix", &audio.one_second_bug_fix.to_string())?;

    xml.start("SyncArray")?;
    for sync in &audio.sync_array {
        xml.start("SyncInfo")?;
        xml.element("VerseOrder", &sync.verse_order.to_string())?;
        xml.element("AudioMilliseconds", &sync.audio_milliseconds.to_string())?;
        xml.end("SyncInfo")?;
    }
    xml.end("SyncArray")?;

    xml.end("PoemAudio")?;
    xml.end("DesktopGanjoorPoemAudioList")?;
    xml.finish()
}

/// Write the audio-list XML, creating the parent folder if needed
pub fn write_audio_list(audio: &PoemAudio, path: &Path) -> Result<()> {
    let content = render_audio_list(audio)?;
    let write_err = |source: std::io::Error| {
        error!("Failed to write file {:?}: {}", path, source);
        SyncError::Write {
            path: path.to_path_buf(),
            source,
        }
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, content).map_err(write_err)
}

/// Write the parsed poem as pretty JSON
pub fn write_poem_json(poem: &PoemData, path: &Path) -> Result<()> {
    let write_err = |source: std::io::Error| {
        error!("Failed to write file {:?}: {}", path, source);
        SyncError::Write {
            path: path.to_path_buf(),
            source,
        }
    };
    let file = std::fs::File::create(path).map_err(write_err)?;
    serde_json::to_writer_pretty(file, poem).map_err(|e| write_err(e.into()))
}
