use tracing::debug;

use crate::models::{
    marker_label, Couplet, MarkerKind, MarkerTable, PoemData, PoemHeaders, OUTRO_END_LABEL,
    OUTRO_START_LABEL,
};

/// Token separating couplet segments in the transcript
pub const SEGMENT_DELIMITER: &str = "#v";

const BOOK_NAME_PREFIX: &str = "#BookName:";
const POEM_NAME_PREFIX: &str = "#PoemName:";
const POEM_TYPE_PREFIX: &str = "#PoemType:";

/// Read the `#BookName:`, `#PoemName:` and `#PoemType:` headers
///
/// A prefix may appear anywhere on a line; its value is the rest of that
/// line, trimmed. The first line carrying each prefix wins and a missing
/// header keeps its "Not Found" placeholder.
pub fn extract_headers(text: &str) -> PoemHeaders {
    let mut headers = PoemHeaders::default();
    let mut seen = [false; 3];

    for line in text.lines() {
        let fields = [
            (BOOK_NAME_PREFIX, &mut headers.book_name),
            (POEM_NAME_PREFIX, &mut headers.poem_name),
            (POEM_TYPE_PREFIX, &mut headers.poem_type),
        ];
        for (i, (prefix, slot)) in fields.into_iter().enumerate() {
            if seen[i] {
                continue;
            }
            if let Some(pos) = line.find(prefix) {
                *slot = line[pos + prefix.len()..].trim().to_string();
                seen[i] = true;
            }
        }
    }

    headers
}

/// Split the transcript into its `#v` segments, dropping the preamble
pub fn split_segments(text: &str) -> Vec<&str> {
    text.split(SEGMENT_DELIMITER).skip(1).collect()
}

/// Text lines of one segment, trimmed, in order
///
/// Blank lines between text lines keep their position.
fn segment_lines(segment: &str) -> Vec<String> {
    let body = segment.trim();
    if body.is_empty() {
        return Vec::new();
    }
    body.lines().map(|line| line.trim().to_string()).collect()
}

/// Timestamps of one couplet, in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoupletTiming {
    pub couplet_start: Option<f64>,
    pub couplet_end: Option<f64>,
    pub verse_start: Option<f64>,
    pub verse_end: Option<f64>,
}

/// Resolve the timestamps of the couplet numbered `number`
///
/// A couplet ends where the next one starts, or at the outro when there is
/// no usable next start.
pub fn resolve_timing(number: usize, markers: &MarkerTable) -> CoupletTiming {
    let couplet_start = markers.get(&marker_label(number, MarkerKind::CoupletStart));
    let couplet_end = markers
        .get(&marker_label(number + 1, MarkerKind::CoupletStart))
        .filter(|t| !t.is_nan())
        .or_else(|| markers.get(OUTRO_START_LABEL));
    let verse_start = markers.get(&marker_label(number, MarkerKind::VerseStart));
    let verse_end = markers.get(&marker_label(number, MarkerKind::VerseEnd));

    CoupletTiming {
        couplet_start,
        couplet_end,
        verse_start,
        verse_end,
    }
}

/// Build the couplet at 0-based `index` from its segment text
pub fn build_couplet(index: usize, segment: &str, markers: &MarkerTable) -> Couplet {
    let number = index + 1;
    let mut lines = segment_lines(segment).into_iter();
    let timing = resolve_timing(number, markers);

    Couplet {
        number,
        couplet_start_time: timing.couplet_start,
        couplet_end_time: timing.couplet_end,
        verse_start_time: timing.verse_start,
        verse_end_time: timing.verse_end,
        persian1: lines.next(),
        persian2: lines.next(),
        urdu: lines.next(),
        english: lines.next(),
    }
}

/// Parse a transcript against a completed marker table
pub fn parse_poem(text: &str, markers: &MarkerTable) -> PoemData {
    let headers = extract_headers(text);
    let couplets: Vec<Couplet> = split_segments(text)
        .into_iter()
        .enumerate()
        .map(|(index, segment)| build_couplet(index, segment, markers))
        .collect();

    debug!(
        "Parsed \"{}\" ({}) with {} couplets",
        headers.poem_name,
        headers.poem_type,
        couplets.len()
    );

    PoemData::new(
        headers,
        couplets,
        markers.get(OUTRO_START_LABEL),
        markers.get(OUTRO_END_LABEL),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BOOK_NAME_NOT_FOUND, POEM_NAME_NOT_FOUND, POEM_TYPE_NOT_FOUND};
    use crate::parser::build_marker_table;

    fn table(entries: &[(&str, f64)]) -> MarkerTable {
        entries
            .iter()
            .map(|(label, seconds)| (label.to_string(), *seconds))
            .collect()
    }

    #[test]
    fn test_extract_headers() {
        let text = "#BookName: Rubaiyat\n#PoemName:  Quatrain One \n#PoemType: Rubai\n#v\nline\n";
        let headers = extract_headers(text);
        assert_eq!(headers.book_name, "Rubaiyat");
        assert_eq!(headers.poem_name, "Quatrain One");
        assert_eq!(headers.poem_type, "Rubai");
    }

    #[test]
    fn test_missing_header_uses_placeholder() {
        let text = "#BookName: X\n#PoemName: Y\n#v\nP1\n";
        let headers = extract_headers(text);
        assert_eq!(headers.book_name, "X");
        assert_eq!(headers.poem_name, "Y");
        assert_eq!(headers.poem_type, POEM_TYPE_NOT_FOUND);
        assert_eq!(headers.poem_type, "Poem Type Not Found");
    }

    #[test]
    fn test_first_header_wins() {
        let headers = extract_headers("#BookName: First\n#BookName: Second\n");
        assert_eq!(headers.book_name, "First");
    }

    #[test]
    fn test_header_after_byte_order_mark() {
        let headers = extract_headers("\u{feff}#BookName: X\n#PoemName: Y\n#PoemType: Z\n#v\nP1\n");
        assert_eq!(headers.book_name, "X");
        assert_eq!(headers.poem_name, "Y");
        assert_eq!(headers.poem_type, "Z");
    }

    #[test]
    fn test_header_mid_line() {
        let headers = extract_headers("Title #PoemType: Rubai\n#v\nP1\n");
        assert_eq!(headers.poem_type, "Rubai");
        assert_eq!(headers.poem_name, POEM_NAME_NOT_FOUND);
    }

    #[test]
    fn test_header_without_trailing_newline() {
        let headers = extract_headers("#PoemName: Last line");
        assert_eq!(headers.poem_name, "Last line");
        assert_eq!(headers.book_name, BOOK_NAME_NOT_FOUND);
    }

    #[test]
    fn test_three_segments() {
        let text = "#BookName: B\n#v\nA1\nA2\n#v\nB1\nB2\n#v\nC1\nC2\n";
        let poem = parse_poem(text, &MarkerTable::new());
        assert_eq!(poem.total_couplets(), 3);
        let numbers: Vec<usize> = poem.couplets.iter().map(|c| c.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(poem.couplets[2].persian1.as_deref(), Some("C1"));
    }

    #[test]
    fn test_short_segment_leaves_fields_empty() {
        let text = "#v\n  only persian  \n\n";
        let poem = parse_poem(text, &MarkerTable::new());
        let couplet = &poem.couplets[0];
        assert_eq!(couplet.persian1.as_deref(), Some("only persian"));
        assert!(couplet.persian2.is_none());
        assert!(couplet.urdu.is_none());
        assert!(couplet.english.is_none());
    }

    #[test]
    fn test_blank_lines_are_positional() {
        let text = "#v\nP1\n\nU\nE\n";
        let couplet = &parse_poem(text, &MarkerTable::new()).couplets[0];
        assert_eq!(couplet.persian1.as_deref(), Some("P1"));
        assert_eq!(couplet.persian2.as_deref(), Some(""));
        assert_eq!(couplet.urdu.as_deref(), Some("U"));
        assert_eq!(couplet.english.as_deref(), Some("E"));
    }

    #[test]
    fn test_empty_segment() {
        let poem = parse_poem("#v\n#v\nP1\n", &MarkerTable::new());
        assert_eq!(poem.total_couplets(), 2);
        assert!(poem.couplets[0].persian1.is_none());
        assert_eq!(poem.couplets[1].persian1.as_deref(), Some("P1"));
    }

    #[test]
    fn test_no_segments() {
        let poem = parse_poem("#BookName: B\n", &MarkerTable::new());
        assert_eq!(poem.total_couplets(), 0);
        assert!(poem.couplets.is_empty());
    }

    #[test]
    fn test_end_falls_back_to_outro() {
        let markers = table(&[("1a", 0.0), ("2a", 10.0), ("ea", 50.0)]);
        let poem = parse_poem("#v\nA\n#v\nB\n", &markers);
        assert_eq!(poem.couplets[0].couplet_end_time, Some(10.0));
        assert_eq!(poem.couplets[1].couplet_start_time, Some(10.0));
        assert_eq!(poem.couplets[1].couplet_end_time, Some(50.0));
        assert_eq!(poem.outro_start, Some(50.0));
        assert_eq!(poem.outro_end, None);
    }

    #[test]
    fn test_missing_markers_are_absent() {
        let poem = parse_poem("#v\nA\n", &MarkerTable::new());
        let couplet = &poem.couplets[0];
        assert!(couplet.couplet_start_time.is_none());
        assert!(couplet.couplet_end_time.is_none());
        assert!(couplet.verse_start_time.is_none());
        assert!(couplet.verse_end_time.is_none());
    }

    #[test]
    fn test_nan_next_start_falls_back_to_outro() {
        let markers = table(&[("2a", f64::NAN), ("ea", 20.0)]);
        assert_eq!(resolve_timing(1, &markers).couplet_end, Some(20.0));
    }

    #[test]
    fn test_end_to_end() {
        let text = "#BookName: X\n#PoemName: Y\n#PoemType: Z\n#v\nP1\nP2\nU\nE\n";
        let log = "header\n1a,0:00,,f\n1b,0:01,,f\n1c,0:02,,f\nea,0:03,,f\neb,0:04,,f\n";
        let poem = parse_poem(text, &build_marker_table(log));

        assert_eq!(poem.book_name, "X");
        assert_eq!(poem.poem_name, "Y");
        assert_eq!(poem.poem_type, "Z");
        assert_eq!(poem.total_couplets(), 1);
        assert_eq!(poem.outro_start, Some(3.0));
        assert_eq!(poem.outro_end, Some(4.0));
        assert_eq!(
            poem.couplets[0],
            Couplet {
                number: 1,
                couplet_start_time: Some(0.0),
                couplet_end_time: Some(3.0),
                verse_start_time: Some(1.0),
                verse_end_time: Some(2.0),
                persian1: Some("P1".to_string()),
                persian2: Some("P2".to_string()),
                urdu: Some("U".to_string()),
                english: Some("E".to_string()),
            }
        );
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let text = "#BookName: X\n#v\nA\nB\n#v\nC\nD\n";
        let log = "h\n1a,0:00,,f\n2a,0:05,,f\nea,0:09,,f\n";
        let first = parse_poem(text, &build_marker_table(log));
        let second = parse_poem(text, &build_marker_table(log));
        assert_eq!(first, second);
    }
}
