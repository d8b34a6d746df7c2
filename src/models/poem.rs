use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Placeholder used when the transcript has no `#BookName:` line
pub const BOOK_NAME_NOT_FOUND: &str = "Book Name Not Found";
/// Placeholder used when the transcript has no `#PoemName:` line
pub const POEM_NAME_NOT_FOUND: &str = "Poem Name Not Found";
/// Placeholder used when the transcript has no `#PoemType:` line
pub const POEM_TYPE_NOT_FOUND: &str = "Poem Type Not Found";

/// One `#v` segment of the transcript with its resolved timings (seconds)
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Couplet {
    /// 1-based position in the transcript
    pub number: usize,
    pub couplet_start_time: Option<f64>,
    pub couplet_end_time: Option<f64>,
    pub verse_start_time: Option<f64>,
    pub verse_end_time: Option<f64>,
    pub persian1: Option<String>,
    pub persian2: Option<String>,
    pub urdu: Option<String>,
    pub english: Option<String>,
}

/// Document-level headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoemHeaders {
    pub book_name: String,
    pub poem_name: String,
    pub poem_type: String,
}

impl Default for PoemHeaders {
    fn default() -> Self {
        Self {
            book_name: BOOK_NAME_NOT_FOUND.to_string(),
            poem_name: POEM_NAME_NOT_FOUND.to_string(),
            poem_type: POEM_TYPE_NOT_FOUND.to_string(),
        }
    }
}

/// Fully assembled poem document
#[derive(Debug, Clone, PartialEq)]
pub struct PoemData {
    pub book_name: String,
    pub poem_name: String,
    pub poem_type: String,
    /// Couplets in transcript order
    pub couplets: Vec<Couplet>,
    /// Start of the outro (`ea` marker)
    pub outro_start: Option<f64>,
    /// End of the outro (`eb` marker)
    pub outro_end: Option<f64>,
}

impl PoemData {
    pub fn new(
        headers: PoemHeaders,
        couplets: Vec<Couplet>,
        outro_start: Option<f64>,
        outro_end: Option<f64>,
    ) -> Self {
        Self {
            book_name: headers.book_name,
            poem_name: headers.poem_name,
            poem_type: headers.poem_type,
            couplets,
            outro_start,
            outro_end,
        }
    }

    /// Number of couplets; always the length of `couplets`
    pub fn total_couplets(&self) -> usize {
        self.couplets.len()
    }

    /// Couplet for a 1-based item number
    pub fn couplet(&self, number: usize) -> Option<&Couplet> {
        number.checked_sub(1).and_then(|i| self.couplets.get(i))
    }
}

impl Serialize for PoemData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PoemData", 7)?;
        state.serialize_field("bookName", &self.book_name)?;
        state.serialize_field("poemName", &self.poem_name)?;
        state.serialize_field("poemType", &self.poem_type)?;
        state.serialize_field("couplets", &self.couplets)?;
        state.serialize_field("totalCouplets", &self.total_couplets())?;
        state.serialize_field("outroStart", &self.outro_start)?;
        state.serialize_field("outroEnd", &self.outro_end)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn couplet(number: usize) -> Couplet {
        Couplet {
            number,
            couplet_start_time: None,
            couplet_end_time: None,
            verse_start_time: None,
            verse_end_time: None,
            persian1: None,
            persian2: None,
            urdu: None,
            english: None,
        }
    }

    #[test]
    fn test_total_couplets_tracks_list() {
        let mut poem = PoemData::new(PoemHeaders::default(), vec![couplet(1)], None, None);
        assert_eq!(poem.total_couplets(), 1);
        poem.couplets.push(couplet(2));
        assert_eq!(poem.total_couplets(), 2);
    }

    #[test]
    fn test_couplet_lookup_is_one_based() {
        let poem = PoemData::new(
            PoemHeaders::default(),
            vec![couplet(1), couplet(2)],
            None,
            None,
        );
        assert!(poem.couplet(0).is_none());
        assert_eq!(poem.couplet(2).map(|c| c.number), Some(2));
        assert!(poem.couplet(3).is_none());
    }

    #[test]
    fn test_serialize_camel_case() {
        let poem = PoemData::new(PoemHeaders::default(), vec![couplet(1)], Some(3.0), None);
        let json = serde_json::to_value(&poem).unwrap();
        assert_eq!(json["bookName"], BOOK_NAME_NOT_FOUND);
        assert_eq!(json["totalCouplets"], 1);
        assert_eq!(json["outroStart"], 3.0);
        assert!(json["outroEnd"].is_null());
        assert_eq!(json["couplets"][0]["number"], 1);
        assert!(json["couplets"][0]["coupletStartTime"].is_null());
    }
}
