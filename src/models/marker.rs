use std::collections::HashMap;

/// Reserved label marking the end of the last couplet and the start of the outro
pub const OUTRO_START_LABEL: &str = "ea";
/// Reserved label marking the end of the outro
pub const OUTRO_END_LABEL: &str = "eb";

/// One record of the marker log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// Free-form label, e.g. "3b" or "ea"
    pub label: String,
    /// Start time as written in the log ("minutes:seconds")
    pub start: String,
    /// Time format column; read but not interpreted
    pub time_format: Option<String>,
}

/// Lookup from marker label to elapsed seconds
///
/// Values may be NaN when the source record was malformed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerTable {
    times: HashMap<String, f64>,
}

impl MarkerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a time; a repeated label overwrites the earlier value
    pub fn insert(&mut self, label: impl Into<String>, seconds: f64) {
        self.times.insert(label.into(), seconds);
    }

    /// Seconds for a label, if the log contained it
    pub fn get(&self, label: &str) -> Option<f64> {
        self.times.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.times.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

impl FromIterator<(String, f64)> for MarkerTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut table = MarkerTable::new();
        for (label, seconds) in iter {
            table.insert(label, seconds);
        }
        table
    }
}

/// Which point of a couplet a marker label refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// `a`: start of the couplet segment
    CoupletStart,
    /// `b`: start of the recited verse
    VerseStart,
    /// `c`: end of the recited verse
    VerseEnd,
}

impl MarkerKind {
    fn suffix(self) -> char {
        match self {
            MarkerKind::CoupletStart => 'a',
            MarkerKind::VerseStart => 'b',
            MarkerKind::VerseEnd => 'c',
        }
    }
}

/// Label for a couplet marker, e.g. `marker_label(3, MarkerKind::VerseStart) == "3b"`
pub fn marker_label(number: usize, kind: MarkerKind) -> String {
    format!("{}{}", number, kind.suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_label() {
        assert_eq!(marker_label(1, MarkerKind::CoupletStart), "1a");
        assert_eq!(marker_label(12, MarkerKind::VerseStart), "12b");
        assert_eq!(marker_label(3, MarkerKind::VerseEnd), "3c");
    }

    #[test]
    fn test_last_insert_wins() {
        let mut table = MarkerTable::new();
        table.insert("1a", 1.0);
        table.insert("1a", 2.5);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("1a"), Some(2.5));
        assert_eq!(table.get("2a"), None);
    }
}
