use crate::models::{
    marker_label, MarkerKind, PoemData, BOOK_NAME_NOT_FOUND, OUTRO_END_LABEL, OUTRO_START_LABEL,
    POEM_NAME_NOT_FOUND, POEM_TYPE_NOT_FOUND,
};

/// A gap in a parsed poem that downstream consumers may care about
#[derive(Debug, Clone, PartialEq)]
pub enum CompletenessIssue {
    /// Header line absent, placeholder used
    MissingHeader { field: &'static str },
    /// Couplet timestamp absent or unparseable
    MissingTime {
        couplet: usize,
        field: &'static str,
        label: String,
    },
    /// Couplet has fewer than four text lines
    MissingText { couplet: usize, field: &'static str },
    /// Outro marker absent or unparseable
    MissingOutro { label: &'static str },
}

impl std::fmt::Display for CompletenessIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompletenessIssue::MissingHeader { field } => write!(f, "header {} not found", field),
            CompletenessIssue::MissingTime {
                couplet,
                field,
                label,
            } => write!(f, "couplet {}: {} missing (marker {})", couplet, field, label),
            CompletenessIssue::MissingText { couplet, field } => {
                write!(f, "couplet {}: {} line missing", couplet, field)
            }
            CompletenessIssue::MissingOutro { label } => {
                write!(f, "outro marker {} missing", label)
            }
        }
    }
}

fn usable(time: Option<f64>) -> bool {
    time.is_some_and(f64::is_finite)
}

/// List every missing or unparseable field of a poem
///
/// Parsing itself stays tolerant; this report is for callers that want to
/// check a document before publishing it.
pub fn check_completeness(poem: &PoemData) -> Vec<CompletenessIssue> {
    let mut issues = Vec::new();

    let headers = [
        ("BookName", &poem.book_name, BOOK_NAME_NOT_FOUND),
        ("PoemName", &poem.poem_name, POEM_NAME_NOT_FOUND),
        ("PoemType", &poem.poem_type, POEM_TYPE_NOT_FOUND),
    ];
    for (field, value, placeholder) in headers {
        if value == placeholder {
            issues.push(CompletenessIssue::MissingHeader { field });
        }
    }

    let last = poem.total_couplets();
    for couplet in &poem.couplets {
        let n = couplet.number;
        let end_label = if n == last {
            OUTRO_START_LABEL.to_string()
        } else {
            marker_label(n + 1, MarkerKind::CoupletStart)
        };
        let times = [
            ("coupletStartTime", couplet.couplet_start_time, marker_label(n, MarkerKind::CoupletStart)),
            ("coupletEndTime", couplet.couplet_end_time, end_label),
            ("verseStartTime", couplet.verse_start_time, marker_label(n, MarkerKind::VerseStart)),
            ("verseEndTime", couplet.verse_end_time, marker_label(n, MarkerKind::VerseEnd)),
        ];
        for (field, time, label) in times {
            if !usable(time) {
                issues.push(CompletenessIssue::MissingTime {
                    couplet: n,
                    field,
                    label,
                });
            }
        }

        let lines = [
            ("persian1", &couplet.persian1),
            ("persian2", &couplet.persian2),
            ("urdu", &couplet.urdu),
            ("english", &couplet.english),
        ];
        for (field, line) in lines {
            if line.is_none() {
                issues.push(CompletenessIssue::MissingText { couplet: n, field });
            }
        }
    }

    if !usable(poem.outro_start) {
        issues.push(CompletenessIssue::MissingOutro {
            label: OUTRO_START_LABEL,
        });
    }
    if !usable(poem.outro_end) {
        issues.push(CompletenessIssue::MissingOutro {
            label: OUTRO_END_LABEL,
        });
    }

    issues
}
