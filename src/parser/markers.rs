use tracing::debug;

use crate::models::{Marker, MarkerTable};

/// Parse a `minutes:seconds` time into elapsed seconds
///
/// Minutes must be a whole non-negative number and seconds a non-negative
/// decimal. Anything else yields NaN, including hour components such as
/// `"1:02:03"` and fractional minutes such as `"1.5:00"`.
pub fn parse_time(time: &str) -> f64 {
    let Some((minutes, seconds)) = time.trim().split_once(':') else {
        return f64::NAN;
    };

    let minutes = match minutes.trim().parse::<u32>() {
        Ok(m) => f64::from(m),
        Err(_) => return f64::NAN,
    };
    match seconds.trim().parse::<f64>() {
        Ok(s) if s >= 0.0 => minutes * 60.0 + s,
        _ => f64::NAN,
    }
}

/// Split one log line into a marker record
///
/// Fields are tab-separated when the line has a tab, comma-separated otherwise.
pub fn parse_marker_line(line: &str) -> Marker {
    let separator = if line.contains('\t') { '\t' } else { ',' };
    let fields: Vec<&str> = line.split(separator).map(str::trim).collect();

    Marker {
        label: fields.first().copied().unwrap_or_default().to_string(),
        start: fields.get(1).copied().unwrap_or_default().to_string(),
        time_format: fields.get(3).map(|f| f.to_string()),
    }
}

/// Parse the marker log, skipping the header line and blank lines
pub fn parse_markers(content: &str) -> Vec<Marker> {
    content
        .trim()
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(parse_marker_line)
        .collect()
}

/// Build the label-to-seconds table from a marker log
///
/// Malformed times become NaN; a repeated label keeps its last value.
pub fn build_marker_table(content: &str) -> MarkerTable {
    let markers = parse_markers(content);
    debug!("Parsed {} marker records", markers.len());

    markers
        .into_iter()
        .map(|marker| {
            let seconds = parse_time(&marker.start);
            if seconds.is_nan() {
                debug!("Marker {:?} has unparseable time {:?}", marker.label, marker.start);
            }
            (marker.label, seconds)
        })
        .collect()
}
