//! "M-A-N" frequency strings.

use crate::models::DoseTriple;

/// Parse a frequency like "1-0-1" into a dose triple.
///
/// Exactly three `-`-separated segments, each a non-empty unsigned integer
/// once trimmed. Anything else (e.g. "As needed") yields `None`. Counts
/// above 255 saturate.
pub fn parse_frequency(frequency: &str) -> Option<DoseTriple> {
    let mut parts = frequency.split('-');
    let morning = parse_units(parts.next()?)?;
    let afternoon = parse_units(parts.next()?)?;
    let night = parse_units(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some(DoseTriple::new(morning, afternoon, night))
}

fn parse_units(segment: &str) -> Option<u8> {
    let segment = segment.trim();
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // all digits, so the only parse failure left is overflow
    Some(segment.parse().unwrap_or(u8::MAX))
}

/// True for PRN schedules ("As needed", "as needed for pain").
pub fn is_as_needed(frequency: &str) -> bool {
    frequency.to_lowercase().contains("as needed")
}
