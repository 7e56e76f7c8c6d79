//! "<DrugName> <Dosage>" lines from visit history.

use std::sync::LazyLock;

use regex::Regex;

/// Name, then whitespace, then a strength starting with a digit and
/// running to the end without whitespace.
static PRESCRIPTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s+([0-9]+\S*)$").expect("valid regex"));

/// A drug name and strength parsed from a visit prescription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrescriptionLine {
    pub name: String,
    pub dosage: String,
}

/// Parse "Metformin 500mg" into name and strength.
///
/// Returns `None` when the text does not end in a digit-led strength,
/// e.g. "Insulin 10 units" or "Continue existing medication".
pub fn parse_prescription_line(text: &str) -> Option<PrescriptionLine> {
    let caps = PRESCRIPTION_LINE.captures(text.trim())?;
    let name = caps.get(1)?.as_str().trim();
    let dosage = caps.get(2)?.as_str();
    Some(PrescriptionLine {
        name: name.to_string(),
        dosage: dosage.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let line = parse_prescription_line("Metformin 500mg").unwrap();
        assert_eq!(line.name, "Metformin");
        assert_eq!(line.dosage, "500mg");
    }

    #[test]
    fn test_parse_multi_word_name() {
        let line = parse_prescription_line("Salbutamol Inhaler 100mcg").unwrap();
        assert_eq!(line.name, "Salbutamol Inhaler");
        assert_eq!(line.dosage, "100mcg");
    }

    #[test]
    fn test_parse_decimal_strength() {
        let line = parse_prescription_line("Amlodipine 2.5mg").unwrap();
        assert_eq!(line.dosage, "2.5mg");
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(parse_prescription_line("Continue existing medication"), None);
        assert_eq!(parse_prescription_line("Insulin 10 units"), None);
        assert_eq!(parse_prescription_line("500mg"), None);
        assert_eq!(parse_prescription_line(""), None);
    }
}
