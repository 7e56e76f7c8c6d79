//! Property tests for the dosage knowledge tables.

use proptest::prelude::*;

use smart_dose_core::knowledge::{parse_frequency, SmartDosageResolver};
use smart_dose_core::models::{DosePeriod, DoseTriple};
use smart_dose_core::session::{PrescriptionSession, SessionSettings};
use smart_dose_core::suggest::SuggestionBuilder;

proptest! {
    #[test]
    fn numeric_frequencies_parse(a in 0u8..=255, b in 0u8..=255, c in 0u8..=255) {
        prop_assert_eq!(
            parse_frequency(&format!("{}-{}-{}", a, b, c)),
            Some(DoseTriple::new(a, b, c))
        );
    }

    #[test]
    fn wide_numeric_frequencies_saturate(a in 0u32..100_000, b in 0u32..100_000, c in 0u32..100_000) {
        let cap = |n: u32| u8::try_from(n).unwrap_or(u8::MAX);
        prop_assert_eq!(
            parse_frequency(&format!("{}-{}-{}", a, b, c)),
            Some(DoseTriple::new(cap(a), cap(b), cap(c)))
        );
    }

    #[test]
    fn non_numeric_segment_is_rejected(
        a in 0u8..10,
        word in "[a-zA-Z]{1,8}",
        position in 0usize..3,
    ) {
        let mut segments = vec![a.to_string(), a.to_string(), a.to_string()];
        segments[position] = word;
        prop_assert_eq!(parse_frequency(&segments.join("-")), None);
    }

    #[test]
    fn wrong_segment_count_is_rejected(parts in prop::collection::vec(0u8..10, 0..6)) {
        prop_assume!(parts.len() != 3);
        let text = parts.iter().map(u8::to_string).collect::<Vec<_>>().join("-");
        prop_assert_eq!(parse_frequency(&text), None);
    }

    #[test]
    fn dosage_resolver_never_returns_zero(name in "\\PC{0,24}") {
        let resolver = SmartDosageResolver::new();
        prop_assert!(!resolver.resolve(&name).is_zero());
    }

    #[test]
    fn roller_edits_stay_within_limit(units in any::<u8>(), period in 0usize..3) {
        let mut session = PrescriptionSession::new(
            SuggestionBuilder::new(),
            None,
            SessionSettings::default(),
        );
        let period = DosePeriod::ALL[period];
        let stored = session.set_dose(0, period, units).unwrap();

        prop_assert!(stored <= SessionSettings::default().max_units_per_period);
        prop_assert_eq!(session.entries()[0].suggestion().dose.get(period), stored);
    }
}

#[test]
fn table_drugs_never_resolve_to_zero() {
    let resolver = SmartDosageResolver::new();
    for rule in resolver.rules() {
        assert!(
            !resolver.resolve(&rule.drug).is_zero(),
            "{} resolved to 0-0-0",
            rule.drug
        );
    }
}
