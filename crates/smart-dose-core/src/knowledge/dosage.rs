//! Smart default doses.
//!
//! Every drug resolves to a non-zero morning/afternoon/night triple:
//! exact name first, then the first rule (in table order) whose name and
//! the query contain one another ignoring case, then 1-0-1.

use thiserror::Error;

use crate::models::DoseTriple;

/// Dose used when no rule matches.
pub const FALLBACK_DOSE: DoseTriple = DoseTriple::new(1, 0, 1);

/// A default dose for one drug name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DosageRule {
    pub drug: String,
    pub dose: DoseTriple,
}

/// How a dose was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DosageMatch {
    Exact,
    /// Substring match against the named rule
    Partial(String),
    Fallback,
}

/// Rejected rule: a default must give at least one unit.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Default dose for {0} must not be 0-0-0")]
pub struct ZeroDefaultDose(pub String);

/// Ordered table of default doses.
#[derive(Debug, Clone)]
pub struct SmartDosageResolver {
    rules: Vec<DosageRule>,
}

impl Default for SmartDosageResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SmartDosageResolver {
    /// Create a resolver with the built-in table.
    pub fn new() -> Self {
        Self {
            rules: Self::default_rules(),
        }
    }

    /// Default dose for a drug. Never 0-0-0.
    pub fn resolve(&self, drug_name: &str) -> DoseTriple {
        self.resolve_with_match(drug_name).0
    }

    /// Default dose plus how it was found.
    pub fn resolve_with_match(&self, drug_name: &str) -> (DoseTriple, DosageMatch) {
        if let Some(rule) = self.rules.iter().find(|r| r.drug == drug_name) {
            return (rule.dose, DosageMatch::Exact);
        }

        let name = drug_name.to_lowercase();
        if !name.is_empty() {
            let partial = self.rules.iter().find(|r| {
                let key = r.drug.to_lowercase();
                name.contains(&key) || key.contains(&name)
            });
            if let Some(rule) = partial {
                return (rule.dose, DosageMatch::Partial(rule.drug.clone()));
            }
        }

        (FALLBACK_DOSE, DosageMatch::Fallback)
    }

    /// Rules in precedence order.
    pub fn rules(&self) -> &[DosageRule] {
        &self.rules
    }

    /// Append a rule after the built-in ones.
    pub fn add_rule(&mut self, drug: &str, dose: DoseTriple) -> Result<(), ZeroDefaultDose> {
        if dose.is_zero() {
            return Err(ZeroDefaultDose(drug.to_string()));
        }
        self.rules.push(DosageRule {
            drug: drug.to_string(),
            dose,
        });
        Ok(())
    }

    fn default_rules() -> Vec<DosageRule> {
        const TABLE: &[(&str, DoseTriple)] = &[
            // Diabetes
            ("Metformin", DoseTriple::new(1, 0, 1)),
            ("Glimepiride", DoseTriple::new(1, 0, 0)),
            ("Gliclazide", DoseTriple::new(1, 0, 0)),
            ("Sitagliptin", DoseTriple::new(1, 0, 0)),
            ("Insulin", DoseTriple::new(1, 0, 1)),
            // Blood pressure
            ("Telmisartan", DoseTriple::new(1, 0, 0)),
            ("Amlodipine", DoseTriple::new(1, 0, 0)),
            ("Losartan", DoseTriple::new(1, 0, 0)),
            ("Metoprolol", DoseTriple::new(1, 0, 0)),
            ("Propranolol", DoseTriple::new(1, 0, 1)),
            // Statins are taken at night
            ("Atorvastatin", DoseTriple::new(0, 0, 1)),
            ("Rosuvastatin", DoseTriple::new(0, 0, 1)),
            ("Clopidogrel", DoseTriple::new(1, 0, 0)),
            ("Aspirin", DoseTriple::new(0, 1, 0)),
            // Pain
            ("Paracetamol", DoseTriple::new(1, 1, 1)),
            ("Ibuprofen", DoseTriple::new(1, 0, 1)),
            ("Diclofenac", DoseTriple::new(1, 0, 1)),
            ("Aceclofenac", DoseTriple::new(1, 0, 1)),
            ("Thiocolchicoside", DoseTriple::new(1, 0, 1)),
            ("Pregabalin", DoseTriple::new(0, 0, 1)),
            // Gastric
            ("Omeprazole", DoseTriple::new(1, 0, 0)),
            ("Pantoprazole", DoseTriple::new(1, 0, 0)),
            // Allergy
            ("Montelukast", DoseTriple::new(0, 0, 1)),
            ("Cetirizine", DoseTriple::new(0, 0, 1)),
            // Antibiotics
            ("Azithromycin", DoseTriple::new(1, 0, 0)),
            ("Amoxicillin", DoseTriple::new(1, 1, 1)),
            ("Ciprofloxacin", DoseTriple::new(1, 0, 1)),
            // Supplements
            ("Calcium", DoseTriple::new(0, 1, 0)),
            ("Iron", DoseTriple::new(1, 0, 0)),
            ("Vitamin D", DoseTriple::new(1, 0, 0)),
            ("Vitamin B12", DoseTriple::new(1, 0, 0)),
            ("Levothyroxine", DoseTriple::new(1, 0, 0)),
            ("Sumatriptan", DoseTriple::new(1, 0, 0)),
            ("Salbutamol Inhaler", DoseTriple::new(1, 1, 1)),
            ("Salbutamol", DoseTriple::new(1, 1, 1)),
        ];

        TABLE
            .iter()
            .map(|(drug, dose)| DosageRule {
                drug: (*drug).to_string(),
                dose: *dose,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let resolver = SmartDosageResolver::new();
        assert_eq!(
            resolver.resolve_with_match("Atorvastatin"),
            (DoseTriple::new(0, 0, 1), DosageMatch::Exact)
        );
        assert_eq!(resolver.resolve("Aspirin"), DoseTriple::new(0, 1, 0));
    }

    #[test]
    fn test_partial_match_either_direction() {
        let resolver = SmartDosageResolver::new();

        // name contains key
        let (dose, how) = resolver.resolve_with_match("Insulin Glargine");
        assert_eq!(dose, DoseTriple::new(1, 0, 1));
        assert_eq!(how, DosageMatch::Partial("Insulin".into()));

        // key contains name
        let (dose, how) = resolver.resolve_with_match("salbutamol inh");
        assert_eq!(dose, DoseTriple::new(1, 1, 1));
        assert_eq!(how, DosageMatch::Partial("Salbutamol Inhaler".into()));
    }

    #[test]
    fn test_partial_match_takes_first_rule_in_order() {
        let resolver = SmartDosageResolver::new();
        // "vitamin" is inside both Vitamin D and Vitamin B12; D comes first
        let (_, how) = resolver.resolve_with_match("vitamin");
        assert_eq!(how, DosageMatch::Partial("Vitamin D".into()));
    }

    #[test]
    fn test_unknown_drug_falls_back() {
        let resolver = SmartDosageResolver::new();
        assert_eq!(
            resolver.resolve_with_match("Zolpidem"),
            (FALLBACK_DOSE, DosageMatch::Fallback)
        );
        assert_eq!(resolver.resolve_with_match("").1, DosageMatch::Fallback);
    }

    #[test]
    fn test_no_rule_is_zero() {
        let resolver = SmartDosageResolver::new();
        assert!(resolver.rules().iter().all(|r| !r.dose.is_zero()));
        assert_eq!(resolver.rules().len(), 35);
    }

    #[test]
    fn test_add_rule_rejects_zero() {
        let mut resolver = SmartDosageResolver::new();
        assert!(resolver.add_rule("Placebo", DoseTriple::ZERO).is_err());
        resolver.add_rule("Zolpidem", DoseTriple::new(0, 0, 1)).unwrap();
        assert_eq!(resolver.resolve("Zolpidem"), DoseTriple::new(0, 0, 1));
    }
}
