//! Dose triples and per-period override flags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Period of the day a dose is taken in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DosePeriod {
    Morning,
    Afternoon,
    Night,
}

impl DosePeriod {
    /// All periods in schedule order.
    pub const ALL: [DosePeriod; 3] = [DosePeriod::Morning, DosePeriod::Afternoon, DosePeriod::Night];
}

/// Units taken in the morning, afternoon and at night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DoseTriple {
    pub morning: u8,
    pub afternoon: u8,
    pub night: u8,
}

impl DoseTriple {
    /// The all-zero triple.
    pub const ZERO: DoseTriple = DoseTriple::new(0, 0, 0);

    pub const fn new(morning: u8, afternoon: u8, night: u8) -> Self {
        Self {
            morning,
            afternoon,
            night,
        }
    }

    /// True when no units are taken in any period.
    pub fn is_zero(&self) -> bool {
        self.morning == 0 && self.afternoon == 0 && self.night == 0
    }

    /// Units for a single period.
    pub fn get(&self, period: DosePeriod) -> u8 {
        match period {
            DosePeriod::Morning => self.morning,
            DosePeriod::Afternoon => self.afternoon,
            DosePeriod::Night => self.night,
        }
    }

    /// Set units for a single period.
    pub fn set(&mut self, period: DosePeriod, units: u8) {
        match period {
            DosePeriod::Morning => self.morning = units,
            DosePeriod::Afternoon => self.afternoon = units,
            DosePeriod::Night => self.night = units,
        }
    }

    /// Total units per day.
    pub fn daily_units(&self) -> u32 {
        u32::from(self.morning) + u32::from(self.afternoon) + u32::from(self.night)
    }

    /// Compare against an earlier snapshot, period by period.
    pub fn overrides_against(&self, snapshot: &DoseTriple) -> OverrideFlags {
        OverrideFlags {
            morning: self.morning != snapshot.morning,
            afternoon: self.afternoon != snapshot.afternoon,
            night: self.night != snapshot.night,
        }
    }
}

impl fmt::Display for DoseTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.morning, self.afternoon, self.night)
    }
}

/// Which dose periods differ from the original suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverrideFlags {
    pub morning: bool,
    pub afternoon: bool,
    pub night: bool,
}

impl OverrideFlags {
    /// True if the doctor changed any period.
    pub fn any(&self) -> bool {
        self.morning || self.afternoon || self.night
    }

    pub fn get(&self, period: DosePeriod) -> bool {
        match period {
            DosePeriod::Morning => self.morning,
            DosePeriod::Afternoon => self.afternoon,
            DosePeriod::Night => self.night,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_triple() {
        assert!(DoseTriple::ZERO.is_zero());
        assert!(!DoseTriple::new(0, 0, 1).is_zero());
    }

    #[test]
    fn test_get_set_by_period() {
        let mut dose = DoseTriple::new(1, 0, 1);
        dose.set(DosePeriod::Afternoon, 2);

        assert_eq!(dose.get(DosePeriod::Morning), 1);
        assert_eq!(dose.get(DosePeriod::Afternoon), 2);
        assert_eq!(dose.get(DosePeriod::Night), 1);
        assert_eq!(dose.daily_units(), 4);
    }

    #[test]
    fn test_overrides_are_per_period() {
        let snapshot = DoseTriple::new(1, 0, 1);
        let edited = DoseTriple::new(2, 0, 1);

        let flags = edited.overrides_against(&snapshot);
        assert!(flags.morning);
        assert!(!flags.afternoon);
        assert!(!flags.night);
        assert!(flags.any());

        assert!(!snapshot.overrides_against(&snapshot).any());
    }

    #[test]
    fn test_display_uses_schedule_notation() {
        assert_eq!(DoseTriple::new(1, 0, 1).to_string(), "1-0-1");
    }
}
