// src/process/selector.rs

use crate::error::{Error, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Monthly = 0,
    Annual = 1,
}

impl Period {
    /// 1 → Monthly, 12 → Annual.
    pub fn from_months(months: u32) -> Option<Self> {
        match months {
            1 => Some(Period::Monthly),
            12 => Some(Period::Annual),
            _ => None,
        }
    }

    pub fn months(self) -> u32 {
        match self {
            Period::Monthly => 1,
            Period::Annual => 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weighting {
    Value = 0,
    Equal = 1,
}

impl Weighting {
    /// Case-insensitive, surrounding whitespace ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "value" => Some(Weighting::Value),
            "equal" => Some(Weighting::Equal),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Weighting::Value => "value",
            Weighting::Equal => "equal",
        }
    }
}

impl fmt::Display for Weighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Section title lines as they appear in the industry portfolio file,
/// ordered so that entry `period * 2 + weighting` belongs to that pair.
pub static SECTION_TITLES: &[(Period, Weighting, &str)] = &[
    (
        Period::Monthly,
        Weighting::Value,
        "Average Value Weighted Returns -- Monthly",
    ),
    (
        Period::Monthly,
        Weighting::Equal,
        "Average Equal Weighted Returns -- Monthly",
    ),
    (
        Period::Annual,
        Weighting::Value,
        "Average Value Weighted Returns -- Annual",
    ),
    (
        Period::Annual,
        Weighting::Equal,
        "Average Equal Weighted Returns -- Annual",
    ),
];

/// A resolved (period, weighting) pair plus the section label it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSelector {
    pub period: Period,
    pub weighting: Weighting,
    label: &'static str,
}

impl SectionSelector {
    pub fn new(period: Period, weighting: Weighting) -> Self {
        let (_, _, label) = SECTION_TITLES[period as usize * 2 + weighting as usize];
        Self {
            period,
            weighting,
            label,
        }
    }

    /// Resolve raw user input such as `(12, "Equal")`.
    pub fn from_raw(months: u32, weighting: &str) -> Result<Self> {
        let invalid = || Error::InvalidSelector {
            period: months.to_string(),
            weighting: weighting.to_string(),
        };
        let period = Period::from_months(months).ok_or_else(invalid)?;
        let weighting = Weighting::parse(weighting).ok_or_else(invalid)?;
        Ok(Self::new(period, weighting))
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_pair_resolves_to_a_distinct_label() {
        let mut seen = HashSet::new();
        for period in [Period::Monthly, Period::Annual] {
            for weighting in [Weighting::Value, Weighting::Equal] {
                let sel = SectionSelector::new(period, weighting);
                assert!(!sel.label().is_empty());
                assert!(seen.insert(sel.label()), "duplicate label {}", sel.label());
            }
        }
        assert_eq!(seen.len(), 4);
        assert_eq!(SECTION_TITLES.len(), 4);
    }

    #[test]
    fn table_entries_sit_at_their_pair_index() {
        for (idx, (period, weighting, title)) in SECTION_TITLES.iter().enumerate() {
            assert_eq!(*period as usize * 2 + *weighting as usize, idx);
            assert_eq!(SectionSelector::new(*period, *weighting).label(), *title);
        }
    }

    #[test]
    fn raw_input_resolution() {
        let sel = SectionSelector::from_raw(12, " Equal ").unwrap();
        assert_eq!(sel.period, Period::Annual);
        assert_eq!(sel.weighting, Weighting::Equal);
        assert_eq!(sel.label(), "Average Equal Weighted Returns -- Annual");

        let sel = SectionSelector::from_raw(1, "value").unwrap();
        assert_eq!(sel.label(), "Average Value Weighted Returns -- Monthly");
    }

    #[test]
    fn unknown_pairs_are_rejected() {
        for (months, weighting) in [(3, "value"), (0, "equal"), (1, "cap"), (12, ""), (6, "x")] {
            match SectionSelector::from_raw(months, weighting) {
                Err(Error::InvalidSelector { period, .. }) => {
                    assert_eq!(period, months.to_string())
                }
                other => panic!("expected InvalidSelector, got {:?}", other),
            }
        }
    }
}
