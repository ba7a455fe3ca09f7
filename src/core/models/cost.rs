//! Cost range and per-country cost models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A `[low, high]` bound on an estimated monthly cost for one category.
///
/// Serialized as a two-element JSON array. Both bounds are non-negative and
/// `low <= high`; deserialization rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct CostRange {
    low: f64,
    high: f64,
}

impl CostRange {
    /// Create a range, rejecting negative or inverted bounds
    ///
    /// # Errors
    /// Returns an error if either bound is negative, not finite, or `low > high`.
    pub fn new(low: f64, high: f64) -> Result<Self, String> {
        if !low.is_finite() || !high.is_finite() {
            return Err(format!("cost bounds must be finite, got [{low}, {high}]"));
        }
        if low < 0.0 || high < 0.0 {
            return Err(format!(
                "cost bounds must be non-negative, got [{low}, {high}]"
            ));
        }
        if low > high {
            return Err(format!("cost range is inverted: [{low}, {high}]"));
        }
        Ok(Self { low, high })
    }

    /// Build a range from literal bounds already known to be ordered and non-negative
    pub(crate) const fn new_unchecked(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Lower bound
    #[must_use]
    pub const fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound
    #[must_use]
    pub const fn high(&self) -> f64 {
        self.high
    }

    /// Multiply both bounds by `multiplier` and round each to the nearest integer.
    ///
    /// Multipliers are positive constants, so ordering is preserved.
    #[must_use]
    pub fn scaled(self, multiplier: f64) -> Self {
        Self {
            low: (self.low * multiplier).round(),
            high: (self.high * multiplier).round(),
        }
    }

    /// Element-wise sum of several ranges
    #[must_use]
    pub fn sum<'a>(ranges: impl IntoIterator<Item = &'a Self>) -> Self {
        ranges
            .into_iter()
            .fold(Self::new_unchecked(0.0, 0.0), |acc, r| {
                Self::new_unchecked(acc.low + r.low, acc.high + r.high)
            })
    }
}

impl TryFrom<[f64; 2]> for CostRange {
    type Error = String;

    fn try_from([low, high]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(low, high)
    }
}

impl From<CostRange> for [f64; 2] {
    fn from(range: CostRange) -> Self {
        [range.low, range.high]
    }
}

impl fmt::Display for CostRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.low, self.high)
    }
}

/// The two shapes a cost category takes in the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CostShape {
    /// A single flat range
    Range(CostRange),
    /// Ranges keyed by a named sub-option (e.g. housing type)
    Options(BTreeMap<String, CostRange>),
}

impl CostShape {
    /// Cheapest possible value for this category.
    ///
    /// A flat range yields its lower bound; an option map yields the smallest
    /// lower bound across all options, or `0` when the map is empty.
    #[must_use]
    pub fn minimum(&self) -> f64 {
        match self {
            Self::Range(range) => range.low(),
            Self::Options(options) => options
                .values()
                .map(CostRange::low)
                .min_by(f64::total_cmp)
                .unwrap_or(0.0),
        }
    }

    /// Flat range covering every option: `[min low, max high]`.
    #[must_use]
    pub fn envelope(&self) -> CostRange {
        match self {
            Self::Range(range) => *range,
            Self::Options(options) => {
                let high = options
                    .values()
                    .map(CostRange::high)
                    .max_by(f64::total_cmp)
                    .unwrap_or(0.0);
                CostRange::new_unchecked(self.minimum(), high)
            }
        }
    }
}

impl From<CostRange> for CostShape {
    fn from(range: CostRange) -> Self {
        Self::Range(range)
    }
}

/// Base monthly costs for one country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryCosts {
    /// Housing
    pub rent: CostShape,
    /// Groceries and meals
    pub food: CostShape,
    /// Local commuting
    pub transport: CostShape,
    /// Everything else
    pub misc: CostShape,
    /// Sum of the four categories as published by the data source. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_total: Option<CostRange>,
}

impl CountryCosts {
    /// Build an entry from four flat ranges
    #[must_use]
    pub fn from_ranges(
        rent: CostRange,
        food: CostRange,
        transport: CostRange,
        misc: CostRange,
    ) -> Self {
        Self {
            rent: rent.into(),
            food: food.into(),
            transport: transport.into(),
            misc: misc.into(),
            average_total: Some(CostRange::sum([&rent, &food, &transport, &misc])),
        }
    }
}

/// A personalised monthly estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustedCosts {
    /// Housing
    pub rent: CostRange,
    /// Groceries and meals
    pub food: CostRange,
    /// Local commuting
    pub transport: CostRange,
    /// Everything else
    pub misc: CostRange,
    /// Element-wise sum of the four categories
    pub average_total: CostRange,
}

/// Cheapest-possible monthly figure split by category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpenseBreakdown {
    /// Housing
    pub accommodation: f64,
    /// Groceries and meals
    pub food: f64,
    /// Local commuting
    pub transport: f64,
    /// Leisure and entertainment
    pub leisure: f64,
    /// Mobile and internet
    pub mobile: f64,
    /// Everything else
    pub miscellaneous: f64,
    /// Sum of the six categories
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(low: f64, high: f64) -> CostRange {
        CostRange::new(low, high).unwrap()
    }

    #[test]
    fn test_range_rejects_inverted_and_negative() {
        assert!(CostRange::new(10.0, 5.0).is_err());
        assert!(CostRange::new(-1.0, 5.0).is_err());
        assert!(CostRange::new(f64::NAN, 5.0).is_err());
        assert!(CostRange::new(5.0, 5.0).is_ok());
    }

    #[test]
    fn test_scaled_rounds_each_bound() {
        let r = range(70.0, 100.0).scaled(0.3);
        assert_eq!(r, range(21.0, 30.0));

        // 125 * 1.1 = 137.5 rounds away from zero
        let r = range(125.0, 125.0).scaled(1.1);
        assert!((r.low() - 138.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shape_deserializes_both_forms() {
        let flat: CostShape = serde_json::from_str("[600, 1200]").unwrap();
        assert_eq!(flat, CostShape::Range(range(600.0, 1200.0)));

        let options: CostShape =
            serde_json::from_str(r#"{"shared": [350, 500], "studio": [700, 1100]}"#).unwrap();
        assert!(matches!(options, CostShape::Options(ref m) if m.len() == 2));
    }

    #[test]
    fn test_shape_rejects_inverted_range() {
        assert!(serde_json::from_str::<CostShape>("[300, 100]").is_err());
    }

    #[test]
    fn test_minimum_and_envelope_of_options() {
        let shape: CostShape = serde_json::from_str(
            r#"{"on_campus": [250, 400], "shared": [350, 500], "studio": [700, 1100]}"#,
        )
        .unwrap();
        assert!((shape.minimum() - 250.0).abs() < f64::EPSILON);
        assert_eq!(shape.envelope(), range(250.0, 1100.0));
    }

    #[test]
    fn test_minimum_of_empty_options_is_zero() {
        let shape = CostShape::Options(BTreeMap::new());
        assert!(shape.minimum().abs() < f64::EPSILON);
        assert_eq!(shape.envelope(), range(0.0, 0.0));
    }

    #[test]
    fn test_range_serializes_as_pair() {
        let json = serde_json::to_string(&range(21.0, 30.0)).unwrap();
        assert_eq!(json, "[21.0,30.0]");
    }
}
