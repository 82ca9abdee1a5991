//! # Factor-Chain Scoring
//!
//! Every calculator follows the same shape: look up a base quantity, then
//! multiply it by an ordered chain of adjustment factors drawn from categorical
//! selections. This module is that chain, factored out once.
//!
//! The returned trace lists every applied factor in application order, so the
//! UI layer can explain a result ("base 12 sq ft × comfortable 1.2 × high
//! activity 1.3"). A selection with no table entry is not an error: the axis
//! falls back to the table's documented default multiplier, is flagged
//! `defaulted` in the trace, and a `warn!` is emitted.
//!
//! ## Example
//!
//! ```rust
//! use pool_core::scoring::FactorChain;
//!
//! let outcome = FactorChain::new(100.0)
//!     .with_factor("comfort", "spacious", 1.5)
//!     .with_factor("activity", "low", 0.9)
//!     .finish();
//! assert!((outcome.result - 135.0).abs() < 1e-9);
//! assert_eq!(outcome.applied.len(), 2);
//! ```

use log::warn;
use serde::{Deserialize, Serialize};

/// A static multiplier table for one categorical input axis.
///
/// Multipliers are always ≥ 0; a multiplier of 0 is legal and must propagate
/// (callers that later divide by a result guard against zero themselves).
#[derive(Debug, Clone, Copy)]
pub struct FactorTable {
    /// Axis name, e.g. "comfort" or "sun-exposure"
    pub axis: &'static str,
    /// Documented default multiplier applied when a selection has no entry
    pub default: f64,
    /// Selection key → multiplier
    pub entries: &'static [(&'static str, f64)],
}

impl FactorTable {
    pub const fn new(
        axis: &'static str,
        default: f64,
        entries: &'static [(&'static str, f64)],
    ) -> Self {
        Self {
            axis,
            default,
            entries,
        }
    }

    /// Look up the multiplier for a selection key
    pub fn lookup(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, m)| *m)
    }
}

/// One multiplier applied to the base quantity, recorded for traceability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedFactor {
    /// Axis name
    pub axis: String,
    /// The selection that picked this multiplier
    pub selection: String,
    pub multiplier: f64,
    /// True when the selection had no table entry and the documented
    /// default was substituted
    pub defaulted: bool,
}

/// Result of scoring a base quantity through a factor chain.
///
/// `result = base × ∏ multiplier`, with `applied` in deterministic
/// application order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreOutcome {
    pub base: f64,
    pub result: f64,
    pub applied: Vec<AppliedFactor>,
}

impl ScoreOutcome {
    /// True if any axis fell back to its default multiplier
    pub fn any_defaulted(&self) -> bool {
        self.applied.iter().any(|f| f.defaulted)
    }
}

/// Builder that multiplies a base quantity through an ordered factor chain
#[derive(Debug, Clone)]
pub struct FactorChain {
    base: f64,
    result: f64,
    applied: Vec<AppliedFactor>,
}

impl FactorChain {
    pub fn new(base: f64) -> Self {
        Self {
            base,
            result: base,
            applied: Vec::new(),
        }
    }

    /// Apply a known multiplier (typed-enum factors, computed factors)
    pub fn with_factor(
        mut self,
        axis: impl Into<String>,
        selection: impl Into<String>,
        multiplier: f64,
    ) -> Self {
        self.result *= multiplier;
        self.applied.push(AppliedFactor {
            axis: axis.into(),
            selection: selection.into(),
            multiplier,
            defaulted: false,
        });
        self
    }

    /// Apply a multiplier looked up from a table, falling back to the table's
    /// documented default when the selection has no entry
    pub fn with_table(mut self, table: &FactorTable, selection: &str) -> Self {
        let (multiplier, defaulted) = match table.lookup(selection) {
            Some(m) => (m, false),
            None => {
                warn!(
                    "no '{}' entry for selection '{}'; using default {}",
                    table.axis, selection, table.default
                );
                (table.default, true)
            }
        };
        self.result *= multiplier;
        self.applied.push(AppliedFactor {
            axis: table.axis.to_string(),
            selection: selection.to_string(),
            multiplier,
            defaulted,
        });
        self
    }

    pub fn result(&self) -> f64 {
        self.result
    }

    pub fn finish(self) -> ScoreOutcome {
        ScoreOutcome {
            base: self.base,
            result: self.result,
            applied: self.applied,
        }
    }
}

/// Score a base quantity through tables in their given fixed order.
///
/// `selections` maps axis name → selection key. A missing selection, like a
/// missing table entry, degrades to the table default and is flagged in the
/// trace.
pub fn score(base: f64, selections: &[(&str, &str)], tables: &[FactorTable]) -> ScoreOutcome {
    let mut chain = FactorChain::new(base);
    for table in tables {
        let selection = selections
            .iter()
            .find(|(axis, _)| *axis == table.axis)
            .map(|(_, key)| *key);
        match selection {
            Some(key) => chain = chain.with_table(table, key),
            None => {
                warn!(
                    "no selection supplied for axis '{}'; using default {}",
                    table.axis, table.default
                );
                chain.result *= table.default;
                chain.applied.push(AppliedFactor {
                    axis: table.axis.to_string(),
                    selection: String::new(),
                    multiplier: table.default,
                    defaulted: true,
                });
            }
        }
    }
    chain.finish()
}

/// Recommended/extreme pair produced by calculators that report both a
/// moderate ("comfort") chain and an extreme chain.
///
/// The pair is reported as computed: when an input combination makes the
/// extreme value fall below the recommended one, `is_inverted` returns true
/// and a diagnostic is logged, but neither number is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoTier {
    pub recommended: f64,
    pub extreme: f64,
}

impl TwoTier {
    pub fn new(recommended: f64, extreme: f64) -> Self {
        if extreme < recommended {
            warn!(
                "extreme value {extreme} below recommended {recommended}; reporting as computed"
            );
        }
        Self {
            recommended,
            extreme,
        }
    }

    pub fn is_inverted(&self) -> bool {
        self.extreme < self.recommended
    }

    /// Headroom between the tiers (negative when inverted)
    pub fn delta(&self) -> f64 {
        self.extreme - self.recommended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMFORT: FactorTable = FactorTable::new(
        "a",
        1.0,
        &[("x", 1.5), ("y", 1.2), ("z", 1.0)],
    );
    const ACTIVITY: FactorTable = FactorTable::new("b", 1.0, &[("y", 0.8), ("w", 1.3)]);

    #[test]
    fn test_score_reference_chain() {
        let outcome = score(100.0, &[("a", "x"), ("b", "y")], &[COMFORT, ACTIVITY]);
        assert!((outcome.result - 120.0).abs() < 1e-9);
        assert_eq!(outcome.applied.len(), 2);
        assert_eq!(outcome.applied[0].axis, "a");
        assert_eq!(outcome.applied[0].selection, "x");
        assert_eq!(outcome.applied[0].multiplier, 1.5);
        assert_eq!(outcome.applied[1].axis, "b");
        assert_eq!(outcome.applied[1].multiplier, 0.8);
        assert!(!outcome.any_defaulted());
    }

    #[test]
    fn test_missing_selection_defaults_and_flags() {
        let outcome = score(100.0, &[("a", "unknown")], &[COMFORT]);
        assert_eq!(outcome.result, 100.0);
        assert!(outcome.applied[0].defaulted);
        assert_eq!(outcome.applied[0].multiplier, 1.0);
        assert!(outcome.any_defaulted());
    }

    #[test]
    fn test_absent_axis_defaults() {
        let outcome = score(50.0, &[], &[ACTIVITY]);
        assert_eq!(outcome.result, 50.0);
        assert!(outcome.applied[0].defaulted);
    }

    #[test]
    fn test_zero_multiplier_propagates() {
        let outcome = FactorChain::new(80.0)
            .with_factor("drain", "no-drain", 0.0)
            .finish();
        assert_eq!(outcome.result, 0.0);
    }

    #[test]
    fn test_trace_order_matches_application_order() {
        let outcome = FactorChain::new(1.0)
            .with_factor("first", "f", 2.0)
            .with_factor("second", "s", 3.0)
            .with_factor("third", "t", 0.5)
            .finish();
        let axes: Vec<&str> = outcome.applied.iter().map(|f| f.axis.as_str()).collect();
        assert_eq!(axes, ["first", "second", "third"]);
        assert_eq!(outcome.result, 3.0);
    }

    #[test]
    fn test_two_tier_inversion_flagged_not_clamped() {
        let tier = TwoTier::new(10.0, 8.0);
        assert!(tier.is_inverted());
        assert_eq!(tier.extreme, 8.0); // untouched
        assert_eq!(tier.delta(), -2.0);

        let normal = TwoTier::new(4.0, 7.0);
        assert!(!normal.is_inverted());
        assert_eq!(normal.delta(), 3.0);
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = score(100.0, &[("a", "y")], &[COMFORT]);
        let json = serde_json::to_string(&outcome).unwrap();
        let roundtrip: ScoreOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, roundtrip);
    }
}
