use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome classification. The serialized labels are matched on by the
/// downstream collector; the apostrophe in the top tier is typographic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
pub enum ReadinessTier {
    #[serde(rename = "Not Yet Ready")]
    NotYetReady,
    #[serde(rename = "Almost There")]
    AlmostThere,
    #[serde(rename = "You’re Ready")]
    Ready,
}

impl ReadinessTier {
    pub fn label(&self) -> &'static str {
        match self {
            ReadinessTier::NotYetReady => "Not Yet Ready",
            ReadinessTier::AlmostThere => "Almost There",
            ReadinessTier::Ready => "You’re Ready",
        }
    }
}

impl fmt::Display for ReadinessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A scored assessment. Derived from an answer set and a bank, never
/// mutated afterwards. `category_scores` holds one entry per category in
/// the bank, keyed by display title, answered or not.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizResult {
    pub total_score: i16,
    pub tier: ReadinessTier,
    pub category_scores: BTreeMap<String, i16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_labels_are_exact() {
        assert_eq!(ReadinessTier::NotYetReady.label(), "Not Yet Ready");
        assert_eq!(ReadinessTier::AlmostThere.label(), "Almost There");
        assert_eq!(ReadinessTier::Ready.label(), "You’re Ready");
    }

    #[test]
    fn tier_serializes_to_its_label() {
        let json = serde_json::to_string(&ReadinessTier::Ready).expect("tier should serialize");
        assert_eq!(json, "\"You’re Ready\"");

        let parsed: ReadinessTier =
            serde_json::from_str(&json).expect("label should deserialize back");
        assert_eq!(parsed, ReadinessTier::Ready);
    }

    #[test]
    fn tiers_are_ordered_ascending() {
        assert!(ReadinessTier::NotYetReady < ReadinessTier::AlmostThere);
        assert!(ReadinessTier::AlmostThere < ReadinessTier::Ready);
    }

    #[test]
    fn result_round_trip_preserves_breakdown() {
        let mut category_scores = BTreeMap::new();
        category_scores.insert("Patient Demand".to_string(), 12);
        category_scores.insert("Clinical Readiness".to_string(), 0);

        let result = QuizResult {
            total_score: 12,
            tier: ReadinessTier::NotYetReady,
            category_scores,
        };

        let json = serde_json::to_string(&result).expect("result should serialize");
        let parsed: QuizResult = serde_json::from_str(&json).expect("result should deserialize");

        assert_eq!(parsed, result);
        assert_eq!(parsed.category_scores["Clinical Readiness"], 0);
    }
}
