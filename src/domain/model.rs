use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the input file after loading: the referral URL, the display
/// name of whoever shared it, and the code pulled out of the query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralRecord {
    pub url: String,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferralStatus {
    Valid,
    Invalid,
    Error,
    Unknown,
}

impl ReferralStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferralStatus::Valid => "valid",
            ReferralStatus::Invalid => "invalid",
            ReferralStatus::Error => "error",
            ReferralStatus::Unknown => "unknown",
        }
    }

    /// Per-record progress marker shown on the console.
    pub fn console_label(&self) -> &'static str {
        match self {
            ReferralStatus::Valid => "✅ VALID",
            ReferralStatus::Invalid => "❌ Invalid/Claimed",
            ReferralStatus::Error => "⚠️  Error",
            ReferralStatus::Unknown => "❓ Unknown",
        }
    }
}

impl fmt::Display for ReferralStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub record: ReferralRecord,
    pub status: ReferralStatus,
}

/// Outcomes of a full run, partitioned by status. Records keep their input
/// order within each partition.
#[derive(Debug, Default)]
pub struct RunResults {
    pub valid: Vec<CheckOutcome>,
    pub invalid: Vec<CheckOutcome>,
    pub errors: Vec<CheckOutcome>,
    pub unknown: Vec<CheckOutcome>,
}

impl RunResults {
    pub fn push(&mut self, outcome: CheckOutcome) {
        match outcome.status {
            ReferralStatus::Valid => self.valid.push(outcome),
            ReferralStatus::Invalid => self.invalid.push(outcome),
            ReferralStatus::Error => self.errors.push(outcome),
            ReferralStatus::Unknown => self.unknown.push(outcome),
        }
    }

    pub fn total(&self) -> usize {
        self.valid.len() + self.invalid.len() + self.errors.len() + self.unknown.len()
    }
}
