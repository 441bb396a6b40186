use serde::{Deserialize, Serialize};
use std::fmt;

use crate::document::ExtractedRecord;

/// Points added to the risk score for each raised flag.
pub const FLAG_WEIGHT: u32 = 10;

/// Length of a well-formed Aadhaar number.
const AADHAAR_LEN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FraudFlag {
    NameMissing,
    InvalidAadhaar,
    IdMissing,
}

impl fmt::Display for FraudFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FraudFlag::NameMissing => write!(f, "name_missing"),
            FraudFlag::InvalidAadhaar => write!(f, "invalid_aadhaar"),
            FraudFlag::IdMissing => write!(f, "id_missing"),
        }
    }
}

/// Heuristic completeness check over an extracted record.
/// This is an ordinal indicator, not a proof of authenticity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraudAssessment {
    pub flags: Vec<FraudFlag>,
    pub score: u32,
}

impl FraudAssessment {
    pub fn is_clean(&self) -> bool {
        self.flags.is_empty()
    }
}

/// Run every check against `record`. Flags are reported in a fixed order
/// (name, aadhaar shape, id presence) regardless of which fire.
pub fn fraud_check(record: &ExtractedRecord) -> FraudAssessment {
    let mut flags = Vec::new();

    if !present(record.name()) {
        flags.push(FraudFlag::NameMissing);
    }

    // An absent Aadhaar is not "invalid"; only a present one of the wrong length is.
    if let Some(aadhaar) = record.aadhaar().filter(|a| !a.is_empty()) {
        if aadhaar.chars().count() != AADHAAR_LEN {
            flags.push(FraudFlag::InvalidAadhaar);
        }
    }

    if !(present(record.aadhaar()) || present(record.pan()) || present(record.dl_number())) {
        flags.push(FraudFlag::IdMissing);
    }

    let score = FLAG_WEIGHT * flags.len() as u32;
    FraudAssessment { flags, score }
}

fn present(field: Option<&str>) -> bool {
    field.is_some_and(|v| !v.is_empty())
}
