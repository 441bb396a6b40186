use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of document kinds the classifier can assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    Pan,
    Aadhaar,
    Dl,
    Unknown,
}

impl DocumentType {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentType::Pan => "PAN",
            DocumentType::Aadhaar => "AADHAAR",
            DocumentType::Dl => "DL",
            DocumentType::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DocumentType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PAN" => Ok(DocumentType::Pan),
            "AADHAAR" => Ok(DocumentType::Aadhaar),
            "DL" => Ok(DocumentType::Dl),
            "UNKNOWN" => Ok(DocumentType::Unknown),
            other => Err(format!("Unknown document type: '{other}'")),
        }
    }
}

/// Best-effort fields pulled from a transcript. The shape follows the
/// document type; every field is optional because OCR output routinely
/// misses things.
///
/// Serialized untagged so the wire form is a flat object such as
/// `{"name": .., "dob": .., "pan": ..}` or `{"text": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ExtractedRecord {
    Pan {
        name: Option<String>,
        dob: Option<String>,
        pan: Option<String>,
    },
    Aadhaar {
        name: Option<String>,
        dob: Option<String>,
        aadhaar: Option<String>,
    },
    DrivingLicence {
        name: Option<String>,
        dob: Option<String>,
        dl_number: Option<String>,
    },
    Unknown {
        text: String,
    },
}

impl ExtractedRecord {
    pub fn document_type(&self) -> DocumentType {
        match self {
            ExtractedRecord::Pan { .. } => DocumentType::Pan,
            ExtractedRecord::Aadhaar { .. } => DocumentType::Aadhaar,
            ExtractedRecord::DrivingLicence { .. } => DocumentType::Dl,
            ExtractedRecord::Unknown { .. } => DocumentType::Unknown,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            ExtractedRecord::Pan { name, .. }
            | ExtractedRecord::Aadhaar { name, .. }
            | ExtractedRecord::DrivingLicence { name, .. } => name.as_deref(),
            ExtractedRecord::Unknown { .. } => None,
        }
    }

    pub fn dob(&self) -> Option<&str> {
        match self {
            ExtractedRecord::Pan { dob, .. }
            | ExtractedRecord::Aadhaar { dob, .. }
            | ExtractedRecord::DrivingLicence { dob, .. } => dob.as_deref(),
            ExtractedRecord::Unknown { .. } => None,
        }
    }

    pub fn pan(&self) -> Option<&str> {
        match self {
            ExtractedRecord::Pan { pan, .. } => pan.as_deref(),
            _ => None,
        }
    }

    pub fn aadhaar(&self) -> Option<&str> {
        match self {
            ExtractedRecord::Aadhaar { aadhaar, .. } => aadhaar.as_deref(),
            _ => None,
        }
    }

    pub fn dl_number(&self) -> Option<&str> {
        match self {
            ExtractedRecord::DrivingLicence { dl_number, .. } => dl_number.as_deref(),
            _ => None,
        }
    }
}
