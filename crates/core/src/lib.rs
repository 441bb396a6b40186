pub mod document;
pub mod fraud;
pub mod report;

pub use document::{DocumentType, ExtractedRecord};
pub use fraud::{fraud_check, FraudAssessment, FraudFlag, FLAG_WEIGHT};
pub use report::{VerificationReport, VerifyView};
