use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Server-side OCR pipeline state for an uploaded receipt. The state
/// machine is owned entirely by the backend; this layer only displays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReceiptStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    ManualReviewNeeded,
}

/// An uploaded receipt as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub id: String,
    pub file_name: String,
    pub uploaded_at: DateTime<Utc>,
    pub status: ReceiptStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_amount: Option<Decimal>,
    /// OCR confidence in [0, 100], present once processing finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Decimal>,
}

/// Counts shown on the receipts overview cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptStatusCounts {
    pub completed: usize,
    pub processing: usize,
    pub needs_review: usize,
}
