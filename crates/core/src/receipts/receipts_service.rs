use super::receipts_model::{Receipt, ReceiptStatus, ReceiptStatusCounts};

/// Buckets receipts into the three overview counts. Pending uploads count
/// as processing; failed ones need a human look just like manual review.
pub fn status_counts(receipts: &[Receipt]) -> ReceiptStatusCounts {
    let mut counts = ReceiptStatusCounts {
        completed: 0,
        processing: 0,
        needs_review: 0,
    };

    for receipt in receipts {
        match receipt.status {
            ReceiptStatus::Completed => counts.completed += 1,
            ReceiptStatus::Pending | ReceiptStatus::Processing => counts.processing += 1,
            ReceiptStatus::Failed | ReceiptStatus::ManualReviewNeeded => counts.needs_review += 1,
        }
    }

    counts
}

/// Receipts in a single pipeline state, input order preserved.
pub fn filter_by_status(receipts: &[Receipt], status: ReceiptStatus) -> Vec<&Receipt> {
    receipts.iter().filter(|r| r.status == status).collect()
}

// ==================== Tests ====================
