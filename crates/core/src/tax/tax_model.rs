use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A generated tax export. Download becomes available once the backend
/// finishes building the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxExport {
    pub id: String,
    pub tax_year: i32,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

/// One category line of a tax-year preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxLineItem {
    pub category_name: String,
    pub amount: Decimal,
    pub deductible: bool,
}

/// Server-computed preview of a tax year. All figures come from the
/// backend's tax rules; nothing is recalculated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxPreview {
    pub tax_year: i32,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub deductible_total: Decimal,
    pub line_items: Vec<TaxLineItem>,
}

/// Body of the export-generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxExportRequest {
    pub tax_year: i32,
}
