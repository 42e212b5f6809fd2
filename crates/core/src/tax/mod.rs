//! Tax module - export and preview DTOs. Tax calculation happens
//! server-side; these shapes are consumed as-is.

mod tax_model;

pub use tax_model::{TaxExport, TaxExportRequest, TaxLineItem, TaxPreview};
