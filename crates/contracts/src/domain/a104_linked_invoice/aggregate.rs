use crate::shared::list_engine::record::{ListRecord, Searchable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

impl InvoiceStatus {
    pub fn code(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Overdue => "overdue",
        }
    }
}

/// Счёт, в котором участвует товар
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedInvoice {
    pub id: String,

    #[serde(rename = "invoiceNumber")]
    pub invoice_number: String,

    pub date: String,
    pub customer: String,
    pub qty: i64,
    pub total: i64,
    pub status: InvoiceStatus,
}

impl ListRecord for LinkedInvoice {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Searchable for LinkedInvoice {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.invoice_number.as_str(), self.customer.as_str()]
    }
}
