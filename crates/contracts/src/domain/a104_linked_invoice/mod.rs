pub mod aggregate;

pub use aggregate::{InvoiceStatus, LinkedInvoice};
