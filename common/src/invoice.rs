//! # Invoice Model
//!
//! [`Invoice`] only holds data and renders its summary. Persisting and
//! transmitting an invoice are separate responsibilities, expressed by the
//! [`InvoiceStore`] and [`InvoiceMailer`] contracts.

use std::path::Path;

use crate::Result;
use crate::amount::format_amount;

#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    customer: String,
    amount: f64,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, amount: f64) -> Self {
        Self {
            customer: customer.into(),
            amount,
        }
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Renders `"{customer} owes {amount}"`.
    ///
    /// ```
    /// use solid_common::invoice::Invoice;
    ///
    /// assert_eq!(Invoice::new("Alice", 42.5).summary(), "Alice owes 42.5");
    /// assert_eq!(Invoice::new("Bob", 10.0).summary(), "Bob owes 10.0");
    /// ```
    pub fn summary(&self) -> String {
        format!("{} owes {}", self.customer, format_amount(self.amount))
    }
}

/// Persists invoices to storage.
pub trait InvoiceStore {
    /// Writes the invoice summary as a single line to `path`, replacing any
    /// previous content.
    fn save_to_file(&self, invoice: &Invoice, path: &Path) -> Result<()>;
}

/// Transmits invoices to a recipient.
pub trait InvoiceMailer {
    fn send(&self, invoice: &Invoice, to: &str) -> Result<()>;
}
