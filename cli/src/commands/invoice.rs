use std::path::Path;

use anyhow::Context;
use solid_common::invoice::{Invoice, InvoiceMailer, InvoiceStore};
use solid_core::invoice::{ConsoleMailer, FileInvoiceStore};

use crate::terminal::print;

pub fn invoice(
    customer: &str,
    amount: f64,
    save: Option<&Path>,
    email: Option<&str>,
) -> anyhow::Result<()> {
    let invoice = Invoice::new(customer, amount);
    print::aligned_line("Summary", invoice.summary());

    if let Some(path) = save {
        FileInvoiceStore
            .save_to_file(&invoice, path)
            .with_context(|| format!("failed to save invoice to {}", path.display()))?;
        print::aligned_line("Saved", path.display());
    }

    if let Some(to) = email {
        ConsoleMailer::stdout()
            .send(&invoice, to)
            .with_context(|| format!("failed to email invoice to {to}"))?;
    }

    Ok(())
}
