//! # Invoice Collaborators
//!
//! Storage and transmission of an [`Invoice`] live here, outside the model.
//! The model itself has no way to save or send itself:
//!
//! ```compile_fail
//! use solid_common::invoice::Invoice;
//!
//! Invoice::new("Alice", 42.5).save_to_file("invoice.txt");
//! ```
//!
//! ```compile_fail
//! use solid_common::invoice::Invoice;
//!
//! Invoice::new("Alice", 42.5).send_email("alice@example.com");
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use solid_common::Result;
use solid_common::invoice::{Invoice, InvoiceMailer, InvoiceStore};
use tracing::info;

/// Writes invoice summaries to files on the local filesystem.
pub struct FileInvoiceStore;

impl InvoiceStore for FileInvoiceStore {
    fn save_to_file(&self, invoice: &Invoice, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "{}", invoice.summary())?;
        writer.flush()?;

        info!(path = %path.display(), customer = invoice.customer(), "invoice saved");
        Ok(())
    }
}

/// Simulates emailing an invoice by writing one line to a sink.
///
/// [`ConsoleMailer::stdout`] targets the terminal; any other `Write` works too.
pub struct ConsoleMailer<W: Write = Stdout> {
    sink: Mutex<W>,
}

impl ConsoleMailer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleMailer<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// Hands back the sink, e.g. to inspect what was "sent".
    pub fn into_inner(self) -> W {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> InvoiceMailer for ConsoleMailer<W> {
    fn send(&self, invoice: &Invoice, to: &str) -> Result<()> {
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(sink, "Email to {}: {}", to, invoice.summary())?;
        sink.flush()?;

        info!(to, customer = invoice.customer(), "invoice sent");
        Ok(())
    }
}
