use solid_common::SolidError;
use solid_common::invoice::{Invoice, InvoiceMailer, InvoiceStore};
use solid_core::invoice::{ConsoleMailer, FileInvoiceStore};

#[test]
fn summary_keeps_behavior() {
    assert_eq!(Invoice::new("Alice", 42.5).summary(), "Alice owes 42.5");
}

#[test]
fn store_writes_the_summary_line() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("alice.txt");
    let invoice = Invoice::new("Alice", 42.5);

    FileInvoiceStore.save_to_file(&invoice, &path)?;

    let written = std::fs::read_to_string(&path)?;
    assert_eq!(written.lines().collect::<Vec<_>>(), vec![invoice.summary()]);
    Ok(())
}

#[test]
fn store_surfaces_invalid_path() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    // A directory cannot be opened as a file.
    let result = FileInvoiceStore.save_to_file(&Invoice::new("Alice", 1.5), dir.path());
    assert!(matches!(result, Err(SolidError::Io(_))));
    Ok(())
}

#[test]
fn collaborators_work_through_their_contracts() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("bob.txt");
    let invoice = Invoice::new("Bob", 12.0);

    let store: &dyn InvoiceStore = &FileInvoiceStore;
    store.save_to_file(&invoice, &path)?;

    let mailer = ConsoleMailer::new(Vec::new());
    {
        let mailer: &dyn InvoiceMailer = &mailer;
        mailer.send(&invoice, "bob@example.com")?;
    }

    assert_eq!(std::fs::read_to_string(&path)?, "Bob owes 12.0\n");
    assert_eq!(
        String::from_utf8(mailer.into_inner())?,
        "Email to bob@example.com: Bob owes 12.0\n"
    );
    Ok(())
}
