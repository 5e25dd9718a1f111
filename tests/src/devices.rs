use solid_common::SolidError;
use solid_common::device::{DeviceKind, Faxable, Printable, Scannable};
use solid_core::devices::{Device, OfficeMachine, OldPrinter, PhotoCopier};

fn print_all(devices: &[&dyn Printable], doc: &str) -> Vec<String> {
    devices.iter().map(|d| d.print(doc)).collect()
}

#[test]
fn old_printer_keeps_print_behavior() {
    assert_eq!(OldPrinter.print("doc"), "printing: doc");
}

#[test]
fn printable_devices_are_interchangeable() {
    let outputs = print_all(&[&OldPrinter, &PhotoCopier, &OfficeMachine], "doc");
    assert!(outputs.iter().all(|o| o == "printing: doc"));
}

#[test]
fn scan_and_fax_contracts_have_implementors() {
    let scanners: [&dyn Scannable; 2] = [&PhotoCopier, &OfficeMachine];
    for scanner in scanners {
        assert_eq!(scanner.scan("page"), "scanning: page");
    }

    let fax: &dyn Faxable = &OfficeMachine;
    assert_eq!(fax.fax("page"), "faxing: page");
}

#[test]
fn capabilities_match_each_device() -> anyhow::Result<()> {
    let expectations = [
        ("old-printer", true, false, false),
        ("photocopier", true, true, false),
        ("office", true, true, true),
    ];

    for (label, prints, scans, faxes) in expectations {
        let device = Device::from(label.parse::<DeviceKind>()?);
        assert_eq!(device.as_printable().is_some(), prints, "{label} print");
        assert_eq!(device.as_scannable().is_some(), scans, "{label} scan");
        assert_eq!(device.as_faxable().is_some(), faxes, "{label} fax");
    }
    Ok(())
}

#[test]
fn missing_capability_is_reported_before_any_call() {
    let device = Device::from(DeviceKind::OldPrinter);
    let err = device.require_scannable().err().unwrap();
    assert!(matches!(
        err,
        SolidError::Unsupported {
            subject: "old printer",
            capability: "scan"
        }
    ));
}
