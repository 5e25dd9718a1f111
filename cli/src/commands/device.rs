use solid_common::device::DeviceKind;
use solid_core::devices::Device;

use crate::commands::DeviceAction;
use crate::terminal::print;

pub fn device(kind: DeviceKind, action: DeviceAction, content: &str) -> anyhow::Result<()> {
    let device = Device::from(kind);

    let output: String = match action {
        DeviceAction::Print => device.require_printable()?.print(content),
        DeviceAction::Scan => device.require_scannable()?.scan(content),
        DeviceAction::Fax => device.require_faxable()?.fax(content),
    };

    print::aligned_line(kind.name(), output);
    Ok(())
}
