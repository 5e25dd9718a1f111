use solid_common::messaging::Channel;
use solid_core::messaging::{NotificationService, sender_for};
use tracing::debug;

use crate::terminal::print;

pub fn notify(channel: Channel, message: &str) -> anyhow::Result<()> {
    debug!(?channel, "building notification service");
    let service = NotificationService::new(sender_for(channel));

    print::aligned_line("Delivered", service.notify(message));
    Ok(())
}
