use solid_common::messaging::{Channel, MessageSender};
use tracing::debug;

pub struct EmailSender;

impl MessageSender for EmailSender {
    fn send(&self, message: &str) -> String {
        format!("email: {message}")
    }
}

pub struct SmsSender;

impl MessageSender for SmsSender {
    fn send(&self, message: &str) -> String {
        format!("sms: {message}")
    }
}

/// Builds the sender for a channel. This is the only place a channel is
/// mapped to a concrete implementation.
pub fn sender_for(channel: Channel) -> Box<dyn MessageSender> {
    match channel {
        Channel::Email => Box::new(EmailSender),
        Channel::Sms => Box::new(SmsSender),
    }
}

/// Notifies users through whichever sender it was constructed with.
///
/// There is no way to build one without a sender:
///
/// ```compile_fail
/// let service = solid_core::messaging::NotificationService::new();
/// ```
///
/// and no channel argument on `notify`:
///
/// ```compile_fail
/// use solid_core::messaging::{EmailSender, NotificationService};
///
/// let service = NotificationService::new(Box::new(EmailSender));
/// service.notify("email", "hello");
/// ```
pub struct NotificationService {
    sender: Box<dyn MessageSender>,
}

impl NotificationService {
    pub fn new(sender: Box<dyn MessageSender>) -> Self {
        Self { sender }
    }

    pub fn notify(&self, message: &str) -> String {
        debug!(len = message.len(), "delegating notification to injected sender");
        self.sender.send(message)
    }
}
