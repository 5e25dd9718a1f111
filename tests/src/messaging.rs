use solid_common::messaging::{Channel, MessageSender};
use solid_core::messaging::{EmailSender, NotificationService, SmsSender, sender_for};

fn requires_sender<S: MessageSender>(_: &S) {}

#[test]
fn email_sender_keeps_behavior() {
    assert_eq!(EmailSender.send("hello"), "email: hello");
}

#[test]
fn sms_sender_keeps_behavior() {
    assert_eq!(SmsSender.send("hello"), "sms: hello");
}

#[test]
fn concrete_senders_satisfy_the_contract() {
    requires_sender(&EmailSender);
    requires_sender(&SmsSender);
}

#[test]
fn service_is_built_from_parsed_channel() -> anyhow::Result<()> {
    let channel: Channel = "SMS".parse()?;
    let service = NotificationService::new(sender_for(channel));
    assert_eq!(service.notify("hello"), "sms: hello");
    Ok(())
}

#[test]
fn services_with_different_senders_are_independent() {
    let email = NotificationService::new(Box::new(EmailSender));
    let sms = NotificationService::new(Box::new(SmsSender));

    assert_eq!(email.notify("x"), "email: x");
    assert_eq!(sms.notify("x"), "sms: x");
}
