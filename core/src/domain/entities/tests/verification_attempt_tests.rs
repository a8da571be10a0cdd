//! Unit tests for verification attempt entity

use crate::domain::entities::verification_attempt::{Channel, VerificationAttempt};

#[test]
fn test_channel_defaults_to_sms() {
    assert_eq!(Channel::parse(None), Channel::Sms);
    assert_eq!(Channel::parse(Some("")), Channel::Sms);
    assert_eq!(Channel::parse(Some("   ")), Channel::Sms);
}

#[test]
fn test_channel_is_case_insensitive() {
    assert_eq!(Channel::from("SMS"), Channel::Sms);
    assert_eq!(Channel::from("Voice"), Channel::Voice);
    assert_eq!(Channel::from("VOICE").as_str(), "voice");
}

#[test]
fn test_unknown_channel_passes_through_lowercased() {
    let channel = Channel::from("WhatsApp");
    assert_eq!(channel, Channel::Other("whatsapp".to_string()));
    assert_eq!(channel.to_string(), "whatsapp");
}

#[test]
fn test_channel_trims_surrounding_whitespace() {
    assert_eq!(Channel::from(" Voice "), Channel::Voice);
    assert_eq!(Channel::from("\tsms\n"), Channel::Sms);
    assert_eq!(
        Channel::from(" WhatsApp "),
        Channel::Other("whatsapp".to_string())
    );
}

#[test]
fn test_channel_serializes_as_plain_string() {
    let json = serde_json::to_value(Channel::Voice).unwrap();
    assert_eq!(json, serde_json::json!("voice"));

    let json = serde_json::to_value(Channel::from("Email")).unwrap();
    assert_eq!(json, serde_json::json!("email"));
}

#[test]
fn test_new_attempt_keeps_destination_verbatim() {
    let attempt = VerificationAttempt::new(
        "+15551234567",
        Channel::Sms,
        Some("c11236f4-00bf-4b89-84ba-88b25df97315".to_string()),
    );

    assert_eq!(attempt.destination, "+15551234567");
    assert_eq!(attempt.channel, Channel::Sms);
    assert_eq!(
        attempt.provider_request_id.as_deref(),
        Some("c11236f4-00bf-4b89-84ba-88b25df97315")
    );

    let untracked = VerificationAttempt::new("+15551234567", Channel::Voice, None);
    assert_eq!(untracked.provider_request_id, None);
}
