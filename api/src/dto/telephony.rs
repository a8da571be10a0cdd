//! Inbound telephony inline hook payload
//!
//! Only the fields the bridge reads are declared; everything else in the
//! payload (`otpCode`, `msgTemplate`, `userProfile`, ...) is ignored.

use serde::Deserialize;

use vth_core::domain::entities::Channel;

/// Body of `POST /telephony/hook`
///
/// ```json
/// {
///     "eventType": "com.okta.telephony.provider",
///     "data": {
///         "messageProfile": {
///             "phoneNumber": "+15551234567",
///             "deliveryChannel": "SMS",
///             "otpCode": "123456"
///         }
///     }
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelephonyHookRequest {
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub data: TelephonyHookData,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelephonyHookData {
    #[serde(default)]
    pub message_profile: MessageProfile,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageProfile {
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub delivery_channel: Option<String>,
}

impl TelephonyHookRequest {
    /// Destination phone number, verbatim; empty when absent
    pub fn destination(&self) -> &str {
        self.data
            .message_profile
            .phone_number
            .as_deref()
            .unwrap_or_default()
    }

    pub fn channel(&self) -> Channel {
        Channel::parse(self.data.message_profile.delivery_channel.as_deref())
    }
}
