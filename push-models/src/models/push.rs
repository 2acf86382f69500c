//! Send-batch request and response models.
//!
//! A `PushBatchRequest` holds one or more `Batch` entries. Each batch pairs a
//! `Message` (Android and/or iOS variant) with the devices it targets.

use serde::{Deserialize, Serialize};

/// A request to send a group of push notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushBatchRequest {
    /// Group the dispatch belongs to.
    pub group_id: i64,
    /// Caller-chosen dispatch id, unique within the group. Used to query status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_transfer_id: Option<i64>,
    /// Label shown in reports. Any number of dispatches may share a tag.
    pub tag: String,
    /// Messages with their target devices.
    #[serde(default)]
    pub batch: Vec<Batch>,
}

impl PushBatchRequest {
    /// Start a request with an empty batch list.
    pub fn new(group_id: i64, tag: impl Into<String>) -> Self {
        Self {
            group_id,
            client_transfer_id: None,
            tag: tag.into(),
            batch: Vec::new(),
        }
    }

    pub fn with_client_transfer_id(mut self, client_transfer_id: i64) -> Self {
        self.client_transfer_id = Some(client_transfer_id);
        self
    }

    pub fn add_batch(mut self, batch: Batch) -> Self {
        self.batch.push(batch);
        self
    }

    /// Total number of device ids across all batches.
    ///
    /// The service accepts at most 250,000 per request; nothing here enforces it.
    pub fn device_count(&self) -> usize {
        self.batch.iter().map(Batch::device_count).sum()
    }
}

/// One message and the devices it is sent to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub messages: Message,
    /// Devices grouped by id type, 1 to 5 groups per batch.
    #[serde(default)]
    pub devices: Vec<Device>,
}

impl Batch {
    /// An empty message with no devices.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_android(mut self, message: AndroidMessage) -> Self {
        self.messages.android = Some(message);
        self
    }

    pub fn with_ios(mut self, message: IosMessage) -> Self {
        self.messages.ios = Some(message);
        self
    }

    pub fn add_device(mut self, device: Device) -> Self {
        self.devices.push(device);
        self
    }

    pub fn device_count(&self) -> usize {
        self.devices.iter().map(|d| d.id_values.len()).sum()
    }
}

/// Platform-specific variants of one push message. At least one should be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android: Option<AndroidMessage>,
    #[serde(rename = "iOS", default, skip_serializing_if = "Option::is_none")]
    pub ios: Option<IosMessage>,
}

impl Message {
    pub fn is_empty(&self) -> bool {
        self.android.is_none() && self.ios.is_none()
    }
}

// -- Android --

/// Android push message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AndroidMessage {
    /// Silent pushes are delivered without being shown.
    #[serde(default)]
    pub silent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<AndroidContent>,
    /// What a tap does. When unset, the tap opens the application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_action: Option<AndroidAction>,
}

impl AndroidMessage {
    pub fn new(title: impl Into<String>, text: impl Into<String>, silent: bool) -> Self {
        Self {
            silent,
            content: Some(AndroidContent {
                title: Some(title.into()),
                text: Some(text.into()),
                ..AndroidContent::default()
            }),
            open_action: None,
        }
    }

    pub fn with_open_action(mut self, action: AndroidAction) -> Self {
        self.open_action = Some(action);
        self
    }
}

/// Content of an Android push message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AndroidContent {
    /// Mandatory for non-silent pushes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Mandatory for non-silent pushes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Resource id of a drawable in `/res/drawable/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Icon color as `#AARRGGBB`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_background: Option<String>,
    /// URL of the image shown next to the text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// URL of the banner image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    /// Arbitrary string handed to the Push SDK.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Notification channel (Android 8+).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    /// -2 to 2.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i8>,
    /// Notifications sharing a key replace each other.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapse_key: Option<i32>,
    /// Pause/vibrate durations in ms, alternating.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vibration: Vec<u32>,
    /// LED color as `#RRGGBB`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub led_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub led_interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub led_pause_interval: Option<u32>,
    /// Seconds FCM keeps the message for an offline device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_live: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
}

/// Lock-screen visibility. Ignored on Android 8+, where the channel decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Secret,
    Private,
    Public,
}

/// FCM delivery priority. The service default is `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    High,
    Normal,
}

/// Tap action for Android notifications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndroidAction {
    /// Deeplink to an application screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deeplink: Option<String>,
}

impl AndroidAction {
    pub fn deeplink(deeplink: impl Into<String>) -> Self {
        Self {
            deeplink: Some(deeplink.into()),
        }
    }
}

// -- iOS --

/// iOS push message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IosMessage {
    #[serde(default)]
    pub silent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<IosContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_action: Option<IosAction>,
}

impl IosMessage {
    pub fn new(title: impl Into<String>, text: impl Into<String>, silent: bool) -> Self {
        Self {
            silent,
            content: Some(IosContent {
                title: Some(title.into()),
                text: Some(text.into()),
                ..IosContent::default()
            }),
            open_action: None,
        }
    }

    pub fn with_open_action(mut self, action: IosAction) -> Self {
        self.open_action = Some(action);
        self
    }
}

/// Content of an iOS push message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IosContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Number shown on the application icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<IosSound>,
    /// `threadIdentifier` used to group notifications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    /// `UNNotificationCategory` identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// 1 routes the push through the Notification Service Extension, which
    /// is what delivery tracking relies on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutable_content: Option<u8>,
    /// Seconds to keep retrying delivery. Unlimited when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// `apns-collapse-id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapse_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl IosContent {
    pub fn add_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IosSound {
    Default,
    Disable,
}

/// File attached to an iOS push message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub file_url: String,
    /// One of the file types the service documents, e.g. "jpg".
    pub file_type: String,
}

/// Tap action for iOS notifications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IosAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl IosAction {
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}

// -- Devices --

/// Kind of device identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdType {
    AppmetricaDeviceId,
    IosIfa,
    GoogleAid,
    AndroidPushToken,
    IosPushToken,
    HuaweiPushToken,
    HuaweiOaid,
}

impl IdType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdType::AppmetricaDeviceId => "appmetrica_device_id",
            IdType::IosIfa => "ios_ifa",
            IdType::GoogleAid => "google_aid",
            IdType::AndroidPushToken => "android_push_token",
            IdType::IosPushToken => "ios_push_token",
            IdType::HuaweiPushToken => "huawei_push_token",
            IdType::HuaweiOaid => "huawei_oaid",
        }
    }
}

impl std::fmt::Display for IdType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Devices of one id type. The id list must not be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id_type: IdType,
    pub id_values: Vec<String>,
}

impl Device {
    pub fn new<I, S>(id_type: IdType, id_values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id_type,
            id_values: id_values.into_iter().map(Into::into).collect(),
        }
    }
}

// -- Response --

/// Result of a send-batch call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushResponse {
    /// Server id for status queries.
    pub transfer_id: i64,
    /// Echo of the request's client transfer id, when one was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_transfer_id: Option<i64>,
}
