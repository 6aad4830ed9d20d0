//! Wire types for the auth service and generation backend.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
}

/// Returned by both `/signup` and `/login`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub token_type: String,
    /// Seconds until the token expires.
    pub expires_in: u64,
    pub user: User,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub plan_name: String,
    pub status: String,
    pub captions_remaining: u32,
    pub captions_limit: u32,
}

impl Subscription {
    pub fn captions_used(&self) -> u32 {
        self.captions_limit.saturating_sub(self.captions_remaining)
    }

    pub fn is_free_plan(&self) -> bool {
        self.plan_name.eq_ignore_ascii_case("free")
    }
}

/// `/caption/check-limit` response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaptionAllowance {
    pub has_remaining: bool,
    pub captions_remaining: u32,
    pub captions_limit: u32,
    pub captions_used: u32,
}

/// `/validate-token` response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenValidation {
    pub valid: bool,
    #[serde(default)]
    pub user: Option<User>,
}

impl TokenValidation {
    pub fn invalid() -> Self {
        Self {
            valid: false,
            user: None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratedCaptions {
    pub captions: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BackendHealth {
    pub status: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthHealth {
    pub status: String,
    pub service: String,
}

/// What kind of media is being captioned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }

    /// Whether a browser MIME type matches this kind.
    pub fn accepts_mime(self, mime: &str) -> bool {
        match self {
            MediaKind::Image => mime.starts_with("image/"),
            MediaKind::Video => mime.starts_with("video/"),
        }
    }
}

/// Caption voice, mirroring the backend's tone guides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaptionTone {
    Formal,
    #[default]
    Casual,
    Professional,
    Friendly,
    Humorous,
}

impl CaptionTone {
    pub const ALL: [CaptionTone; 5] = [
        CaptionTone::Formal,
        CaptionTone::Casual,
        CaptionTone::Professional,
        CaptionTone::Friendly,
        CaptionTone::Humorous,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CaptionTone::Formal => "formal",
            CaptionTone::Casual => "casual",
            CaptionTone::Professional => "professional",
            CaptionTone::Friendly => "friendly",
            CaptionTone::Humorous => "humorous",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaptionLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl CaptionLength {
    pub const ALL: [CaptionLength; 3] = [
        CaptionLength::Short,
        CaptionLength::Medium,
        CaptionLength::Long,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CaptionLength::Short => "short",
            CaptionLength::Medium => "medium",
            CaptionLength::Long => "long",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == value)
    }
}

pub const DEFAULT_HASHTAG_COUNT: u8 = 5;

/// Generation parameters sent alongside the upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptionOptions {
    pub kind: MediaKind,
    pub tone: CaptionTone,
    pub length: CaptionLength,
    pub hashtag_count: u8,
}

impl Default for CaptionOptions {
    fn default() -> Self {
        Self {
            kind: MediaKind::default(),
            tone: CaptionTone::default(),
            length: CaptionLength::default(),
            hashtag_count: DEFAULT_HASHTAG_COUNT,
        }
    }
}

/// The file to caption, already read into memory.
#[derive(Clone, Debug)]
pub struct MediaUpload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: String,
}
