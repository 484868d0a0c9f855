//! Request-payload scaffolding for a panel assessment call.
//!
//! The assessment instruction is the *system* portion of a vision request.
//! Alongside it a caller supplies exactly one panel photograph and, if they
//! have extra context (service size from the meter, a planned charger
//! model), an optional free-form note. The note rides as a separate user
//! content block; it is never merged into the system prompt, so the
//! reviewed instruction text reaches the model byte for byte.
//!
//! This module stops at the serializable payload value. Transport,
//! authentication and response handling belong to the calling application.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::prompts::SYSTEM_PROMPT;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("unsupported image media type: {0}")]
    UnsupportedMediaType(String),

    #[error("image attachment is empty")]
    EmptyImage,
}

/// Image formats accepted for vision input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImageMediaType {
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[serde(rename = "image/png")]
    Png,
    #[serde(rename = "image/gif")]
    Gif,
    #[serde(rename = "image/webp")]
    Webp,
}

impl ImageMediaType {
    pub fn from_mime(mime: &str) -> Result<Self, RequestError> {
        match mime {
            "image/jpeg" => Ok(Self::Jpeg),
            "image/png" => Ok(Self::Png),
            "image/gif" => Ok(Self::Gif),
            "image/webp" => Ok(Self::Webp),
            other => Err(RequestError::UnsupportedMediaType(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
        }
    }
}

/// Base64-encoded image payload, the `source` object of an image block.
#[derive(Debug, Clone, Serialize)]
pub struct ImageSource {
    #[serde(rename = "type")]
    source_type: &'static str,
    media_type: ImageMediaType,
    data: String,
}

impl ImageSource {
    /// Encodes raw image bytes for attachment. Empty input is rejected:
    /// an empty attachment can never be a panel photo and would only
    /// spend a paid model call on nothing.
    pub fn from_bytes(media_type: ImageMediaType, bytes: &[u8]) -> Result<Self, RequestError> {
        if bytes.is_empty() {
            return Err(RequestError::EmptyImage);
        }
        Ok(Self {
            source_type: "base64",
            media_type,
            data: BASE64.encode(bytes),
        })
    }

    pub fn media_type(&self) -> ImageMediaType {
        self.media_type
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Image { source: ImageSource },
    Text { text: String },
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: Vec<ContentBlock>,
}

/// One complete assessment request: the system prompt, a single panel
/// photograph, and an optional user note.
///
/// Serializes to the messages-API shape: a `system` string and one `user`
/// message whose content is the image block followed by the note, if any.
#[derive(Debug, Serialize)]
pub struct AssessmentRequest {
    system: &'static str,
    messages: Vec<Message>,
}

impl AssessmentRequest {
    pub fn new(image: ImageSource) -> Self {
        Self::build(image, None)
    }

    pub fn with_user_note(image: ImageSource, note: impl Into<String>) -> Self {
        Self::build(image, Some(note.into()))
    }

    fn build(image: ImageSource, note: Option<String>) -> Self {
        debug!(
            media_type = image.media_type.as_str(),
            encoded_len = image.data.len(),
            has_note = note.is_some(),
            "building assessment request"
        );

        let mut content = vec![ContentBlock::Image { source: image }];
        if let Some(text) = note {
            content.push(ContentBlock::Text { text });
        }

        Self {
            system: SYSTEM_PROMPT,
            messages: vec![Message {
                role: "user",
                content,
            }],
        }
    }

    /// The system portion of the request, always the assessment instruction.
    pub fn system(&self) -> &'static str {
        self.system
    }

    /// Serializes to the JSON body a messages-API call expects.
    pub fn to_body(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
