//! Core data types for retrieval requests and decoded payloads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a response body is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadKind {
    /// Opaque byte buffer, kept exactly as received.
    Binary,
    /// Body decoded as UTF-8 text.
    Text,
}

impl PayloadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadKind::Binary => "binary",
            PayloadKind::Text => "text",
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known payload kind.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown payload kind: {0:?} (expected \"binary\" or \"text\")")]
pub struct KindParseError(pub String);

impl FromStr for PayloadKind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "blob" => Ok(PayloadKind::Binary),
            "text" => Ok(PayloadKind::Text),
            _ => Err(KindParseError(s.to_string())),
        }
    }
}

/// A single resource to retrieve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievalRequest {
    /// Absolute URL, or a path resolved against the fetcher's base URL.
    pub locator: String,
    pub expected_kind: PayloadKind,
}

impl RetrievalRequest {
    pub fn new(locator: impl Into<String>, expected_kind: PayloadKind) -> Self {
        Self {
            locator: locator.into(),
            expected_kind,
        }
    }

    pub fn binary(locator: impl Into<String>) -> Self {
        Self::new(locator, PayloadKind::Binary)
    }

    pub fn text(locator: impl Into<String>) -> Self {
        Self::new(locator, PayloadKind::Text)
    }
}

/// A response body decoded according to its request's kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedPayload {
    Binary(Vec<u8>),
    Text(String),
}

impl DecodedPayload {
    pub fn kind(&self) -> PayloadKind {
        match self {
            DecodedPayload::Binary(_) => PayloadKind::Binary,
            DecodedPayload::Text(_) => PayloadKind::Text,
        }
    }

    /// Size of the payload in bytes.
    pub fn len(&self) -> usize {
        match self {
            DecodedPayload::Binary(bytes) => bytes.len(),
            DecodedPayload::Text(text) => text.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            DecodedPayload::Binary(bytes) => bytes,
            DecodedPayload::Text(text) => text.into_bytes(),
        }
    }
}

/// Errors that can occur while retrieving content.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid locator: {0}")]
    InvalidLocator(String),
}

impl FetchError {
    /// The HTTP status carried by an `Http` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<url::ParseError> for FetchError {
    fn from(e: url::ParseError) -> Self {
        FetchError::InvalidLocator(e.to_string())
    }
}

/// Convenience result type.
pub type FetchResult<T> = Result<T, FetchError>;
