//! Article records and the REST envelopes they travel in.

use std::fmt;

use chrono::DateTime;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::ApiError;

/// Publication state of an article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    /// Visible to readers.
    Publish,
    /// Work in progress. New articles start here.
    #[default]
    Draft,
    /// Soft-deleted by an editor.
    Thrash,
}

impl ArticleStatus {
    /// Every status, in the order the UI lists them.
    pub const ALL: [ArticleStatus; 3] =
        [ArticleStatus::Publish, ArticleStatus::Draft, ArticleStatus::Thrash];

    /// Wire and query-string spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            ArticleStatus::Publish => "publish",
            ArticleStatus::Draft => "draft",
            ArticleStatus::Thrash => "thrash",
        }
    }

    /// Coerce untrusted text (URL, select value) into a status.
    ///
    /// Only the exact lowercase spellings are accepted; anything else is
    /// treated as "no status".
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored article as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Server-assigned identity.
    pub id: u64,
    /// Headline, at least 20 characters.
    pub title: String,
    /// Body text, at least 200 characters.
    pub content: String,
    /// Free-form category, at least 3 characters.
    pub category: String,
    /// Publication state.
    pub status: ArticleStatus,
    /// Creation timestamp as sent by the server.
    pub created_at: String,
    /// Last update timestamp as sent by the server.
    pub updated_at: String,
}

/// Pagination block attached to every list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Page size the server applied.
    pub limit: u32,
    /// Page the server returned.
    pub page: u32,
    /// Number of articles matching the filter.
    pub total: u64,
    /// Whether a following page exists.
    pub has_next: bool,
}

impl PaginationMeta {
    /// `max(1, ceil(total / limit))`.
    pub fn total_pages(&self) -> u32 {
        let limit = u64::from(self.limit.max(1));
        let pages = self.total.div_ceil(limit).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

/// `data` of a list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticlePage {
    /// Articles on the requested page.
    pub items: Vec<Article>,
    /// Server pagination view.
    pub meta: PaginationMeta,
}

/// `{ success, data, message?, error? }` wrapper used by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Server-side outcome flag.
    pub success: bool,
    /// Payload; `null` for deletes.
    pub data: Option<T>,
    /// Human-readable note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Human-readable failure reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, turning `success = false` into an error.
    pub fn into_data(self) -> Result<T, ApiError> {
        self.check()?
            .data
            .ok_or_else(|| ApiError::Parse("response carried no data".to_string()))
    }

    /// Accept a successful envelope whose payload is irrelevant (deletes).
    pub fn into_unit(self) -> Result<(), ApiError> {
        self.check().map(|_| ())
    }

    fn check(self) -> Result<Self, ApiError> {
        if self.success {
            return Ok(self);
        }
        let reason = self
            .error
            .or(self.message)
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| "request was rejected".to_string());
        Err(ApiError::Rejected(reason))
    }
}

impl<T: DeserializeOwned> ApiEnvelope<T> {
    /// Decode an envelope from a raw JSON body.
    pub fn from_json(body: &str) -> Result<Self, ApiError> {
        serde_json::from_str(body).map_err(|err| ApiError::Parse(err.to_string()))
    }
}

/// Create body: every field required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticlePayload {
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Category.
    pub category: String,
    /// Publication state.
    pub status: ArticleStatus,
}

/// Update body: only the fields present are changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticlePatch {
    /// New headline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// New category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// New publication state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ArticleStatus>,
}

impl ArticlePatch {
    /// Fields of `next` that differ from `original`.
    pub fn between(original: &Article, next: &ArticlePayload) -> Self {
        fn changed(before: &str, after: &str) -> Option<String> {
            (before != after).then(|| after.to_string())
        }

        Self {
            title: changed(&original.title, &next.title),
            content: changed(&original.content, &next.content),
            category: changed(&original.category, &next.category),
            status: (original.status != next.status).then_some(next.status),
        }
    }

    /// True when submitting would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.category.is_none()
            && self.status.is_none()
    }
}

impl From<ArticlePayload> for ArticlePatch {
    fn from(payload: ArticlePayload) -> Self {
        Self {
            title: Some(payload.title),
            content: Some(payload.content),
            category: Some(payload.category),
            status: Some(payload.status),
        }
    }
}

/// Render a server timestamp for humans.
///
/// RFC 3339 values become `YYYY-MM-DD HH:MM`; anything else is shown as-is.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}
