//! Browser-independent core of the article admin dashboard.
//!
//! Everything here compiles for the host and for `wasm32`, so the listing's
//! state handling is unit-tested without a browser. The Yew frontend owns
//! rendering, routing and HTTP and drives these types.

pub mod article;
pub mod error;
pub mod list_view;
pub mod query;
pub mod sync;
pub mod validation;

pub use article::{
    format_timestamp, ApiEnvelope, Article, ArticlePage, ArticlePatch, ArticlePayload,
    ArticleStatus, PaginationMeta,
};
pub use error::{ApiError, ErrorBody};
pub use list_view::{ListView, PagerControls, RequestSeq};
pub use query::{FetchParams, FilterField, FilterState, PageLimit, QueryState, Transition};
pub use sync::{HistoryMode, QueryAction, QuerySync, UrlWrite};
pub use validation::{ArticleForm, FieldError, FormErrors, FormField};
