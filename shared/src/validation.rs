//! Client-side checks for the create/edit form.

use std::{collections::BTreeMap, fmt};

use thiserror::Error;

use crate::article::{Article, ArticlePayload, ArticleStatus};

/// Minimum title length, in characters.
pub const TITLE_MIN_CHARS: usize = 20;
/// Minimum content length, in characters.
pub const CONTENT_MIN_CHARS: usize = 200;
/// Minimum category length, in characters.
pub const CATEGORY_MIN_CHARS: usize = 3;

/// An input of the article form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    /// Title input.
    Title,
    /// Content textarea.
    Content,
    /// Category input.
    Category,
    /// Status select.
    Status,
}

impl FormField {
    /// Label used in messages.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Content => "Content",
            FormField::Category => "Category",
            FormField::Status => "Status",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Fewer characters than required.
    #[error("{field} must be at least {min} characters")]
    TooShort {
        /// Offending field.
        field: FormField,
        /// Required minimum.
        min: usize,
    },
    /// Status outside `publish`, `draft`, `thrash`.
    #[error("Status must be one of publish, draft or thrash")]
    InvalidStatus,
}

/// Field-level failures of one submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FormField, FieldError>);

impl FormErrors {
    /// Failure for `field`, if any.
    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        self.0.get(&field)
    }

    /// True when every field passed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, field: FormField, error: FieldError) {
        self.0.insert(field, error);
    }
}

/// Raw values of the article form, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleForm {
    /// Title input.
    pub title: String,
    /// Content textarea.
    pub content: String,
    /// Category input.
    pub category: String,
    /// Status select value.
    pub status: String,
}

impl Default for ArticleForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            category: String::new(),
            status: ArticleStatus::default().as_str().to_string(),
        }
    }
}

impl ArticleForm {
    /// Pre-fill values for editing `article`.
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            content: article.content.clone(),
            category: article.category.clone(),
            status: article.status.as_str().to_string(),
        }
    }

    /// Current raw value of `field`.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Content => &self.content,
            FormField::Category => &self.category,
            FormField::Status => &self.status,
        }
    }

    /// Copy with `field` replaced.
    pub fn with(&self, field: FormField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            FormField::Title => next.title = value,
            FormField::Content => next.content = value,
            FormField::Category => next.category = value,
            FormField::Status => next.status = value,
        }
        next
    }

    /// Check every field and build the request body.
    pub fn validate(&self) -> Result<ArticlePayload, FormErrors> {
        let mut errors = FormErrors::default();
        for (field, min) in [
            (FormField::Title, TITLE_MIN_CHARS),
            (FormField::Content, CONTENT_MIN_CHARS),
            (FormField::Category, CATEGORY_MIN_CHARS),
        ] {
            if self.value(field).chars().count() < min {
                errors.insert(
                    field,
                    FieldError::TooShort {
                        field,
                        min,
                    },
                );
            }
        }

        let status = ArticleStatus::parse(&self.status);
        if status.is_none() {
            errors.insert(FormField::Status, FieldError::InvalidStatus);
        }

        match status {
            Some(status) if errors.is_empty() => Ok(ArticlePayload {
                title: self.title.clone(),
                content: self.content.clone(),
                category: self.category.clone(),
                status,
            }),
            _ => Err(errors),
        }
    }
}
