use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, NaiveDate};
use std::fmt;

macro_rules! non_empty_text {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> DomainResult<Self> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::Validation(
                        concat!($label, " cannot be empty").into(),
                    ));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_text!(PostTitle, "title");
non_empty_text!(PostExcerpt, "excerpt");
non_empty_text!(PostAuthor, "author");
non_empty_text!(
    /// Free-form display string such as `"5 min read"`.
    ReadTime,
    "read time"
);
non_empty_text!(
    /// Category label. The set is open; styling falls back for unknown names.
    PostCategory,
    "category"
);

/// URL-safe identifier of a post, unique within a collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostSlug(String);

impl PostSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if slug::slugify(&value) != value {
            return Err(DomainError::Validation(format!(
                "slug `{value}` must be lowercase words separated by hyphens"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PostSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PostSlug> for String {
    fn from(value: PostSlug) -> Self {
        value.0
    }
}

/// Publication date as written in the data source, plus its parsed calendar date.
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp. For timestamps the date is
/// taken in the timestamp's own offset, so `2024-01-15T23:30:00-05:00` is the
/// 15th.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedAt {
    raw: String,
    date: NaiveDate,
}

impl PublishedAt {
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let raw = value.trim();
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
            .map_err(|_| {
                DomainError::Validation(format!("published date `{value}` is not a valid date"))
            })?;
        Ok(Self {
            raw: raw.to_owned(),
            date,
        })
    }

    /// The original string, used as the machine-readable `datetime` attribute.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for PublishedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
